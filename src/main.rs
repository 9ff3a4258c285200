use std::io::Write;

use anyhow::{bail, Context, Result};
use clap::Parser;

use plum_board::presentation::board_geometry::BoardGeometry;
use plum_board::terminal::terminal_top::run_stdio_loop;

#[derive(Parser, Debug)]
#[command(author, version, about = "Two-player chess in the terminal", long_about = None)]
struct Args {
    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Display size used to place the board for `click`, e.g. 1920x1080
    #[arg(long, value_parser = parse_display)]
    display: Option<(u32, u32)>,
}

fn parse_display(value: &str) -> Result<(u32, u32)> {
    let (width, height) = value
        .split_once(['x', 'X'])
        .context("expected WIDTHxHEIGHT")?;
    let width: u32 = width.trim().parse().context("invalid display width")?;
    let height: u32 = height.trim().parse().context("invalid display height")?;
    if width == 0 || height == 0 {
        bail!("display size must be non-zero");
    }
    Ok((width, height))
}

fn main() {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    )
    .format(|buf, record| {
        writeln!(
            buf,
            "[{}] {}: {}",
            record.level(),
            record.target(),
            record.args()
        )
    })
    .target(env_logger::Target::Stderr)
    .init();

    let geometry = match args.display {
        Some((width, height)) => BoardGeometry::from_display(width, height),
        None => BoardGeometry::default(),
    };
    log::debug!("board geometry {geometry:?}");

    if let Err(e) = run_stdio_loop(geometry).context("terminal session failed") {
        log::error!("Fatal error: {e:#}");
        std::process::exit(1);
    }
}
