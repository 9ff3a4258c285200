//! Line-oriented terminal front-end.
//!
//! Stands in for a graphical host: each input line is one frame's worth of
//! user intent, routed through the same `InputAdapter` a windowed host would
//! use, and the board is drawn with the Unicode renderer.

use std::io::{self, BufRead, Write};

use crate::game_state::chess_types::{Coordinate, PieceKind};
use crate::game_state::game_manager::{GameManager, GameOutcome, TurnCommand, TurnEvent};
use crate::presentation::board_geometry::BoardGeometry;
use crate::presentation::frame_view::FrameView;
use crate::presentation::input_adapter::{InputAdapter, PointerState};
use crate::utils::placement_generator::generate_placement;
use crate::utils::render_game_state::render_game_state;

const HELP: &str = "commands: click <x> <y> | tile <row> <col> | deselect | board | moves | history | placement | new | help | quit";

pub fn run_stdio_loop(geometry: BoardGeometry) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut session = TerminalSession::new(geometry);

    writeln!(stdout, "{HELP}")?;
    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = session.handle_command(&line, &mut stdout)?;
        stdout.flush()?;
        if should_quit {
            break;
        }
    }

    Ok(())
}

pub struct TerminalSession {
    game: GameManager,
    adapter: InputAdapter,
}

impl TerminalSession {
    pub fn new(geometry: BoardGeometry) -> Self {
        Self {
            game: GameManager::new(),
            adapter: InputAdapter::new(geometry),
        }
    }

    pub fn game(&self) -> &GameManager {
        &self.game
    }

    /// Handles one line. Returns `true` when the session should end.
    pub fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        let mut parts = trimmed.split_whitespace();
        let cmd = parts.next().unwrap_or_default();
        let args: Vec<&str> = parts.collect();

        match cmd {
            "click" => match parse_pair::<i32>(&args) {
                Some((x, y)) => {
                    self.adapter.observe(PointerState::new(x, y, true));
                    let event = self.adapter.step(&mut self.game);
                    self.adapter.observe(PointerState::new(x, y, false));
                    self.report(event, out)?;
                }
                None => writeln!(out, "usage: click <x> <y>")?,
            },
            "tile" => match parse_pair::<i8>(&args) {
                Some((row, col)) => {
                    let coord = Coordinate::new(row, col);
                    let tile = self.game.is_in_bounds(coord).then_some(coord);
                    self.adapter.push_click(tile);
                    let event = self.adapter.step(&mut self.game);
                    self.report(event, out)?;
                }
                None => writeln!(out, "usage: tile <row> <col>")?,
            },
            "deselect" => {
                self.adapter.push_command(TurnCommand::Deselect);
                let event = self.adapter.step(&mut self.game);
                self.report(event, out)?;
            }
            "board" => {
                let frame = FrameView::capture(&self.game);
                writeln!(out, "{}", render_game_state(&frame))?;
                let check = if frame.in_check { " (check)" } else { "" };
                writeln!(out, "{} to move{check}", frame.active)?;
                if let Some(GameOutcome::KingCaptured { winner }) = frame.outcome {
                    writeln!(out, "{winner} has captured a king")?;
                }
            }
            "moves" => {
                let moves: Vec<String> = self
                    .game
                    .legal_move_set()
                    .iter()
                    .map(|c| c.to_string())
                    .collect();
                if moves.is_empty() {
                    writeln!(out, "no piece selected or no legal moves")?;
                } else {
                    writeln!(out, "{}", moves.join(" "))?;
                }
            }
            "history" => {
                for record in self.game.history() {
                    writeln!(out, "{}", record.describe())?;
                }
            }
            "placement" => {
                writeln!(out, "{}", generate_placement(&self.game.occupancy_snapshot()))?;
            }
            "new" => {
                self.game = GameManager::new();
                writeln!(out, "new game, light to move")?;
            }
            "help" => writeln!(out, "{HELP}")?,
            "quit" | "exit" => return Ok(true),
            other => writeln!(out, "unknown command '{other}'; {HELP}")?,
        }

        Ok(false)
    }

    fn report(&self, event: Option<TurnEvent>, out: &mut impl Write) -> io::Result<()> {
        match event {
            None | Some(TurnEvent::Ignored) => writeln!(out, "ignored"),
            Some(TurnEvent::Selected { at, .. }) => {
                writeln!(out, "selected {at}; {} legal moves", self.game.legal_move_set().len())
            }
            Some(TurnEvent::Moved(record)) => {
                writeln!(out, "{}", record.describe())?;
                if record.captured == Some(PieceKind::King) {
                    writeln!(out, "{} captured the king", record.color)?;
                }
                writeln!(out, "{} to move", self.game.current_color())
            }
            Some(TurnEvent::MoveRejected { target }) => writeln!(out, "illegal move to {target}"),
            Some(TurnEvent::Deselected) => writeln!(out, "selection cleared"),
        }
    }
}

fn parse_pair<T: std::str::FromStr>(args: &[&str]) -> Option<(T, T)> {
    match args {
        [a, b] => Some((a.parse().ok()?, b.parse().ok()?)),
        _ => None,
    }
}
