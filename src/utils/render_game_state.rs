//! Terminal-oriented Unicode board renderer.
//!
//! Draws the board in matrix order (row 0 on top) with the selection and the
//! highlighted legal moves marked, for the CLI driver and for diagnostics.

use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::chess_types::{Color, Coordinate, PieceKind};
use crate::presentation::frame_view::FrameView;

/// Render a frame to a Unicode string.
///
/// Cells are three characters wide: `[♘]` is the selected piece, `(♟)` a
/// capturable piece, ` * ` an empty legal destination and ` · ` an empty cell.
pub fn render_game_state(frame: &FrameView) -> String {
    let mut out = String::new();

    out.push_str(&column_header());

    for row in 0..BOARD_SIZE {
        out.push(char::from(b'0' + row as u8));
        out.push(' ');

        for col in 0..BOARD_SIZE {
            let coord = Coordinate::new(row, col);
            let glyph = frame
                .occupancy
                .get(&coord)
                .map(|&(kind, color)| piece_to_unicode(color, kind));
            let (open, close) = if frame.selected == Some(coord) {
                ('[', ']')
            } else if frame.highlighted.contains(&coord) && glyph.is_some() {
                ('(', ')')
            } else {
                (' ', ' ')
            };

            out.push(open);
            out.push(match glyph {
                Some(ch) => ch,
                None if frame.highlighted.contains(&coord) => '*',
                None => '·',
            });
            out.push(close);
        }

        out.push(' ');
        out.push(char::from(b'0' + row as u8));
        out.push('\n');
    }

    out.push_str(column_header().trim_end());
    out
}

fn column_header() -> String {
    let mut header = String::from("  ");
    for col in 0..BOARD_SIZE {
        header.push(' ');
        header.push(char::from(b'0' + col as u8));
        header.push(' ');
    }
    header.push('\n');
    header
}

fn piece_to_unicode(color: Color, piece: PieceKind) -> char {
    match (color, piece) {
        (Color::Light, PieceKind::Pawn) => '♙',
        (Color::Light, PieceKind::Knight) => '♘',
        (Color::Light, PieceKind::Bishop) => '♗',
        (Color::Light, PieceKind::Rook) => '♖',
        (Color::Light, PieceKind::Queen) => '♕',
        (Color::Light, PieceKind::King) => '♔',
        (Color::Dark, PieceKind::Pawn) => '♟',
        (Color::Dark, PieceKind::Knight) => '♞',
        (Color::Dark, PieceKind::Bishop) => '♝',
        (Color::Dark, PieceKind::Rook) => '♜',
        (Color::Dark, PieceKind::Queen) => '♛',
        (Color::Dark, PieceKind::King) => '♚',
    }
}
