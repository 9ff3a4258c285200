//! Occupancy-to-FEN piece-placement generator.

use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::chess_types::{Color, Coordinate, OccupancySnapshot, PieceKind};

pub fn generate_placement(occupancy: &OccupancySnapshot) -> String {
    let mut rows = Vec::with_capacity(BOARD_SIZE as usize);

    for row in 0..BOARD_SIZE {
        let mut out = String::new();
        let mut empty = 0u8;
        for col in 0..BOARD_SIZE {
            match occupancy.get(&Coordinate::new(row, col)) {
                Some(&(kind, color)) => {
                    if empty > 0 {
                        out.push(char::from(b'0' + empty));
                        empty = 0;
                    }
                    out.push(piece_to_char(kind, color));
                }
                None => empty += 1,
            }
        }
        if empty > 0 {
            out.push(char::from(b'0' + empty));
        }
        rows.push(out);
    }

    rows.join("/")
}

pub fn piece_to_char(kind: PieceKind, color: Color) -> char {
    let ch = match kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };
    match color {
        Color::Light => ch.to_ascii_uppercase(),
        Color::Dark => ch,
    }
}
