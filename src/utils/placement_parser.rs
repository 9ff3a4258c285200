//! FEN piece-placement parser.
//!
//! Reads only the first FEN field. Rank strings are taken top to bottom, so
//! the first one fills row 0 (the dark back rank). Uppercase letters are light
//! pieces, lowercase dark.

use crate::errors::ChessErrors;
use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::chess_types::{Color, Coordinate, PieceKind};
use crate::game_state::piece::Piece;

pub fn parse_placement(placement: &str) -> Result<Vec<Piece>, ChessErrors> {
    let rows: Vec<&str> = placement.trim().split('/').collect();
    if rows.len() != BOARD_SIZE as usize {
        return Err(ChessErrors::MalformedPlacement(format!(
            "expected {BOARD_SIZE} rows, found {}",
            rows.len()
        )));
    }

    let mut pieces = Vec::new();
    for (row, row_str) in (0i8..).zip(rows) {
        let mut col: i8 = 0;
        for ch in row_str.chars() {
            if let Some(empty) = ch.to_digit(10) {
                if !(1..=8).contains(&empty) {
                    return Err(ChessErrors::InvalidPlacementToken(ch));
                }
                col += empty as i8;
            } else {
                let (kind, color) = piece_from_char(ch)?;
                if col >= BOARD_SIZE {
                    return Err(ChessErrors::MalformedPlacement(format!(
                        "row {row} '{row_str}' is longer than {BOARD_SIZE} cells"
                    )));
                }
                pieces.push(Piece::new(kind, color, Coordinate::new(row, col)));
                col += 1;
            }

            if col > BOARD_SIZE {
                return Err(ChessErrors::MalformedPlacement(format!(
                    "row {row} '{row_str}' is longer than {BOARD_SIZE} cells"
                )));
            }
        }

        if col != BOARD_SIZE {
            return Err(ChessErrors::MalformedPlacement(format!(
                "row {row} '{row_str}' covers {col} cells, expected {BOARD_SIZE}"
            )));
        }
    }

    Ok(pieces)
}

pub fn piece_from_char(ch: char) -> Result<(PieceKind, Color), ChessErrors> {
    let color = if ch.is_ascii_uppercase() {
        Color::Light
    } else {
        Color::Dark
    };
    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return Err(ChessErrors::InvalidPlacementToken(ch)),
    };
    Ok((kind, color))
}
