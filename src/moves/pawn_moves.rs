//! Pawn step geometry.
//!
//! Only the single forward step and the two forward diagonals exist here; the
//! start-rank double step, en-passant and promotion are not part of the rules.

use crate::game_state::chess_rules::pawn_direction;
use crate::game_state::chess_types::{Color, Coordinate};

/// The cell one step ahead of a pawn, if still on the board.
#[inline]
pub fn pawn_advance(from: Coordinate, color: Color) -> Option<Coordinate> {
    from.offset(pawn_direction(color), 0)
}

/// Forward diagonals a pawn attacks.
pub fn pawn_capture_targets(from: Coordinate, color: Color) -> impl Iterator<Item = Coordinate> {
    let d_row = pawn_direction(color);
    [-1i8, 1i8]
        .into_iter()
        .filter_map(move |d_col| from.offset(d_row, d_col))
}
