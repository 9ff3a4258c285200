//! King step geometry.

use crate::game_state::chess_types::Coordinate;

/// The eight neighbouring cells as `(d_row, d_col)`.
pub const KING_STEPS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub fn king_targets(from: Coordinate) -> impl Iterator<Item = Coordinate> {
    KING_STEPS
        .into_iter()
        .filter_map(move |(d_row, d_col)| from.offset(d_row, d_col))
}
