//! Rook ray geometry.
//!
//! Rays here ignore occupancy; blocking is applied by the legal-move
//! generators, which stop walking a ray at the first occupied cell.

use crate::game_state::chess_types::Coordinate;

/// Orthogonal unit steps as `(d_row, d_col)`.
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Every cell from `from` (exclusive) to the board edge along one direction.
pub fn ray(from: Coordinate, (d_row, d_col): (i8, i8)) -> impl Iterator<Item = Coordinate> {
    std::iter::successors(from.offset(d_row, d_col), move |c| c.offset(d_row, d_col))
}

/// All cells a rook on `from` sees on an empty board.
pub fn rook_rays(from: Coordinate) -> impl Iterator<Item = Coordinate> {
    ROOK_DIRECTIONS.into_iter().flat_map(move |dir| ray(from, dir))
}
