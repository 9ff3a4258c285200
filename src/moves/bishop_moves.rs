//! Diagonal ray geometry for bishops, without occupancy.

use crate::game_state::chess_types::Coordinate;
use crate::moves::rook_moves::ray;

/// Diagonal unit steps as `(d_row, d_col)`.
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

pub fn bishop_rays(from: Coordinate) -> impl Iterator<Item = Coordinate> {
    BISHOP_DIRECTIONS.into_iter().flat_map(move |dir| ray(from, dir))
}
