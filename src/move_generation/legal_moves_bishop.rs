//! Bishop move generation.
//!
//! Slides along the four diagonals until blocked, taking the first opponent
//! piece met on each ray.

use crate::game_state::board::BoardView;
use crate::game_state::chess_types::{Coordinate, MoveSet};
use crate::move_generation::legal_move_shared::slide;
use crate::moves::bishop_moves::BISHOP_DIRECTIONS;

pub fn generate_bishop_moves(from: Coordinate, board: &BoardView<'_>, out: &mut MoveSet) {
    slide(from, &BISHOP_DIRECTIONS, board, out);
}
