//! Rook move generation.
//!
//! Slides along ranks and files until blocked, taking the first opponent
//! piece met on each ray.

use crate::game_state::board::BoardView;
use crate::game_state::chess_types::{Coordinate, MoveSet};
use crate::move_generation::legal_move_shared::slide;
use crate::moves::rook_moves::ROOK_DIRECTIONS;

pub fn generate_rook_moves(from: Coordinate, board: &BoardView<'_>, out: &mut MoveSet) {
    slide(from, &ROOK_DIRECTIONS, board, out);
}
