//! Queen move generation over all eight sliding directions.

use crate::game_state::board::BoardView;
use crate::game_state::chess_types::{Coordinate, MoveSet};
use crate::move_generation::legal_move_shared::slide;
use crate::moves::queen_moves::QUEEN_DIRECTIONS;

pub fn generate_queen_moves(from: Coordinate, board: &BoardView<'_>, out: &mut MoveSet) {
    slide(from, &QUEEN_DIRECTIONS, board, out);
}
