//! Knight move generation. Jumps ignore blockers; only friendly targets are
//! dropped.

use crate::game_state::board::BoardView;
use crate::game_state::chess_types::{Coordinate, MoveSet};
use crate::move_generation::legal_move_shared::push_unless_friendly;
use crate::moves::knight_moves::knight_targets;

pub fn generate_knight_moves(from: Coordinate, board: &BoardView<'_>, out: &mut MoveSet) {
    for target in knight_targets(from) {
        push_unless_friendly(target, board, out);
    }
}
