use crate::game_state::board::BoardView;
use crate::game_state::chess_types::{Coordinate, MoveSet};
use crate::move_generation::legal_move_shared::push_unless_friendly;
use crate::moves::king_moves::king_targets;

/// Adjacent cells not held by a friendly piece. Moving into check is allowed.
pub fn generate_king_moves(from: Coordinate, board: &BoardView<'_>, out: &mut MoveSet) {
    for target in king_targets(from) {
        push_unless_friendly(target, board, out);
    }
}
