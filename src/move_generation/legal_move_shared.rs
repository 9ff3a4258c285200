//! Occupancy-aware helpers shared by the per-kind generators.

use crate::game_state::board::BoardView;
use crate::game_state::chess_types::{Coordinate, MoveSet};
use crate::moves::rook_moves::ray;

/// Adds `target` unless a friendly piece already stands there.
#[inline]
pub fn push_unless_friendly(target: Coordinate, board: &BoardView<'_>, out: &mut MoveSet) {
    if board.friendly_at(target).is_none() {
        out.insert(target);
    }
}

/// Walks each ray until the edge or the first occupied cell.
///
/// A friendly blocker is excluded, an opponent blocker is included as a
/// capture; either way the ray ends there.
pub fn slide(from: Coordinate, directions: &[(i8, i8)], board: &BoardView<'_>, out: &mut MoveSet) {
    for &direction in directions {
        for target in ray(from, direction) {
            if board.friendly_at(target).is_some() {
                break;
            }
            out.insert(target);
            if board.opponent_at(target).is_some() {
                break;
            }
        }
    }
}
