//! Read-only snapshot the renderer draws from.

use crate::game_state::chess_types::{Color, Coordinate, MoveSet, OccupancySnapshot};
use crate::game_state::game_manager::{GameManager, GameOutcome};

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameView {
    pub active: Color,
    pub selected: Option<Coordinate>,
    /// Legal destinations of the selected piece.
    pub highlighted: MoveSet,
    pub occupancy: OccupancySnapshot,
    pub in_check: bool,
    pub outcome: Option<GameOutcome>,
}

impl FrameView {
    pub fn capture(game: &GameManager) -> Self {
        let active = game.current_color();
        Self {
            active,
            selected: game.selected_coordinate(),
            highlighted: game.legal_move_set(),
            occupancy: game.occupancy_snapshot(),
            in_check: game.is_in_check(active),
            outcome: game.outcome(),
        }
    }

    #[inline]
    pub fn is_highlighted(&self, coord: Coordinate) -> bool {
        self.highlighted.contains(&coord)
    }
}
