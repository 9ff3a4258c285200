//! A single chess piece as owned by its player.

use crate::game_state::board::BoardView;
use crate::game_state::chess_types::{Color, Coordinate, MoveSet, PieceKind};
use crate::move_generation::legal_move_generator::legal_moves;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub position: Coordinate,
    pub alive: bool,
}

impl Piece {
    #[inline]
    pub fn new(kind: PieceKind, color: Color, position: Coordinate) -> Self {
        Self {
            kind,
            color,
            position,
            alive: true,
        }
    }

    /// True when this piece is alive and standing on `coord`.
    #[inline]
    pub fn occupies(&self, coord: Coordinate) -> bool {
        self.alive && self.position == coord
    }

    /// Squares this piece may move to given both sides' current pieces.
    pub fn legal_moves(&self, own_pieces: &[Piece], opponent_pieces: &[Piece]) -> MoveSet {
        legal_moves(self, &BoardView::new(own_pieces, opponent_pieces))
    }

    pub(crate) fn capture(&mut self) {
        self.alive = false;
    }
}
