//! One side of the game: its pieces and its current selection.

use log::debug;

use crate::errors::ChessErrors;
use crate::game_state::board::BoardView;
use crate::game_state::chess_rules::starting_pieces;
use crate::game_state::chess_types::{Color, Coordinate, MoveSet, PieceId, PlayerId};
use crate::game_state::piece::Piece;
use crate::move_generation::legal_move_apply::{apply_move, AppliedMove};
use crate::move_generation::legal_move_generator::legal_moves;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    color: Color,
    pieces: Vec<Piece>,
    opponent: PlayerId,
    selected: Option<PieceId>,
}

impl Player {
    pub fn new(color: Color, pieces: Vec<Piece>) -> Self {
        Self {
            color,
            pieces,
            opponent: PlayerId::of(color.opposite()),
            selected: None,
        }
    }

    /// A player holding the standard sixteen starting pieces.
    pub fn standard(color: Color) -> Self {
        Self::new(color, starting_pieces(color))
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn id(&self) -> PlayerId {
        PlayerId::of(self.color)
    }

    /// Index of the other player in the game manager's pair.
    #[inline]
    pub fn opponent(&self) -> PlayerId {
        self.opponent
    }

    /// Every piece this player ever had, captured ones included.
    #[inline]
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn live_pieces(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.iter().filter(|p| p.alive)
    }

    #[inline]
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id.0)
    }

    /// Live pieces satisfying `predicate`, with their ids.
    pub fn pieces_matching<F>(&self, mut predicate: F) -> impl Iterator<Item = (PieceId, &Piece)>
    where
        F: FnMut(&Piece) -> bool,
    {
        self.pieces
            .iter()
            .enumerate()
            .filter(move |(_, p)| p.alive && predicate(*p))
            .map(|(index, p)| (PieceId(index), p))
    }

    /// The live piece of this player standing on `coord`.
    ///
    /// # Panics
    ///
    /// Panics if two of this player's live pieces share `coord`.
    pub fn piece_at(&self, coord: Coordinate) -> Option<PieceId> {
        let mut matches = self.pieces_matching(|p| p.position == coord);
        let found = matches.next().map(|(id, _)| id);
        if let Some((extra, _)) = matches.next() {
            panic!(
                "more than one {} piece exists on {coord}: {found:?} and {extra:?}",
                self.color
            );
        }
        found
    }

    /// Marks `id` as the selected piece.
    ///
    /// The piece must belong to this player and still be alive; otherwise the
    /// selection is left as it was.
    pub fn select_piece(&mut self, id: PieceId) -> Result<(), ChessErrors> {
        let piece = self.pieces.get(id.0).ok_or(ChessErrors::UnknownPiece {
            color: self.color,
            id,
        })?;
        if !piece.alive {
            return Err(ChessErrors::PieceCaptured {
                color: self.color,
                id,
            });
        }

        debug!("{} selects {} on {}", self.color, piece.kind, piece.position);
        self.selected = Some(id);
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    #[inline]
    pub fn has_selection(&self) -> bool {
        self.selected.is_some()
    }

    #[inline]
    pub fn selected_piece(&self) -> Option<PieceId> {
        self.selected
    }

    /// Legal destinations of one of this player's pieces.
    pub fn legal_moves_of(&self, id: PieceId, opponent: &Player) -> MoveSet {
        self.piece(id)
            .map(|piece| legal_moves(piece, &BoardView::new(&self.pieces, &opponent.pieces)))
            .unwrap_or_default()
    }

    /// Moves `id` to `target` when legal, capturing from `opponent`.
    ///
    /// A captured piece can no longer be selected, so the opponent loses a
    /// selection that pointed at it.
    pub fn attempt_move(
        &mut self,
        id: PieceId,
        target: Coordinate,
        opponent: &mut Player,
    ) -> Option<AppliedMove> {
        let applied = apply_move(&mut self.pieces, id, &mut opponent.pieces, target)?;
        if let Some((captured, _)) = applied.captured {
            if opponent.selected == Some(captured) {
                debug!("{} loses its selection of captured {captured:?}", opponent.color);
                opponent.clear_selection();
            }
        }
        Some(applied)
    }
}
