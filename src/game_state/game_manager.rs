//! Turn state machine owning both players.
//!
//! A turn moves through two phases: the active player first selects one of
//! their pieces, then either moves it (handing the turn over) or loses the
//! selection through a rejected move or a deselect (keeping the turn). The
//! match never ends on its own: a captured king and check are both reported
//! to the host but neither stops play.

use std::collections::BTreeSet;

use log::{debug, info, warn};

use crate::errors::ChessErrors;
use crate::game_state::board::{is_in_bounds, occupancy_snapshot};
use crate::game_state::chess_types::{
    Color, Coordinate, MoveSet, OccupancySnapshot, PieceId, PieceKind, PlayerId,
};
use crate::game_state::piece::Piece;
use crate::game_state::player::Player;
use crate::game_state::turn_record::TurnRecord;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::utils::placement_parser::parse_placement;

/// Where the current turn stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnPhase {
    AwaitingSelection {
        active: Color,
    },
    PieceSelected {
        active: Color,
        piece: PieceId,
        at: Coordinate,
    },
}

/// A single user intent, as produced by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnCommand {
    SelectAt(Coordinate),
    MoveTo(Coordinate),
    Deselect,
}

/// What applying a `TurnCommand` did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnEvent {
    Selected { piece: PieceId, at: Coordinate },
    /// Nothing selectable there, or no selection to move.
    Ignored,
    Moved(TurnRecord),
    MoveRejected { target: Coordinate },
    Deselected,
}

/// Set once a king has been captured. Play continues regardless.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    KingCaptured { winner: Color },
}

#[derive(Debug, Clone)]
pub struct GameManager {
    players: [Player; 2],
    current_turn: usize,
    history: Vec<TurnRecord>,
    outcome: Option<GameOutcome>,
}

impl Default for GameManager {
    fn default() -> Self {
        Self::new()
    }
}

impl GameManager {
    /// Standard starting position, light to move.
    pub fn new() -> Self {
        Self::with_players(Player::standard(Color::Light), Player::standard(Color::Dark))
    }

    fn with_players(light: Player, dark: Player) -> Self {
        Self {
            players: [light, dark],
            current_turn: Color::Light.index(),
            history: Vec::new(),
            outcome: None,
        }
    }

    /// Builds a game from an arbitrary set of pieces, light to move.
    ///
    /// Every piece must be on the board, no two live pieces may share a
    /// cell, and each side needs exactly one live king.
    pub fn from_pieces(pieces: Vec<Piece>) -> Result<Self, ChessErrors> {
        let mut seen = BTreeSet::new();
        for piece in &pieces {
            if !piece.position.is_in_bounds() {
                return Err(ChessErrors::OutOfBounds(piece.position));
            }
            if piece.alive && !seen.insert(piece.position) {
                return Err(ChessErrors::MalformedPlacement(format!(
                    "two pieces on {}",
                    piece.position
                )));
            }
        }

        let (light, dark): (Vec<Piece>, Vec<Piece>) =
            pieces.into_iter().partition(|p| p.color == Color::Light);
        for (color, side) in [(Color::Light, &light), (Color::Dark, &dark)] {
            let count = side
                .iter()
                .filter(|p| p.alive && p.kind == PieceKind::King)
                .count();
            if count != 1 {
                return Err(ChessErrors::KingCount { color, count });
            }
        }

        Ok(Self::with_players(
            Player::new(Color::Light, light),
            Player::new(Color::Dark, dark),
        ))
    }

    /// Builds a game from FEN piece-placement text (row 0 first).
    pub fn from_placement(placement: &str) -> Result<Self, ChessErrors> {
        Self::from_pieces(parse_placement(placement)?)
    }

    #[inline]
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    #[inline]
    pub fn player(&self, color: Color) -> &Player {
        &self.players[color.index()]
    }

    #[inline]
    pub fn current_player(&self) -> &Player {
        &self.players[self.current_turn]
    }

    #[inline]
    pub fn current_color(&self) -> Color {
        self.current_player().color()
    }

    /// Hands the turn to the other player.
    ///
    /// The outgoing player's selection is dropped so it cannot go stale while
    /// the opponent moves.
    pub fn advance_turn(&mut self) {
        self.players[self.current_turn].clear_selection();
        self.current_turn = self.current_player().opponent().0;
        debug!("turn passes to {}", self.current_color());
    }

    pub fn phase(&self) -> TurnPhase {
        let player = self.current_player();
        let active = player.color();
        match player
            .selected_piece()
            .and_then(|id| player.piece(id).map(|p| (id, p.position)))
        {
            Some((piece, at)) => TurnPhase::PieceSelected { active, piece, at },
            None => TurnPhase::AwaitingSelection { active },
        }
    }

    #[inline]
    pub fn is_in_bounds(&self, coord: Coordinate) -> bool {
        is_in_bounds(coord)
    }

    /// The first king capture, if any. Informational; play continues.
    #[inline]
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    #[inline]
    pub fn history(&self) -> &[TurnRecord] {
        &self.history
    }

    /// Selects the active player's piece on `coord`.
    ///
    /// Returns `false` when the cell is off the board or the active player
    /// has no live piece there. Any previous selection is replaced on success
    /// and kept otherwise.
    pub fn select_piece_at(&mut self, coord: Coordinate) -> bool {
        if !coord.is_in_bounds() {
            return false;
        }

        let player = &mut self.players[self.current_turn];
        match player.piece_at(coord) {
            Some(id) => player.select_piece(id).is_ok(),
            None => false,
        }
    }

    pub fn clear_selection(&mut self) {
        self.players[self.current_turn].clear_selection();
    }

    /// Moves the selected piece to `target`.
    ///
    /// The selection is cleared whether or not the move succeeds. The turn is
    /// NOT advanced here; the caller does that after a `true` result (or uses
    /// `handle`, which does both).
    pub fn attempt_move_to(&mut self, target: Coordinate) -> bool {
        self.try_move(target).is_some()
    }

    fn try_move(&mut self, target: Coordinate) -> Option<TurnRecord> {
        let mover_id = PlayerId(self.current_turn);
        let (mover, opponent) = self.split_players(mover_id);
        let selected = mover.selected_piece()?;
        mover.clear_selection();
        let applied = mover.attempt_move(selected, target, opponent)?;

        if applied.captured.map(|(_, kind)| kind) == Some(PieceKind::King) {
            if self.outcome.is_none() {
                info!("{} captured the opposing king", applied.color);
                self.outcome = Some(GameOutcome::KingCaptured {
                    winner: applied.color,
                });
            } else {
                warn!("{} captured a king after the first king capture", applied.color);
            }
        }

        let record = TurnRecord::from_applied(self.history.len(), &applied);
        self.history.push(record.clone());
        Some(record)
    }

    /// Applies one command, advancing the turn after a successful move.
    pub fn handle(&mut self, command: TurnCommand) -> TurnEvent {
        match command {
            TurnCommand::SelectAt(coord) => {
                if self.select_piece_at(coord) {
                    match self.phase() {
                        TurnPhase::PieceSelected { piece, at, .. } => {
                            TurnEvent::Selected { piece, at }
                        }
                        TurnPhase::AwaitingSelection { .. } => TurnEvent::Ignored,
                    }
                } else {
                    TurnEvent::Ignored
                }
            }
            TurnCommand::MoveTo(target) => {
                if !self.current_player().has_selection() {
                    return TurnEvent::Ignored;
                }
                match self.try_move(target) {
                    Some(record) => {
                        self.advance_turn();
                        TurnEvent::Moved(record)
                    }
                    None => TurnEvent::MoveRejected { target },
                }
            }
            TurnCommand::Deselect => {
                self.clear_selection();
                TurnEvent::Deselected
            }
        }
    }

    /// Cell of the active player's selected piece.
    pub fn selected_coordinate(&self) -> Option<Coordinate> {
        match self.phase() {
            TurnPhase::PieceSelected { at, .. } => Some(at),
            TurnPhase::AwaitingSelection { .. } => None,
        }
    }

    /// Legal destinations of the selected piece; empty without a selection.
    pub fn legal_move_set(&self) -> MoveSet {
        let player = self.current_player();
        let opponent = &self.players[player.opponent().0];
        player
            .selected_piece()
            .map(|id| player.legal_moves_of(id, opponent))
            .unwrap_or_default()
    }

    pub fn occupancy_snapshot(&self) -> OccupancySnapshot {
        occupancy_snapshot(&self.players)
    }

    /// Whether `color`'s king is attacked right now. Informational only.
    pub fn is_in_check(&self, color: Color) -> bool {
        let own = self.player(color);
        let opponent = self.player(color.opposite());
        is_king_in_check(own.pieces(), opponent.pieces())
    }

    fn split_players(&mut self, mover: PlayerId) -> (&mut Player, &mut Player) {
        let [light, dark] = &mut self.players;
        if mover == PlayerId::of(Color::Light) {
            (light, dark)
        } else {
            (dark, light)
        }
    }
}
