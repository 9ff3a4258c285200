//! Errors used throughout the rules core.
//!
//! Only caller mistakes and malformed setup input are reported through
//! `ChessErrors`. Illegal moves are an ordinary outcome and are signalled with
//! `false` / `TurnEvent::MoveRejected`, while two live pieces on one cell is a
//! defect in move application and panics instead.

use thiserror::Error;

use crate::game_state::chess_types::{Color, Coordinate, PieceId};

/// Unified error type for the rules core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessErrors {
    /// The id does not name a piece in this player's collection.
    #[error("{color} player has no piece with id {id:?}")]
    UnknownPiece { color: Color, id: PieceId },

    /// Captured pieces can never be selected.
    #[error("{color} piece {id:?} was captured and cannot be selected")]
    PieceCaptured { color: Color, id: PieceId },

    /// An unexpected character in a placement string.
    #[error("invalid placement token '{0}'")]
    InvalidPlacementToken(char),

    /// Placement text that does not describe an 8x8 board.
    #[error("malformed placement string: {0}")]
    MalformedPlacement(String),

    /// Each side must start with exactly one king.
    #[error("{color} side has {count} kings, expected exactly one")]
    KingCount { color: Color, count: usize },

    /// A piece was placed outside the board.
    #[error("coordinate {0} is outside the board")]
    OutOfBounds(Coordinate),
}
