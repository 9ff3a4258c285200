//! Move history entries, one per successful move.

use chrono::{DateTime, Utc};

use crate::game_state::chess_types::{Color, Coordinate, PieceKind};
use crate::move_generation::legal_move_apply::AppliedMove;

/// History entry for one successful move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnRecord {
    /// Zero-based count of moves played before this one.
    pub ply: usize,
    pub color: Color,
    pub kind: PieceKind,
    pub from: Coordinate,
    pub to: Coordinate,
    pub captured: Option<PieceKind>,
    pub played_at: DateTime<Utc>,
}

impl TurnRecord {
    pub fn from_applied(ply: usize, applied: &AppliedMove) -> Self {
        Self {
            ply,
            color: applied.color,
            kind: applied.kind,
            from: applied.from,
            to: applied.to,
            captured: applied.captured.map(|(_, kind)| kind),
            played_at: Utc::now(),
        }
    }

    /// One-line human readable summary, e.g. `1. light knight (7, 1) -> (5, 2)`.
    pub fn describe(&self) -> String {
        let mut line = format!(
            "{}. {} {} {} -> {}",
            self.ply + 1,
            self.color,
            self.kind,
            self.from,
            self.to
        );
        if let Some(captured) = self.captured {
            line.push_str(&format!(" x {captured}"));
        }
        line
    }
}
