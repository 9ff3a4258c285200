//! Plain value types shared by every part of the rules core.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::game_state::chess_rules::BOARD_SIZE;

/// Side a piece or player belongs to. Light moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::Light => 0,
            Color::Dark => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Light => write!(f, "light"),
            Color::Dark => write!(f, "dark"),
        }
    }
}

/// Piece kind. Color is stored separately on the piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        };
        f.write_str(name)
    }
}

/// Board cell addressed with matrix indexing: `(row, col)`, NOT `(x, y)`.
///
/// Row 0 is the dark back rank at the top of the screen. Components are signed
/// so that offsets running off the board can be represented and rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coordinate {
    pub row: i8,
    pub col: i8,
}

impl Coordinate {
    #[inline]
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// True iff both components lie in `[0, 8)`.
    #[inline]
    pub const fn is_in_bounds(self) -> bool {
        self.row >= 0 && self.row < BOARD_SIZE && self.col >= 0 && self.col < BOARD_SIZE
    }

    /// Shifts the coordinate, returning `None` when the result leaves the board.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row.checked_add(d_row)?;
        let col = self.col.checked_add(d_col)?;
        let moved = Self::new(row, col);
        moved.is_in_bounds().then_some(moved)
    }
}

impl From<(i8, i8)> for Coordinate {
    fn from((row, col): (i8, i8)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Stable handle to a piece inside its owning player's piece list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PieceId(pub usize);

/// Index of a player inside the game manager's player pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayerId(pub usize);

impl PlayerId {
    #[inline]
    pub const fn of(color: Color) -> Self {
        PlayerId(color.index())
    }

    #[inline]
    pub const fn other(self) -> Self {
        PlayerId(1 - self.0)
    }
}

/// Destination squares a piece may reach, ordered for deterministic output.
pub type MoveSet = BTreeSet<Coordinate>;

/// What stands where, for sprite placement.
pub type OccupancySnapshot = BTreeMap<Coordinate, (PieceKind, Color)>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_follow_zero_to_eight() {
        assert!(Coordinate::new(0, 0).is_in_bounds());
        assert!(Coordinate::new(7, 7).is_in_bounds());
        assert!(!Coordinate::new(8, 0).is_in_bounds());
        assert!(!Coordinate::new(0, -1).is_in_bounds());
    }

    #[test]
    fn offset_rejects_leaving_the_board() {
        assert_eq!(Coordinate::new(7, 1).offset(-2, -1), Some(Coordinate::new(5, 0)));
        assert_eq!(Coordinate::new(7, 1).offset(1, 0), None);
        assert_eq!(Coordinate::new(0, 0).offset(i8::MIN, 0), None);
    }

    #[test]
    fn player_ids_pair_up() {
        assert_eq!(PlayerId::of(Color::Dark), PlayerId(1));
        assert_eq!(PlayerId(0).other(), PlayerId(1));
        assert_eq!(PlayerId(1).other(), PlayerId(0));
    }
}
