//! Derived board occupancy.
//!
//! Nothing here stores a second copy of the board: every query scans the live
//! pieces of both players. At most one live piece may stand on a coordinate; a
//! second one means move application is broken, so the lookups panic rather
//! than pick one.

use crate::game_state::chess_types::{Coordinate, OccupancySnapshot};
use crate::game_state::piece::Piece;
use crate::game_state::player::Player;

/// True iff both components lie on the 8x8 board.
#[inline]
pub fn is_in_bounds(coord: Coordinate) -> bool {
    coord.is_in_bounds()
}

/// The single live piece standing on `coord`, if any.
///
/// # Panics
///
/// Panics when more than one live piece occupies `coord`.
pub fn occupant_at<'a, I>(coord: Coordinate, pieces: I) -> Option<&'a Piece>
where
    I: IntoIterator<Item = &'a Piece>,
{
    if !coord.is_in_bounds() {
        return None;
    }

    let mut found: Option<&'a Piece> = None;
    for piece in pieces.into_iter().filter(|p| p.occupies(coord)) {
        if let Some(first) = found {
            panic!(
                "more than one live piece occupies {coord}: {:?} {} and {:?} {}",
                first.color, first.kind, piece.color, piece.kind
            );
        }
        found = Some(piece);
    }
    found
}

/// Occupancy as seen by the side owning `own`.
#[derive(Debug, Clone, Copy)]
pub struct BoardView<'a> {
    own: &'a [Piece],
    opponent: &'a [Piece],
}

impl<'a> BoardView<'a> {
    #[inline]
    pub fn new(own: &'a [Piece], opponent: &'a [Piece]) -> Self {
        Self { own, opponent }
    }

    #[inline]
    pub fn friendly_at(&self, coord: Coordinate) -> Option<&'a Piece> {
        occupant_at(coord, self.own)
    }

    #[inline]
    pub fn opponent_at(&self, coord: Coordinate) -> Option<&'a Piece> {
        occupant_at(coord, self.opponent)
    }

    /// The piece on `coord` from either side.
    pub fn occupant(&self, coord: Coordinate) -> Option<&'a Piece> {
        occupant_at(coord, self.own.iter().chain(self.opponent.iter()))
    }

    #[inline]
    pub fn is_empty(&self, coord: Coordinate) -> bool {
        self.occupant(coord).is_none()
    }
}

/// Kind and color of every live piece, keyed by coordinate.
///
/// # Panics
///
/// Panics when two live pieces share a coordinate.
pub fn occupancy_snapshot(players: &[Player]) -> OccupancySnapshot {
    let mut snapshot = OccupancySnapshot::new();
    for piece in players.iter().flat_map(|p| p.pieces()).filter(|p| p.alive) {
        if let Some((kind, color)) = snapshot.insert(piece.position, (piece.kind, piece.color)) {
            panic!(
                "more than one live piece occupies {}: {color:?} {kind} and {:?} {}",
                piece.position, piece.color, piece.kind
            );
        }
    }
    snapshot
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Color, PieceKind};

    fn piece(kind: PieceKind, color: Color, row: i8, col: i8) -> Piece {
        Piece::new(kind, color, Coordinate::new(row, col))
    }

    #[test]
    fn occupant_lookup_ignores_captured_pieces() {
        let mut captured = piece(PieceKind::Rook, Color::Dark, 3, 3);
        captured.alive = false;
        let pieces = vec![captured, piece(PieceKind::Pawn, Color::Light, 3, 4)];

        assert!(occupant_at(Coordinate::new(3, 3), &pieces).is_none());
        assert_eq!(
            occupant_at(Coordinate::new(3, 4), &pieces).map(|p| p.kind),
            Some(PieceKind::Pawn)
        );
    }

    #[test]
    fn out_of_bounds_lookup_is_none() {
        let pieces = vec![piece(PieceKind::King, Color::Light, 7, 4)];
        assert!(occupant_at(Coordinate::new(8, 4), &pieces).is_none());
        assert!(occupant_at(Coordinate::new(-1, 0), &pieces).is_none());
    }

    #[test]
    #[should_panic(expected = "more than one live piece")]
    fn stacked_pieces_are_fatal() {
        let pieces = vec![
            piece(PieceKind::Knight, Color::Light, 2, 2),
            piece(PieceKind::Bishop, Color::Dark, 2, 2),
        ];
        let _ = occupant_at(Coordinate::new(2, 2), &pieces);
    }

    #[test]
    fn view_separates_friend_from_foe() {
        let own = vec![piece(PieceKind::Rook, Color::Light, 4, 4)];
        let opponent = vec![piece(PieceKind::Pawn, Color::Dark, 4, 6)];
        let view = BoardView::new(&own, &opponent);

        assert!(view.friendly_at(Coordinate::new(4, 4)).is_some());
        assert!(view.opponent_at(Coordinate::new(4, 4)).is_none());
        assert!(view.opponent_at(Coordinate::new(4, 6)).is_some());
        assert!(view.is_empty(Coordinate::new(4, 5)));
    }
}
