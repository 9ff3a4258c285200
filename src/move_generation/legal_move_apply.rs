//! Move application: legality gate, capture, reposition.

use log::{debug, info};

use crate::game_state::board::{occupant_at, BoardView};
use crate::game_state::chess_types::{Color, Coordinate, PieceId, PieceKind};
use crate::game_state::piece::Piece;
use crate::move_generation::legal_move_generator::legal_moves;

/// What a successful move changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedMove {
    pub piece: PieceId,
    pub kind: PieceKind,
    pub color: Color,
    pub from: Coordinate,
    pub to: Coordinate,
    pub captured: Option<(PieceId, PieceKind)>,
}

/// Moves `own[id]` to `target` if that is one of its legal moves.
///
/// Returns `None` and leaves both piece lists untouched otherwise. On success
/// an opponent piece standing on `target` is marked captured.
///
/// # Panics
///
/// Panics if, after the move, more than one live piece stands on `target`.
pub fn apply_move(
    own: &mut [Piece],
    id: PieceId,
    opponent: &mut [Piece],
    target: Coordinate,
) -> Option<AppliedMove> {
    let piece = own.get(id.0)?;
    if !piece.alive {
        return None;
    }
    if !legal_moves(piece, &BoardView::new(own, opponent)).contains(&target) {
        debug!(
            "rejected {} {} {} -> {target}: not a legal move",
            piece.color, piece.kind, piece.position
        );
        return None;
    }

    let (kind, color, from) = (piece.kind, piece.color, piece.position);

    let captured = opponent
        .iter()
        .position(|p| p.occupies(target))
        .map(|index| {
            let victim = &mut opponent[index];
            victim.capture();
            info!("{color} {kind} captures {} {} on {target}", victim.color, victim.kind);
            (PieceId(index), victim.kind)
        });

    own[id.0].position = target;
    assert_single_occupant(target, own, opponent);

    info!("{color} {kind} {from} -> {target}");
    Some(AppliedMove {
        piece: id,
        kind,
        color,
        from,
        to: target,
        captured,
    })
}

/// Panics unless at most one live piece stands on `target`.
fn assert_single_occupant(target: Coordinate, own: &[Piece], opponent: &[Piece]) {
    let occupant = occupant_at(target, own.iter().chain(opponent.iter()));
    debug_assert!(occupant.is_some(), "moved piece missing from {target}");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(row: i8, col: i8) -> Coordinate {
        Coordinate::new(row, col)
    }

    #[test]
    fn illegal_target_changes_nothing() {
        let mut own = vec![Piece::new(PieceKind::Rook, Color::Light, at(4, 4))];
        let mut opponent = vec![Piece::new(PieceKind::Pawn, Color::Dark, at(4, 6))];
        let before = (own.clone(), opponent.clone());

        assert!(apply_move(&mut own, PieceId(0), &mut opponent, at(4, 7)).is_none());
        assert!(apply_move(&mut own, PieceId(0), &mut opponent, at(3, 3)).is_none());
        assert_eq!((own, opponent), before);
    }

    #[test]
    fn capture_marks_victim_and_moves_piece() {
        let mut own = vec![Piece::new(PieceKind::Rook, Color::Light, at(4, 4))];
        let mut opponent = vec![
            Piece::new(PieceKind::King, Color::Dark, at(0, 0)),
            Piece::new(PieceKind::Pawn, Color::Dark, at(4, 6)),
        ];

        let applied =
            apply_move(&mut own, PieceId(0), &mut opponent, at(4, 6)).expect("legal capture");
        assert_eq!(applied.captured, Some((PieceId(1), PieceKind::Pawn)));
        assert_eq!(applied.from, at(4, 4));
        assert_eq!(own[0].position, at(4, 6));
        assert!(!opponent[1].alive);
        assert!(opponent[0].alive);
        assert_eq!(
            occupant_at(at(4, 6), own.iter().chain(opponent.iter())).map(|p| p.color),
            Some(Color::Light)
        );
    }

    #[test]
    fn unknown_or_dead_piece_cannot_move() {
        let mut own = vec![Piece::new(PieceKind::Knight, Color::Dark, at(0, 1))];
        own[0].alive = false;
        let mut opponent = Vec::new();
        assert!(apply_move(&mut own, PieceId(0), &mut opponent, at(2, 2)).is_none());
        assert!(apply_move(&mut own, PieceId(5), &mut opponent, at(2, 2)).is_none());
    }
}
