use crate::game_state::board::BoardView;
use crate::game_state::chess_types::{Color, Coordinate, MoveSet};
use crate::moves::pawn_moves::{pawn_advance, pawn_capture_targets};

/// Single forward step onto an empty cell, plus diagonal captures.
pub fn generate_pawn_moves(
    from: Coordinate,
    color: Color,
    board: &BoardView<'_>,
    out: &mut MoveSet,
) {
    if let Some(ahead) = pawn_advance(from, color) {
        if board.is_empty(ahead) {
            out.insert(ahead);
        }
    }

    for target in pawn_capture_targets(from, color) {
        if board.opponent_at(target).is_some() {
            out.insert(target);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::PieceKind;
    use crate::game_state::piece::Piece;

    fn at(row: i8, col: i8) -> Coordinate {
        Coordinate::new(row, col)
    }

    #[test]
    fn pawn_is_blocked_by_any_occupant() {
        let own = vec![Piece::new(PieceKind::Pawn, Color::Light, at(6, 4))];
        let opponent = vec![Piece::new(PieceKind::Knight, Color::Dark, at(5, 4))];
        let mut out = MoveSet::new();
        generate_pawn_moves(at(6, 4), Color::Light, &BoardView::new(&own, &opponent), &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn pawn_captures_only_opponents_diagonally() {
        let own = vec![
            Piece::new(PieceKind::Pawn, Color::Dark, at(3, 3)),
            Piece::new(PieceKind::Rook, Color::Dark, at(4, 2)),
        ];
        let opponent = vec![Piece::new(PieceKind::Bishop, Color::Light, at(4, 4))];
        let mut out = MoveSet::new();
        generate_pawn_moves(at(3, 3), Color::Dark, &BoardView::new(&own, &opponent), &mut out);
        assert_eq!(out, MoveSet::from([at(4, 3), at(4, 4)]));
    }
}
