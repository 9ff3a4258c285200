//! Legal destination sets for a single piece.
//!
//! Dispatches on the closed `PieceKind` enum to the per-kind generators. The
//! result depends only on the current pieces; there is no move history, and
//! moves are not filtered for leaving the own king attacked.

use log::trace;

use crate::game_state::board::BoardView;
use crate::game_state::chess_types::{MoveSet, PieceKind};
use crate::game_state::piece::Piece;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;

/// Every cell `piece` may move to. Captured pieces have none.
pub fn legal_moves(piece: &Piece, board: &BoardView<'_>) -> MoveSet {
    let mut out = MoveSet::new();
    if !piece.alive {
        return out;
    }

    let from = piece.position;
    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(from, piece.color, board, &mut out),
        PieceKind::Knight => generate_knight_moves(from, board, &mut out),
        PieceKind::Bishop => generate_bishop_moves(from, board, &mut out),
        PieceKind::Rook => generate_rook_moves(from, board, &mut out),
        PieceKind::Queen => generate_queen_moves(from, board, &mut out),
        PieceKind::King => generate_king_moves(from, board, &mut out),
    }

    trace!(
        "{} {} at {from} has {} legal moves",
        piece.color,
        piece.kind,
        out.len()
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Color, Coordinate};

    fn at(row: i8, col: i8) -> Coordinate {
        Coordinate::new(row, col)
    }

    fn moves_of(piece: &Piece, own: &[Piece], opponent: &[Piece]) -> MoveSet {
        legal_moves(piece, &BoardView::new(own, opponent))
    }

    #[test]
    fn knight_jumps_are_clipped_by_the_edge() {
        let knight = Piece::new(PieceKind::Knight, Color::Light, at(7, 1));
        let own = vec![knight.clone()];
        assert_eq!(
            moves_of(&knight, &own, &[]),
            MoveSet::from([at(5, 0), at(5, 2), at(6, 3)])
        );
    }

    #[test]
    fn knight_behind_own_pawns_has_two_jumps() {
        let knight = Piece::new(PieceKind::Knight, Color::Light, at(7, 1));
        let own = vec![knight.clone(), Piece::new(PieceKind::Pawn, Color::Light, at(6, 3))];
        assert_eq!(moves_of(&knight, &own, &[]), MoveSet::from([at(5, 0), at(5, 2)]));
    }

    #[test]
    fn rook_ray_stops_on_capture() {
        let rook = Piece::new(PieceKind::Rook, Color::Light, at(4, 4));
        let own = vec![rook.clone()];
        let opponent = vec![Piece::new(PieceKind::Pawn, Color::Dark, at(4, 6))];
        let moves = moves_of(&rook, &own, &opponent);

        let rightward: MoveSet = moves
            .iter()
            .copied()
            .filter(|c| c.row == 4 && c.col > 4)
            .collect();
        assert_eq!(rightward, MoveSet::from([at(4, 5), at(4, 6)]));
        assert!(!moves.contains(&at(4, 7)));
    }

    #[test]
    fn friendly_blocker_is_excluded() {
        let bishop = Piece::new(PieceKind::Bishop, Color::Dark, at(0, 2));
        let own = vec![bishop.clone(), Piece::new(PieceKind::Pawn, Color::Dark, at(1, 3))];
        let moves = moves_of(&bishop, &own, &[]);
        assert_eq!(moves, MoveSet::from([at(1, 1), at(2, 0)]));
    }

    #[test]
    fn queen_is_union_of_rook_and_bishop() {
        let own_queen = Piece::new(PieceKind::Queen, Color::Light, at(3, 3));
        let opponent = vec![
            Piece::new(PieceKind::Pawn, Color::Dark, at(1, 1)),
            Piece::new(PieceKind::Pawn, Color::Dark, at(3, 6)),
        ];
        let own = vec![own_queen.clone()];

        let as_rook = Piece::new(PieceKind::Rook, Color::Light, at(3, 3));
        let as_bishop = Piece::new(PieceKind::Bishop, Color::Light, at(3, 3));
        let mut union = moves_of(&as_rook, &own, &opponent);
        union.extend(moves_of(&as_bishop, &own, &opponent));

        assert_eq!(moves_of(&own_queen, &own, &opponent), union);
    }

    #[test]
    fn king_skips_friendly_neighbours() {
        let king = Piece::new(PieceKind::King, Color::Light, at(7, 4));
        let own = vec![
            king.clone(),
            Piece::new(PieceKind::Queen, Color::Light, at(7, 3)),
            Piece::new(PieceKind::Pawn, Color::Light, at(6, 4)),
        ];
        let opponent = vec![Piece::new(PieceKind::Pawn, Color::Dark, at(6, 5))];
        assert_eq!(
            moves_of(&king, &own, &opponent),
            MoveSet::from([at(6, 3), at(6, 5), at(7, 5)])
        );
    }

    #[test]
    fn captured_piece_has_no_moves() {
        let mut rook = Piece::new(PieceKind::Rook, Color::Dark, at(0, 0));
        rook.alive = false;
        assert!(moves_of(&rook, &[], &[]).is_empty());
    }
}
