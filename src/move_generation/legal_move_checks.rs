//! Attack and check queries.
//!
//! These are informational only: legal move sets never exclude moves that
//! leave the own king attacked, and check does not end the game.

use crate::game_state::board::BoardView;
use crate::game_state::chess_types::{Coordinate, PieceKind};
use crate::game_state::piece::Piece;
use crate::move_generation::legal_move_generator::legal_moves;
use crate::moves::pawn_moves::pawn_capture_targets;

/// True if any live piece in `attackers` could capture on `square`.
///
/// Pawns attack their forward diagonals whether or not anything stands there;
/// every other kind attacks exactly the cells it could move to.
pub fn is_square_attacked(square: Coordinate, attackers: &[Piece], defenders: &[Piece]) -> bool {
    let board = BoardView::new(attackers, defenders);
    attackers.iter().filter(|p| p.alive).any(|attacker| match attacker.kind {
        PieceKind::Pawn => {
            pawn_capture_targets(attacker.position, attacker.color).any(|c| c == square)
        }
        _ => legal_moves(attacker, &board).contains(&square),
    })
}

/// Live king of `own`, if it still has one.
pub fn king_square(own: &[Piece]) -> Option<Coordinate> {
    own.iter()
        .find(|p| p.alive && p.kind == PieceKind::King)
        .map(|p| p.position)
}

/// True if the king among `own` stands on a cell `opponent` attacks.
pub fn is_king_in_check(own: &[Piece], opponent: &[Piece]) -> bool {
    king_square(own).is_some_and(|square| is_square_attacked(square, opponent, own))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::Color;

    fn at(row: i8, col: i8) -> Coordinate {
        Coordinate::new(row, col)
    }

    #[test]
    fn rook_on_open_file_gives_check() {
        let own = vec![Piece::new(PieceKind::King, Color::Light, at(7, 4))];
        let opponent = vec![Piece::new(PieceKind::Rook, Color::Dark, at(0, 4))];
        assert!(is_king_in_check(&own, &opponent));
    }

    #[test]
    fn interposed_piece_blocks_check() {
        let own = vec![
            Piece::new(PieceKind::King, Color::Light, at(7, 4)),
            Piece::new(PieceKind::Bishop, Color::Light, at(5, 4)),
        ];
        let opponent = vec![Piece::new(PieceKind::Rook, Color::Dark, at(0, 4))];
        assert!(!is_king_in_check(&own, &opponent));
    }

    #[test]
    fn pawn_attacks_empty_diagonal() {
        let attackers = vec![Piece::new(PieceKind::Pawn, Color::Dark, at(2, 2))];
        assert!(is_square_attacked(at(3, 3), &attackers, &[]));
        assert!(!is_square_attacked(at(3, 2), &attackers, &[]));
    }

    #[test]
    fn kingless_side_is_never_in_check() {
        let opponent = vec![Piece::new(PieceKind::Queen, Color::Dark, at(0, 0))];
        assert!(!is_king_in_check(&[], &opponent));
    }
}
