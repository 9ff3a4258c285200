//! Canonical chess-rule constants.
//!
//! Board dimensions, the standard starting layout and pawn direction.

use crate::game_state::chess_types::{Color, Coordinate, PieceKind};
use crate::game_state::piece::Piece;

/// Cells per row and per column.
pub const BOARD_SIZE: i8 = 8;

/// Standard starting layout in FEN piece-placement form.
///
/// The first rank string is row 0 (dark back rank, top of the screen), so the
/// text reads in the same order as the board's matrix indexing.
pub const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// Row delta of a single pawn step. Light starts on rows 6-7 and moves up.
#[inline]
pub const fn pawn_direction(color: Color) -> i8 {
    match color {
        Color::Light => -1,
        Color::Dark => 1,
    }
}

/// Back rank piece order from column 0 to column 7.
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Row holding a side's back rank in the starting layout.
#[inline]
pub const fn back_row(color: Color) -> i8 {
    match color {
        Color::Light => BOARD_SIZE - 1,
        Color::Dark => 0,
    }
}

/// The sixteen pieces one side starts with, back rank first.
pub fn starting_pieces(color: Color) -> Vec<Piece> {
    let back = back_row(color);
    let pawn_row = back + pawn_direction(color);

    let back_rank = BACK_RANK
        .iter()
        .zip(0i8..)
        .map(|(&kind, col)| Piece::new(kind, color, Coordinate::new(back, col)));
    let pawns = (0..BOARD_SIZE)
        .map(|col| Piece::new(PieceKind::Pawn, color, Coordinate::new(pawn_row, col)));

    back_rank.chain(pawns).collect()
}
