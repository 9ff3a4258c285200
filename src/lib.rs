//! Crate root module declarations for the Plum Board rules core.
//!
//! Exposes the board and turn model, per-piece move generation, the
//! presentation adapter contract, and text utilities so binaries, tests, and
//! embedding applications can import stable module paths.

pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_manager;
    pub mod piece;
    pub mod player;
    pub mod turn_record;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
}

pub mod presentation {
    pub mod board_geometry;
    pub mod frame_view;
    pub mod input_adapter;
}

pub mod terminal {
    pub mod terminal_top;
}

pub mod utils {
    pub mod placement_generator;
    pub mod placement_parser;
    pub mod render_game_state;
}
