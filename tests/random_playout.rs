//! Long randomized click streams through the input adapter, checking the
//! board invariants after every step.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use plum_board::game_state::chess_types::{Color, Coordinate, PieceId};
use plum_board::game_state::game_manager::{GameManager, TurnEvent};
use plum_board::presentation::input_adapter::InputAdapter;

const STEPS_PER_SEED: usize = 4_000;

fn random_tile(rng: &mut StdRng) -> Option<Coordinate> {
    // Some clicks land off the board.
    let row: i8 = rng.random_range(-1..9);
    let col: i8 = rng.random_range(-1..9);
    let coord = Coordinate::new(row, col);
    coord.is_in_bounds().then_some(coord)
}

fn next_click(rng: &mut StdRng, game: &GameManager) -> Option<Coordinate> {
    let player = game.current_player();
    if !player.has_selection() {
        let live: Vec<Coordinate> = player.live_pieces().map(|p| p.position).collect();
        if rng.random_bool(0.8) && !live.is_empty() {
            return Some(live[rng.random_range(0..live.len())]);
        }
        return random_tile(rng);
    }

    let moves: Vec<Coordinate> = game.legal_move_set().into_iter().collect();
    if rng.random_bool(0.7) && !moves.is_empty() {
        Some(moves[rng.random_range(0..moves.len())])
    } else {
        random_tile(rng)
    }
}

fn check_invariants(game: &GameManager) {
    let snapshot = game.occupancy_snapshot();
    let live_total: usize = game.players().iter().map(|p| p.live_pieces().count()).sum();
    assert_eq!(snapshot.len(), live_total);

    let expected = if game.history().len() % 2 == 0 {
        Color::Light
    } else {
        Color::Dark
    };
    assert_eq!(game.current_color(), expected);

    for player in game.players() {
        if let Some(id) = player.selected_piece() {
            assert_eq!(player.color(), game.current_color(), "idle player kept a selection");
            assert!(player.piece(id).is_some_and(|p| p.alive), "selected piece was captured");
        }

        let opponent = game.player(player.color().opposite());
        for (index, piece) in player.pieces().iter().enumerate() {
            assert!(piece.position.is_in_bounds());
            let moves = player.legal_moves_of(PieceId(index), opponent);
            if !piece.alive {
                assert!(moves.is_empty());
                continue;
            }
            for target in moves {
                assert!(target.is_in_bounds());
                assert!(player.piece_at(target).is_none(), "{target} holds a friendly piece");
            }
        }
    }
}

#[test]
fn random_click_streams_keep_the_board_consistent() {
    for seed in [1u64, 7, 42, 2024] {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut game = GameManager::new();
        let mut adapter = InputAdapter::default();
        let mut moves_played = 0usize;
        let mut king_taken = None;

        for _ in 0..STEPS_PER_SEED {
            let turn_before = game.current_color();
            adapter.push_click(next_click(&mut rng, &game));
            match adapter.step(&mut game) {
                Some(TurnEvent::Moved(_)) => {
                    moves_played += 1;
                    assert_ne!(game.current_color(), turn_before);
                }
                Some(TurnEvent::MoveRejected { .. }) => {
                    assert_eq!(game.current_color(), turn_before);
                    assert!(!game.current_player().has_selection());
                }
                _ => assert_eq!(game.current_color(), turn_before),
            }
            check_invariants(&game);

            // Play goes on after a king falls, and the first capture sticks.
            match king_taken {
                None => king_taken = game.outcome(),
                Some(outcome) => assert_eq!(game.outcome(), Some(outcome)),
            }
        }

        assert!(moves_played > 0, "seed {seed} never moved");
    }
}
