//! Seeded random playouts checking invariants that must hold in every
//! reachable position.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use chess_rules::{Color, Game, MoveError, in_check, is_legal, pseudo_moves};

const SEEDS: [u64; 6] = [1, 7, 42, 1234, 98_765, 0xC0FFEE];
const MAX_PLIES: usize = 160;

fn play_out(seed: u64, mut check: impl FnMut(&Game)) -> Game {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut game = Game::new();
    check(&game);
    for _ in 0..MAX_PLIES {
        let moves = game.legal_moves();
        let Some(&mv) = moves.choose(&mut rng) else {
            break;
        };
        game.apply_move(mv).expect("move from the legal set must apply");
        check(&game);
    }
    game
}

#[test]
fn piece_count_tracks_captures() {
    for seed in SEEDS {
        let mut last = 32;
        play_out(seed, |game| {
            let count = game.board().piece_count();
            assert!(count <= last, "seed {seed}: piece count grew");
            last = count;
            let captures = game.history().iter().filter(|p| p.captured.is_some()).count();
            assert_eq!(count, 32 - captures, "seed {seed}");
        });
    }
}

#[test]
fn legal_set_is_stable_between_calls() {
    for seed in SEEDS {
        play_out(seed, |game| {
            assert_eq!(game.legal_moves(), game.legal_moves(), "seed {seed}");
        });
    }
}

#[test]
fn legal_moves_never_expose_the_king() {
    for seed in SEEDS {
        play_out(seed, |game| {
            let side = game.side_to_move();
            let legal = game.legal_moves();
            for mv in pseudo_moves(game.board(), side) {
                let mut after = game.board().clone();
                after.relocate(mv);
                let safe = !in_check(&after, side);
                assert_eq!(legal.contains(&mv), safe, "seed {seed}: {mv}");
                assert_eq!(is_legal(game.board(), side, mv), safe);
            }
        });
    }
}

#[test]
fn status_matches_position() {
    for seed in SEEDS {
        let game = play_out(seed, |game| {
            let side = game.side_to_move();
            let checked = in_check(game.board(), side);
            let empty = game.legal_moves().is_empty();
            assert_eq!(game.is_in_check(), checked, "seed {seed}");
            assert_eq!(game.is_checkmate(), checked && empty, "seed {seed}");
            assert_eq!(game.is_stalemate(), !checked && empty, "seed {seed}");
        });
        if game.is_game_over() {
            let mut after = game.clone();
            let status = after.status();
            // any pseudo-legal shape is refused once the game has ended
            if let Some(&mv) = pseudo_moves(after.board(), after.side_to_move()).first() {
                assert_eq!(after.apply_move(mv), Err(MoveError::GameOver(status)));
            }
            assert_eq!(after.history().len(), game.history().len());
        }
    }
}

#[test]
fn history_alternates_colors() {
    for seed in SEEDS {
        let game = play_out(seed, |_| {});
        for (i, played) in game.history().iter().enumerate() {
            let expected = if i % 2 == 0 {
                Color::White
            } else {
                Color::Black
            };
            assert_eq!(played.piece.color, expected, "seed {seed}, ply {i}");
        }
    }
}
