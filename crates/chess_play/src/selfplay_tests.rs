use super::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn test_same_seed_same_game() {
    let (a, _) = play_random_game(&mut StdRng::seed_from_u64(11), 120);
    let (b, _) = play_random_game(&mut StdRng::seed_from_u64(11), 120);
    assert_eq!(a.history(), b.history());
    assert_eq!(a.board(), b.board());
}

#[test]
fn test_games_stop_at_cap_or_end() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..5 {
        let (game, outcome) = play_random_game(&mut rng, 60);
        assert!(outcome.plies <= 60);
        assert_eq!(outcome.plies, game.history().len());
        if outcome.plies < 60 {
            assert!(game.is_game_over());
        }
        assert_eq!(32 - game.board().piece_count(), outcome.captures);
    }
}

#[test]
fn test_zero_cap_plays_nothing() {
    let (game, outcome) = play_random_game(&mut StdRng::seed_from_u64(0), 0);
    assert!(game.history().is_empty());
    assert_eq!(outcome.result_tag(), "*");
}

#[test]
fn test_summary_counts_every_game() {
    let config = SelfPlayConfig {
        games: 4,
        max_moves: 80,
        seed: None,
    };
    let (games, summary) = run_selfplay(&mut StdRng::seed_from_u64(5), &config);
    assert_eq!(games.len(), 4);
    assert_eq!(summary.total(), 4);
}

#[test]
fn test_result_tags() {
    let outcome = |status, winner| SelfPlayOutcome {
        plies: 10,
        status,
        winner,
        captures: 0,
    };
    assert_eq!(outcome(Status::Checkmate, Some(Color::White)).result_tag(), "1-0");
    assert_eq!(outcome(Status::Checkmate, Some(Color::Black)).result_tag(), "0-1");
    assert_eq!(outcome(Status::Stalemate, None).result_tag(), "1/2");
    assert_eq!(
        outcome(Status::InProgress { in_check: true }, None).result_tag(),
        "*"
    );
}
