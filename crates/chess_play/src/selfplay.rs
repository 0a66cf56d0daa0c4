//! Random self-play.
//!
//! Both sides pick uniformly among their legal moves until the game ends or
//! the ply cap is hit. This exercises the rules engine; it does not try to
//! play well.

use chess_rules::{Color, Game, Status};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, info};

use crate::config::SelfPlayConfig;

/// How one self-play game ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelfPlayOutcome {
    pub plies: usize,
    pub status: Status,
    pub winner: Option<Color>,
    pub captures: usize,
}

impl SelfPlayOutcome {
    /// `1-0`, `0-1`, `1/2` for stalemate, `*` if the ply cap stopped the game.
    pub fn result_tag(&self) -> &'static str {
        match (self.status, self.winner) {
            (Status::Checkmate, Some(Color::White)) => "1-0",
            (Status::Checkmate, Some(Color::Black)) => "0-1",
            (Status::Stalemate, _) => "1/2",
            _ => "*",
        }
    }
}

/// Play one game with random legal moves.
pub fn play_random_game<R: Rng + ?Sized>(rng: &mut R, max_plies: u32) -> (Game, SelfPlayOutcome) {
    let mut game = Game::new();
    for _ in 0..max_plies {
        let moves = game.legal_moves();
        let Some(&mv) = moves.choose(rng) else {
            break;
        };
        if let Err(e) = game.apply_move(mv) {
            // the move came from the legal set, so this would be an engine bug
            debug!(%mv, error = %e, "self-play move rejected");
            break;
        }
    }
    let outcome = SelfPlayOutcome {
        plies: game.history().len(),
        status: game.status(),
        winner: game.winner(),
        captures: game
            .history()
            .iter()
            .filter(|p| p.captured.is_some())
            .count(),
    };
    info!(
        plies = outcome.plies,
        result = outcome.result_tag(),
        "self-play game finished"
    );
    (game, outcome)
}

/// Summary of a self-play run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelfPlaySummary {
    pub white_wins: u32,
    pub black_wins: u32,
    pub stalemates: u32,
    pub unfinished: u32,
}

impl SelfPlaySummary {
    pub fn record(&mut self, outcome: &SelfPlayOutcome) {
        match outcome.result_tag() {
            "1-0" => self.white_wins += 1,
            "0-1" => self.black_wins += 1,
            "1/2" => self.stalemates += 1,
            _ => self.unfinished += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.white_wins + self.black_wins + self.stalemates + self.unfinished
    }
}

/// Run `config.games` games on one generator and collect the results.
pub fn run_selfplay<R: Rng + ?Sized>(
    rng: &mut R,
    config: &SelfPlayConfig,
) -> (Vec<(Game, SelfPlayOutcome)>, SelfPlaySummary) {
    let mut games = Vec::with_capacity(config.games as usize);
    let mut summary = SelfPlaySummary::default();
    for _ in 0..config.games {
        let (game, outcome) = play_random_game(rng, config.max_moves);
        summary.record(&outcome);
        games.push((game, outcome));
    }
    (games, summary)
}

#[cfg(test)]
#[path = "selfplay_tests.rs"]
mod selfplay_tests;
