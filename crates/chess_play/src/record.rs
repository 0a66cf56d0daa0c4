//! Game records saved as JSON.

use anyhow::{Context, Result};
use chess_rules::{Color, Game, Move, Piece, Status};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A finished or in-progress game, as written to disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub moves: Vec<RecordedMove>,
    pub status: Status,
    pub winner: Option<Color>,
    /// Board placement after the last move
    pub final_position: String,
}

/// A single entry of the move list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordedMove {
    /// Coordinate notation, e.g. `e2e4`
    pub notation: String,
    pub piece: Piece,
    pub captured: Option<Piece>,
}

impl GameRecord {
    pub fn from_game(game: &Game) -> Self {
        Self {
            moves: game
                .history()
                .iter()
                .map(|played| RecordedMove {
                    notation: played.mv.to_string(),
                    piece: played.piece,
                    captured: played.captured,
                })
                .collect(),
            status: game.status(),
            winner: game.winner(),
            final_position: game.board().placement(),
        }
    }

    /// Save record to JSON file
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize game record")?;
        std::fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))
    }

    /// Load record from JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Replay the recorded moves on a fresh game.
    pub fn replay(&self) -> Result<Game> {
        let mut game = Game::new();
        for (ply, entry) in self.moves.iter().enumerate() {
            let mv = entry
                .notation
                .parse::<Move>()
                .with_context(|| format!("ply {}", ply + 1))?;
            game.apply_move(mv)
                .with_context(|| format!("ply {}: {}", ply + 1, entry.notation))?;
        }
        Ok(game)
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod record_tests;
