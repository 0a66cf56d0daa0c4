//! Front-end configuration, read from a TOML file.
//!
//! ```toml
//! [display]
//! unicode = true
//! coordinates = true
//! highlight = true
//!
//! [log]
//! level = "warn"
//!
//! [selfplay]
//! games = 1
//! max_moves = 300
//! seed = 42
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File picked up from the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_PATH: &str = "chess_play.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlayConfig {
    pub display: DisplayConfig,
    pub log: LogConfig,
    pub selfplay: SelfPlayConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    /// Unicode chess glyphs instead of placement letters
    pub unicode: bool,
    /// File and rank labels around the board
    pub coordinates: bool,
    /// Mark the legal destinations of the selected piece
    pub highlight: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            unicode: true,
            coordinates: true,
            highlight: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    /// `tracing` filter directive; `RUST_LOG` takes precedence
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SelfPlayConfig {
    pub games: u32,
    /// Plies per game before giving up on a result
    pub max_moves: u32,
    /// Fixed seed for reproducible games; random when absent
    pub seed: Option<u64>,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            games: 1,
            max_moves: 300,
            seed: None,
        }
    }
}

impl PlayConfig {
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("invalid configuration")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("in {}", path.display()))
    }

    /// Load `explicit` if given (it must exist), else the default file if
    /// present, else built-in defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let path = Path::new(DEFAULT_CONFIG_PATH);
                if path.exists() {
                    Self::load(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
