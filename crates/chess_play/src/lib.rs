//! Terminal front end for `chess_rules`.
//!
//! This crate provides:
//! - Click-style move entry with selection and destination highlighting
//! - Text rendering of the board and the game status
//! - An interactive session over any reader and writer
//! - Seeded random self-play
//! - JSON game records and TOML configuration
//!
//! # Usage
//!
//! ```bash
//! # Play against yourself in the terminal
//! cargo run -p chess_play -- play
//!
//! # Let both sides move at random
//! cargo run -p chess_play -- selfplay --seed 7 --games 10
//! ```

pub mod config;
mod controller;
mod record;
mod render;
mod selfplay;
mod session;

pub use config::{DisplayConfig, LogConfig, PlayConfig, SelfPlayConfig};
pub use controller::*;
pub use record::*;
pub use render::*;
pub use selfplay::*;
pub use session::*;
