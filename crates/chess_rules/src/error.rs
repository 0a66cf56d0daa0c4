//! Error types for the rules engine.
//!
//! Every failure the engine reports is local and recoverable: a rejected move
//! leaves the game untouched, a bad text input is reported back to the caller.

use thiserror::Error;

use crate::game::Status;
use crate::types::{Color, Move, Square};

/// Why `Game::apply_move` refused a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("coordinate ({row}, {col}) is off the board")]
    OutOfRange { row: usize, col: usize },

    #[error("no piece of the side to move on {0}")]
    NotYourPiece(Square),

    #[error("{0} is not a legal move")]
    Illegal(Move),

    #[error("the game is over ({0:?})")]
    GameOver(Status),
}

/// Failure to read a square, a move or a board placement from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("invalid square {0:?}")]
    Square(String),

    #[error("invalid move {0:?}")]
    Move(String),

    #[error("invalid placement: {0}")]
    Placement(String),
}

/// A custom starting position the state machine cannot play from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("{0} has no king")]
    MissingKing(Color),

    #[error("{0} has {1} kings")]
    ExtraKings(Color, usize),

    /// The side that just moved would have left its own king attacked.
    #[error("{0} is in check with the other side to move")]
    OpponentInCheck(Color),
}
