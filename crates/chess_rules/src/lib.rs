//! Rules engine for two-player chess on an 8x8 board.
//!
//! The rule set is deliberately reduced: no castling, no en-passant, and a
//! pawn reaching the last rank stays a pawn. Within that rule set the engine
//! generates moves, filters out those that leave the mover's king attacked,
//! and classifies positions as in progress, check, checkmate or stalemate.
//!
//! ```
//! use chess_rules::Game;
//!
//! let mut game = Game::new();
//! assert!(game.try_move((6, 5), (5, 5)));
//! assert!(game.try_move((1, 4), (3, 4)));
//! assert!(game.try_move((6, 6), (4, 6)));
//! assert!(game.try_move((0, 3), (4, 7)));
//! assert!(game.is_checkmate());
//! ```

pub mod attacks;
pub mod board;
pub mod error;
pub mod game;
pub mod legal;
pub mod movegen;
pub mod notation;
pub mod perft;
pub mod types;

pub use attacks::{in_check, is_attacked};
pub use board::Board;
pub use error::{MoveError, ParseError, SetupError};
pub use game::{Game, PlayedMove, Status};
pub use legal::{is_legal, legal_moves, legal_moves_into};
pub use movegen::{piece_moves, pseudo_moves, pseudo_moves_into};
pub use notation::{parse_move, parse_square, square_name};
pub use perft::perft;
pub use types::*;
