//! Click-driven move entry.
//!
//! Mirrors what a board widget does with pointer input: the first click on a
//! piece of the side to move selects it, a click on one of its legal
//! destinations plays the move, any other click reselects or clears.

use chess_rules::{Game, Move, MoveError, PlayedMove, Square};
use tracing::debug;

/// What a click did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Click {
    /// A piece of the side to move is now selected.
    Selected(Square),
    Moved(PlayedMove),
    /// The engine refused the move; the selection is dropped.
    Rejected(MoveError),
    Cleared,
    /// Off-board, empty or enemy square with nothing selected.
    Ignored,
    GameOver,
}

#[derive(Debug, Clone, Default)]
pub struct Controller {
    game: Game,
    selected: Option<Square>,
    targets: Vec<Move>,
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_game(game: Game) -> Self {
        Self {
            game,
            selected: None,
            targets: Vec::new(),
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    /// Legal moves of the selected piece.
    pub fn targets(&self) -> &[Move] {
        &self.targets
    }

    pub fn restart(&mut self) {
        self.game.new_game();
        self.clear();
    }

    pub fn click(&mut self, row: usize, col: usize) -> Click {
        if self.game.is_game_over() {
            return Click::GameOver;
        }
        let Some(sq) = Square::new(row, col) else {
            return Click::Ignored;
        };

        if let Some(from) = self.selected {
            let mv = Move::new(from, sq);
            if self.targets.contains(&mv) {
                self.clear();
                return match self.game.apply_move(mv) {
                    Ok(played) => Click::Moved(played),
                    Err(e) => Click::Rejected(e),
                };
            }
            if self.select(sq) {
                return Click::Selected(sq);
            }
            self.clear();
            return Click::Cleared;
        }

        if self.select(sq) {
            Click::Selected(sq)
        } else {
            Click::Ignored
        }
    }

    /// Play a move typed in full, bypassing selection.
    pub fn submit(&mut self, mv: Move) -> Result<PlayedMove, MoveError> {
        self.clear();
        self.game.apply_move(mv)
    }

    fn select(&mut self, sq: Square) -> bool {
        let own = self
            .game
            .board()
            .occupant(sq)
            .is_some_and(|pc| pc.color == self.game.side_to_move());
        if !own {
            return false;
        }
        self.selected = Some(sq);
        self.targets = self.game.legal_moves_from(sq);
        debug!(square = %sq, targets = self.targets.len(), "piece selected");
        true
    }

    fn clear(&mut self) {
        self.selected = None;
        self.targets.clear();
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod controller_tests;
