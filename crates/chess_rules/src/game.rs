//! Game state machine.
//!
//! A [`Game`] owns the authoritative board, the side to move, the move
//! history and the status. The only ways to change it are
//! [`Game::apply_move`] (and its wrappers) and [`Game::new_game`]; status is
//! recomputed from scratch after every applied move.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    attacks::in_check,
    board::Board,
    error::{MoveError, SetupError},
    legal::{is_legal, legal_moves},
    types::*,
};

/// Where the game stands for the side to move.
///
/// `Checkmate` and `Stalemate` are terminal. Check on a live game is carried
/// as a flag on `InProgress` rather than as a separate state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    InProgress { in_check: bool },
    Checkmate,
    Stalemate,
}

impl Status {
    pub fn is_terminal(self) -> bool {
        matches!(self, Status::Checkmate | Status::Stalemate)
    }
}

/// One entry of the move history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayedMove {
    pub mv: Move,
    pub piece: Piece,
    /// Occupant overwritten on the destination, if any.
    pub captured: Option<Piece>,
}

#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    side_to_move: Color,
    history: Vec<PlayedMove>,
    status: Status,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// A fresh game from the standard opening position, White to move.
    pub fn new() -> Self {
        Game {
            board: Board::startpos(),
            side_to_move: Color::White,
            history: Vec::new(),
            status: Status::InProgress { in_check: false },
        }
    }

    /// Start from an arbitrary position. Each side must have exactly one
    /// king, and the side not to move must not be in check. The status is
    /// computed immediately, so the game may already be over.
    pub fn from_position(board: Board, side_to_move: Color) -> Result<Self, SetupError> {
        for c in [Color::White, Color::Black] {
            let kings = board
                .pieces_of(c)
                .filter(|(_, pc)| pc.kind == PieceKind::King)
                .count();
            match kings {
                0 => return Err(SetupError::MissingKing(c)),
                1 => {}
                n => return Err(SetupError::ExtraKings(c, n)),
            }
        }
        if in_check(&board, side_to_move.other()) {
            return Err(SetupError::OpponentInCheck(side_to_move.other()));
        }
        let mut game = Game {
            board,
            side_to_move,
            history: Vec::new(),
            status: Status::InProgress { in_check: false },
        };
        game.status = game.classify();
        Ok(game)
    }

    /// Throw the current game away and start over.
    pub fn new_game(&mut self) {
        *self = Game::new();
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Occupant at `(row, col)`; `None` for empty or off-board coordinates.
    pub fn occupant_at(&self, row: usize, col: usize) -> Option<Piece> {
        Square::new(row, col).and_then(|sq| self.board.occupant(sq))
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn history(&self) -> &[PlayedMove] {
        &self.history
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_game_over(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn is_checkmate(&self) -> bool {
        self.status == Status::Checkmate
    }

    pub fn is_stalemate(&self) -> bool {
        self.status == Status::Stalemate
    }

    /// True while the side to move's king is attacked, including at checkmate.
    pub fn is_in_check(&self) -> bool {
        matches!(
            self.status,
            Status::InProgress { in_check: true } | Status::Checkmate
        )
    }

    /// The side that delivered mate, once the game ended in checkmate.
    pub fn winner(&self) -> Option<Color> {
        match self.status {
            Status::Checkmate => Some(self.side_to_move.other()),
            _ => None,
        }
    }

    /// Legal moves for the side to move, recomputed on every call.
    pub fn legal_moves(&self) -> Vec<Move> {
        legal_moves(&self.board, self.side_to_move)
    }

    /// Legal moves starting on `from`, for highlighting a selected piece.
    pub fn legal_moves_from(&self, from: Square) -> Vec<Move> {
        match self.board.occupant(from) {
            Some(pc) if pc.color == self.side_to_move => {}
            _ => return Vec::new(),
        }
        let mut out = crate::movegen::piece_moves(&self.board, from);
        out.retain(|&mv| crate::legal::king_safe_after(&self.board, self.side_to_move, mv));
        out
    }

    /// Apply `mv` for the side to move.
    ///
    /// On error nothing changes: board, side to move, history and status are
    /// exactly as before the call.
    pub fn apply_move(&mut self, mv: Move) -> Result<PlayedMove, MoveError> {
        if self.status.is_terminal() {
            debug!(%mv, status = ?self.status, "move rejected: game over");
            return Err(MoveError::GameOver(self.status));
        }
        let piece = match self.board.occupant(mv.from) {
            Some(pc) if pc.color == self.side_to_move => pc,
            _ => {
                debug!(%mv, side = ?self.side_to_move, "move rejected: no piece to move");
                return Err(MoveError::NotYourPiece(mv.from));
            }
        };
        if !is_legal(&self.board, self.side_to_move, mv) {
            debug!(%mv, "move rejected: illegal");
            return Err(MoveError::Illegal(mv));
        }

        let captured = self.board.relocate(mv);
        let played = PlayedMove {
            mv,
            piece,
            captured,
        };
        self.side_to_move = self.side_to_move.other();
        self.history.push(played);
        self.status = self.classify();

        debug!(%mv, ?captured, status = ?self.status, "move applied");
        match self.status {
            Status::Checkmate => info!(winner = %self.side_to_move.other(), "checkmate"),
            Status::Stalemate => info!("stalemate"),
            Status::InProgress { .. } => {}
        }
        Ok(played)
    }

    /// Apply a move given as raw `(row, col)` coordinates.
    pub fn apply_coords(
        &mut self,
        origin: (usize, usize),
        destination: (usize, usize),
    ) -> Result<PlayedMove, MoveError> {
        let square = |(row, col): (usize, usize)| {
            Square::new(row, col).ok_or(MoveError::OutOfRange { row, col })
        };
        let mv = Move::new(square(origin)?, square(destination)?);
        self.apply_move(mv)
    }

    /// Boolean form of [`Game::apply_coords`] for callers that only need to
    /// know whether the move went through.
    pub fn try_move(&mut self, origin: (usize, usize), destination: (usize, usize)) -> bool {
        self.apply_coords(origin, destination).is_ok()
    }

    /// Status of the current position, derived from nothing but the board and
    /// the side to move.
    fn classify(&self) -> Status {
        let checked = in_check(&self.board, self.side_to_move);
        let stuck = legal_moves(&self.board, self.side_to_move).is_empty();
        match (checked, stuck) {
            (true, true) => Status::Checkmate,
            (false, true) => Status::Stalemate,
            (in_check, false) => Status::InProgress { in_check },
        }
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
