//! Legality filter.
//!
//! Reduces pseudo-legal moves to legal ones by playing each candidate on a
//! scratch copy of the board and rejecting it if the mover's king is then
//! attacked. The scratch board is a local clone and is dropped after each
//! test, so the caller's board is never touched.

use tracing::trace;

use crate::{attacks::is_attacked, board::Board, movegen::pseudo_moves_into, types::*};

/// Generate all legal moves for `side`, returning a freshly allocated vector.
pub fn legal_moves(board: &Board, side: Color) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    legal_moves_into(board, side, &mut out);
    out
}

/// Generate all legal moves for `side` into the provided buffer.
pub fn legal_moves_into(board: &Board, side: Color, out: &mut Vec<Move>) {
    pseudo_moves_into(board, side, out);
    out.retain(|&mv| king_safe_after(board, side, mv));
    trace!(?side, count = out.len(), "legal moves generated");
}

/// Whether `mv` is in the legal set of `side` on `board`.
pub fn is_legal(board: &Board, side: Color, mv: Move) -> bool {
    match board.occupant(mv.from) {
        Some(pc) if pc.color == side => {}
        _ => return false,
    }
    let mut candidates = Vec::with_capacity(28);
    crate::movegen::piece_moves_into(board, mv.from, &mut candidates);
    candidates.contains(&mv) && king_safe_after(board, side, mv)
}

/// Play `mv` on a scratch board and test the king of `side`.
///
/// A king missing from the scratch board counts as unsafe.
pub fn king_safe_after(board: &Board, side: Color, mv: Move) -> bool {
    let mut scratch = board.clone();
    scratch.relocate(mv);
    match scratch.king_square(side) {
        Some(ksq) => !is_attacked(&scratch, ksq, side.other()),
        None => false,
    }
}

#[cfg(test)]
#[path = "legal_tests.rs"]
mod legal_tests;
