//! Attack detection.
//!
//! A square is attacked by a side when any pseudo-legal move of that side
//! lands on it. Nothing is cached: each query regenerates the attacker's
//! moves from the board it is given.

use crate::{board::Board, movegen::piece_moves_into, types::*};

/// Whether any occupant of `by` has a pseudo-legal move onto `target`.
///
/// Pawn pushes count as "attacks" here because they are part of the move set;
/// a push can never land on an occupied king square, so king safety is
/// unaffected.
pub fn is_attacked(board: &Board, target: Square, by: Color) -> bool {
    let mut buf = Vec::with_capacity(28);
    for (sq, _) in board.pieces_of(by) {
        buf.clear();
        piece_moves_into(board, sq, &mut buf);
        if buf.iter().any(|mv| mv.to == target) {
            return true;
        }
    }
    false
}

/// Whether `c`'s king stands on an attacked square. A board without that
/// king is reported as not in check.
pub fn in_check(board: &Board, c: Color) -> bool {
    match board.king_square(c) {
        Some(ksq) => is_attacked(board, ksq, c.other()),
        None => false,
    }
}

#[cfg(test)]
#[path = "attacks_tests.rs"]
mod attacks_tests;
