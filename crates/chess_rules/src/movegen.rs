//! Pseudo-legal move generation.
//!
//! Moves produced here obey piece movement rules only; whether they leave the
//! mover's king attacked is decided by [`crate::legal`]. Enumeration order is
//! fixed (row-major over origins, then the direction tables below), so two
//! calls on the same board return identical lists.

use crate::{board::Board, types::*};

const ORTHOGONAL: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const DIAGONAL: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const ALL_DIRECTIONS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];
const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

type Generator = fn(&Board, Square, Color, &mut Vec<Move>);

/// Movement rule per kind, indexed by [`PieceKind::idx`].
const GENERATORS: [Generator; 6] = [
    gen_pawn, gen_knight, gen_bishop, gen_rook, gen_queen, gen_king,
];

pub fn generator(kind: PieceKind) -> Generator {
    GENERATORS[kind.idx()]
}

/// Pseudo-legal moves of the occupant on `from`. Empty if the square is empty.
pub fn piece_moves(board: &Board, from: Square) -> Vec<Move> {
    let mut out = Vec::with_capacity(28);
    piece_moves_into(board, from, &mut out);
    out
}

/// Append the pseudo-legal moves of the occupant on `from` to `out`.
pub fn piece_moves_into(board: &Board, from: Square, out: &mut Vec<Move>) {
    if let Some(pc) = board.occupant(from) {
        generator(pc.kind)(board, from, pc.color, out);
    }
}

/// All pseudo-legal moves for `side`.
pub fn pseudo_moves(board: &Board, side: Color) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    pseudo_moves_into(board, side, &mut out);
    out
}

/// All pseudo-legal moves for `side`, into a reusable buffer.
pub fn pseudo_moves_into(board: &Board, side: Color, out: &mut Vec<Move>) {
    out.clear();
    for (sq, pc) in board.pieces_of(side) {
        generator(pc.kind)(board, sq, pc.color, out);
    }
}

fn gen_pawn(board: &Board, from: Square, c: Color, out: &mut Vec<Move>) {
    let dir = c.forward();

    // forward 1, then 2 from the starting row; both need empty squares
    if let Some(one) = from.offset(dir, 0)
        && board.occupant(one).is_none()
    {
        out.push(Move::new(from, one));
        if from.row() == c.pawn_row() as usize
            && let Some(two) = from.offset(2 * dir, 0)
            && board.occupant(two).is_none()
        {
            out.push(Move::new(from, two));
        }
    }

    // diagonal captures, enemy occupant required
    for dc in [-1, 1] {
        if let Some(to) = from.offset(dir, dc)
            && let Some(target) = board.occupant(to)
            && target.color != c
        {
            out.push(Move::new(from, to));
        }
    }
}

fn gen_knight(board: &Board, from: Square, c: Color, out: &mut Vec<Move>) {
    gen_steps(board, from, c, out, &KNIGHT_JUMPS);
}

fn gen_bishop(board: &Board, from: Square, c: Color, out: &mut Vec<Move>) {
    gen_slider(board, from, c, out, &DIAGONAL);
}

fn gen_rook(board: &Board, from: Square, c: Color, out: &mut Vec<Move>) {
    gen_slider(board, from, c, out, &ORTHOGONAL);
}

fn gen_queen(board: &Board, from: Square, c: Color, out: &mut Vec<Move>) {
    gen_slider(board, from, c, out, &ALL_DIRECTIONS);
}

fn gen_king(board: &Board, from: Square, c: Color, out: &mut Vec<Move>) {
    gen_steps(board, from, c, out, &ALL_DIRECTIONS);
}

/// Single-step movers: the destination may be empty or enemy-held.
fn gen_steps(board: &Board, from: Square, c: Color, out: &mut Vec<Move>, deltas: &[(i8, i8)]) {
    for &(dr, dc) in deltas {
        if let Some(to) = from.offset(dr, dc) {
            match board.occupant(to) {
                None => out.push(Move::new(from, to)),
                Some(pc) if pc.color != c => out.push(Move::new(from, to)),
                _ => {}
            }
        }
    }
}

fn gen_slider(board: &Board, from: Square, c: Color, out: &mut Vec<Move>, dirs: &[(i8, i8)]) {
    for &(dr, dc) in dirs {
        let mut cur = from;
        while let Some(to) = cur.offset(dr, dc) {
            match board.occupant(to) {
                None => out.push(Move::new(from, to)),
                Some(pc) if pc.color != c => {
                    out.push(Move::new(from, to));
                    break;
                }
                _ => break,
            }
            cur = to;
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
