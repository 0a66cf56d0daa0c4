//! Coordinate notation: squares as `a1`..`h8`, moves as `e2e4`.
//!
//! Column 0 is file `a`; row 7 is rank `1`, so White's back rank reads as
//! rank 1 the way players expect.

use std::fmt;
use std::str::FromStr;

use crate::{board::Board, error::ParseError, legal::legal_moves, types::*};

pub fn square_name(sq: Square) -> String {
    let f = (b'a' + sq.col() as u8) as char;
    let r = (b'8' - sq.row() as u8) as char;
    format!("{f}{r}")
}

pub fn parse_square(text: &str) -> Option<Square> {
    let b = text.as_bytes();
    if b.len() != 2 {
        return None;
    }
    let (f, r) = (b[0].to_ascii_lowercase(), b[1]);
    if !(b'a'..=b'h').contains(&f) || !(b'1'..=b'8').contains(&r) {
        return None;
    }
    Square::new((b'8' - r) as usize, (f - b'a') as usize)
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&square_name(*self))
    }
}

impl FromStr for Square {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_square(s.trim()).ok_or_else(|| ParseError::Square(s.to_string()))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

impl FromStr for Move {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let txt = s.trim();
        let err = || ParseError::Move(s.to_string());
        if txt.len() != 4 || !txt.is_ascii() {
            return Err(err());
        }
        let from = parse_square(&txt[0..2]).ok_or_else(err)?;
        let to = parse_square(&txt[2..4]).ok_or_else(err)?;
        if from == to {
            return Err(err());
        }
        Ok(Move::new(from, to))
    }
}

/// Read `text` as a move and return it only if it is legal for `side`.
pub fn parse_move(board: &Board, side: Color, text: &str) -> Option<Move> {
    let mv: Move = text.parse().ok()?;
    legal_moves(board, side).into_iter().find(|&m| m == mv)
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;
