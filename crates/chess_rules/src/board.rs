use crate::{error::ParseError, types::*};

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// The 8x8 grid of occupants. Pure storage: it knows nothing about rules.
///
/// Cells are indexed `row * 8 + col`. Cloning the board is how scratch copies
/// for legality checks are made.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Option<Piece>; 64],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub fn empty() -> Self {
        Board { cells: [None; 64] }
    }

    /// The standard opening layout: Black on rows 0-1, White on rows 6-7.
    pub fn startpos() -> Self {
        let mut b = Board::empty();
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            b.cells[col] = Some(Piece::new(Color::Black, kind));
            b.cells[8 + col] = Some(Piece::new(Color::Black, PieceKind::Pawn));
            b.cells[48 + col] = Some(Piece::new(Color::White, PieceKind::Pawn));
            b.cells[56 + col] = Some(Piece::new(Color::White, kind));
        }
        b
    }

    /// Parse the board field of a FEN string, e.g.
    /// `"rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"`.
    ///
    /// FEN lists rank 8 first, which is row 0 here, so ranks map onto rows
    /// in order.
    pub fn from_placement(text: &str) -> Result<Self, ParseError> {
        let err = |msg: String| ParseError::Placement(msg);

        let rows: Vec<&str> = text.trim().split('/').collect();
        if rows.len() != 8 {
            return Err(err(format!("expected 8 rows, found {}", rows.len())));
        }

        let mut board = Board::empty();
        for (row, row_text) in rows.iter().enumerate() {
            let mut col = 0usize;
            for ch in row_text.chars() {
                if let Some(d) = ch.to_digit(10) {
                    if !(1..=8).contains(&d) {
                        return Err(err(format!("bad run length {d} in row {row}")));
                    }
                    col += d as usize;
                } else {
                    let piece = Piece::from_letter(ch)
                        .ok_or_else(|| err(format!("unknown piece letter {ch:?}")))?;
                    let sq = Square::new(row, col)
                        .ok_or_else(|| err(format!("too many files in row {row}")))?;
                    board.place(sq, Some(piece));
                    col += 1;
                }
                if col > 8 {
                    return Err(err(format!("too many files in row {row}")));
                }
            }
            if col != 8 {
                return Err(err(format!("row {row} covers {col} files, expected 8")));
            }
        }
        Ok(board)
    }

    /// Inverse of [`Board::from_placement`].
    pub fn placement(&self) -> String {
        let mut out = String::with_capacity(72);
        for row in 0..8 {
            if row > 0 {
                out.push('/');
            }
            let mut gap = 0;
            for col in 0..8 {
                match self.cells[row * 8 + col] {
                    Some(pc) => {
                        if gap > 0 {
                            out.push_str(&gap.to_string());
                            gap = 0;
                        }
                        out.push(pc.letter());
                    }
                    None => gap += 1,
                }
            }
            if gap > 0 {
                out.push_str(&gap.to_string());
            }
        }
        out
    }

    pub fn occupant(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.index()]
    }

    pub fn place(&mut self, sq: Square, pc: Option<Piece>) {
        self.cells[sq.index()] = pc;
    }

    /// Move whatever stands on `mv.from` onto `mv.to`, clearing the origin.
    /// A capture is just the overwrite; the displaced occupant is returned.
    pub fn relocate(&mut self, mv: Move) -> Option<Piece> {
        let moving = self.cells[mv.from.index()].take();
        std::mem::replace(&mut self.cells[mv.to.index()], moving)
    }

    pub fn king_square(&self, c: Color) -> Option<Square> {
        self.pieces()
            .find(|(_, pc)| pc.color == c && pc.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    /// Occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(i, cell)| Some((Square::from_index(i)?, (*cell)?)))
    }

    pub fn pieces_of(&self, c: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, pc)| pc.color == c)
    }

    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..8 {
            for col in 0..8 {
                let ch = self.cells[row * 8 + col].map_or('.', Piece::letter);
                if col > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
