//! Text rendering of the board and of the game status.

use chess_rules::{Color, Game, Piece, PieceKind, Status};

use crate::config::DisplayConfig;
use crate::controller::Controller;

/// Unicode chess glyph, U+2654 (white king) through U+265F (black pawn).
pub fn glyph(piece: Piece) -> char {
    let base: u32 = match piece.color {
        Color::White => 0x2654,
        Color::Black => 0x265A,
    };
    let offset = match piece.kind {
        PieceKind::King => 0,
        PieceKind::Queen => 1,
        PieceKind::Rook => 2,
        PieceKind::Bishop => 3,
        PieceKind::Knight => 4,
        PieceKind::Pawn => 5,
    };
    char::from_u32(base + offset).unwrap_or_else(|| piece.letter())
}

fn symbol(piece: Piece, display: &DisplayConfig) -> char {
    if display.unicode {
        glyph(piece)
    } else {
        piece.letter()
    }
}

/// Draw the board, row 0 (rank 8) at the top.
///
/// The selected square is bracketed, legal destinations of the selection are
/// shown as `*` (empty) or parenthesised (capture) when highlighting is on.
pub fn render_board(ctl: &Controller, display: &DisplayConfig) -> String {
    let game = ctl.game();
    let mut out = String::new();
    for row in 0..8 {
        if display.coordinates {
            out.push_str(&format!("{} ", 8 - row));
        }
        for col in 0..8 {
            let occupant = game.occupant_at(row, col);
            let here = |sq: chess_rules::Square| sq.row() == row && sq.col() == col;
            let selected = ctl.selected().is_some_and(here);
            let target = display.highlight && ctl.targets().iter().any(|m| here(m.to));

            let ch = occupant.map_or('.', |pc| symbol(pc, display));
            let cell = match (selected, target, occupant) {
                (true, _, _) => format!("[{ch}]"),
                (false, true, Some(_)) => format!("({ch})"),
                (false, true, None) => " * ".to_string(),
                _ => format!(" {ch} "),
            };
            out.push_str(&cell);
        }
        out.push('\n');
    }
    if display.coordinates {
        out.push_str("  ");
        for file in 'a'..='h' {
            out.push_str(&format!(" {file} "));
        }
        out.push('\n');
    }
    out
}

/// One-line status: whose turn, check, or the final result.
pub fn status_line(game: &Game) -> String {
    match game.status() {
        Status::Checkmate => match game.winner() {
            Some(winner) => format!("Checkmate! {winner} wins."),
            None => "Checkmate!".to_string(),
        },
        Status::Stalemate => "Stalemate! Draw.".to_string(),
        Status::InProgress { in_check } => {
            let mut line = format!("{} to move.", game.side_to_move());
            if in_check {
                line.push_str(" Check!");
            }
            line
        }
    }
}

/// End-of-game notice, `None` while the game is still going.
pub fn game_over_message(game: &Game) -> Option<String> {
    match game.status() {
        Status::Checkmate => Some(format!(
            "Game over. Checkmate! {} wins.",
            game.winner().unwrap_or(game.side_to_move().other())
        )),
        Status::Stalemate => Some("Game over. Stalemate! It's a draw.".to_string()),
        Status::InProgress { .. } => None,
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
