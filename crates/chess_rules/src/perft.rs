use crate::{board::Board, legal::legal_moves_into, types::*};

/// Pure perft node count.
/// Counts all legal positions reachable from `board` with `side` to move,
/// down to `depth` plies.
pub fn perft(board: &Board, side: Color, depth: u8) -> u64 {
    fn inner(board: &mut Board, side: Color, depth: u8, layers: &mut [Vec<Move>]) -> u64 {
        let Some((buf, rest)) = layers.split_first_mut() else {
            return 1;
        };

        legal_moves_into(board, side, buf);
        if depth == 1 {
            return buf.len() as u64;
        }

        let mut nodes = 0u64;
        for mv in buf.iter().copied() {
            let captured = board.relocate(mv);
            nodes += inner(board, side.other(), depth - 1, rest);
            // undo: put the mover back and restore whatever was overwritten
            board.relocate(Move::new(mv.to, mv.from));
            board.place(mv.to, captured);
        }
        nodes
    }

    if depth == 0 {
        return 1;
    }
    let mut scratch = board.clone();
    let mut layers = vec![Vec::with_capacity(64); depth as usize];
    inner(&mut scratch, side, depth, &mut layers[..])
}
