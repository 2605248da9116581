use crate::{board::Board, movegen::moves_for_side_into, moves::Move, simulate::apply, types::Side};

/// Pure perft node count.
/// Counts all move sequences of exactly `depth` plies from `board` with `side` to play.
/// Lines that end early because a side has no moves do not count.
pub fn perft(board: &Board, side: Side, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    fn inner(board: &Board, side: Side, depth: u8, layers: &mut [Vec<Move>]) -> u64 {
        if depth == 0 {
            return 1;
        }

        let (buf, rest) = layers
            .split_first_mut()
            .expect("perft requires one buffer per remaining ply");

        moves_for_side_into(board, side, buf);

        let mut nodes = 0u64;
        for mv in buf.iter() {
            let child = apply(board, mv);
            nodes += inner(&child, side.other(), depth - 1, rest);
        }
        nodes
    }

    let mut layers = vec![Vec::with_capacity(32); depth as usize];
    inner(board, side, depth, &mut layers[..])
}
