use crate::{board::Board, moves::Move, types::*};

/// All legal moves for `side`, returning a freshly allocated vector.
pub fn moves_for_side(board: &Board, side: Side) -> Vec<Move> {
    let mut out = Vec::with_capacity(32);
    moves_for_side_into(board, side, &mut out);
    out
}

/// All legal moves for `side` into the provided buffer, reusing it across calls.
///
/// Pieces are visited in row-major order, so the list order is stable. When any
/// piece can capture, only captures are returned.
pub fn moves_for_side_into(board: &Board, side: Side, out: &mut Vec<Move>) {
    out.clear();
    for (from, _) in board.pieces(side) {
        out.extend(moves_for_piece(board, from));
    }

    if out.iter().any(Move::is_capture) {
        out.retain(Move::is_capture);
    }
}

/// Moves for whatever stands on `from`: its captures if it has any, otherwise
/// its plain steps. An empty square has no moves.
pub fn moves_for_piece(board: &Board, from: Pos) -> Vec<Move> {
    let Some(piece) = board.cell_at(from) else {
        return Vec::new();
    };
    let jumps = jump_moves(board, from, piece);
    if !jumps.is_empty() {
        return jumps;
    }
    normal_moves(board, from, piece)
}

/// Every maximal capture chain `piece` can make starting from `from`.
///
/// Each jump is played out on a copy of the board (jumped piece lifted, jumper
/// moved, rank kept) before searching on from the landing square. Removing the
/// jumped piece means no piece is taken twice, and the recursion ends once the
/// opponent runs out of pieces.
pub fn jump_moves(board: &Board, from: Pos, piece: Piece) -> Vec<Move> {
    let mut out = Vec::new();
    for &(dr, dc) in piece.directions() {
        let Some(landing) = from.offset(2 * dr, 2 * dc) else {
            continue;
        };
        if !board.is_empty(landing) {
            continue;
        }
        let Some(over) = from.offset(dr, dc) else {
            continue;
        };
        match board.cell_at(over) {
            Some(victim) if victim.side != piece.side => {}
            _ => continue,
        }

        let after = board
            .with_cell(from, None)
            .with_cell(over, None)
            .with_cell(landing, Some(piece));
        let continuations = jump_moves(&after, landing, piece);
        if continuations.is_empty() {
            out.push(Move::single(from, landing));
        } else {
            out.extend(continuations.into_iter().map(|mv| mv.prepend(from)));
        }
    }
    out
}

/// One-square diagonal steps onto empty squares.
pub fn normal_moves(board: &Board, from: Pos, piece: Piece) -> Vec<Move> {
    piece
        .directions()
        .iter()
        .filter_map(|&(dr, dc)| from.offset(dr, dc))
        .filter(|&to| board.is_empty(to))
        .map(|to| Move::single(from, to))
        .collect()
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
