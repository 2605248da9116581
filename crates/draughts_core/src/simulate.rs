use crate::{board::Board, moves::Move};

/// Plays `mv` and returns the resulting board; `board` itself is not changed.
///
/// Jumped pieces are removed, and a man finishing on its promotion row is
/// crowned. Promotion only looks at the final square, never at squares passed
/// through mid-chain.
///
/// The move must come from the move generator for this board. It is not
/// re-validated here.
///
/// # Panics
/// If the origin square of `mv` is empty.
pub fn apply(board: &Board, mv: &Move) -> Board {
    let mut next = *board;
    let piece = next
        .cell_at(mv.from())
        .unwrap_or_else(|| panic!("no piece on {} to play {mv}", mv.from()));

    next.set(mv.from(), None);
    for taken in mv.captured() {
        next.set(taken, None);
    }
    let to = mv.to();
    next.set(to, Some(piece.settled_on(to.row)));
    next
}

#[cfg(test)]
#[path = "simulate_tests.rs"]
mod simulate_tests;
