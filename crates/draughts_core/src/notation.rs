use crate::{board::Board, error::MoveError, movegen::moves_for_side, moves::Move, types::Side};

/// Resolves move text against the legal moves for `side`.
///
/// Parsing only checks the shape of the text; matching against the generated
/// list is what makes the result legal.
pub fn parse_move(board: &Board, side: Side, txt: &str) -> Result<Move, MoveError> {
    let wanted: Move = txt.trim().parse()?;
    moves_for_side(board, side)
        .into_iter()
        .find(|m| *m == wanted)
        .ok_or_else(|| MoveError::Illegal {
            mv: wanted.to_string(),
            side,
        })
}

/// Picks a move by its index in a generated list.
pub fn select_move(moves: &[Move], index: usize) -> Result<&Move, MoveError> {
    moves.get(index).ok_or(MoveError::IndexOutOfRange {
        index,
        len: moves.len(),
    })
}

/// Numbered listing of `moves`, one per line, as shown to a player choosing by index.
pub fn format_move_list(moves: &[Move]) -> String {
    moves
        .iter()
        .enumerate()
        .map(|(i, mv)| format!("{i}: {mv}\n"))
        .collect()
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;
