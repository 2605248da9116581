use crate::{board::Board, movegen::moves_for_side, types::Side};

/// Where a game stands for the side about to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    /// The other side had no legal moves.
    Won(Side),
}

/// A side with no legal moves has lost. No other result is recognised.
pub fn game_status(board: &Board, to_move: Side) -> GameStatus {
    if moves_for_side(board, to_move).is_empty() {
        GameStatus::Won(to_move.other())
    } else {
        GameStatus::Ongoing
    }
}
