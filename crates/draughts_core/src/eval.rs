use crate::{board::Board, types::*};

pub const MAN_VALUE: i32 = 1;
pub const KING_VALUE: i32 = 2;

/// The side whose advantage counts as positive.
pub const MAXIMIZING_SIDE: Side = Side::Dark;

/// Material balance from the maximizing side's point of view.
///
/// A man is worth 1 and a king 2. Positive favours [`MAXIMIZING_SIDE`].
pub fn evaluate(board: &Board) -> i32 {
    board
        .occupied()
        .map(|(_, pc)| {
            let v = if pc.is_king() { KING_VALUE } else { MAN_VALUE };
            if pc.side == MAXIMIZING_SIDE { v } else { -v }
        })
        .sum()
}
