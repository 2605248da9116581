//! Fixed-depth minimax with alpha-beta pruning.
//!
//! Scores always come from [`evaluate`], so they are from Dark's point of view:
//! Dark picks the highest child score, Light the lowest.

use crate::{
    board::Board,
    eval::{evaluate, MAXIMIZING_SIDE},
    movegen::moves_for_side,
    moves::Move,
    simulate::apply,
    types::Side,
};

/// Larger than any material balance a board can hold.
pub const INFINITY: i32 = i32::MAX;

/// Score and chosen move of one search node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub score: i32,
    /// `None` at depth 0 or when `side` has no legal moves.
    pub best_move: Option<Move>,
}

impl SearchOutcome {
    fn leaf(board: &Board) -> Self {
        Self {
            score: evaluate(board),
            best_move: None,
        }
    }
}

/// Searches `depth` plies ahead for `side` with a full alpha-beta window.
///
/// `nodes` is incremented once per child board visited.
pub fn best_move(board: &Board, side: Side, depth: u8, nodes: &mut u64) -> SearchOutcome {
    alpha_beta(board, side, depth, -INFINITY, INFINITY, nodes)
}

/// Recursive minimax with alpha-beta pruning.
///
/// Moves are tried in generator order and only a strictly better score replaces
/// the current best, so the first of several equal moves wins.
pub fn alpha_beta(
    board: &Board,
    side: Side,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    nodes: &mut u64,
) -> SearchOutcome {
    let moves = moves_for_side(board, side);
    if depth == 0 || moves.is_empty() {
        return SearchOutcome::leaf(board);
    }

    let maximizing = side == MAXIMIZING_SIDE;
    let mut best_score = if maximizing { -INFINITY } else { INFINITY };
    let mut best = None;

    for mv in moves {
        let child = apply(board, &mv);
        *nodes += 1;
        let score = alpha_beta(&child, side.other(), depth - 1, alpha, beta, nodes).score;

        if maximizing {
            if score > best_score {
                best_score = score;
                best = Some(mv);
            }
            alpha = alpha.max(score);
        } else {
            if score < best_score {
                best_score = score;
                best = Some(mv);
            }
            beta = beta.min(score);
        }
        if beta <= alpha {
            break; // Cutoff
        }
    }

    SearchOutcome {
        score: best_score,
        best_move: best,
    }
}

/// Plain minimax over the same generator and evaluator, without pruning.
///
/// Visits every node, so it is only useful for checking [`alpha_beta`].
pub fn minimax(board: &Board, side: Side, depth: u8, nodes: &mut u64) -> SearchOutcome {
    let moves = moves_for_side(board, side);
    if depth == 0 || moves.is_empty() {
        return SearchOutcome::leaf(board);
    }

    let maximizing = side == MAXIMIZING_SIDE;
    let mut best = SearchOutcome {
        score: if maximizing { -INFINITY } else { INFINITY },
        best_move: None,
    };
    for mv in moves {
        let child = apply(board, &mv);
        *nodes += 1;
        let score = minimax(&child, side.other(), depth - 1, nodes).score;
        let better = if maximizing {
            score > best.score
        } else {
            score < best.score
        };
        if better {
            best = SearchOutcome {
                score,
                best_move: Some(mv),
            };
        }
    }
    best
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
