//! Minimax Draughts Engine
//!
//! Fixed-depth alpha-beta search over the core move generator with the
//! material evaluation. This is the engine the automated side plays with.

use draughts_core::{best_move, moves_for_side, Board, Engine, SearchLimits, SearchResult, Side};
use tracing::debug;


/// Draughts engine using minimax with alpha-beta pruning.
///
/// Dark maximizes and Light minimizes the material score, whichever side the
/// engine is asked to play.
#[derive(Debug, Clone, Default)]
pub struct MinimaxEngine {
    /// Node counter for statistics
    nodes: u64,
}

impl MinimaxEngine {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }
}

impl Engine for MinimaxEngine {
    fn search(&mut self, board: &Board, side: Side, limits: SearchLimits) -> SearchResult {
        self.nodes = 0;

        let outcome = best_move(board, side, limits.depth, &mut self.nodes);

        // Depth 0 scores the board without choosing; fall back to the first legal move.
        let best_move = outcome
            .best_move
            .or_else(|| moves_for_side(board, side).into_iter().next());

        debug!(
            %side,
            depth = limits.depth,
            nodes = self.nodes,
            score = outcome.score,
            best = ?best_move.as_ref().map(ToString::to_string),
            "minimax search done"
        );

        SearchResult {
            best_move,
            score: outcome.score,
            depth: limits.depth,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Minimax v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
