//! Random Move Draughts Engine
//!
//! Picks uniformly among the legal moves. Useful as:
//! - A baseline opponent (the minimax engine should beat it comfortably)
//! - A source of varied games for stress testing move generation

use draughts_core::{moves_for_side, Board, Engine, SearchLimits, SearchResult, Side};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;


/// An engine that plays random legal moves.
///
/// Capture rules still apply since it only chooses from the generated list.
#[derive(Debug, Clone)]
pub struct RandomEngine {
    nodes: u64,
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            nodes: 0,
            rng: StdRng::from_entropy(),
        }
    }

    /// Same seed, same sequence of choices.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            nodes: 0,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn search(&mut self, board: &Board, side: Side, _limits: SearchLimits) -> SearchResult {
        let moves = moves_for_side(board, side);
        self.nodes = 1;

        let best_move = moves.choose(&mut self.rng).cloned();

        SearchResult {
            best_move,
            score: 0,
            depth: 1,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
