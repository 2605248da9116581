pub mod board;
pub mod error;
pub mod eval;
pub mod game;
pub mod movegen;
pub mod moves;
pub mod notation;
pub mod perft;
pub mod search;
pub mod simulate;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use error::*;
pub use eval::*;
pub use game::*;
pub use movegen::*;
pub use moves::*;
pub use notation::*;
pub use perft::perft;
pub use search::{alpha_beta, best_move, minimax, SearchOutcome, INFINITY};
pub use simulate::apply;
pub use types::*;

// =============================================================================
// Engine trait, implemented by every move picker (minimax, random, ...)
// =============================================================================

/// Default search depth in plies.
pub const DEFAULT_DEPTH: u8 = 4;

/// Result of a search operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// The move to play (None if no legal moves)
    pub best_move: Option<Move>,
    /// Material score from Dark's perspective
    pub score: i32,
    /// Search depth used
    pub depth: u8,
    /// Number of boards visited
    pub nodes: u64,
}

/// Limits for one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    /// Plies to look ahead
    pub depth: u8,
}

impl SearchLimits {
    pub fn depth(depth: u8) -> Self {
        Self { depth }
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::depth(DEFAULT_DEPTH)
    }
}

/// Trait that all engines must implement.
///
/// Callers own the game loop: they ask an engine for a move, check it against
/// [`moves_for_side`] if they need to, and play it with [`apply`].
pub trait Engine: Send {
    /// Picks a move for `side` on `board`.
    fn search(&mut self, board: &Board, side: Side, limits: SearchLimits) -> SearchResult;

    /// Returns the engine's display name
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
