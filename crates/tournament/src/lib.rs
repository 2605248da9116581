//! Match runner for draughts engines
//!
//! Plays engine-vs-engine games from the opening position and tallies the
//! results. Light moves first; a side left without legal moves loses, and a
//! game that reaches the ply limit is a draw.

mod match_runner;
mod results;

pub use match_runner::*;
pub use results::*;
