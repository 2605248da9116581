//! Match runner for playing games between engines

use draughts_core::{apply, moves_for_side, Board, Engine, SearchLimits, Side};
use serde::{Deserialize, Serialize};
use tracing::{info, trace, warn};

use crate::results::{GameResult, MatchResult};

/// Configuration for a match
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Search depth for engines
    pub depth: u8,
    /// Plies per game before declaring a draw
    pub max_moves: u32,
    /// Whether to swap sides each game
    pub alternate_sides: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            depth: 4,
            max_moves: 200,
            alternate_sides: true,
        }
    }
}

/// Runs matches between two engines
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Run a match between two engines
    ///
    /// Returns the result from engine1's perspective
    pub fn run_match(&self, engine1: &mut dyn Engine, engine2: &mut dyn Engine) -> MatchResult {
        let mut result = MatchResult::new();

        for game_num in 0..self.config.num_games {
            // engine1 takes Light (moves first) in even games when alternating
            let engine1_light = !self.config.alternate_sides || game_num % 2 == 0;

            let game_result = if engine1_light {
                self.play_game(engine1, engine2)
            } else {
                self.play_game(engine2, engine1).flipped()
            };
            result.record(game_result);

            info!(
                game = game_num + 1,
                of = self.config.num_games,
                engine1_side = if engine1_light { "light" } else { "dark" },
                outcome = ?game_result,
                wins = result.wins,
                losses = result.losses,
                draws = result.draws,
                "game finished"
            );
        }

        result
    }

    /// Play a single game, returns result from light's perspective
    pub fn play_game(&self, light: &mut dyn Engine, dark: &mut dyn Engine) -> GameResult {
        let mut board = Board::initial();
        let mut side = Side::Light;
        light.new_game();
        dark.new_game();

        for ply in 0..self.config.max_moves {
            let moves = moves_for_side(&board, side);
            if moves.is_empty() {
                // No legal moves: the side to move loses
                return light_result(side.other());
            }

            let engine: &mut dyn Engine = match side {
                Side::Light => &mut *light,
                Side::Dark => &mut *dark,
            };
            let result = engine.search(&board, side, SearchLimits::depth(self.config.depth));

            let mv = match result.best_move {
                Some(mv) if moves.contains(&mv) => mv,
                Some(mv) => {
                    warn!(engine = engine.name(), %mv, "illegal move, forfeiting");
                    return light_result(side.other());
                }
                None => moves[0].clone(),
            };

            trace!(ply, %side, %mv, score = result.score, "move played");
            board = apply(&board, &mv);
            side = side.other();
        }

        // Max moves reached
        GameResult::Draw
    }
}

fn light_result(winner: Side) -> GameResult {
    match winner {
        Side::Light => GameResult::Win,
        Side::Dark => GameResult::Loss,
    }
}

/// Quick utility to run a single match
pub fn quick_match(
    engine1: &mut dyn Engine,
    engine2: &mut dyn Engine,
    num_games: u32,
    depth: u8,
) -> MatchResult {
    let config = MatchConfig {
        num_games,
        depth,
        ..Default::default()
    };
    let runner = MatchRunner::new(config);
    runner.run_match(engine1, engine2)
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
