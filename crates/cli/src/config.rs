//! Engine settings read from an optional TOML file.
//!
//! ```toml
//! depth = 6
//! engine = "minimax"
//! human_side = "dark"
//! max_moves = 150
//! ```

use std::path::{Path, PathBuf};

use draughts_core::{Engine, Side, DEFAULT_DEPTH};
use minimax_engine::MinimaxEngine;
use random_engine::RandomEngine;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

pub const MIN_DEPTH: u8 = 1;
pub const MAX_DEPTH: u8 = 12;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    Minimax,
    Random,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub depth: u8,
    pub engine: EngineKind,
    /// Seed for the random engine; fresh entropy when absent
    pub seed: Option<u64>,
    pub human_side: Side,
    /// Plies per self-play game before it is called a draw
    pub max_moves: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            engine: EngineKind::Minimax,
            seed: None,
            human_side: Side::Light,
            max_moves: 200,
        }
    }
}

impl EngineConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let mut config: EngineConfig = toml::from_str(text)?;
        config.depth = clamp_depth(config.depth);
        Ok(config)
    }

    pub fn build_engine(&self) -> Box<dyn Engine> {
        build_engine(self.engine, self.seed)
    }
}

/// Keeps a requested depth inside the supported range.
pub fn clamp_depth(depth: u8) -> u8 {
    let clamped = depth.clamp(MIN_DEPTH, MAX_DEPTH);
    if clamped != depth {
        warn!(requested = depth, using = clamped, "depth out of range");
    }
    clamped
}

pub fn build_engine(kind: EngineKind, seed: Option<u64>) -> Box<dyn Engine> {
    match kind {
        EngineKind::Minimax => Box::new(MinimaxEngine::new()),
        EngineKind::Random => match seed {
            Some(seed) => Box::new(RandomEngine::with_seed(seed)),
            None => Box::new(RandomEngine::new()),
        },
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
