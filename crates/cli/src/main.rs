//! Draughts command line
//!
//! Play against the engine, run engine-vs-engine matches, or count perft nodes.
//!
//! Examples:
//!   draughts play --depth 6 --human dark
//!   draughts match minimax random --games 20 --output results.json
//!   draughts perft 8

mod config;
mod play;

use std::io;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand};
use draughts_core::{perft, Board, Side};
use tournament::{MatchConfig, MatchReport, MatchRunner};
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::{build_engine, clamp_depth, EngineConfig, EngineKind};

#[derive(Parser, Debug)]
#[command(name = "draughts", version, about = "Draughts engine and tools")]
struct Cli {
    /// TOML file with engine settings; flags override it
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play against the engine on the terminal
    Play {
        /// Search depth in plies
        #[arg(short, long)]
        depth: Option<u8>,
        /// Side the human plays (light moves first)
        #[arg(long)]
        human: Option<Side>,
        #[arg(short, long, value_enum)]
        engine: Option<EngineKind>,
        /// Seed for the random engine
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Play a series of engine-vs-engine games
    Match {
        #[arg(value_enum)]
        engine1: EngineKind,
        #[arg(value_enum)]
        engine2: EngineKind,
        #[arg(short, long, default_value_t = 10)]
        games: u32,
        #[arg(short, long)]
        depth: Option<u8>,
        /// Plies per game before it is called a draw
        #[arg(long)]
        max_moves: Option<u32>,
        /// Write the match report as JSON
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Count leaf nodes of the move tree from the opening position
    Perft {
        #[arg(default_value_t = 6)]
        depth: u8,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => EngineConfig::default(),
    };

    match cli.command {
        Command::Play {
            depth,
            human,
            engine,
            seed,
        } => {
            if let Some(depth) = depth {
                config.depth = clamp_depth(depth);
            }
            if let Some(human) = human {
                config.human_side = human;
            }
            if let Some(engine) = engine {
                config.engine = engine;
            }
            config.seed = seed.or(config.seed);

            let mut engine = config.build_engine();
            info!(engine = engine.name(), depth = config.depth, human = %config.human_side, "starting game");
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            play::run_game(
                Board::initial(),
                stdin.lock(),
                &mut stdout,
                &mut *engine,
                config.human_side,
                config.depth,
            )?;
        }
        Command::Match {
            engine1,
            engine2,
            games,
            depth,
            max_moves,
            output,
        } => {
            let depth = depth.map(clamp_depth).unwrap_or(config.depth);
            let match_config = MatchConfig {
                num_games: games,
                depth,
                max_moves: max_moves.unwrap_or(config.max_moves),
                ..Default::default()
            };

            let mut e1 = build_engine(engine1, config.seed);
            let mut e2 = build_engine(engine2, config.seed.map(|s| s.wrapping_add(1)));
            let runner = MatchRunner::new(match_config);
            let result = runner.run_match(&mut *e1, &mut *e2);

            let report = MatchReport {
                engine1: e1.name().to_string(),
                engine2: e2.name().to_string(),
                depth,
                result,
            };
            println!("{}", report.generate_report());

            if let Some(path) = output {
                report
                    .save(&path)
                    .with_context(|| format!("saving results to {}", path.display()))?;
                info!(path = %path.display(), "results saved");
            }
        }
        Command::Perft { depth } => {
            let board = Board::initial();
            for d in 1..=depth {
                let start = Instant::now();
                let nodes = perft(&board, Side::Light, d);
                println!("perft({d}) = {nodes}  [{:.3?}]", start.elapsed());
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
