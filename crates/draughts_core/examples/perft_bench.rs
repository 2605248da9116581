//! Perft benchmark for profiling with cargo-flamegraph.
//!
//! Usage:
//!   cargo flamegraph --example perft_bench -p draughts_core -- [depth] [diagram-file]
//!
//! Examples:
//!   # Default: depth 8 from the opening position
//!   cargo flamegraph --example perft_bench -p draughts_core
//!
//!   # Custom depth from a saved diagram (8 rows of `.`, `l`, `L`, `d`, `D`)
//!   cargo flamegraph --example perft_bench -p draughts_core -- 6 position.txt

use draughts_core::{perft, Board, Side};
use std::env;
use std::time::Instant;

fn main() {
    let args: Vec<String> = env::args().collect();

    let depth: u8 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(8);

    let board = match args.get(2) {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .unwrap_or_else(|e| panic!("cannot read {path}: {e}"));
            Board::from_diagram(&text).unwrap_or_else(|e| panic!("bad diagram in {path}: {e}"))
        }
        None => Board::initial(),
    };

    println!("{board}");
    for d in 1..=depth {
        let start = Instant::now();
        let nodes = perft(&board, Side::Light, d);
        let elapsed = start.elapsed();
        println!(
            "depth {:>2}: {:>12} nodes  {:>10.3?}  ({:.1} Mn/s)",
            d,
            nodes,
            elapsed,
            (nodes as f64 / 1_000_000.0) / elapsed.as_secs_f64().max(f64::EPSILON)
        );
    }
}
