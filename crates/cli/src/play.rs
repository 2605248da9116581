//! Interactive human-versus-engine game over any line-based input.

use std::io::{BufRead, Write};

use anyhow::Context;
use draughts_core::{
    apply, format_move_list, moves_for_side, parse_move, select_move, Board, Engine, Move,
    MoveError, SearchLimits, Side,
};
use tracing::{debug, info};

/// Plays from `board` with Light to move until one side runs out of moves.
///
/// The human answers with a move index or move notation; `quit` or end of input
/// abandons the game. Returns the winner, or `None` if the game was abandoned.
pub fn run_game<R: BufRead, W: Write>(
    mut board: Board,
    mut input: R,
    out: &mut W,
    engine: &mut dyn Engine,
    human: Side,
    depth: u8,
) -> anyhow::Result<Option<Side>> {
    let mut side = Side::Light;
    engine.new_game();

    loop {
        let moves = moves_for_side(&board, side);
        if moves.is_empty() {
            let winner = side.other();
            writeln!(out, "{board}")?;
            writeln!(out, "{side} has no moves, {winner} wins")?;
            info!(%winner, "game over");
            return Ok(Some(winner));
        }

        let mv = if side == human {
            writeln!(out, "{board}")?;
            write!(out, "{}", format_move_list(&moves))?;
            match read_human_move(&board, side, &moves, &mut input, out)? {
                Some(mv) => mv,
                None => {
                    writeln!(out, "game abandoned")?;
                    return Ok(None);
                }
            }
        } else {
            let result = engine.search(&board, side, SearchLimits::depth(depth));
            debug!(nodes = result.nodes, score = result.score, "engine replied");
            let mv = result
                .best_move
                .filter(|m| moves.contains(m))
                .unwrap_or_else(|| moves[0].clone());
            writeln!(out, "{} plays {mv}", engine.name())?;
            mv
        };

        board = apply(&board, &mv);
        side = side.other();
    }
}

/// Prompts until the input names a legal move. `None` on quit or end of input.
fn read_human_move<R: BufRead, W: Write>(
    board: &Board,
    side: Side,
    moves: &[Move],
    input: &mut R,
    out: &mut W,
) -> anyhow::Result<Option<Move>> {
    loop {
        write!(out, "{side} to move> ")?;
        out.flush()?;

        let mut line = String::new();
        let read = input.read_line(&mut line).context("failed to read move")?;
        let line = line.trim();
        if read == 0 || line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("q") {
            return Ok(None);
        }
        if line.is_empty() {
            continue;
        }

        match choose(board, side, moves, line) {
            Ok(mv) => return Ok(Some(mv)),
            Err(e) => writeln!(out, "{e}, try again")?,
        }
    }
}

fn choose(board: &Board, side: Side, moves: &[Move], line: &str) -> Result<Move, MoveError> {
    match line.parse::<usize>() {
        Ok(index) => select_move(moves, index).cloned(),
        Err(_) => parse_move(board, side, line),
    }
}

#[cfg(test)]
#[path = "play_tests.rs"]
mod play_tests;
