//! Errors surfaced to callers that feed the engine text or move choices.
//!
//! Off-board coordinates and malformed boards handed to the core directly are
//! programming errors and panic instead.

use thiserror::Error;

use crate::types::Side;

/// Failure to read a board diagram or move notation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("board diagram has {0} rows, expected 8")]
    RowCount(usize),
    #[error("row {row} has {len} squares, expected 8")]
    RowLength { row: usize, len: usize },
    #[error("unknown board symbol '{0}'")]
    UnknownSymbol(char),
    #[error("invalid square '{0}'")]
    InvalidSquare(String),
    #[error("a move needs at least two squares, got {0}")]
    TooShort(usize),
    #[error("squares {from} and {to} are not one or two diagonal steps apart")]
    BadStep { from: String, to: String },
    #[error("unknown side '{0}', expected 'light' or 'dark'")]
    UnknownSide(String),
}

/// A move choice that cannot be played in the current position.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("move index {index} out of range, {len} moves available")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("{mv} is not a legal move for {side}")]
    Illegal { mv: String, side: Side },
    #[error(transparent)]
    Parse(#[from] ParseError),
}
