use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::types::*;

/// A move as the path its piece travels: origin first, final square last.
///
/// Consecutive squares one diagonal apart are a step; two apart are a jump over
/// the square in between. A capture may chain several jumps.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Pos>", into = "Vec<Pos>")]
pub struct Move {
    path: Vec<Pos>,
}

impl Move {
    /// # Panics
    /// If `path` has fewer than two squares.
    pub fn new(path: Vec<Pos>) -> Self {
        assert!(path.len() >= 2, "a move needs at least two squares");
        Self { path }
    }

    pub fn single(from: Pos, to: Pos) -> Self {
        Self::new(vec![from, to])
    }

    pub fn from(&self) -> Pos {
        self.path[0]
    }

    pub fn to(&self) -> Pos {
        self.path[self.path.len() - 1]
    }

    pub fn path(&self) -> &[Pos] {
        &self.path
    }

    /// True if the move ends more than one row from where it started.
    ///
    /// This is the test the forced-capture rule uses. A king chain that zig-zags
    /// back to its starting row jumps pieces but is not a capture here; see
    /// [`Move::is_jump`].
    pub fn is_capture(&self) -> bool {
        self.from().row.abs_diff(self.to().row) > 1
    }

    /// True if the first leg jumps a piece, as every leg of a chain does.
    pub fn is_jump(&self) -> bool {
        self.path[0].row.abs_diff(self.path[1].row) == 2
    }

    /// Squares of the pieces jumped, in the order they are taken.
    pub fn captured(&self) -> impl Iterator<Item = Pos> + '_ {
        self.path.windows(2).filter_map(|w| {
            let (a, b) = (w[0], w[1]);
            (a.row.abs_diff(b.row) == 2).then(|| Pos::new((a.row + b.row) / 2, (a.col + b.col) / 2))
        })
    }

    /// Builds a longer chain by putting `origin` in front of this one.
    pub(crate) fn prepend(mut self, origin: Pos) -> Self {
        self.path.insert(0, origin);
        self
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if self.is_jump() { 'x' } else { '-' };
        for (i, p) in self.path.iter().enumerate() {
            if i > 0 {
                write!(f, "{sep}")?;
            }
            write!(f, "{p}")?;
        }
        Ok(())
    }
}

/// Reads `(5,2)x(3,4)`, `(5,0)-(4,1)` or the compact `52x34`, `50-41`.
///
/// Only the shape is checked here; whether the move is legal is up to
/// [`crate::parse_move`].
impl FromStr for Move {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let squares = s
            .split(['-', 'x', 'X'])
            .map(parse_square)
            .collect::<Result<Vec<_>, _>>()?;
        Move::try_from(squares)
    }
}

/// Checks the path shape: at least two squares, each one or two diagonal steps
/// from the last.
impl TryFrom<Vec<Pos>> for Move {
    type Error = ParseError;

    fn try_from(path: Vec<Pos>) -> Result<Self, Self::Error> {
        if path.len() < 2 {
            return Err(ParseError::TooShort(path.len()));
        }
        for w in path.windows(2) {
            let dr = w[0].row.abs_diff(w[1].row);
            let dc = w[0].col.abs_diff(w[1].col);
            if dr != dc || !(1..=2).contains(&dr) {
                return Err(ParseError::BadStep {
                    from: w[0].to_string(),
                    to: w[1].to_string(),
                });
            }
        }
        Ok(Self { path })
    }
}

impl From<Move> for Vec<Pos> {
    fn from(mv: Move) -> Self {
        mv.path
    }
}

fn parse_square(txt: &str) -> Result<Pos, ParseError> {
    let digits: Vec<i8> = txt
        .chars()
        .filter(|c| !matches!(c, '(' | ')' | ',') && !c.is_whitespace())
        .map(|c| c.to_digit(10).map(|d| d as i8))
        .collect::<Option<Vec<_>>>()
        .ok_or_else(|| ParseError::InvalidSquare(txt.trim().to_string()))?;
    match digits[..] {
        [row, col] => pos(row, col).ok_or_else(|| ParseError::InvalidSquare(txt.trim().to_string())),
        _ => Err(ParseError::InvalidSquare(txt.trim().to_string())),
    }
}

#[cfg(test)]
#[path = "moves_tests.rs"]
mod moves_tests;
