use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

pub const BOARD_SIZE: i8 = 8;

/// One of the two players.
///
/// `Light` starts on rows 5..=7 and moves toward row 0, `Dark` starts on rows 0..=2
/// and moves toward row 7.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Light,
    Dark,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Light, Side::Dark];

    pub fn other(self) -> Side {
        match self {
            Side::Light => Side::Dark,
            Side::Dark => Side::Light,
        }
    }
    /// The row on which this side's men are crowned.
    pub fn promotion_row(self) -> u8 {
        match self {
            Side::Light => 0,
            Side::Dark => 7,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Light => f.write_str("light"),
            Side::Dark => f.write_str("dark"),
        }
    }
}

impl FromStr for Side {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" | "l" => Ok(Side::Light),
            "dark" | "d" => Ok(Side::Dark),
            _ => Err(ParseError::UnknownSide(s.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rank {
    Man,
    King,
}

// Diagonal steps as (row delta, col delta). Order matters: it fixes move list order.
const LIGHT_MAN_DIRS: [(i8, i8); 2] = [(-1, -1), (-1, 1)];
const DARK_MAN_DIRS: [(i8, i8); 2] = [(1, -1), (1, 1)];
const KING_DIRS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub side: Side,
    pub rank: Rank,
}

impl Piece {
    pub const fn man(side: Side) -> Self {
        Self {
            side,
            rank: Rank::Man,
        }
    }

    pub const fn king(side: Side) -> Self {
        Self {
            side,
            rank: Rank::King,
        }
    }

    pub fn is_king(self) -> bool {
        self.rank == Rank::King
    }

    /// Diagonal directions this piece may step or jump in.
    pub fn directions(self) -> &'static [(i8, i8)] {
        match (self.side, self.rank) {
            (Side::Light, Rank::Man) => &LIGHT_MAN_DIRS,
            (Side::Dark, Rank::Man) => &DARK_MAN_DIRS,
            (_, Rank::King) => &KING_DIRS,
        }
    }

    /// The piece that ends up on `row` after a move finishing there.
    pub fn settled_on(self, row: u8) -> Piece {
        if self.rank == Rank::Man && row == self.side.promotion_row() {
            Piece::king(self.side)
        } else {
            self
        }
    }

    pub fn symbol(self) -> char {
        match (self.side, self.rank) {
            (Side::Light, Rank::Man) => 'l',
            (Side::Light, Rank::King) => 'L',
            (Side::Dark, Rank::Man) => 'd',
            (Side::Dark, Rank::King) => 'D',
        }
    }

    pub fn from_symbol(ch: char) -> Option<Piece> {
        match ch {
            'l' => Some(Piece::man(Side::Light)),
            'L' => Some(Piece::king(Side::Light)),
            'd' => Some(Piece::man(Side::Dark)),
            'D' => Some(Piece::king(Side::Dark)),
            _ => None,
        }
    }
}

/// A square on the board. Always on-board once constructed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    /// # Panics
    /// If `row` or `col` is outside `0..8`.
    pub fn new(row: u8, col: u8) -> Self {
        assert!(
            row < BOARD_SIZE as u8 && col < BOARD_SIZE as u8,
            "position ({row},{col}) is off the board"
        );
        Self { row, col }
    }

    /// The square `(dr, dc)` away, if it is on the board.
    pub fn offset(self, dr: i8, dc: i8) -> Option<Pos> {
        pos(self.row as i8 + dr, self.col as i8 + dc)
    }

    /// Squares on which pieces may stand.
    pub fn is_dark_square(self) -> bool {
        (self.row + self.col) % 2 == 1
    }
}

impl TryFrom<(u8, u8)> for Pos {
    type Error = ParseError;

    fn try_from((row, col): (u8, u8)) -> Result<Self, Self::Error> {
        if row < BOARD_SIZE as u8 && col < BOARD_SIZE as u8 {
            Ok(Self { row, col })
        } else {
            Err(ParseError::InvalidSquare(format!("({row},{col})")))
        }
    }
}

impl<'de> Deserialize<'de> for Pos {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Fields {
            row: u8,
            col: u8,
        }

        let Fields { row, col } = Fields::deserialize(deserializer)?;
        Pos::try_from((row, col)).map_err(de::Error::custom)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

// Helpers
pub fn in_bounds(row: i8, col: i8) -> bool {
    (0..BOARD_SIZE).contains(&row) && (0..BOARD_SIZE).contains(&col)
}
pub fn pos(row: i8, col: i8) -> Option<Pos> {
    if in_bounds(row, col) {
        Some(Pos {
            row: row as u8,
            col: col as u8,
        })
    } else {
        None
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
