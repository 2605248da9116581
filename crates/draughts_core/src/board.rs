use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::types::*;

const N: usize = BOARD_SIZE as usize;

/// An 8x8 draughts board.
///
/// `Board` is a plain `Copy` value: every operation that changes the position
/// hands back a new board and leaves the original untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Option<Piece>; N]; N],
}

impl Board {
    /// A board with no pieces on it.
    pub fn empty() -> Self {
        Board {
            cells: [[None; N]; N],
        }
    }

    /// Standard opening layout: dark men on rows 0..=2, light men on rows 5..=7,
    /// dark squares only.
    pub fn initial() -> Self {
        let mut b = Board::empty();
        for row in 0..N as u8 {
            let side = match row {
                0..=2 => Side::Dark,
                5..=7 => Side::Light,
                _ => continue,
            };
            for col in 0..N as u8 {
                let p = Pos::new(row, col);
                if p.is_dark_square() {
                    b.set(p, Some(Piece::man(side)));
                }
            }
        }
        b
    }

    /// Parses a text diagram: eight rows of eight symbols (`.`, `l`, `L`, `d`, `D`),
    /// row 0 first. Whitespace inside a row and blank lines are ignored.
    pub fn from_diagram(text: &str) -> Result<Self, ParseError> {
        let rows: Vec<Vec<char>> = text
            .lines()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|row| !row.is_empty())
            .collect();
        if rows.len() != N {
            return Err(ParseError::RowCount(rows.len()));
        }

        let mut b = Board::empty();
        for (r, row) in rows.iter().enumerate() {
            if row.len() != N {
                return Err(ParseError::RowLength {
                    row: r,
                    len: row.len(),
                });
            }
            for (c, &ch) in row.iter().enumerate() {
                let cell = match ch {
                    '.' => None,
                    _ => Some(Piece::from_symbol(ch).ok_or(ParseError::UnknownSymbol(ch))?),
                };
                b.cells[r][c] = cell;
            }
        }
        Ok(b)
    }

    pub fn cell_at(&self, p: Pos) -> Option<Piece> {
        self.cells[p.row as usize][p.col as usize]
    }

    pub fn is_empty(&self, p: Pos) -> bool {
        self.cell_at(p).is_none()
    }

    /// Returns a copy of this board with `p` set to `cell`.
    pub fn with_cell(mut self, p: Pos, cell: Option<Piece>) -> Board {
        self.set(p, cell);
        self
    }

    pub(crate) fn set(&mut self, p: Pos, cell: Option<Piece>) {
        self.cells[p.row as usize][p.col as usize] = cell;
    }

    /// Every occupied square, row by row then column by column.
    pub fn occupied(&self) -> impl Iterator<Item = (Pos, Piece)> + '_ {
        (0..N as u8).flat_map(move |row| {
            (0..N as u8).filter_map(move |col| {
                let p = Pos::new(row, col);
                self.cell_at(p).map(|pc| (p, pc))
            })
        })
    }

    /// Squares holding `side`'s men and kings, in scan order.
    pub fn pieces(&self, side: Side) -> impl Iterator<Item = (Pos, Piece)> + '_ {
        self.occupied().filter(move |(_, pc)| pc.side == side)
    }

    pub fn count(&self, side: Side) -> usize {
        self.pieces(side).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::initial()
    }
}

impl FromStr for Board {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_diagram(s)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for col in 0..N {
            write!(f, " {col}")?;
        }
        writeln!(f)?;
        for (row, cells) in self.cells.iter().enumerate() {
            write!(f, "{row} ")?;
            for cell in cells {
                write!(f, " {}", cell.map_or('.', Piece::symbol))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
