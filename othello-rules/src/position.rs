//! Code for working with [`Position`]s on the Othello board.

use crate::EDGE_LENGTH;
use derive_more::{Display, Error, From, Into};
use std::fmt::{self, Formatter, Write};

/// A single step across the board as `(row delta, column delta)`.
pub type Direction = (i8, i8);

/// A zero-indexed `(row, col)` coordinate.
///
/// Coordinates are signed so that positions just off the edge, like `(-1, 0)`,
/// can be represented and rejected. Use [`Position::is_on_board`] (or
/// [`crate::Board::is_valid_pos`]) before relying on a position being real.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd, From, Into)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: i8,
    pub col: i8,
}

impl Position {
    #[inline]
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// Returns true if both coordinates lie in `0..EDGE_LENGTH`.
    #[inline]
    pub fn is_on_board(self) -> bool {
        self.grid_index().is_some()
    }

    /// The `(row, col)` indices into an 8x8 grid, or None if off the board.
    #[inline]
    pub fn grid_index(self) -> Option<(usize, usize)> {
        if self.row < 0 || self.col < 0 {
            return None;
        }

        let (row, col) = (self.row as usize, self.col as usize);
        if row < EDGE_LENGTH && col < EDGE_LENGTH {
            Some((row, col))
        } else {
            None
        }
    }

    /// The position one step away in `dir`. Saturates instead of overflowing,
    /// so stepping away from an off-board position stays off the board.
    #[inline]
    pub fn step(self, dir: Direction) -> Self {
        Self {
            row: self.row.saturating_add(dir.0),
            col: self.col.saturating_add(dir.1),
        }
    }

    /// Every position on the board, in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        let edge = EDGE_LENGTH as i8;
        (0..edge).flat_map(move |row| (0..edge).map(move |col| Self::new(row, col)))
    }
}

/// Algebraic notation ("D3") for positions on the board, `(row, col)` otherwise.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.grid_index() {
            Some((row, col)) => {
                let col_str = "ABCDEFGH".chars().nth(col).ok_or(fmt::Error)?;
                let row_str = "12345678".chars().nth(row).ok_or(fmt::Error)?;
                f.write_char(col_str)?;
                f.write_char(row_str)
            }
            None => write!(f, "({}, {})", self.row, self.col),
        }
    }
}

#[derive(Debug, PartialEq, Display, Error)]
#[display(fmt = "invalid position string")]
pub struct ParsePositionError;

/// Build a [`Position`] from 1-indexed algebraic notation: a column letter
/// then a row digit ("A1" is `(0, 0)`, "D3" is `(2, 3)`).
impl std::str::FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let col_str = chars.next().ok_or(ParsePositionError)?.to_ascii_uppercase();
        let col = "ABCDEFGH".find(col_str).ok_or(ParsePositionError)? as i8;
        let row = chars
            .next()
            .ok_or(ParsePositionError)?
            .to_digit(10)
            .ok_or(ParsePositionError)? as i8;

        if row < 1 || row > EDGE_LENGTH as i8 || chars.next() != None {
            return Err(ParsePositionError);
        }

        Ok(Self::new(row - 1, col))
    }
}
