//! The [`Board`]: an 8x8 grid of pieces and all of the game logic.
//!
//! Every move goes through [`Board::place_piece`], which checks legality
//! against the current grid before touching it. Queries never mutate.

use crate::piece::{Color, Piece};
use crate::position::{Direction, Position};
use crate::{utils, EDGE_LENGTH, NUM_SPACES};
use derive_more::{Display, Error};
use std::fmt::{self, Formatter};

/// The complete state of an Othello board.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    grid: [[Option<Piece>; EDGE_LENGTH]; EDGE_LENGTH],
}

/// Errors from operations that take a [`Position`] and can refuse it.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Display, Error)]
pub enum BoardError {
    /// The position is occupied, or placing there would flip nothing.
    #[display(fmt = "{} is not a legal move for {}", pos, color)]
    InvalidMove { pos: Position, color: Color },
    #[display(fmt = "position {} is off the board", pos)]
    PositionOutOfBounds { pos: Position },
}

impl Default for Board {
    /// Gets the standard starting position.
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The eight directions a capture can run in: E, SE, S, SW, W, NW, N, NE.
    pub const DIRS: [Direction; 8] = [
        (0, 1),
        (1, 1),
        (1, 0),
        (1, -1),
        (0, -1),
        (-1, -1),
        (-1, 0),
        (-1, 1),
    ];

    /// The starting position: black on (3, 4) and (4, 3), white on (3, 3) and (4, 4).
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.grid[3][4] = Some(Piece::new(Color::Black));
        board.grid[4][3] = Some(Piece::new(Color::Black));
        board.grid[3][3] = Some(Piece::new(Color::White));
        board.grid[4][4] = Some(Piece::new(Color::White));
        board
    }

    /// A board with no pieces on it. Useful for setting up positions with [`Board::set_piece`].
    pub const fn empty() -> Self {
        Self {
            grid: [[None; EDGE_LENGTH]; EDGE_LENGTH],
        }
    }

    /// Returns true if `pos` lies on the board.
    #[inline]
    pub fn is_valid_pos(&self, pos: Position) -> bool {
        pos.is_on_board()
    }

    fn cell(&self, pos: Position) -> Result<&Option<Piece>, BoardError> {
        let (row, col) = pos
            .grid_index()
            .ok_or(BoardError::PositionOutOfBounds { pos })?;
        Ok(&self.grid[row][col])
    }

    fn cell_mut(&mut self, pos: Position) -> Result<&mut Option<Piece>, BoardError> {
        let (row, col) = pos
            .grid_index()
            .ok_or(BoardError::PositionOutOfBounds { pos })?;
        Ok(&mut self.grid[row][col])
    }

    /// Get the piece at `pos`, if there is one.
    #[inline]
    pub fn get_piece(&self, pos: Position) -> Result<Option<Piece>, BoardError> {
        self.cell(pos).map(|cell| *cell)
    }

    #[inline]
    pub fn is_occupied(&self, pos: Position) -> Result<bool, BoardError> {
        self.cell(pos).map(Option::is_some)
    }

    /// Returns true if `pos` holds a piece of `color`. False for empty or off-board positions.
    #[inline]
    pub fn is_mine(&self, pos: Position, color: Color) -> bool {
        matches!(self.get_piece(pos), Ok(Some(piece)) if piece.color() == color)
    }

    /// Put `piece` on `pos` without any legality check, returning whatever was there.
    /// Intended for building positions; games should use [`Board::place_piece`].
    pub fn set_piece(&mut self, pos: Position, piece: Piece) -> Result<Option<Piece>, BoardError> {
        Ok(self.cell_mut(pos)?.replace(piece))
    }

    /// Every cell of the board with its position, in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, Option<Piece>)> + '_ {
        Position::all().zip(self.grid.iter().flatten().copied())
    }

    /// Walk away from `pos` in `dir` and collect the positions `color` would capture
    /// there: a run of opposite-color pieces closed off by a piece of `color`.
    ///
    /// Returns None if the walk reaches an empty cell or the edge first, or if
    /// the very next piece is already `color`.
    pub fn flip_run(&self, pos: Position, color: Color, dir: Direction) -> Option<Vec<Position>> {
        if dir == (0, 0) || !pos.is_on_board() {
            return None;
        }

        let mut run = Vec::new();
        let mut current = pos.step(dir);

        loop {
            match self.get_piece(current) {
                Ok(Some(piece)) if piece.color() == color => {
                    return if run.is_empty() { None } else { Some(run) };
                }
                Ok(Some(_)) => run.push(current),
                // Empty cell or off the edge: nothing is captured.
                _ => return None,
            }
            current = current.step(dir);
        }
    }

    /// Every capture a move by `color` at `pos` would make, direction by direction.
    fn positions_to_flip(&self, pos: Position, color: Color) -> Vec<Position> {
        Self::DIRS
            .iter()
            .filter_map(|&dir| self.flip_run(pos, color, dir))
            .flatten()
            .collect()
    }

    /// Returns true if `color` may play at `pos`: the cell is on the board and empty,
    /// and at least one direction has a flip run.
    pub fn valid_move(&self, pos: Position, color: Color) -> bool {
        matches!(self.is_occupied(pos), Ok(false))
            && Self::DIRS
                .iter()
                .any(|&dir| self.flip_run(pos, color, dir).is_some())
    }

    /// All legal moves for `color`, in row-major order.
    pub fn valid_moves(&self, color: Color) -> Vec<Position> {
        Position::all()
            .filter(|&pos| self.valid_move(pos, color))
            .collect()
    }

    #[inline]
    pub fn has_move(&self, color: Color) -> bool {
        Position::all().any(|pos| self.valid_move(pos, color))
    }

    /// Returns true once neither side can move.
    pub fn is_over(&self) -> bool {
        Color::ALL.iter().all(|&color| !self.has_move(color))
    }

    /// Play a `color` piece at `pos` and flip every captured piece.
    ///
    /// Returns the flipped positions, grouped by direction in [`Board::DIRS`] order.
    /// On error the board is left untouched.
    pub fn place_piece(&mut self, pos: Position, color: Color) -> Result<Vec<Position>, BoardError> {
        if self.is_occupied(pos)? {
            return Err(BoardError::InvalidMove { pos, color });
        }

        let flips = self.positions_to_flip(pos, color);
        if flips.is_empty() {
            return Err(BoardError::InvalidMove { pos, color });
        }

        *self.cell_mut(pos)? = Some(Piece::new(color));
        for &flip_pos in &flips {
            if let Some(piece) = self.cell_mut(flip_pos)? {
                piece.flip();
            }
        }

        Ok(flips)
    }

    /// Count the pieces of `color` on the board.
    pub fn count(&self, color: Color) -> usize {
        self.grid
            .iter()
            .flatten()
            .filter(|cell| matches!(cell, Some(piece) if piece.color() == color))
            .count()
    }

    pub fn count_empty(&self) -> usize {
        self.grid.iter().flatten().filter(|cell| cell.is_none()).count()
    }

    /// The color with more pieces once the game is over.
    /// None while moves remain, or if the game ended in a draw.
    pub fn winner(&self) -> Option<Color> {
        if !self.is_over() {
            return None;
        }

        let black = self.count(Color::Black);
        let white = self.count(Color::White);
        if black > white {
            Some(Color::Black)
        } else if white > black {
            Some(Color::White)
        } else {
            None
        }
    }
}

/// Renders the grid with a piece token per occupied cell and `.` for empty cells.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        utils::format_grid(
            self.cells().map(|(_, cell)| match cell {
                Some(piece) => piece.color().token(),
                None => '.',
            }),
            f,
        )
    }
}

#[derive(Debug, PartialEq, Display, Error)]
pub enum ParseBoardError {
    #[display(fmt = "expected {} cells, found {}", NUM_SPACES, found)]
    WrongLength { found: usize },
    #[display(fmt = "unknown cell symbol {:?}", symbol)]
    UnknownSymbol { symbol: char },
}

/// Parse a board from 64 row-major cell symbols: `B`, `W`, and `.` or `-` for empty.
/// Whitespace is ignored, so a board can be written as eight lines of eight.
impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if symbols.len() != NUM_SPACES {
            return Err(ParseBoardError::WrongLength {
                found: symbols.len(),
            });
        }

        let mut board = Self::empty();
        for (index, symbol) in symbols.into_iter().enumerate() {
            let color = match symbol {
                '.' | '-' => continue,
                'B' | 'b' => Color::Black,
                'W' | 'w' => Color::White,
                _ => return Err(ParseBoardError::UnknownSymbol { symbol }),
            };
            board.grid[index / EDGE_LENGTH][index % EDGE_LENGTH] = Some(Piece::new(color));
        }

        Ok(board)
    }
}
