//! `othello-rules` is a small, safe rules engine for Othello (Reversi).
//!
//! The crate is built around two types:
//!
//!  - [`Piece`] is a single disc on the board. It knows its [`Color`] and can be flipped.
//!  - [`Board`] owns an 8x8 grid of optional pieces and implements all of the game logic:
//!    occupancy, move legality, move application with flip propagation, and game-over detection.
//!
//! Coordinates are zero-indexed `(row, col)` [`Position`]s. Moves are only ever made through
//! [`Board::place_piece`], which validates before it mutates.
//!
//! ```
//! use othello_rules::{Board, Color, Position};
//!
//! let mut board = Board::new();
//! assert_eq!(board.valid_moves(Color::Black).len(), 4);
//!
//! let flipped = board.place_piece(Position::new(2, 3), Color::Black).unwrap();
//! assert_eq!(flipped, vec![Position::new(3, 3)]);
//! assert_eq!(board.count(Color::Black), 4);
//! ```

pub mod test_utils;

mod board;
mod piece;
mod position;
mod utils;

pub use board::*;
pub use piece::*;
pub use position::*;

/// The number of spaces on one edge of an Othello board.
pub const EDGE_LENGTH: usize = 8;

/// The number of spaces on an Othello board.
pub const NUM_SPACES: usize = 64;
