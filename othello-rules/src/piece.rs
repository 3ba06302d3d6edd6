//! The two disc colors and the [`Piece`] that carries one.

use derive_more::{Display, Error};
use std::fmt::{self, Formatter};

/// One of the two sides in a game.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    Black,
    White,
}

impl Default for Color {
    /// Gets the color that moves first (black).
    fn default() -> Self {
        Self::Black
    }
}

impl std::ops::Not for Color {
    type Output = Self;

    /// Gets the other color.
    fn not(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

impl Color {
    /// Both colors, black first.
    pub const ALL: [Color; 2] = [Color::Black, Color::White];

    /// The single-character token used when rendering a board.
    #[inline]
    pub fn token(self) -> char {
        match self {
            Color::Black => 'B',
            Color::White => 'W',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => f.write_str("black"),
            Color::White => f.write_str("white"),
        }
    }
}

#[derive(Debug, PartialEq, Display, Error)]
#[display(fmt = "invalid color string")]
pub struct ParseColorError;

/// Parse a color from its name ("black", "White") or its token ("B", "w").
impl std::str::FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "black" | "b" => Ok(Color::Black),
            "white" | "w" => Ok(Color::White),
            _ => Err(ParseColorError),
        }
    }
}

/// A single disc on the board.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Piece {
    color: Color,
}

impl Piece {
    #[inline]
    pub fn new(color: Color) -> Self {
        Self { color }
    }

    #[inline]
    pub fn color(self) -> Color {
        self.color
    }

    /// The color this piece is not.
    #[inline]
    pub fn opp_color(self) -> Color {
        !self.color
    }

    /// Turn this piece over in place.
    #[inline]
    pub fn flip(&mut self) {
        self.color = !self.color;
    }
}

impl From<Color> for Piece {
    fn from(color: Color) -> Self {
        Self::new(color)
    }
}

/// Renders as "B" or "W".
impl fmt::Display for Piece {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.color.token())
    }
}
