//! Piece and color types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Checker piece kinds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Piece {
    Man,
    King,
}

impl Piece {
    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Piece::Man => 0,
            Piece::King => 1,
        }
    }

    /// Parse a piece from its grid symbol (`r`, `R`, `b`, `B`).
    #[must_use]
    pub fn from_grid_char(c: char) -> Option<(Color, Piece)> {
        match c {
            'r' => Some((Color::Red, Piece::Man)),
            'R' => Some((Color::Red, Piece::King)),
            'b' => Some((Color::Black, Piece::Man)),
            'B' => Some((Color::Black, Piece::King)),
            _ => None,
        }
    }

    /// Grid symbol for a piece of `color` (kings uppercase).
    #[inline]
    #[must_use]
    pub const fn to_grid_char(self, color: Color) -> char {
        match (color, self) {
            (Color::Red, Piece::Man) => 'r',
            (Color::Red, Piece::King) => 'R',
            (Color::Black, Piece::Man) => 'b',
            (Color::Black, Piece::King) => 'B',
        }
    }

    /// Material value in centipiece units.
    ///
    /// Kings are worth two men: full diagonal mobility roughly doubles a
    /// piece's usefulness in the endgame.
    #[inline]
    #[must_use]
    pub const fn value(self) -> i32 {
        match self {
            Piece::Man => 100,
            Piece::King => 200,
        }
    }
}

/// Checker colors. Red moves first in a fresh game.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    Red,
    Black,
}

impl Color {
    /// Both colors in index order (Red=0, Black=1)
    pub const BOTH: [Color; 2] = [Color::Red, Color::Black];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Color::Red => 0,
            Color::Black => 1,
        }
    }

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }

    /// Rank on which this color's men promote (7 for Red, 0 for Black)
    #[inline]
    #[must_use]
    pub const fn promotion_rank(self) -> usize {
        match self {
            Color::Red => 7,
            Color::Black => 0,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Red => write!(f, "Red"),
            Color::Black => write!(f, "Black"),
        }
    }
}
