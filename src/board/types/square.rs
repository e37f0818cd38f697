//! Square type and dark-square indexing.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A square on the board, represented as (rank, file).
///
/// Rank 0 is Red's back rank; rank 7 is Black's. Pieces only ever occupy
/// the 32 dark squares, where `(rank + file) % 2 == 0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub usize, pub usize); // (rank, file)

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub fn new(rank: usize, file: usize) -> Option<Self> {
        if rank < 8 && file < 8 {
            Some(Square(rank, file))
        } else {
            None
        }
    }

    /// Get the rank (0-7, where 0 = Red's back rank)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        self.0
    }

    /// Get the file (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn file(self) -> usize {
        self.1
    }

    /// Returns true if this is a playable (dark) square
    #[inline]
    #[must_use]
    pub const fn is_dark(self) -> bool {
        (self.0 + self.1) % 2 == 0
    }

    /// Dense index over the 32 dark squares (0-31, rank-major).
    ///
    /// Only meaningful for dark squares; light squares share an index with
    /// their left neighbor and must never be stored.
    #[inline]
    #[must_use]
    pub(crate) const fn dark_index(self) -> usize {
        self.0 * 4 + self.1 / 2
    }

    /// Create a square from a dense dark-square index (0-31)
    #[inline]
    #[must_use]
    pub(crate) const fn from_dark_index(idx: usize) -> Self {
        let rank = idx / 4;
        let file = (idx % 4) * 2 + (rank % 2);
        Square(rank, file)
    }

    /// The square offset by `(dr, df)` ranks/files, if it is on the board
    #[must_use]
    pub fn offset(self, dr: isize, df: isize) -> Option<Square> {
        let rank = self.0 as isize + dr;
        let file = self.1 as isize + df;
        if (0..8).contains(&rank) && (0..8).contains(&file) {
            Some(Square(rank as usize, file as usize))
        } else {
            None
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.1 as u8 + b'a') as char, self.0 + 1)
    }
}
