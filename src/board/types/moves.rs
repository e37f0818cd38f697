//! Move types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::Square;

/// One turn's action: a single diagonal step or a maximal capture chain.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Move {
    /// One piece moving to an adjacent empty diagonal square.
    Step { from: Square, to: Square },
    /// A chain of one or more jumps by a single piece.
    ///
    /// `path` holds the landing squares in order, starting at the origin;
    /// `captured` holds the squares of the removed enemy pieces, one per
    /// jump, so `captured.len() == path.len() - 1`.
    Jump {
        path: Vec<Square>,
        captured: Vec<Square>,
    },
}

impl Move {
    /// Create a step move
    #[inline]
    #[must_use]
    pub const fn step(from: Square, to: Square) -> Self {
        Move::Step { from, to }
    }

    /// Create a capture chain from its landing path and captured squares
    #[must_use]
    pub fn jump(path: Vec<Square>, captured: Vec<Square>) -> Self {
        debug_assert!(path.len() >= 2);
        debug_assert_eq!(captured.len(), path.len() - 1);
        Move::Jump { path, captured }
    }

    /// Get the source square
    #[inline]
    #[must_use]
    pub fn from(&self) -> Square {
        match self {
            Move::Step { from, .. } => *from,
            Move::Jump { path, .. } => path[0],
        }
    }

    /// Get the final destination square
    #[inline]
    #[must_use]
    pub fn to(&self) -> Square {
        match self {
            Move::Step { to, .. } => *to,
            Move::Jump { path, .. } => path[path.len() - 1],
        }
    }

    /// Returns true if this move captures at least one piece
    #[inline]
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        matches!(self, Move::Jump { .. })
    }

    /// Squares of the pieces this move removes (empty for steps)
    #[must_use]
    pub fn captures(&self) -> &[Square] {
        match self {
            Move::Step { .. } => &[],
            Move::Jump { captured, .. } => captured,
        }
    }

    /// Number of pieces this move removes
    #[inline]
    #[must_use]
    pub fn capture_count(&self) -> usize {
        self.captures().len()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Step { from, to } => write!(f, "{from}-{to}"),
            Move::Jump { path, .. } => {
                for (i, sq) in path.iter().enumerate() {
                    if i > 0 {
                        write!(f, "x")?;
                    }
                    write!(f, "{sq}")?;
                }
                Ok(())
            }
        }
    }
}
