//! Static evaluation: weighted material plus light positional terms.

use super::types::{Color, Square};
use super::Board;

/// Bonus for a piece controlling the central region.
const CENTER_BONUS: i32 = 50;

/// Bonus for a piece on file a or h, where it cannot be jumped.
const EDGE_BONUS: i32 = 15;

/// The central region: a plus-shaped block around the middle of the board.
fn is_center(square: Square) -> bool {
    let (rank, file) = (square.rank(), square.file());
    ((2..=5).contains(&rank) && (3..=4).contains(&file))
        || ((3..=4).contains(&rank) && (2..=5).contains(&file))
}

fn is_edge(square: Square) -> bool {
    square.file() == 0 || square.file() == 7
}

impl Board {
    /// Static score from `perspective`'s point of view; higher is better.
    ///
    /// Material dominates (man 100, king 200), with small bonuses for
    /// center control and for edge squares. Every term is a signed
    /// difference between the two sides, so the score negates when the
    /// perspective flips, and rotating the board 180 degrees with colors
    /// swapped negates it as well.
    #[must_use]
    pub fn evaluate(&self, perspective: Color) -> i32 {
        let mut score = 0;
        for (idx, cell) in self.cells.iter().enumerate() {
            let Some((color, piece)) = cell else { continue };
            let square = Square::from_dark_index(idx);
            let mut value = piece.value();
            if is_center(square) {
                value += CENTER_BONUS;
            }
            if is_edge(square) {
                value += EDGE_BONUS;
            }
            score += if *color == perspective { value } else { -value };
        }
        score
    }
}
