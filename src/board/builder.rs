//! Fluent builder for constructing draughts positions.
//!
//! Used mainly by tests to set up positions piece by piece rather than
//! writing grid strings.
//!
//! # Example
//! ```
//! use draughts_engine::board::{BoardBuilder, Color, Piece, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square(2, 2), Color::Red, Piece::Man)
//!     .piece(Square(3, 3), Color::Black, Piece::Man)
//!     .side_to_move(Color::Red)
//!     .build()
//!     .unwrap();
//! assert_eq!(board.piece_count(Color::Red), 1);
//! ```

use super::error::BuilderError;
use super::types::{Color, Piece, Square};
use super::Board;

/// A fluent builder for `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Color, Piece)>,
    side_to_move: Color,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder with Red to move.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            pieces: Vec::new(),
            side_to_move: Color::Red,
        }
    }

    /// Place a piece, replacing any piece already on that square.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self.pieces.push((square, color, piece));
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Build the board, validating piece placement.
    pub fn build(self) -> Result<Board, BuilderError> {
        let mut board = Board::empty();
        for (square, color, piece) in self.pieces {
            if !square.is_dark() {
                return Err(BuilderError::LightSquarePiece { square });
            }
            if piece == Piece::Man && square.rank() == color.promotion_rank() {
                return Err(BuilderError::ManOnPromotionRank { square });
            }
            board.set_piece(square, color, piece);
        }
        if self.side_to_move == Color::Black {
            board.flip_side();
        }
        Ok(board)
    }
}
