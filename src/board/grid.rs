//! Plain-text grid notation.
//!
//! A position is eight rows of eight characters, the first row being rank 7
//! (Black's starting side). `r`/`R` are a red man/king, `b`/`B` a black
//! man/king, `.` an empty square.

use super::error::GridError;
use super::types::{Piece, Square};
use super::Board;

const EMPTY_CHAR: char = '.';

impl Board {
    /// Parse a board from grid notation. Red is to move, per the convention
    /// that red opens a fresh game.
    ///
    /// Returns an error on wrong dimensions, unknown symbols, pieces on
    /// light squares, or men on their own promotion rank.
    pub fn from_grid(text: &str) -> Result<Board, GridError> {
        let mut rows: Vec<&str> = text.lines().map(|l| l.trim_end_matches('\r')).collect();
        while rows.last().is_some_and(|r| r.trim().is_empty()) {
            rows.pop();
        }
        if rows.len() != 8 {
            return Err(GridError::WrongRowCount { found: rows.len() });
        }

        let mut board = Board::empty();
        for (row_idx, row) in rows.iter().enumerate() {
            let chars: Vec<char> = row.chars().collect();
            if chars.len() != 8 {
                return Err(GridError::WrongRowLength {
                    row: row_idx,
                    found: chars.len(),
                });
            }
            let rank = 7 - row_idx;
            for (file, &c) in chars.iter().enumerate() {
                if c == EMPTY_CHAR {
                    continue;
                }
                let (color, piece) =
                    Piece::from_grid_char(c).ok_or(GridError::InvalidSymbol {
                        row: row_idx,
                        column: file,
                        symbol: c,
                    })?;
                let square = Square(rank, file);
                if !square.is_dark() {
                    return Err(GridError::LightSquarePiece { square });
                }
                if piece == Piece::Man && rank == color.promotion_rank() {
                    return Err(GridError::ManOnPromotionRank { square });
                }
                board.set_piece(square, color, piece);
            }
        }
        Ok(board)
    }

    /// Serialize to grid notation: eight newline-terminated rows, rank 7
    /// first.
    #[must_use]
    pub fn to_grid(&self) -> String {
        let mut out = String::with_capacity(72);
        for rank in (0..8).rev() {
            for file in 0..8 {
                match self.piece_at(Square(rank, file)) {
                    Some((color, piece)) => out.push(piece.to_grid_char(color)),
                    None => out.push(EMPTY_CHAR),
                }
            }
            out.push('\n');
        }
        out
    }
}
