//! Draughts board representation and game logic.
//!
//! Boards are immutable values over the 32 playable dark squares. Move
//! generation enforces the mandatory-capture rule with multi-jump chains,
//! and the search explores the game tree with depth-limited alpha-beta.
//!
//! # Example
//! ```
//! use draughts_engine::board::Board;
//!
//! let board = Board::new();
//! let moves = board.legal_moves();
//! println!("Red has {} opening moves", moves.len());
//! ```

mod apply;
mod builder;
mod error;
mod eval;
mod grid;
mod movegen;
mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use error::{BuilderError, GridError};
pub use state::Board;
pub use types::{Color, Move, Piece, Square};

// Public API - search functions and configuration
pub use search::{
    find_best_move, SearchResult, SearchState, SearchStats, DEFAULT_TT_ENTRIES, WIN_SCORE,
    WIN_THRESHOLD,
};
