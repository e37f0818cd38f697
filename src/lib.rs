pub mod board;
pub mod game;
pub mod tt;
pub mod zobrist;

pub use board::{Board, Color, Move, Piece, Square};
pub use tt::TranspositionTable;
