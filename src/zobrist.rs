//! Zobrist hashing for draughts positions.
//!
//! Provides incrementally-updatable 64-bit position hashes for the
//! transposition table.

use once_cell::sync::Lazy;
use rand::prelude::*;

use crate::board::{Color, Piece, Square};

pub(crate) struct ZobristKeys {
    // piece_keys[color][piece_kind][dark_square_index]
    piece_keys: [[[u64; 32]; 2]; 2],
    pub(crate) black_to_move_key: u64,
}

impl ZobristKeys {
    fn new() -> Self {
        let mut rng = StdRng::seed_from_u64(987654321_u64); // Fixed seed for reproducibility
        let mut piece_keys = [[[0; 32]; 2]; 2];

        for color in &mut piece_keys {
            for kind in color.iter_mut() {
                for key in kind.iter_mut() {
                    *key = rng.gen();
                }
            }
        }

        let black_to_move_key = rng.gen();

        ZobristKeys {
            piece_keys,
            black_to_move_key,
        }
    }

    #[inline]
    pub(crate) fn piece_key(&self, color: Color, piece: Piece, square: Square) -> u64 {
        self.piece_keys[color.index()][piece.index()][square.dark_index()]
    }
}

// Initialize Zobrist keys lazily and globally
pub(crate) static ZOBRIST: Lazy<ZobristKeys> = Lazy::new(ZobristKeys::new);
