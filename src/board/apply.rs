//! Applying moves: value-semantics board transitions.

use super::types::{Move, Piece};
use super::Board;

impl Board {
    /// Apply a move produced by `legal_moves` for this exact board,
    /// returning the successor position.
    ///
    /// Captured pieces are removed, the mover is relocated, a man ending
    /// its turn on its promotion rank becomes a king, and the side to move
    /// flips. The hash is updated incrementally.
    ///
    /// Applying a move that `legal_moves` did not produce for this board is
    /// a contract violation and fails an assertion; tolerating it would
    /// silently corrupt the board invariants.
    #[must_use]
    pub fn apply(&self, mv: &Move) -> Board {
        let side = self.side_to_move();
        let from = mv.from();
        let to = mv.to();

        let mut next = self.clone();
        let (color, piece) = match next.clear_square(from) {
            Some(occupant) => occupant,
            None => panic!("illegal move applied: no piece on {from}"),
        };
        assert_eq!(color, side, "illegal move applied: {from} is not {side}'s piece");

        for &square in mv.captures() {
            let removed = next.clear_square(square);
            debug_assert!(
                matches!(removed, Some((c, _)) if c == side.opponent()),
                "illegal move applied: no enemy piece on {square}"
            );
        }

        debug_assert!(next.piece_at(to).is_none(), "illegal move applied: {to} occupied");
        let kind = if piece == Piece::Man && to.rank() == side.promotion_rank() {
            Piece::King
        } else {
            piece
        };
        next.set_piece(to, color, kind);
        next.flip_side();
        next
    }
}
