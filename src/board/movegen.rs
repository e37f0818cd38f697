//! Legal move generation.
//!
//! Captures are mandatory: if any capture chain exists for the side to
//! move, only maximal chains are legal. Chain search is a small per-piece
//! depth-first exploration over a scratch copy of the cells, with jumped
//! pieces removed as the chain grows.

use super::state::CELLS;
use super::types::{Color, Move, Piece, Square};
use super::Board;

/// Diagonal direction table. Fixed order keeps generation deterministic:
/// the first two entries are Red's forward diagonals, the last two Black's.
const DIAGONALS: [(isize, isize); 4] = [(1, -1), (1, 1), (-1, -1), (-1, 1)];

/// Directions a piece may move and capture in. Men go forward only; kings
/// use all four diagonals.
fn directions(side: Color, piece: Piece) -> &'static [(isize, isize)] {
    match (piece, side) {
        (Piece::King, _) => &DIAGONALS,
        (Piece::Man, Color::Red) => &DIAGONALS[..2],
        (Piece::Man, Color::Black) => &DIAGONALS[2..],
    }
}

impl Board {
    /// Legal moves for the side to move.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        self.legal_moves_for(self.side_to_move())
    }

    /// Legal moves for `side`: every maximal capture chain if any capture
    /// exists, otherwise every single step. An empty result means `side`
    /// has no move and loses.
    #[must_use]
    pub fn legal_moves_for(&self, side: Color) -> Vec<Move> {
        let jumps = self.jump_moves(side);
        if !jumps.is_empty() {
            return jumps;
        }
        self.step_moves(side)
    }

    fn step_moves(&self, side: Color) -> Vec<Move> {
        let mut moves = Vec::new();
        for (from, piece) in self.pieces_of(side) {
            for &(dr, df) in directions(side, piece) {
                if let Some(to) = from.offset(dr, df) {
                    if self.piece_at(to).is_none() {
                        moves.push(Move::step(from, to));
                    }
                }
            }
        }
        moves
    }

    fn jump_moves(&self, side: Color) -> Vec<Move> {
        let mut moves = Vec::new();
        for (from, piece) in self.pieces_of(side) {
            let mut cells = self.cells;
            cells[from.dark_index()] = None;
            let mut path = vec![from];
            let mut captured = Vec::new();
            extend_chain(&mut cells, side, piece, from, &mut path, &mut captured, &mut moves);
        }
        moves
    }
}

/// Depth-first extension of a capture chain from `cur`, pushing every
/// maximal chain into `out`.
///
/// `cells` is a scratch copy with the moving piece and all pieces captured
/// so far removed; `path` holds the landing squares visited (a chain may
/// not land on the same square twice). A man reaching its promotion rank
/// stops jumping: it only gains king movement from the following turn, and
/// a man has no onward jump from its own promotion rank.
fn extend_chain(
    cells: &mut [Option<(Color, Piece)>; CELLS],
    side: Color,
    piece: Piece,
    cur: Square,
    path: &mut Vec<Square>,
    captured: &mut Vec<Square>,
    out: &mut Vec<Move>,
) {
    let promoted = piece == Piece::Man && cur.rank() == side.promotion_rank();
    let mut extended = false;
    if !promoted {
        for &(dr, df) in directions(side, piece) {
            let Some(over) = cur.offset(dr, df) else { continue };
            let Some(to) = cur.offset(2 * dr, 2 * df) else { continue };
            let holds_enemy =
                matches!(cells[over.dark_index()], Some((c, _)) if c == side.opponent());
            if !holds_enemy || cells[to.dark_index()].is_some() || path.contains(&to) {
                continue;
            }

            let removed = cells[over.dark_index()].take();
            path.push(to);
            captured.push(over);
            extend_chain(cells, side, piece, to, path, captured, out);
            captured.pop();
            path.pop();
            cells[over.dark_index()] = removed;
            extended = true;
        }
    }
    if !extended && !captured.is_empty() {
        out.push(Move::jump(path.clone(), captured.clone()));
    }
}
