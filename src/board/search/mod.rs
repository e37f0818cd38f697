//! Search module implementing fixed-depth alpha-beta.
//!
//! Features:
//! - Fail-soft negamax with alpha-beta pruning
//! - Transposition table with depth-preferred replacement
//! - Move ordering (table move first, then longer capture chains)
//! - Principal variation threaded back up the call stack
//! - Deterministic first-in-generation-order tie-breaking at the root
//!
//! The search is single-threaded and purely synchronous; every recursion
//! frame owns its own alpha/beta window and borrows its own board, so
//! sibling branches interact only through returned scores.

use std::cmp::Reverse;

use crate::tt::{BoundType, TranspositionTable};

use super::{Board, Move};

/// Hard cap on recursion depth.
pub(crate) const MAX_PLY: u32 = 128;

/// Score of a position already won. Dominates any heuristic value, so the
/// search always prefers an actual win over a favorable-looking
/// continuation.
pub const WIN_SCORE: i32 = 1_000_000;

/// Scores at or above this magnitude denote a forced win or loss.
pub const WIN_THRESHOLD: i32 = WIN_SCORE - MAX_PLY as i32;

const INFINITY: i32 = i32::MAX / 2;

/// Default transposition table capacity in entries.
pub const DEFAULT_TT_ENTRIES: usize = 1 << 20;

/// Statistics accumulated over one search
#[derive(Clone, Copy, Debug, Default)]
pub struct SearchStats {
    /// Nodes visited below the root
    pub nodes: u64,
    /// Transposition-table cutoffs taken
    pub table_hits: u64,
}

/// Reusable search state: the transposition table and statistics.
///
/// Keeping one state across searches lets later plies of a game reuse
/// cached results from earlier ones.
pub struct SearchState {
    pub(crate) table: Option<TranspositionTable>,
    pub stats: SearchStats,
}

impl SearchState {
    /// State with a transposition table of `tt_entries` slots.
    #[must_use]
    pub fn new(tt_entries: usize) -> Self {
        SearchState {
            table: Some(TranspositionTable::new(tt_entries)),
            stats: SearchStats::default(),
        }
    }

    /// State with caching disabled. The pruned search then returns exactly
    /// the score of an unpruned fixed-depth minimax over the same tree.
    #[must_use]
    pub fn without_table() -> Self {
        SearchState {
            table: None,
            stats: SearchStats::default(),
        }
    }
}

impl Default for SearchState {
    fn default() -> Self {
        SearchState::new(DEFAULT_TT_ENTRIES)
    }
}

/// Outcome of a root search
#[derive(Clone, Debug)]
pub struct SearchResult {
    /// Best move, or `None` when the side to move has no legal move
    pub best_move: Option<Move>,
    /// Score from the point of view of the side to move at the root
    pub score: i32,
    /// Principal variation, starting with `best_move`
    pub pv: Vec<Move>,
    /// Nodes visited
    pub nodes: u64,
}

/// Search `board` to `depth` plies and return the best move for the side
/// to move, with its score and principal variation.
///
/// Score ties resolve to the first move in generation order, so repeated
/// calls return identical results. A depth of 0 is treated as 1: the root
/// always searches at least one ply.
///
/// Calling this on a terminal position is not an error: it returns no move
/// and the losing score. Callers normally detect terminal states first.
pub fn find_best_move(board: &Board, state: &mut SearchState, depth: u32) -> SearchResult {
    let depth = depth.clamp(1, MAX_PLY);
    state.stats = SearchStats::default();

    let moves = board.legal_moves();
    if moves.is_empty() {
        return SearchResult {
            best_move: None,
            score: -WIN_SCORE,
            pv: Vec::new(),
            nodes: 0,
        };
    }

    let mut searcher = Searcher { state };
    let mut alpha = -INFINITY;
    let mut best_score = -INFINITY;
    let mut best_move = None;
    let mut best_pv = Vec::new();

    // Root moves stay in generation order: the tie-breaking contract, not
    // an ordering heuristic, decides among equal moves here.
    for mv in &moves {
        let child = board.apply(mv);
        let mut child_pv = Vec::new();
        let score = -searcher.alphabeta(&child, depth - 1, 1, -INFINITY, -alpha, &mut child_pv);
        if score > best_score {
            best_score = score;
            best_move = Some(mv.clone());
            best_pv.clear();
            best_pv.push(mv.clone());
            best_pv.append(&mut child_pv);
        }
        if score > alpha {
            alpha = score;
        }
    }

    SearchResult {
        best_move,
        score: best_score,
        pv: best_pv,
        nodes: searcher.state.stats.nodes,
    }
}

struct Searcher<'a> {
    state: &'a mut SearchState,
}

impl Searcher<'_> {
    /// Fail-soft negamax alpha-beta. Scores are from the perspective of the
    /// side to move at this node; `pv` receives the principal variation
    /// below it.
    fn alphabeta(
        &mut self,
        board: &Board,
        depth: u32,
        ply: u32,
        mut alpha: i32,
        beta: i32,
        pv: &mut Vec<Move>,
    ) -> i32 {
        self.state.stats.nodes += 1;

        // Terminal check comes before the depth check: a side with no legal
        // move has lost regardless of remaining depth. Nearer losses score
        // worse, so the engine converts won games instead of stalling.
        let moves = board.legal_moves();
        if moves.is_empty() {
            return -(WIN_SCORE - ply as i32);
        }
        if depth == 0 {
            return board.evaluate(board.side_to_move());
        }

        let key = board.hash();
        let mut table_move = None;
        if let Some(table) = &self.state.table {
            if let Some(entry) = table.probe(key) {
                table_move = entry.best_move.clone();
                if entry.depth >= depth {
                    let score = from_table_score(entry.score, ply);
                    let cutoff = match entry.bound {
                        BoundType::Exact => true,
                        BoundType::LowerBound => score >= beta,
                        BoundType::UpperBound => score <= alpha,
                    };
                    if cutoff {
                        self.state.stats.table_hits += 1;
                        if let Some(mv) = &table_move {
                            pv.push(mv.clone());
                        }
                        return score;
                    }
                }
            }
        }

        let moves = order_moves(moves, table_move.as_ref());
        let mut best_score = -INFINITY;
        let mut best_move = None;
        let mut raised_alpha = false;

        for mv in &moves {
            let child = board.apply(mv);
            let mut child_pv = Vec::new();
            let score = -self.alphabeta(&child, depth - 1, ply + 1, -beta, -alpha, &mut child_pv);

            if score > best_score {
                best_score = score;
                best_move = Some(mv.clone());
                pv.clear();
                pv.push(mv.clone());
                pv.append(&mut child_pv);
            }
            if score > alpha {
                alpha = score;
                raised_alpha = true;
                if alpha >= beta {
                    // Beta cutoff: the opponent already has a better option
                    // elsewhere, so the remaining siblings cannot matter.
                    break;
                }
            }
        }

        if let Some(table) = &mut self.state.table {
            let bound = if best_score >= beta {
                BoundType::LowerBound
            } else if raised_alpha {
                BoundType::Exact
            } else {
                BoundType::UpperBound
            };
            table.store(key, depth, to_table_score(best_score, ply), bound, best_move);
        }
        best_score
    }
}

/// Order moves for better pruning: the table move first, then longer
/// capture chains. The sort is stable, so generation order breaks ties.
/// Ordering affects only how fast the window narrows, never the result.
fn order_moves(mut moves: Vec<Move>, table_move: Option<&Move>) -> Vec<Move> {
    moves.sort_by_key(|mv| {
        let table_bonus = if table_move == Some(mv) { 1_000 } else { 0 };
        Reverse(table_bonus + mv.capture_count() as i32)
    });
    moves
}

/// Win scores are stored relative to the node ("win in N plies from here")
/// and converted back to root-relative distances on probe.
fn to_table_score(score: i32, ply: u32) -> i32 {
    if score >= WIN_THRESHOLD {
        score + ply as i32
    } else if score <= -WIN_THRESHOLD {
        score - ply as i32
    } else {
        score
    }
}

fn from_table_score(score: i32, ply: u32) -> i32 {
    if score >= WIN_THRESHOLD {
        score - ply as i32
    } else if score <= -WIN_THRESHOLD {
        score + ply as i32
    } else {
        score
    }
}
