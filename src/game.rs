//! Game playout: repeatedly search and apply until a terminal position.
//!
//! This is the thin driving layer between the search core and the
//! command-line front end. Both sides are played by the engine at the same
//! fixed depth, mirroring how the solver writes out a finished game.

use log::{debug, info};

use crate::board::{find_best_move, Board, Move, SearchState};

/// A completed (or ply-limited) playout: the initial board, every move, and
/// the board after each move.
#[derive(Clone, Debug)]
pub struct GameRecord {
    pub initial: Board,
    pub moves: Vec<Move>,
    pub boards: Vec<Board>,
}

impl GameRecord {
    /// Number of plies actually played
    #[must_use]
    pub fn plies(&self) -> usize {
        self.moves.len()
    }

    /// The last position reached (the initial board if nothing was played)
    #[must_use]
    pub fn final_board(&self) -> &Board {
        self.boards.last().unwrap_or(&self.initial)
    }

    /// Serialize the record as grid notation: the initial board and each
    /// successive board, blank-line separated.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.initial.to_grid());
        out.push('\n');
        for board in &self.boards {
            out.push_str(&board.to_grid());
            out.push('\n');
        }
        out
    }
}

/// Play `initial` forward with fixed-depth search for both sides until the
/// side to move has no legal move, or until `max_plies` moves have been
/// played.
///
/// The caller's `state` is reused across plies, so positions cached while
/// searching one move speed up the following ones.
pub fn play_out(initial: Board, depth: u32, max_plies: u32, state: &mut SearchState) -> GameRecord {
    let mut record = GameRecord {
        initial: initial.clone(),
        moves: Vec::new(),
        boards: Vec::new(),
    };

    let mut board = initial;
    for ply in 0..max_plies {
        let result = find_best_move(&board, state, depth);
        let Some(mv) = result.best_move else {
            info!(
                "{} has no legal move and loses after {ply} plies",
                board.side_to_move()
            );
            return record;
        };
        debug!(
            "ply {}: {} plays {} (score {}, {} nodes)",
            ply + 1,
            board.side_to_move(),
            mv,
            result.score,
            result.nodes
        );
        board = board.apply(&mv);
        record.moves.push(mv);
        record.boards.push(board.clone());
    }
    info!("stopping after the configured limit of {max_plies} plies");
    record
}
