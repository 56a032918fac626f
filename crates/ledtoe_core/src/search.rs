//! Exhaustive minimax search with alpha/beta pruning.
//!
//! `maximize` plays for X and `minimize` for O. They call each other
//! unconditionally, and the mark placed at each level is re-derived from the
//! piece counts with [`turn_of`], so every level places the side that is
//! actually on move.

use crate::rules::{is_terminal, score, turn_of};
use crate::{Board, Cell, Mark, Position};
use tracing::{debug, instrument};

/// Lower bound the top-level search starts from.
pub const ALPHA_FLOOR: i32 = -30_000;

/// Upper bound the top-level search starts from.
pub const BETA_CEILING: i32 = 30_000;

/// Outcome of one search call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Value of the board from X's point of view, clamped to the window.
    pub score: i32,
    /// Move that achieved it, `None` on terminal boards or when nothing beat the window.
    pub best: Option<Position>,
}

impl SearchResult {
    fn new(score: i32, best: Option<Position>) -> Self {
        Self { score, best }
    }
}

/// Minimax searcher. Owns the scratch board and a node counter.
#[derive(Debug, Clone)]
struct Searcher {
    board: Board,
    nodes: u64,
}

impl Searcher {
    fn place_for_side_to_move(&mut self, pos: Position) {
        let mover = turn_of(&self.board);
        self.board.set(pos, Cell::Occupied(mover));
    }

    fn retract(&mut self, pos: Position) {
        self.board.set(pos, Cell::Empty);
    }

    fn maximize(&mut self, mut alpha: i32, beta: i32) -> SearchResult {
        self.nodes += 1;
        if is_terminal(&self.board) {
            return SearchResult::new(score(&self.board), None);
        }
        let mut best = None;
        for pos in Position::ALL {
            if !self.board.is_empty(pos) {
                continue;
            }
            self.place_for_side_to_move(pos);
            let child = self.minimize(alpha, beta);
            self.retract(pos);
            if child.score >= beta {
                // The cutoff move is not recorded; the earlier best stands.
                return SearchResult::new(beta, best);
            }
            if child.score > alpha {
                alpha = child.score;
                best = Some(pos);
            }
        }
        SearchResult::new(alpha, best)
    }

    fn minimize(&mut self, alpha: i32, mut beta: i32) -> SearchResult {
        self.nodes += 1;
        if is_terminal(&self.board) {
            return SearchResult::new(score(&self.board), None);
        }
        let mut best = None;
        for pos in Position::ALL {
            if !self.board.is_empty(pos) {
                continue;
            }
            self.place_for_side_to_move(pos);
            let child = self.maximize(alpha, beta);
            self.retract(pos);
            if child.score <= alpha {
                return SearchResult::new(alpha, best);
            }
            if child.score < beta {
                beta = child.score;
                best = Some(pos);
            }
        }
        SearchResult::new(beta, best)
    }
}

/// Runs `maximize` from `board` with the given window.
pub fn maximize(board: &Board, alpha: i32, beta: i32) -> SearchResult {
    Searcher {
        board: *board,
        nodes: 0,
    }
    .maximize(alpha, beta)
}

/// Runs `minimize` from `board` with the given window.
pub fn minimize(board: &Board, alpha: i32, beta: i32) -> SearchResult {
    Searcher {
        board: *board,
        nodes: 0,
    }
    .minimize(alpha, beta)
}

/// Searches the full game tree and returns the side to move's best cell.
///
/// Returns `None` only for terminal boards.
#[instrument(skip(board), fields(board = %board.display()))]
pub fn best_move(board: &Board) -> Option<Position> {
    let mut searcher = Searcher {
        board: *board,
        nodes: 0,
    };
    let mover = turn_of(board);
    let result = match mover {
        Mark::X => searcher.maximize(ALPHA_FLOOR, BETA_CEILING),
        Mark::O => searcher.minimize(ALPHA_FLOOR, BETA_CEILING),
    };
    debug!(
        %mover,
        score = result.score,
        best = ?result.best,
        nodes = searcher.nodes,
        "Search complete"
    );
    result.best
}
