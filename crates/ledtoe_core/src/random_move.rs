//! Uniform random choice among the empty cells.

use crate::{Board, Position};
use rand::Rng;
use tracing::{debug, instrument};

/// Fixed-capacity list of candidate moves in row-major order.
#[derive(Debug, Clone, Copy, Default)]
pub struct MoveList {
    moves: [Option<Position>; 9],
    len: usize,
}

impl MoveList {
    /// Collects the empty cells of `board`.
    pub fn empty_cells(board: &Board) -> Self {
        let mut list = Self::default();
        for pos in board.empty_cells() {
            list.moves[list.len] = Some(pos);
            list.len += 1;
        }
        list
    }

    /// Number of candidates.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Checks if there are no candidates.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the candidate at `index`.
    pub fn get(&self, index: usize) -> Option<Position> {
        self.moves[..self.len].get(index).copied().flatten()
    }
}

/// Picks an empty cell uniformly at random, or `None` on a full board.
#[instrument(skip(board, rng))]
pub fn random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Position> {
    let candidates = MoveList::empty_cells(board);
    if candidates.is_empty() {
        return None;
    }
    let index = rng.random_range(0..candidates.len());
    let chosen = candidates.get(index);
    debug!(candidates = candidates.len(), index, ?chosen, "Random move");
    chosen
}
