//! Side-to-move resolution.

use crate::{Board, Mark};

/// Returns whose move it is, derived from how many marks each side has placed.
///
/// X moves whenever the counts are equal, so X always opens. Boards where the
/// counts differ by more than one never arise from legal play.
pub fn turn_of(board: &Board) -> Mark {
    if board.count(Mark::X) > board.count(Mark::O) {
        Mark::O
    } else {
        Mark::X
    }
}
