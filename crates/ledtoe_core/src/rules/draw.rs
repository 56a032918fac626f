//! Terminal-state and scoring logic.

use super::win::winner_of;
use crate::{Board, Mark};

/// Score of a board X has won.
pub const X_WINS: i32 = 10;

/// Score of a board O has won.
pub const O_WINS: i32 = -10;

/// Checks if every cell holds a mark.
pub fn is_full(board: &Board) -> bool {
    board.empty_cells().next().is_none()
}

/// Checks if the game is over, by a win or a full board.
pub fn is_terminal(board: &Board) -> bool {
    winner_of(board).is_some() || is_full(board)
}

/// Evaluates a board from X's point of view: +10, -10 or 0.
pub fn score(board: &Board) -> i32 {
    match winner_of(board) {
        Some(Mark::X) => X_WINS,
        Some(Mark::O) => O_WINS,
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_not_terminal() {
        let board = Board::new();
        assert!(!is_full(&board));
        assert!(!is_terminal(&board));
        assert_eq!(score(&board), 0);
    }

    #[test]
    fn test_draw_detection() {
        let board = Board::from_rows(["XOX", "OXX", "OXO"]);
        assert!(is_full(&board));
        assert!(is_terminal(&board));
        assert_eq!(winner_of(&board), None);
        assert_eq!(score(&board), 0);
    }

    #[test]
    fn test_win_is_terminal_before_full() {
        let board = Board::from_rows(["OX-", "OX-", "-X-"]);
        assert!(!is_full(&board));
        assert!(is_terminal(&board));
        assert_eq!(score(&board), X_WINS);
        assert_eq!(score(&board.swapped()), O_WINS);
    }
}
