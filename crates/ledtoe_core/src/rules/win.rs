//! Win detection logic.

use crate::{Board, Cell, Mark, Position};
use serde::{Deserialize, Serialize};

/// The three cells forming a completed row, column or diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine([Position; 3]);

impl WinningLine {
    /// Returns the cells of the line in order along it.
    pub fn cells(&self) -> &[Position; 3] {
        &self.0
    }

    /// Checks whether `pos` is part of the line.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }
}

const fn at(row: usize, col: usize) -> Position {
    Position::ALL[row * 3 + col]
}

// Rows and columns interleave, then the two diagonals.
const LINES: [[Position; 3]; 8] = [
    [at(0, 0), at(0, 1), at(0, 2)],
    [at(0, 0), at(1, 0), at(2, 0)],
    [at(1, 0), at(1, 1), at(1, 2)],
    [at(0, 1), at(1, 1), at(2, 1)],
    [at(2, 0), at(2, 1), at(2, 2)],
    [at(0, 2), at(1, 2), at(2, 2)],
    [at(0, 0), at(1, 1), at(2, 2)],
    [at(0, 2), at(1, 1), at(2, 0)],
];

fn first_run(board: &Board) -> Option<(Mark, [Position; 3])> {
    LINES.into_iter().find_map(|[a, b, c]| match board.get(a) {
        Cell::Occupied(mark) if board.get(b) == board.get(a) && board.get(c) == board.get(a) => {
            Some((mark, [a, b, c]))
        }
        _ => None,
    })
}

/// Returns the mark with three in a row, or `None`.
pub fn winner_of(board: &Board) -> Option<Mark> {
    first_run(board).map(|(mark, _)| mark)
}

/// Returns the cells of the run [`winner_of`] reports.
pub fn winning_line_of(board: &Board) -> Option<WinningLine> {
    first_run(board).map(|(_, cells)| WinningLine(cells))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(winner_of(&board), None);
        assert_eq!(winning_line_of(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = Board::from_rows(["XXX", "OO-", "---"]);
        assert_eq!(winner_of(&board), Some(Mark::X));
        assert_eq!(
            winning_line_of(&board).map(|line| *line.cells()),
            Some([at(0, 0), at(0, 1), at(0, 2)])
        );
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = Board::from_rows(["XXO", "XO-", "O--"]);
        assert_eq!(winner_of(&board), Some(Mark::O));
        assert_eq!(
            winning_line_of(&board).map(|line| *line.cells()),
            Some([at(0, 2), at(1, 1), at(2, 0)])
        );
    }

    #[test]
    fn test_middle_column() {
        let board = Board::from_rows(["XO-", "XO-", "-OX"]);
        let line = winning_line_of(&board).unwrap();
        assert_eq!(winner_of(&board), Some(Mark::O));
        assert!(line.contains(at(2, 1)));
        assert!(!line.contains(at(0, 0)));
    }

    #[test]
    fn test_double_line_reports_first_in_scan_order() {
        // Row 0 and column 0 both complete; row 0 is scanned first.
        let board = Board::from_rows(["XXX", "XOO", "XOO"]);
        assert_eq!(
            winning_line_of(&board).map(|line| *line.cells()),
            Some([at(0, 0), at(0, 1), at(0, 2)])
        );
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = Board::from_rows(["XX-", "---", "---"]);
        assert_eq!(winner_of(&board), None);
    }
}
