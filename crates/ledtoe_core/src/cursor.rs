//! Cursor movement for button navigation.

use crate::types::SIZE;
use crate::{Board, Position};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};
use tracing::{instrument, trace};

/// Direction pad button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, Display)]
pub enum Direction {
    /// Up.
    Up,
    /// Right.
    Right,
    /// Down.
    Down,
    /// Left.
    Left,
}

/// Steps one cell in `direction`, wrapping across the whole grid.
///
/// Up and Down run down the columns and spill into the next column; Right and
/// Left run along the rows and spill into the next row. Each direction visits
/// all nine cells before returning to the start.
pub fn step(pos: Position, direction: Direction) -> Position {
    let (mut row, mut col) = (pos.row(), pos.col());
    let last = SIZE - 1;
    match direction {
        Direction::Up => {
            if row == 0 {
                row = last;
                col = if col == last { 0 } else { col + 1 };
            } else {
                row -= 1;
            }
        }
        Direction::Right => {
            if col == last {
                col = 0;
                row = if row == last { 0 } else { row + 1 };
            } else {
                col += 1;
            }
        }
        Direction::Down => {
            if row == last {
                row = 0;
                col = if col == last { 0 } else { col + 1 };
            } else {
                row += 1;
            }
        }
        Direction::Left => {
            if col == 0 {
                col = last;
                row = if row == last { 0 } else { row + 1 };
            } else {
                col -= 1;
            }
        }
    }
    Position::ALL[row * SIZE + col]
}

/// Moves the cursor in `direction` until it lands on an empty cell.
///
/// Returns `None` when a full cycle finds no empty cell. The starting cell is
/// the last candidate, so a lone empty cell under the cursor is returned.
#[instrument(skip(board))]
pub fn advance(board: &Board, cursor: Position, direction: Direction) -> Option<Position> {
    let mut candidate = cursor;
    for _ in 0..Position::ALL.len() {
        candidate = step(candidate, direction);
        trace!(%candidate, "Cursor candidate");
        if board.is_empty(candidate) {
            return Some(candidate);
        }
    }
    None
}
