//! Core domain types for the board.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use strum::{Display as StrumDisplay, EnumIter};
use tracing::instrument;

/// Number of rows (and columns) on the board.
pub const SIZE: usize = 3;

/// Mark placed by a player.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, StrumDisplay,
)]
pub enum Mark {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nothing placed yet.
    #[default]
    Empty,
    /// Cell holds a mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }
}

/// A `(row, col)` coordinate on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display("({row},{col})")]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// The top-left cell, where every cursor starts.
    pub const ORIGIN: Position = Position { row: 0, col: 0 };

    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position { row: 0, col: 0 },
        Position { row: 0, col: 1 },
        Position { row: 0, col: 2 },
        Position { row: 1, col: 0 },
        Position { row: 1, col: 1 },
        Position { row: 1, col: 2 },
        Position { row: 2, col: 0 },
        Position { row: 2, col: 1 },
        Position { row: 2, col: 2 },
    ];

    /// Creates a position, or `None` when either coordinate is off the board.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        (row < SIZE && col < SIZE).then_some(Self { row, col })
    }

    /// Creates a position from a row-major index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row, 0 at the top.
    pub fn row(self) -> usize {
        self.row
    }

    /// Column, 0 at the left.
    pub fn col(self) -> usize {
        self.col
    }

    /// Row-major index (0-8).
    pub fn index(self) -> usize {
        self.row * SIZE + self.col
    }

    /// Label for logs and the terminal status line.
    pub fn label(self) -> &'static str {
        match (self.row, self.col) {
            (0, 0) => "Top-left",
            (0, 1) => "Top-center",
            (0, 2) => "Top-right",
            (1, 0) => "Middle-left",
            (1, 1) => "Center",
            (1, 2) => "Middle-right",
            (2, 0) => "Bottom-left",
            (2, 1) => "Bottom-center",
            _ => "Bottom-right",
        }
    }
}

/// Error from a checked board placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// The target cell already holds a mark.
    #[display("Cell {_0} is already occupied")]
    Occupied(#[error(not(source))] Position),
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from rows of `'X'`, `'O'` and anything else for empty.
    ///
    /// Handy for fixtures: `Board::from_rows(["XXX", "OO-", "---"])`.
    pub fn from_rows(rows: [&str; SIZE]) -> Self {
        let mut board = Self::new();
        for (row, line) in rows.iter().enumerate() {
            for (col, ch) in line.chars().take(SIZE).enumerate() {
                board.cells[row][col] = match ch {
                    'X' | 'x' => Cell::Occupied(Mark::X),
                    'O' | 'o' => Cell::Occupied(Mark::O),
                    _ => Cell::Empty,
                };
            }
        }
        board
    }

    /// Returns the cell at `pos`.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.row][pos.col]
    }

    /// Overwrites the cell at `pos` without checking occupancy.
    ///
    /// The search uses this to place and retract marks.
    pub fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.row][pos.col] = cell;
    }

    /// Places `mark` at `pos`, refusing occupied cells.
    #[instrument(skip(self))]
    pub fn place(&mut self, pos: Position, mark: Mark) -> Result<(), BoardError> {
        if !self.is_empty(pos) {
            return Err(BoardError::Occupied(pos));
        }
        self.set(pos, Cell::Occupied(mark));
        Ok(())
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Iterates over the empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL.into_iter().filter(|&pos| self.is_empty(pos))
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| **cell == Cell::Occupied(mark))
            .count()
    }

    /// Returns a copy with every X turned into O and vice versa.
    pub fn swapped(&self) -> Self {
        let mut board = *self;
        for pos in Position::ALL {
            if let Cell::Occupied(mark) = self.get(pos) {
                board.set(pos, Cell::Occupied(mark.opponent()));
            }
        }
        board
    }

    /// Formats the board as three lines of `X`, `O` and `-`.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for (row, cells) in self.cells.iter().enumerate() {
            for cell in cells {
                result.push(match cell {
                    Cell::Empty => '-',
                    Cell::Occupied(Mark::X) => 'X',
                    Cell::Occupied(Mark::O) => 'O',
                });
            }
            if row < SIZE - 1 {
                result.push('\n');
            }
        }
        result
    }
}
