//! Shared game state owned by the controller and lent to each screen.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use strum::Display;
use tracing::{debug, instrument};

use crate::rules::WinningLine;
use crate::{Blinker, Board, Color, Frame, GameSettings, Mark, PaletteColor, PlayerColors, Position};

/// Top-level screen the board is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Mode {
    /// Choosing colors, opponent and AI style.
    Setup,
    /// A game in progress.
    Play,
    /// Showing the result.
    End,
    /// Secret light show.
    Party,
}

/// Result of the current game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Outcome {
    /// The game has not finished.
    #[default]
    Undetermined,
    /// A side completed a line.
    Won(Mark),
    /// The board filled without a line.
    Draw,
}

/// Setup indicator for X's color; the cursor sits here while X is edited.
pub const X_SLOT: Position = Position::ALL[0];

/// Setup indicator for O's color; the cursor sits here while O is edited.
pub const O_SLOT: Position = Position::ALL[2];

/// Setup indicator showing whether the AI plays random moves.
pub const RANDOM_SLOT: Position = Position::ALL[7];

/// Color of the random-AI indicator.
pub const RANDOM_INDICATOR: PaletteColor = PaletteColor::Pink;

/// Everything the screens share: board, colors, flags, cursor and frame.
#[derive(Debug, Clone, Getters)]
pub struct GameSession {
    pub(crate) mode: Mode,
    pub(crate) board: Board,
    pub(crate) colors: PlayerColors,
    pub(crate) two_player: bool,
    pub(crate) ai_turn: bool,
    pub(crate) random_ai: bool,
    pub(crate) outcome: Outcome,
    pub(crate) winning_line: Option<WinningLine>,
    pub(crate) cursor: Position,
    pub(crate) frame: Frame,
    pub(crate) blinker: Blinker,
    pub(crate) settings: GameSettings,
}

impl GameSession {
    /// Creates a session sitting on the setup screen.
    #[instrument]
    pub fn new(settings: GameSettings, now_ms: u64) -> Self {
        let mut session = Self {
            mode: Mode::Setup,
            board: Board::new(),
            colors: PlayerColors::default(),
            two_player: false,
            ai_turn: false,
            random_ai: false,
            outcome: Outcome::Undetermined,
            winning_line: None,
            cursor: Position::ORIGIN,
            frame: Frame::new(),
            blinker: Blinker::new(now_ms),
            settings,
        };
        session.enter_setup(now_ms);
        session
    }

    /// Side whose color the setup screen is editing.
    pub fn editing(&self) -> Mark {
        if self.cursor.col() == X_SLOT.col() {
            Mark::X
        } else {
            Mark::O
        }
    }

    /// Color assigned to `mark`.
    pub fn color_of(&self, mark: Mark) -> Color {
        self.colors.color(mark)
    }

    fn reset_board(&mut self) {
        self.board = Board::new();
        self.frame.clear();
        self.outcome = Outcome::Undetermined;
        self.winning_line = None;
    }

    /// Resets for the setup screen. Colors and two-player mode carry over.
    #[instrument(skip(self))]
    pub(crate) fn enter_setup(&mut self, now_ms: u64) {
        self.reset_board();
        self.mode = Mode::Setup;
        self.cursor = X_SLOT;
        self.random_ai = false;
        self.ai_turn = false;
        self.blinker = Blinker::new(now_ms);
        let (x, o) = (self.color_of(Mark::X), self.color_of(Mark::O));
        self.frame.paint(O_SLOT, o, true);
        self.frame.paint(X_SLOT, x, true);
        debug!(two_player = self.two_player, "Setup screen ready");
    }

    /// Resets the board for a fresh game. `ai_turn` has already been chosen.
    #[instrument(skip(self))]
    pub(crate) fn enter_play(&mut self) {
        self.reset_board();
        self.mode = Mode::Play;
        self.cursor = Position::ORIGIN;
        self.blinker.trigger();
    }

    /// Switches to the result screen, keeping the board and outcome.
    pub(crate) fn enter_end(&mut self) {
        self.mode = Mode::End;
        self.cursor = Position::ORIGIN;
    }

    /// Switches to the light show.
    pub(crate) fn enter_party(&mut self) {
        self.mode = Mode::Party;
        self.cursor = Position::ORIGIN;
    }
}
