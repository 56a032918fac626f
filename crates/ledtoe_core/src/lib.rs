//! Game logic for a 3x3 LED tic-tac-toe board.
//!
//! The board plays against a human with an exhaustive minimax search, against
//! a random mover, or hosts two humans. Input is five buttons; output is an
//! on/off RGB triple per cell.
//!
//! # Architecture
//!
//! - **Rules**: board model, win/draw detection, scoring, side to move
//! - **Search**: minimax with alpha/beta pruning, plus a random mover
//! - **Cursor**: directional navigation over the empty cells
//! - **Screens**: Setup, Play, End and Party, driven by [`BoardController`]
//!
//! # Example
//!
//! ```
//! use ledtoe_core::{BoardController, Button, Buttons, GameSettings, Mode, TickInput};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut board = BoardController::new(GameSettings::default(), StdRng::seed_from_u64(1), 0);
//! board.tick(TickInput::new(10, Buttons::of(&[Button::Select])));
//! assert_eq!(board.mode(), Mode::Play);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod animation;
mod color;
mod controller;
mod cursor;
mod frame;
mod input;
mod random_move;
pub mod rules;
mod screen;
mod screens;
pub mod search;
mod session;
mod settings;
mod types;

pub use animation::{Blinker, Pulse};
pub use color::{Color, PaletteColor, PlayerColors};
pub use controller::BoardController;
pub use cursor::{Direction, advance, step};
pub use frame::{Frame, Lamp};
pub use input::{Button, Buttons, TickInput};
pub use random_move::{MoveList, random_move};
pub use rules::{WinningLine, is_terminal, score, turn_of, winner_of, winning_line_of};
pub use screen::{Screen, ScreenTransition};
pub use screens::{EndScreen, PartyScreen, PlayScreen, SetupScreen};
pub use search::{SearchResult, best_move};
pub use session::{GameSession, Mode, O_SLOT, Outcome, RANDOM_SLOT, X_SLOT};
pub use settings::GameSettings;
pub use types::{Board, BoardError, Cell, Mark, Position};
