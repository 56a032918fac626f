//! Desktop host for the LED tic-tac-toe board.
//!
//! Supplies what the board's hardware would: a monotonic clock, debounced
//! button edges, an RNG seed and somewhere to show the lamps. The game itself
//! lives in [`ledtoe_core`].
//!
//! # Architecture
//!
//! - **Config**: TOML settings with defaults for every field
//! - **Latch**: raw key levels to one-shot button edges
//! - **Simulator**: tokio tick loop rendering the board with ratatui
//! - **Self-play**: headless engine games and a result tally
//!
//! # Example
//!
//! ```
//! use ledtoe::{AppConfig, run_selfplay, seeded_rng};
//!
//! let config = AppConfig::from_toml("tick_ms = 5\n[game]\nblink_ms = 100").unwrap();
//! assert_eq!(*config.tick_ms(), 5);
//!
//! let tally = run_selfplay(1, false, &mut seeded_rng(Some(1)), |_, _| {});
//! assert_eq!(*tally.draws(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod keymap;
mod latch;
mod selfplay;
mod simulator;
mod ui;

pub use config::{AppConfig, ConfigError};
pub use keymap::{HELP, KeyAction, map_key};
pub use latch::EdgeLatch;
pub use selfplay::{Tally, play_game, run_selfplay};
pub use simulator::{run_simulator, seeded_rng};
pub use ui::{draw, lamp_color, status_line};
