//! Screen trait and transition type for the board's state machine.

use rand::Rng;

use crate::{GameSession, TickInput};

/// The result of one screen tick.
///
/// Screens return this from [`Screen::tick`] to drive the
/// [`BoardController`](crate::BoardController) state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenTransition {
    /// Stay on the current screen.
    Stay,
    /// Back to setup, resetting the game.
    GoToSetup,
    /// Start a new game.
    GoToPlay,
    /// Show the result of the finished game.
    GoToEnd,
    /// Enter the secret light show.
    GoToParty,
}

/// Trait implemented by each screen in the state machine.
///
/// A screen keeps only its own bookkeeping; the board, colors, cursor and
/// frame live in the [`GameSession`] the controller lends it every tick.
pub trait Screen {
    /// Consumes this tick's button edges and time, repaints the frame, and
    /// reports where to go next.
    fn tick<R: Rng + ?Sized>(
        &mut self,
        session: &mut GameSession,
        input: &TickInput,
        rng: &mut R,
    ) -> ScreenTransition;
}
