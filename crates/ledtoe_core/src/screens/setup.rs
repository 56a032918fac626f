//! Setup screen: pick each side's color and the opponent.
//!
//! The cursor sits on one of two indicator cells: X's color at the top-left,
//! O's at the top-right. The edited side blinks. Select starts a game in which
//! the human plays the side under the cursor; with two-player mode on, both
//! indicators blink and nobody is the AI.

use rand::Rng;
use tracing::{debug, info, instrument};

use crate::input::Button;
use crate::screen::{Screen, ScreenTransition};
use crate::session::{O_SLOT, RANDOM_INDICATOR, RANDOM_SLOT, X_SLOT};
use crate::{GameSession, Mark, TickInput};

/// State for the setup screen. All of it lives in the session.
#[derive(Debug, Clone, Copy, Default)]
pub struct SetupScreen;

impl SetupScreen {
    /// Creates the setup screen.
    pub fn new() -> Self {
        Self
    }

    /// Applies at most one button action; returns a transition on select.
    #[instrument(skip_all, fields(buttons = ?input.buttons))]
    fn handle_buttons(session: &mut GameSession, input: &TickInput) -> Option<ScreenTransition> {
        let buttons = input.buttons;
        let on_x = session.cursor.col() == X_SLOT.col();
        let on_o = session.cursor.col() == O_SLOT.col();

        if buttons.chord(Button::Left, Button::Right) {
            session.two_player = true;
            session.blinker.trigger();
            info!("Two-player mode enabled");
        } else if (on_o || session.two_player) && buttons.pressed(Button::Left) {
            session.cursor = X_SLOT;
            session.two_player = false;
            session.blinker.trigger();
            session.blinker.set_visible(false);
            debug!("Editing X color");
        } else if (on_x || session.two_player) && buttons.pressed(Button::Right) {
            session.cursor = O_SLOT;
            session.two_player = false;
            session.blinker.trigger();
            session.blinker.set_visible(false);
            debug!("Editing O color");
        } else if buttons.chord(Button::Up, Button::Down) {
            session.random_ai = !session.random_ai;
            session
                .frame
                .paint(RANDOM_SLOT, RANDOM_INDICATOR.color(), session.random_ai);
            info!(random_ai = session.random_ai, "Toggled random AI");
        } else if buttons.pressed(Button::Down) {
            let side = session.editing();
            session.colors.cycle_backward(side);
            session.blinker.trigger();
            session.blinker.set_visible(true);
        } else if buttons.pressed(Button::Up) {
            let side = session.editing();
            session.colors.cycle_forward(side);
            session.blinker.trigger();
            session.blinker.set_visible(true);
        } else if buttons.pressed(Button::Select) {
            // The human takes the side under the cursor; the AI opens when that is O.
            session.ai_turn = !(on_x || session.two_player);
            info!(
                human = %session.editing(),
                ai_first = session.ai_turn,
                two_player = session.two_player,
                random_ai = session.random_ai,
                "Starting game"
            );
            return Some(ScreenTransition::GoToPlay);
        }
        None
    }

    fn blink(session: &mut GameSession, input: &TickInput) {
        let interval = *session.settings.blink_ms();
        let Some(pulse) = session.blinker.fire(input.now_ms, interval) else {
            return;
        };

        if pulse.forced() && !session.two_player {
            // The side not being edited stays solid.
            let resting = session.editing().opponent();
            let slot = slot_of(resting);
            let color = session.color_of(resting);
            session.frame.paint(slot, color, true);
        }

        let lit = session.blinker.visible();
        if session.two_player {
            for mark in [Mark::X, Mark::O] {
                let color = session.color_of(mark);
                session.frame.paint(slot_of(mark), color, lit);
            }
        } else {
            let side = session.editing();
            let color = session.color_of(side);
            session.frame.paint(slot_of(side), color, lit);
        }
        session.blinker.toggle();
    }
}

fn slot_of(mark: Mark) -> crate::Position {
    match mark {
        Mark::X => X_SLOT,
        Mark::O => O_SLOT,
    }
}

impl Screen for SetupScreen {
    fn tick<R: Rng + ?Sized>(
        &mut self,
        session: &mut GameSession,
        input: &TickInput,
        _rng: &mut R,
    ) -> ScreenTransition {
        if let Some(transition) = Self::handle_buttons(session, input) {
            return transition;
        }
        Self::blink(session, input);
        ScreenTransition::Stay
    }
}
