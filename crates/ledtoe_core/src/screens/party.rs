//! Party screen: every cell cycles through random palette colors.

use rand::Rng;
use tracing::info;

use crate::input::Button;
use crate::screen::{Screen, ScreenTransition};
use crate::{GameSession, PaletteColor, Position, TickInput};

/// State for the party screen.
#[derive(Debug, Clone, Copy, Default)]
pub struct PartyScreen;

impl PartyScreen {
    /// Creates the party screen.
    pub fn new() -> Self {
        Self
    }
}

impl Screen for PartyScreen {
    fn tick<R: Rng + ?Sized>(
        &mut self,
        session: &mut GameSession,
        input: &TickInput,
        rng: &mut R,
    ) -> ScreenTransition {
        let interval = session.settings.slow_blink_ms();
        if let Some(pulse) = session.blinker.fire(input.now_ms, interval) {
            if pulse.forced() {
                session.blinker.set_visible(true);
            }
            let lit = session.blinker.visible();
            for pos in Position::ALL {
                session
                    .frame
                    .paint(pos, PaletteColor::random(rng).color(), lit);
            }
        }

        if input.buttons.pressed(Button::Select) {
            info!("Leaving party screen");
            return ScreenTransition::GoToSetup;
        }
        ScreenTransition::Stay
    }
}
