//! End screen: flash the winning line, or celebrate a draw.

use rand::Rng;
use tracing::{debug, info};

use crate::input::Button;
use crate::screen::{Screen, ScreenTransition};
use crate::session::Outcome;
use crate::{Cell, GameSession, Mark, Position, TickInput};

/// State for the end screen.
#[derive(Debug, Clone, Copy, Default)]
pub struct EndScreen {
    firings: u32,
}

impl EndScreen {
    /// Creates the end screen.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of animation firings so far.
    pub fn firings(&self) -> u32 {
        self.firings
    }

    fn animate_draw<R: Rng + ?Sized>(&mut self, session: &mut GameSession, rng: &mut R) {
        self.firings += 1;
        if self.firings > *session.settings.party_time_count() {
            if self.firings == *session.settings.party_time_count() + 1 {
                debug!("Draw flourish");
            }
            session.frame.clear();
            for pos in Position::ALL {
                let mark = if rng.random_bool(0.5) { Mark::X } else { Mark::O };
                let color = session.color_of(mark);
                session.frame.paint(pos, color, true);
            }
            return;
        }

        let lit = session.blinker.visible();
        for pos in Position::ALL {
            let mark = match session.board.get(pos) {
                Cell::Occupied(Mark::X) => Mark::X,
                _ => Mark::O,
            };
            let color = session.color_of(mark);
            session.frame.paint(pos, color, lit);
        }
        session.blinker.toggle();
    }

    fn animate_win(session: &mut GameSession, winner: Mark) {
        let lit = session.blinker.visible();
        let color = session.color_of(winner);
        if let Some(line) = session.winning_line {
            for pos in *line.cells() {
                session.frame.paint(pos, color, lit);
            }
        }
        session.blinker.toggle();
    }
}

impl Screen for EndScreen {
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
            match session.outcome {
                Outcome::Won(winner) => Self::animate_win(session, winner),
                Outcome::Draw | Outcome::Undetermined => self.animate_draw(session, rng),
            }
        }

        if input.buttons.pressed(Button::Select) {
            info!("Leaving end screen");
            return ScreenTransition::GoToSetup;
        }
        ScreenTransition::Stay
    }
}
