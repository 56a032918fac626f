//! Board controller: the state machine driving the screens.

use derive_getters::Getters;
use rand::Rng;
use tracing::{debug, info, instrument, trace};

use crate::screen::{Screen, ScreenTransition};
use crate::screens::{EndScreen, PartyScreen, PlayScreen, SetupScreen};
use crate::{Frame, GameSession, GameSettings, Mode, TickInput};

/// Active screen in the state machine.
#[derive(Debug, Clone, Copy)]
enum ActiveScreen {
    Setup(SetupScreen),
    Play(PlayScreen),
    End(EndScreen),
    Party(PartyScreen),
}

/// Controller that owns the session, the active screen and the RNG.
///
/// Call [`BoardController::tick`] once per scheduler tick and hand the
/// returned frame to the LED driver.
#[derive(Debug, Getters)]
pub struct BoardController<R> {
    session: GameSession,
    #[getter(skip)]
    screen: ActiveScreen,
    #[getter(skip)]
    rng: R,
}

impl<R: Rng> BoardController<R> {
    /// Creates a controller showing the setup screen.
    #[instrument(skip(rng))]
    pub fn new(settings: GameSettings, rng: R, now_ms: u64) -> Self {
        info!("Creating BoardController");
        Self {
            session: GameSession::new(settings, now_ms),
            screen: ActiveScreen::Setup(SetupScreen::new()),
            rng,
        }
    }

    /// Current top-level mode.
    pub fn mode(&self) -> Mode {
        self.session.mode
    }

    /// Illumination computed by the last tick.
    pub fn frame(&self) -> &Frame {
        &self.session.frame
    }

    /// Runs the active screen for one tick and applies its transition.
    pub fn tick(&mut self, input: TickInput) -> &Frame {
        if !input.buttons.is_empty() {
            trace!(mode = %self.session.mode, buttons = ?input.buttons, "Buttons pressed");
        }
        let transition = match &mut self.screen {
            ActiveScreen::Setup(s) => s.tick(&mut self.session, &input, &mut self.rng),
            ActiveScreen::Play(s) => s.tick(&mut self.session, &input, &mut self.rng),
            ActiveScreen::End(s) => s.tick(&mut self.session, &input, &mut self.rng),
            ActiveScreen::Party(s) => s.tick(&mut self.session, &input, &mut self.rng),
        };
        self.apply_transition(transition, input.now_ms);
        &self.session.frame
    }

    /// Applies a screen transition.
    #[instrument(skip(self))]
    fn apply_transition(&mut self, transition: ScreenTransition, now_ms: u64) {
        if transition != ScreenTransition::Stay {
            debug!(from = %self.session.mode, ?transition, "Applying screen transition");
        }
        match transition {
            ScreenTransition::Stay => {}

            ScreenTransition::GoToSetup => {
                info!("Navigating to Setup");
                self.session.enter_setup(now_ms);
                self.screen = ActiveScreen::Setup(SetupScreen::new());
            }

            ScreenTransition::GoToPlay => {
                info!(ai_first = self.session.ai_turn, "Navigating to Play");
                self.session.enter_play();
                self.screen = ActiveScreen::Play(PlayScreen::new());
            }

            ScreenTransition::GoToEnd => {
                info!(outcome = ?self.session.outcome, "Navigating to End");
                self.session.enter_end();
                self.screen = ActiveScreen::End(EndScreen::new());
            }

            ScreenTransition::GoToParty => {
                info!("Navigating to Party");
                self.session.enter_party();
                self.screen = ActiveScreen::Party(PartyScreen::new());
            }
        }
    }
}
