//! Play screen: alternate turns between the human cursor and the AI.

use rand::Rng;
use tracing::{debug, info, instrument, warn};

use crate::input::Button;
use crate::rules::{is_terminal, turn_of, winner_of, winning_line_of};
use crate::screen::{Screen, ScreenTransition};
use crate::session::Outcome;
use crate::{Direction, GameSession, Mark, Position, TickInput, advance, best_move, random_move};

/// Direction buttons in the order they are checked.
const DIRECTION_BUTTONS: [(Button, Direction); 4] = [
    (Button::Down, Direction::Down),
    (Button::Up, Direction::Up),
    (Button::Right, Direction::Right),
    (Button::Left, Direction::Left),
];

/// State for the play screen.
#[derive(Debug, Clone, Copy)]
pub struct PlayScreen {
    new_turn: bool,
    mover: Mark,
    ai_ready_at_ms: u64,
}

impl Default for PlayScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayScreen {
    /// Creates a play screen with the first turn pending.
    pub fn new() -> Self {
        Self {
            new_turn: true,
            mover: Mark::X,
            ai_ready_at_ms: 0,
        }
    }

    /// Side currently on move.
    pub fn mover(&self) -> Mark {
        self.mover
    }

    /// Resolves a pending turn: ends the game or positions the cursor.
    #[instrument(skip(self, session, rng))]
    fn begin_turn<R: Rng + ?Sized>(
        &mut self,
        session: &mut GameSession,
        now_ms: u64,
        rng: &mut R,
    ) -> Option<ScreenTransition> {
        self.new_turn = false;
        debug!(board = %session.board.display(), "New turn");

        if is_terminal(&session.board) {
            session.outcome = match winner_of(&session.board) {
                Some(mark) => Outcome::Won(mark),
                None => Outcome::Draw,
            };
            session.winning_line = winning_line_of(&session.board);
            session.blinker.trigger();
            info!(outcome = ?session.outcome, "Game over");
            return Some(ScreenTransition::GoToEnd);
        }

        self.mover = turn_of(&session.board);
        let choice = if session.ai_turn {
            self.ai_ready_at_ms = now_ms + *session.settings.ai_pause_ms();
            if session.random_ai {
                random_move(&session.board, rng)
            } else {
                best_move(&session.board)
            }
        } else {
            session.board.empty_cells().next()
        };
        session.cursor = choice.unwrap_or(Position::ORIGIN);
        debug!(mover = %self.mover, ai = session.ai_turn, cursor = %session.cursor, "Turn ready");
        None
    }

    /// Lights the cursor cell in the mover's color and places the mark.
    fn commit(&mut self, session: &mut GameSession) -> bool {
        let pos = session.cursor;
        match session.board.place(pos, self.mover) {
            Ok(()) => {
                let color = session.color_of(self.mover);
                session.frame.paint(pos, color, true);
                self.new_turn = true;
                session.blinker.trigger();
                info!(mover = %self.mover, cell = pos.label(), "Mark placed");
                true
            }
            Err(err) => {
                warn!(error = %err, "Ignoring placement");
                false
            }
        }
    }

    fn play_ai(&mut self, session: &mut GameSession, now_ms: u64) {
        if now_ms < self.ai_ready_at_ms {
            return;
        }
        if self.commit(session) {
            session.ai_turn = false;
        } else {
            // Keep the AI on move and choose again next tick.
            warn!(cell = %session.cursor, "AI placement refused");
            self.new_turn = true;
        }
    }

    fn handle_buttons(
        &mut self,
        session: &mut GameSession,
        input: &TickInput,
    ) -> Option<ScreenTransition> {
        let buttons = input.buttons;
        if buttons.chord(Button::Left, Button::Right) {
            info!("Party mode");
            session.blinker.trigger();
            return Some(ScreenTransition::GoToParty);
        }

        if let Some((_, direction)) = DIRECTION_BUTTONS
            .iter()
            .find(|(button, _)| buttons.pressed(*button))
        {
            if let Some(next) = advance(&session.board, session.cursor, *direction) {
                session.frame.clear_cell(session.cursor);
                session.cursor = next;
                let color = session.color_of(self.mover);
                session.frame.paint(next, color, true);
            }
            session.blinker.trigger();
        } else if buttons.pressed(Button::Select) && self.commit(session) && !session.two_player {
            session.ai_turn = true;
        }
        None
    }

    fn blink(&self, session: &mut GameSession, now_ms: u64) {
        let interval = *session.settings.blink_ms();
        let Some(pulse) = session.blinker.fire(now_ms, interval) else {
            return;
        };
        if pulse.forced() {
            session.blinker.set_visible(true);
        }
        let color = session.color_of(self.mover);
        let lit = session.blinker.visible();
        session.frame.paint(session.cursor, color, lit);
        session.blinker.toggle();
    }
}

impl Screen for PlayScreen {
    fn tick<R: Rng + ?Sized>(
        &mut self,
        session: &mut GameSession,
        input: &TickInput,
        rng: &mut R,
    ) -> ScreenTransition {
        if self.new_turn
            && let Some(transition) = self.begin_turn(session, input.now_ms, rng)
        {
            return transition;
        }

        if session.ai_turn {
            self.play_ai(session, input.now_ms);
        } else if let Some(transition) = self.handle_buttons(session, input) {
            return transition;
        }

        self.blink(session, input.now_ms);
        ScreenTransition::Stay
    }
}
