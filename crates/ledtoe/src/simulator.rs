//! Terminal stand-in for the LED board hardware.
//!
//! A tokio interval paces scheduler ticks. Each tick drains pending key
//! events, samples them through the edge latch on the poll period, runs the
//! controller and redraws.

use std::io::{self, Stdout};
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ledtoe_core::{BoardController, Buttons, TickInput};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::time::{Duration, MissedTickBehavior, interval};
use tracing::{debug, error, info, instrument};

use crate::config::AppConfig;
use crate::keymap::{KeyAction, map_key};
use crate::latch::EdgeLatch;
use crate::ui;

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Builds the RNG from the configured seed, or from the OS.
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => {
            debug!(seed, "Seeding RNG");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    }
}

/// Runs the simulator until the user quits, restoring the terminal on exit.
#[instrument(skip(config))]
pub async fn run_simulator(config: AppConfig) -> Result<()> {
    info!("Starting LED board simulator");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = event_loop(&mut terminal, &config).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Simulator loop error");
    }
    res
}

async fn event_loop(terminal: &mut Term, config: &AppConfig) -> Result<()> {
    let started = Instant::now();
    let elapsed_ms = || u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

    let mut board = BoardController::new(*config.game(), seeded_rng(*config.seed()), 0);
    let mut latch = EdgeLatch::new();
    let mut levels = Buttons::NONE;
    let mut last_poll_ms = 0;

    let mut ticks = interval(Duration::from_millis(*config.tick_ms()));
    ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        ticks.tick().await;

        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                match map_key(key) {
                    KeyAction::Quit => {
                        info!("User quit");
                        return Ok(());
                    }
                    KeyAction::Press(buttons) => levels = levels.union(buttons),
                    KeyAction::Ignore => {}
                }
            }
        }

        let now_ms = elapsed_ms();
        if now_ms.saturating_sub(last_poll_ms) >= *config.button_poll_ms() {
            // Keys seen since the last poll count as held for this sample.
            latch.sample(levels);
            levels = Buttons::NONE;
            last_poll_ms = now_ms;
        }

        board.tick(TickInput::new(now_ms, latch.take()));
        terminal.draw(|f| ui::draw(f, board.session()))?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let a: u64 = seeded_rng(Some(5)).random();
        let b: u64 = seeded_rng(Some(5)).random();
        assert_eq!(a, b);
    }
}
