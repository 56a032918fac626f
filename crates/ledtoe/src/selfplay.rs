//! Headless engine games for checking the search end to end.

use derive_getters::Getters;
use ledtoe_core::{Board, Mark, best_move, is_terminal, random_move, turn_of, winner_of};
use rand::Rng;
use tracing::{debug, info, instrument};

/// Results over a batch of games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters)]
pub struct Tally {
    x_wins: u32,
    o_wins: u32,
    draws: u32,
}

impl Tally {
    /// Counts one finished board.
    pub fn record(&mut self, board: &Board) {
        match winner_of(board) {
            Some(Mark::X) => self.x_wins += 1,
            Some(Mark::O) => self.o_wins += 1,
            None => self.draws += 1,
        }
    }

    /// Number of games counted.
    pub fn games(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}

/// Plays one game with the engine as X; O is the engine or a random mover.
#[instrument(skip(rng))]
pub fn play_game<R: Rng + ?Sized>(random_o: bool, rng: &mut R) -> Board {
    let mut board = Board::new();
    while !is_terminal(&board) {
        let mover = turn_of(&board);
        let choice = match mover {
            Mark::O if random_o => random_move(&board, rng),
            _ => best_move(&board),
        };
        let Some(pos) = choice else {
            break;
        };
        // Both movers only return empty cells.
        if board.place(pos, mover).is_err() {
            break;
        }
        debug!(%mover, cell = pos.label(), "Self-play move");
    }
    board
}

/// Plays `games` games, calling `on_game` with each final board.
#[instrument(skip(rng, on_game))]
pub fn run_selfplay<R: Rng + ?Sized>(
    games: u32,
    random_o: bool,
    rng: &mut R,
    mut on_game: impl FnMut(u32, &Board),
) -> Tally {
    let mut tally = Tally::default();
    for game in 1..=games {
        let board = play_game(random_o, rng);
        tally.record(&board);
        on_game(game, &board);
    }
    info!(?tally, "Self-play finished");
    tally
}
