//! End-to-end flows through the board controller.

use ledtoe_core::{
    Board, BoardController, Button, Buttons, Cell, GameSettings, Mark, Mode, Outcome,
    PaletteColor, Position, TickInput,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn at(row: usize, col: usize) -> Position {
    Position::new(row, col).unwrap()
}

struct Harness {
    board: BoardController<StdRng>,
    now_ms: u64,
}

impl Harness {
    fn new() -> Self {
        Self {
            board: BoardController::new(GameSettings::default(), StdRng::seed_from_u64(7), 0),
            now_ms: 0,
        }
    }

    fn press(&mut self, buttons: &[Button]) {
        self.now_ms += 10;
        self.board
            .tick(TickInput::new(self.now_ms, Buttons::of(buttons)));
    }

    fn idle(&mut self) {
        self.press(&[]);
    }

    /// Presses select every tick until the game ends.
    fn select_until_end(&mut self) {
        for _ in 0..30 {
            if self.board.mode() == Mode::End {
                return;
            }
            self.press(&[Button::Select]);
        }
        panic!("game did not finish");
    }

    fn board_state(&self) -> Board {
        *self.board.session().board()
    }
}

#[test]
fn test_select_at_setup_starts_game() {
    let mut h = Harness::new();
    assert_eq!(h.board.mode(), Mode::Setup);
    h.press(&[Button::Select]);
    assert_eq!(h.board.mode(), Mode::Play);
    assert!(!*h.board.session().ai_turn());
}

#[test]
fn test_first_empty_cell_human_loses_to_engine() {
    let mut h = Harness::new();
    h.press(&[Button::Select]);
    h.select_until_end();

    assert_eq!(h.board_state(), Board::from_rows(["XXO", "XO-", "O--"]));
    assert_eq!(*h.board.session().outcome(), Outcome::Won(Mark::O));
    assert_eq!(
        h.board.session().winning_line().map(|line| *line.cells()),
        Some([at(0, 2), at(1, 1), at(2, 0)])
    );

    // End screen flashes the line in O's color.
    h.idle();
    let lamp = h.board.frame().lamp(at(1, 1));
    assert_eq!(lamp.color, PaletteColor::Blue.color());

    h.press(&[Button::Select]);
    assert_eq!(h.board.mode(), Mode::Setup);
    assert_eq!(h.board_state(), Board::new());
    assert_eq!(*h.board.session().outcome(), Outcome::Undetermined);
}

#[test]
fn test_engine_opens_when_human_takes_o() {
    let mut h = Harness::new();
    h.press(&[Button::Right]);
    h.press(&[Button::Select]);
    assert!(*h.board.session().ai_turn());

    h.idle();
    assert_eq!(h.board_state().get(at(0, 0)), Cell::Occupied(Mark::X));
    assert!(!*h.board.session().ai_turn());

    // Human O then gets the cursor on the first empty cell.
    h.idle();
    assert_eq!(*h.board.session().cursor(), at(0, 1));
}

#[test]
fn test_engine_answers_center_reply() {
    let mut h = Harness::new();
    h.press(&[Button::Right]);
    h.press(&[Button::Select]);
    h.idle();
    h.idle();

    // Walk the cursor from (0,1) to the center and take it.
    h.press(&[Button::Down]);
    assert_eq!(*h.board.session().cursor(), at(1, 1));
    h.press(&[Button::Select]);
    assert_eq!(h.board_state(), Board::from_rows(["X--", "-O-", "---"]));

    h.idle();
    assert_eq!(h.board_state(), Board::from_rows(["XX-", "-O-", "---"]));
}

#[test]
fn test_party_from_play_and_back() {
    let mut h = Harness::new();
    h.press(&[Button::Select]);
    h.press(&[Button::Left, Button::Right]);
    assert_eq!(h.board.mode(), Mode::Party);

    h.idle();
    assert_eq!(h.board.frame().lit_count(), 9);

    h.press(&[Button::Select]);
    assert_eq!(h.board.mode(), Mode::Setup);
}

#[test]
fn test_two_player_game_alternates_without_engine() {
    let mut h = Harness::new();
    h.press(&[Button::Left, Button::Right]);
    assert!(*h.board.session().two_player());
    h.press(&[Button::Select]);
    assert!(!*h.board.session().ai_turn());

    h.select_until_end();
    assert_eq!(h.board_state(), Board::from_rows(["XOX", "OXO", "X--"]));
    assert_eq!(*h.board.session().outcome(), Outcome::Won(Mark::X));
    assert_eq!(
        h.board.session().winning_line().map(|line| *line.cells()),
        Some([at(0, 2), at(1, 1), at(2, 0)])
    );

    // Two-player mode survives the return to setup.
    h.press(&[Button::Select]);
    assert_eq!(h.board.mode(), Mode::Setup);
    assert!(*h.board.session().two_player());
}

#[test]
fn test_colors_persist_and_random_ai_resets() {
    let mut h = Harness::new();
    h.press(&[Button::Up]);
    h.press(&[Button::Up, Button::Down]);
    assert_eq!(h.board.session().colors().entry(Mark::X), PaletteColor::Green);
    assert!(*h.board.session().random_ai());

    h.press(&[Button::Select]);
    assert!(*h.board.session().random_ai());
    h.select_until_end();
    assert_ne!(*h.board.session().outcome(), Outcome::Undetermined);

    h.press(&[Button::Select]);
    assert_eq!(h.board.mode(), Mode::Setup);
    assert_eq!(h.board.session().colors().entry(Mark::X), PaletteColor::Green);
    assert!(!*h.board.session().random_ai());
    assert_eq!(
        h.board.frame().lamp(ledtoe_core::X_SLOT).color,
        PaletteColor::Green.color()
    );
}

#[test]
fn test_color_cycling_never_collides() {
    let mut h = Harness::new();
    for _ in 0..20 {
        h.press(&[Button::Up]);
        let colors = *h.board.session().colors();
        assert_ne!(colors.entry(Mark::X), colors.entry(Mark::O));
    }
    h.press(&[Button::Right]);
    for _ in 0..20 {
        h.press(&[Button::Down]);
        let colors = *h.board.session().colors();
        assert_ne!(colors.entry(Mark::X), colors.entry(Mark::O));
    }
}
