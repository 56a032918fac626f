//! Rule evaluation for tic-tac-toe boards.

mod draw;
mod turn;
mod win;

pub use draw::{O_WINS, X_WINS, is_full, is_terminal, score};
pub use turn::turn_of;
pub use win::{WinningLine, winner_of, winning_line_of};
