//! Keyboard bindings standing in for the five physical buttons.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ledtoe_core::{Button, Buttons};

/// What a key press means to the simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Hold these buttons down for the current poll.
    Press(Buttons),
    /// Leave the simulator.
    Quit,
    /// Unbound key or a release event.
    Ignore,
}

/// Maps a crossterm key event to button levels.
pub fn map_key(key: KeyEvent) -> KeyAction {
    if key.kind == KeyEventKind::Release {
        return KeyAction::Ignore;
    }
    let press = |buttons: &[Button]| KeyAction::Press(Buttons::of(buttons));
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
        KeyCode::Up | KeyCode::Char('w') => press(&[Button::Up]),
        KeyCode::Right | KeyCode::Char('d') => press(&[Button::Right]),
        KeyCode::Down | KeyCode::Char('s') => press(&[Button::Down]),
        KeyCode::Left | KeyCode::Char('a') => press(&[Button::Left]),
        KeyCode::Enter | KeyCode::Char(' ') => press(&[Button::Select]),
        KeyCode::Char('t') => press(&[Button::Left, Button::Right]),
        KeyCode::Char('r') => press(&[Button::Up, Button::Down]),
        _ => KeyAction::Ignore,
    }
}

/// One-line key reference for the status bar.
pub const HELP: &str =
    "arrows/WASD move  Enter/Space select  t two-player/party  r random AI  q quit";
