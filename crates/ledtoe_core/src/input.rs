//! Button edges consumed by the screens.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// One of the five physical buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, Display)]
pub enum Button {
    /// Up on the direction pad.
    Up,
    /// Right on the direction pad.
    Right,
    /// Down on the direction pad.
    Down,
    /// Left on the direction pad.
    Left,
    /// The select button.
    Select,
}

impl Button {
    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// Set of buttons that went down during one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Buttons(u8);

impl Buttons {
    /// No presses.
    pub const NONE: Buttons = Buttons(0);

    /// Builds a set from the listed buttons.
    pub fn of(buttons: &[Button]) -> Self {
        buttons
            .iter()
            .fold(Self::NONE, |set, button| set.with(*button))
    }

    /// Returns a copy with `button` added.
    pub fn with(self, button: Button) -> Self {
        Self(self.0 | button.bit())
    }

    /// Buttons in either set.
    pub fn union(self, other: Buttons) -> Self {
        Self(self.0 | other.0)
    }

    /// Buttons in `self` but not in `other`.
    pub fn difference(self, other: Buttons) -> Self {
        Self(self.0 & !other.0)
    }

    /// Whether `button` was pressed.
    pub fn pressed(&self, button: Button) -> bool {
        self.0 & button.bit() != 0
    }

    /// Whether both buttons were pressed in the same tick.
    pub fn chord(&self, a: Button, b: Button) -> bool {
        self.pressed(a) && self.pressed(b)
    }

    /// Whether nothing was pressed.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

/// Everything the core reads from the outside world in one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickInput {
    /// Monotonic milliseconds; only differences matter.
    pub now_ms: u64,
    /// Buttons that went down since the previous tick.
    pub buttons: Buttons,
}

impl TickInput {
    /// Creates the input for one tick.
    pub fn new(now_ms: u64, buttons: Buttons) -> Self {
        Self { now_ms, buttons }
    }

    /// A tick with no presses.
    pub fn idle(now_ms: u64) -> Self {
        Self::new(now_ms, Buttons::NONE)
    }
}
