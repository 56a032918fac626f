//! Illumination buffer handed to the LED drive routine every tick.

use crate::types::SIZE;
use crate::{Color, Position};
use serde::{Deserialize, Serialize};

/// Desired state of one cell's LED.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Lamp {
    /// Whether the LED is driven at all.
    pub lit: bool,
    /// Channels to drive when lit.
    pub color: Color,
}

impl Lamp {
    /// Color actually emitted: the lamp's color when lit, black otherwise.
    pub fn emitted(&self) -> Color {
        if self.lit { self.color } else { Color::BLACK }
    }
}

/// 3x3 grid of lamps. Cells keep their last painted state until repainted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Frame {
    lamps: [[Lamp; SIZE]; SIZE],
}

impl Frame {
    /// Creates a dark frame.
    pub fn new() -> Self {
        Self::default()
    }

    /// Paints `pos` with `color`, lit or dark.
    pub fn paint(&mut self, pos: Position, color: Color, lit: bool) {
        self.lamps[pos.row()][pos.col()] = Lamp { lit, color };
    }

    /// Turns `pos` off and forgets its color.
    pub fn clear_cell(&mut self, pos: Position) {
        self.paint(pos, Color::BLACK, false);
    }

    /// Turns every cell off.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Returns the lamp at `pos`.
    pub fn lamp(&self, pos: Position) -> Lamp {
        self.lamps[pos.row()][pos.col()]
    }

    /// Rows of lamps, top to bottom.
    pub fn rows(&self) -> &[[Lamp; SIZE]; SIZE] {
        &self.lamps
    }

    /// Number of lit cells.
    pub fn lit_count(&self) -> usize {
        self.lamps.iter().flatten().filter(|lamp| lamp.lit).count()
    }
}
