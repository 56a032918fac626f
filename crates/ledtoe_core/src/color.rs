//! The seven-color palette and the colors assigned to each side.

use crate::Mark;
use rand::Rng;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};
use tracing::{debug, instrument};

/// An on/off RGB triple, as driven onto one cell's LED.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Color {
    /// Red channel on.
    pub red: bool,
    /// Green channel on.
    pub green: bool,
    /// Blue channel on.
    pub blue: bool,
}

impl Color {
    /// All channels off.
    pub const BLACK: Color = Color::rgb(false, false, false);

    /// Builds a color from its channels.
    pub const fn rgb(red: bool, green: bool, blue: bool) -> Self {
        Self { red, green, blue }
    }
}

/// Named palette entries, in palette index order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, Display,
)]
#[serde(rename_all = "snake_case")]
pub enum PaletteColor {
    /// Red.
    Red,
    /// Green.
    Green,
    /// Blue.
    Blue,
    /// Green and blue.
    LightBlue,
    /// Red and green.
    LimeGreen,
    /// Red and blue.
    Pink,
    /// All channels.
    White,
}

impl PaletteColor {
    /// Number of palette entries.
    pub const COUNT: usize = 7;

    /// Returns the entry at `index`, wrapping past the end.
    pub fn from_index(index: usize) -> Self {
        Self::iter()
            .nth(index % Self::COUNT)
            .unwrap_or(PaletteColor::Red)
    }

    /// Position of this entry in the palette.
    pub fn index(self) -> usize {
        self as usize
    }

    /// The RGB triple this entry lights.
    pub fn color(self) -> Color {
        match self {
            PaletteColor::Red => Color::rgb(true, false, false),
            PaletteColor::Green => Color::rgb(false, true, false),
            PaletteColor::Blue => Color::rgb(false, false, true),
            PaletteColor::LightBlue => Color::rgb(false, true, true),
            PaletteColor::LimeGreen => Color::rgb(true, true, false),
            PaletteColor::Pink => Color::rgb(true, false, true),
            PaletteColor::White => Color::rgb(true, true, true),
        }
    }

    /// Next entry, wrapping.
    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Previous entry, wrapping.
    pub fn previous(self) -> Self {
        Self::from_index(self.index() + Self::COUNT - 1)
    }

    /// Draws an entry uniformly from the whole palette.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::from_index(rng.random_range(0..Self::COUNT))
    }
}

/// Colors chosen for X and O. The two are never the same entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerColors {
    x: PaletteColor,
    o: PaletteColor,
}

impl Default for PlayerColors {
    fn default() -> Self {
        Self {
            x: PaletteColor::Red,
            o: PaletteColor::Blue,
        }
    }
}

impl PlayerColors {
    /// Creates a pair, or `None` if both sides would share a color.
    pub fn new(x: PaletteColor, o: PaletteColor) -> Option<Self> {
        (x != o).then_some(Self { x, o })
    }

    /// Palette entry for `mark`.
    pub fn entry(&self, mark: Mark) -> PaletteColor {
        match mark {
            Mark::X => self.x,
            Mark::O => self.o,
        }
    }

    /// RGB triple for `mark`.
    pub fn color(&self, mark: Mark) -> Color {
        self.entry(mark).color()
    }

    /// Steps `mark`'s color forward, skipping the other side's color.
    #[instrument(skip(self))]
    pub fn cycle_forward(&mut self, mark: Mark) {
        self.cycle(mark, PaletteColor::next);
    }

    /// Steps `mark`'s color backward, skipping the other side's color.
    #[instrument(skip(self))]
    pub fn cycle_backward(&mut self, mark: Mark) {
        self.cycle(mark, PaletteColor::previous);
    }

    fn cycle(&mut self, mark: Mark, step: fn(PaletteColor) -> PaletteColor) {
        let other = self.entry(mark.opponent());
        let mut candidate = step(self.entry(mark));
        while candidate == other {
            candidate = step(candidate);
        }
        match mark {
            Mark::X => self.x = candidate,
            Mark::O => self.o = candidate,
        }
        debug!(%mark, color = %candidate, "Player color changed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_order() {
        assert_eq!(PaletteColor::from_index(0), PaletteColor::Red);
        assert_eq!(PaletteColor::from_index(6), PaletteColor::White);
        assert_eq!(PaletteColor::Pink.index(), 5);
        assert_eq!(PaletteColor::LightBlue.color(), Color::rgb(false, true, true));
    }

    #[test]
    fn test_palette_excludes_black_and_is_distinct() {
        let colors: Vec<Color> = PaletteColor::iter().map(PaletteColor::color).collect();
        assert_eq!(colors.len(), PaletteColor::COUNT);
        assert!(!colors.contains(&Color::BLACK));
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_wraparound() {
        assert_eq!(PaletteColor::White.next(), PaletteColor::Red);
        assert_eq!(PaletteColor::Red.previous(), PaletteColor::White);
    }

    #[test]
    fn test_cycle_skips_other_side() {
        let mut colors = PlayerColors::default();
        colors.cycle_forward(Mark::X);
        assert_eq!(colors.entry(Mark::X), PaletteColor::Green);
        // Blue belongs to O, so X jumps straight to light blue.
        colors.cycle_forward(Mark::X);
        assert_eq!(colors.entry(Mark::X), PaletteColor::LightBlue);
        colors.cycle_backward(Mark::X);
        assert_eq!(colors.entry(Mark::X), PaletteColor::Green);
    }

    #[test]
    fn test_cycle_never_collides() {
        let mut colors = PlayerColors::default();
        for i in 0..50 {
            let mark = if i % 3 == 0 { Mark::O } else { Mark::X };
            if i % 2 == 0 {
                colors.cycle_forward(mark);
            } else {
                colors.cycle_backward(mark);
            }
            assert_ne!(colors.entry(Mark::X), colors.entry(Mark::O));
        }
    }

    #[test]
    fn test_new_rejects_shared_color() {
        assert!(PlayerColors::new(PaletteColor::Pink, PaletteColor::Pink).is_none());
        assert!(PlayerColors::new(PaletteColor::Pink, PaletteColor::White).is_some());
    }
}
