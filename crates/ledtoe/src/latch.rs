//! Turns raw button levels into one-shot press edges.

use ledtoe_core::Buttons;
use tracing::trace;

/// Rising-edge detector over sampled button levels.
///
/// A button fires once when first seen down and must be sampled up before it
/// can fire again. Edges wait in the latch until the next tick takes them.
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeLatch {
    held: Buttons,
    pending: Buttons,
}

impl EdgeLatch {
    /// Creates a latch with every button released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one sample of raw levels.
    pub fn sample(&mut self, levels: Buttons) {
        let rising = levels.difference(self.held);
        if !rising.is_empty() {
            trace!(?rising, "Button edges");
        }
        self.pending = self.pending.union(rising);
        self.held = levels;
    }

    /// Hands the pending edges to a tick and clears them.
    pub fn take(&mut self) -> Buttons {
        std::mem::take(&mut self.pending)
    }
}
