//! Time-gated blink scheduler shared by every screen.

use tracing::trace;

/// Reports a blink firing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pulse {
    forced: bool,
}

impl Pulse {
    /// Whether the firing came from [`Blinker::trigger`] rather than the clock.
    pub fn forced(&self) -> bool {
        self.forced
    }
}

/// Toggles a visibility flag whenever more than an interval has elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Blinker {
    last_fire_ms: u64,
    visible: bool,
    forced: bool,
}

impl Blinker {
    /// Creates a blinker whose interval starts counting at `now_ms`.
    pub fn new(now_ms: u64) -> Self {
        Self {
            last_fire_ms: now_ms,
            visible: false,
            forced: false,
        }
    }

    /// Fires when more than `interval_ms` has passed since the last firing,
    /// or when a forced firing is pending.
    pub fn fire(&mut self, now_ms: u64, interval_ms: u64) -> Option<Pulse> {
        let elapsed = now_ms.saturating_sub(self.last_fire_ms);
        if elapsed <= interval_ms && !self.forced {
            return None;
        }
        let pulse = Pulse {
            forced: self.forced,
        };
        self.last_fire_ms = now_ms;
        self.forced = false;
        trace!(elapsed, forced = pulse.forced, "Blink fired");
        Some(pulse)
    }

    /// Makes the next [`fire`](Self::fire) call fire regardless of time.
    pub fn trigger(&mut self) {
        self.forced = true;
    }

    /// Whether a forced firing is pending.
    pub fn is_triggered(&self) -> bool {
        self.forced
    }

    /// Current visibility phase.
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Sets the visibility phase.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Flips the visibility phase.
    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_only_after_interval() {
        let mut blinker = Blinker::new(1_000);
        assert_eq!(blinker.fire(1_250, 250), None);
        assert_eq!(blinker.fire(1_251, 250), Some(Pulse { forced: false }));
        assert_eq!(blinker.fire(1_400, 250), None);
        assert!(blinker.fire(1_502, 250).is_some());
    }

    #[test]
    fn test_trigger_fires_immediately_once() {
        let mut blinker = Blinker::new(0);
        blinker.trigger();
        assert!(blinker.is_triggered());
        assert_eq!(blinker.fire(1, 250), Some(Pulse { forced: true }));
        assert!(!blinker.is_triggered());
        assert_eq!(blinker.fire(2, 250), None);
    }

    #[test]
    fn test_toggle() {
        let mut blinker = Blinker::new(0);
        assert!(!blinker.visible());
        blinker.toggle();
        assert!(blinker.visible());
        blinker.set_visible(false);
        assert!(!blinker.visible());
    }
}
