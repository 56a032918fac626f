//! Tuning knobs for the screens.

use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

fn default_blink_ms() -> u64 {
    250
}

fn default_party_time_count() -> u32 {
    12
}

/// Timing settings for animations and the AI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize, new)]
pub struct GameSettings {
    /// Blink interval on the setup and play screens; end and party use twice this.
    #[serde(default = "default_blink_ms")]
    blink_ms: u64,

    /// Draw-animation firings before the random flourish takes over.
    #[serde(default = "default_party_time_count")]
    party_time_count: u32,

    /// How long the AI's chosen cell blinks before the mark lands. Zero plays instantly.
    #[serde(default)]
    ai_pause_ms: u64,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            blink_ms: default_blink_ms(),
            party_time_count: default_party_time_count(),
            ai_pause_ms: 0,
        }
    }
}

impl GameSettings {
    /// Blink interval on the end and party screens.
    pub fn slow_blink_ms(&self) -> u64 {
        self.blink_ms.saturating_mul(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slow_blink_doubles_base() {
        assert_eq!(GameSettings::default().slow_blink_ms(), 500);
    }

    #[test]
    fn test_slow_blink_saturates() {
        let settings = GameSettings::new(u64::MAX, 12, 0);
        assert_eq!(settings.slow_blink_ms(), u64::MAX);
    }
}
