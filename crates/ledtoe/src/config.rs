//! Host configuration loaded from TOML.

use std::path::{Path, PathBuf};

use derive_getters::Getters;
use derive_more::{Display, Error};
use ledtoe_core::GameSettings;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Settings for the terminal simulator and the board it drives.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Scheduler tick period in milliseconds.
    #[serde(default = "default_tick_ms")]
    tick_ms: u64,

    /// How often raw button levels are sampled by the edge latch.
    #[serde(default = "default_button_poll_ms")]
    button_poll_ms: u64,

    /// Fixed RNG seed; `None` seeds from the OS.
    #[serde(default)]
    seed: Option<u64>,

    /// Where the simulator writes its log.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Animation and AI timing.
    #[serde(default)]
    game: GameSettings,
}

fn default_tick_ms() -> u64 {
    10
}

fn default_button_poll_ms() -> u64 {
    25
}

fn default_log_file() -> PathBuf {
    PathBuf::from("ledtoe.log")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
            button_poll_ms: default_button_poll_ms(),
            seed: None,
            log_file: default_log_file(),
            game: GameSettings::default(),
        }
    }
}

impl AppConfig {
    /// Loads and validates configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!(tick_ms = config.tick_ms, "Config loaded successfully");
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects values the scheduler cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_ms == 0 {
            return Err(ConfigError::new("tick_ms must be greater than zero"));
        }
        if self.button_poll_ms == 0 {
            return Err(ConfigError::new("button_poll_ms must be greater than zero"));
        }
        if *self.game.blink_ms() == 0 {
            return Err(ConfigError::new("game.blink_ms must be greater than zero"));
        }
        Ok(())
    }

    /// Overrides the seed when one was given on the command line.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// Overrides the log file when one was given on the command line.
    pub fn with_log_file(mut self, log_file: Option<PathBuf>) -> Self {
        if let Some(path) = log_file {
            self.log_file = path;
        }
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error at the caller's location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
