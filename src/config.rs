//! Game settings loaded from an optional TOML file.

use derive_getters::Getters;
use derive_more::{Display, Error};
use marubatsu_engine::Side;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Default settings file looked up in the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "marubatsu.toml";

/// User preferences for the terminal game.
///
/// Every field is optional in the file; missing ones take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Colour the marks and messages.
    color: bool,

    /// Clear the screen before drawing the board.
    clear_screen: bool,

    /// Side that opens every game.
    first_side: Side,

    /// File that receives the tracing output.
    log_file: PathBuf,

    /// Filter used when `RUST_LOG` is not set (e.g. `info`, `marubatsu=debug`).
    log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            clear_screen: true,
            first_side: Side::O,
            log_file: PathBuf::from("marubatsu.log"),
            log_filter: "info".to_string(),
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file, falling back to defaults if it does
    /// not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file exists but cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            debug!("No settings file, using defaults");
            return Ok(Self::default());
        }
        Self::from_file(path)
    }

    /// Loads settings from a TOML file that must exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!("Failed to read settings file: {}", e))
        })?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))?;

        info!(?settings, "Settings loaded");
        Ok(settings)
    }

    /// Turns colour output off.
    pub fn disable_color(&mut self) {
        self.color = false;
    }

    /// Keeps previous output on screen instead of clearing it.
    pub fn disable_clear_screen(&mut self) {
        self.clear_screen = false;
    }

    /// Sets the side that opens every game.
    pub fn set_first_side(&mut self, side: Side) {
        self.first_side = side;
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
