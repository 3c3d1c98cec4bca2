//! Configuration system for seekquill.
//!
//! This module provides the configuration structure for seekquill with sensible
//! defaults and support for serialization/deserialization via serde.
//! Configuration is loaded from a TOML file and merged with command-line
//! arguments in `main`.
//!
//! # Example
//!
//! ```
//! use seekquill::config::Config;
//!
//! let config = Config::default();
//! assert_eq!(config.theme, "default-dark");
//!
//! let custom = Config {
//!     theme: "nord".to_string(),
//!     ..Config::default()
//! };
//! assert!(custom.enable_mouse);
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Shortest input poll timeout; lower values would spin the event loop.
pub const MIN_TICK_RATE_MS: u64 = 10;

/// Configuration for the seekquill application.
///
/// # Fields
///
/// * `theme` - Color scheme name (default: "default-dark")
/// * `enable_mouse` - Enable mouse clicks and wheel scrolling (default: true)
/// * `alternating_row_colors` - Shade every other table row (default: true)
/// * `tick_rate_ms` - How long the event loop waits for input before
///   redrawing, in milliseconds (default: 250)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Color scheme name
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Enable mouse support
    #[serde(default = "default_enable_mouse")]
    pub enable_mouse: bool,

    /// Shade every other table row
    #[serde(default = "default_alternating_row_colors")]
    pub alternating_row_colors: bool,

    /// Input poll timeout for the event loop
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_theme() -> String {
    "default-dark".to_string()
}

fn default_enable_mouse() -> bool {
    true
}

fn default_alternating_row_colors() -> bool {
    true
}

/// The playback clock in the status line is redrawn at this rate.
fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            enable_mouse: default_enable_mouse(),
            alternating_row_colors: default_alternating_row_colors(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Config {
    /// Input poll timeout, never shorter than [`MIN_TICK_RATE_MS`].
    ///
    /// ```
    /// use seekquill::config::Config;
    /// use std::time::Duration;
    ///
    /// let config = Config { tick_rate_ms: 0, ..Config::default() };
    /// assert_eq!(config.tick_rate(), Duration::from_millis(10));
    /// ```
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(MIN_TICK_RATE_MS))
    }

    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/seekquill/config.toml` on all platforms.
    pub fn config_path() -> Option<std::path::PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("seekquill");
            path.push("config.toml");
            path
        })
    }

    /// Loads configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist or can't be read.
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Loads configuration from `path`, falling back to defaults if the file
    /// is missing or invalid.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|e| {
                tracing::warn!("ignoring invalid config {}: {}", path.display(), e);
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }
}
