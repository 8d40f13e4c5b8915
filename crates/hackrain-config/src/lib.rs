//! Configuration file handling for hackrain.
//!
//! Loads configuration from `<config dir>/hackrain/config.toml`. A missing
//! file means defaults; a present but broken file is an error.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use directories::ProjectDirs;
use hackrain_core::BANNER_TEXT;
use serde::Deserialize;
use thiserror::Error;
use tracing::Level;
use unicode_width::UnicodeWidthChar;

/// Name of the configuration file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Name of the log file inside the data directory.
pub const LOG_FILE_NAME: &str = "hackrain.log";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to access config file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Text shown in the banner overlay.
    pub banner_text: String,
    /// Time between frames in milliseconds.
    pub frame_interval_ms: u64,
    /// Quiet period before a terminal resize is applied.
    pub resize_debounce_ms: u64,
    /// Fixed random seed. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Log level: trace, debug, info, warn or error.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            banner_text: BANNER_TEXT.to_string(),
            frame_interval_ms: 33,
            resize_debounce_ms: 100,
            seed: None,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    /// Returns the default config if no file exists.
    pub fn load() -> Result<Self, ConfigError> {
        match config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load and validate configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check values that deserialize fine but make no sense.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.banner_text.trim().is_empty() {
            return Err(ConfigError::Invalid("banner_text must not be empty".into()));
        }
        // One banner glyph per grid cell; wide or zero-width glyphs break the row.
        if let Some(ch) = self.banner_text.chars().find(|ch| ch.width() != Some(1)) {
            return Err(ConfigError::Invalid(format!(
                "banner_text contains '{ch}', which is not a single-width character"
            )));
        }
        if self.frame_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "frame_interval_ms must be greater than zero".into(),
            ));
        }
        self.level()?;
        Ok(())
    }

    /// Parsed log level.
    pub fn level(&self) -> Result<Level, ConfigError> {
        Level::from_str(&self.log_level)
            .map_err(|_| ConfigError::Invalid(format!("unknown log level '{}'", self.log_level)))
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }

    pub fn resize_debounce(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "hackrain")
}

/// Default config file path, if a home directory can be determined.
pub fn config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// Default log file path, if a home directory can be determined.
pub fn log_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_dir().join(LOG_FILE_NAME))
}
