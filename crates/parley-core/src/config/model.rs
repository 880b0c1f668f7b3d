//! Configuration data structures

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{AskError, ParleyResult};

/// Default prefix for request file names
pub const DEFAULT_FILE_PREFIX: &str = "ask-user-";

/// Top-level Parley configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParleyConfig {
    /// Explicit presenter executable, bypassing the platform table
    pub presenter_path: Option<PathBuf>,
    /// Directory holding the per-platform presenter binaries
    pub bin_dir: Option<PathBuf>,
    /// Where request files are written (system temp dir if unset)
    pub temp_dir: Option<PathBuf>,
    /// Request file name prefix
    pub file_prefix: String,
    /// Sound cue settings
    pub notification: NotificationConfig,
    /// Logging settings
    pub logging: LoggingConfig,
}

impl Default for ParleyConfig {
    fn default() -> Self {
        Self {
            presenter_path: None,
            bin_dir: None,
            temp_dir: None,
            file_prefix: DEFAULT_FILE_PREFIX.to_string(),
            notification: NotificationConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl ParleyConfig {
    /// Directory searched for presenter binaries.
    ///
    /// Falls back to `<data dir>/parley/bin`.
    pub fn effective_bin_dir(&self) -> ParleyResult<PathBuf> {
        if let Some(dir) = &self.bin_dir {
            return Ok(dir.clone());
        }
        dirs::data_dir()
            .map(|dir| dir.join("parley").join("bin"))
            .ok_or_else(|| {
                AskError::config_with_context(
                    "No presenter directory configured and no data directory available",
                    "Set bin_dir in the config file or PARLEY_BIN_DIR",
                )
            })
    }

    /// Directory request files are written to
    pub fn effective_temp_dir(&self) -> PathBuf {
        self.temp_dir.clone().unwrap_or_else(std::env::temp_dir)
    }

    /// Request file prefix, falling back to the default when blank.
    ///
    /// The prefix is a file name fragment; path separators are rejected so
    /// request files always land directly in the temp dir.
    pub fn effective_file_prefix(&self) -> ParleyResult<&str> {
        if self.file_prefix.trim().is_empty() {
            return Ok(DEFAULT_FILE_PREFIX);
        }
        if self.file_prefix.contains(['/', '\\']) {
            return Err(AskError::config_with_context(
                format!(
                    "file_prefix '{}' must not contain path separators",
                    self.file_prefix
                ),
                "Set temp_dir to change where request files are written",
            ));
        }
        Ok(&self.file_prefix)
    }
}

/// Sound cue configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    /// Play a sound when a dialog is about to be shown
    pub enabled: bool,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Log format (json, pretty, compact)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: "compact".to_string(),
        }
    }
}
