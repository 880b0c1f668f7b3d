//! Configuration management
//!
//! Layers, lowest priority first: built-in defaults, config file, `PARLEY_*`
//! environment variables. Command-line flags are applied by the binary.

mod env_loader;
mod file_loader;
mod model;

pub use env_loader::{apply_env_overrides, apply_overrides_with};
pub use file_loader::load_from_file;
pub use model::{DEFAULT_FILE_PREFIX, LoggingConfig, NotificationConfig, ParleyConfig};

use crate::error::ParleyResult;
use std::path::Path;

/// Load configuration from an optional file, then apply environment overrides
pub fn load_config(path: Option<&Path>) -> ParleyResult<ParleyConfig> {
    let mut config = match path {
        Some(path) => load_from_file(path)?,
        None => ParleyConfig::default(),
    };
    apply_env_overrides(&mut config);
    Ok(config)
}
