//! Environment variable overrides
//!
//! Recognised variables:
//! - `PARLEY_PRESENTER` - explicit presenter executable
//! - `PARLEY_BIN_DIR` - directory of per-platform presenter binaries
//! - `PARLEY_TEMP_DIR` - where request files are written
//! - `PARLEY_SOUND` - `0`, `false`, `off` or `no` disables the sound cue
//! - `PARLEY_LOG` - log level

use crate::config::model::ParleyConfig;
use std::env;
use std::path::PathBuf;

/// Apply `PARLEY_*` environment variables on top of `config`
pub fn apply_env_overrides(config: &mut ParleyConfig) {
    apply_overrides_with(config, |key| env::var(key).ok());
}

/// Apply overrides using an arbitrary variable lookup
pub fn apply_overrides_with<F>(config: &mut ParleyConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(path) = non_empty("PARLEY_PRESENTER") {
        config.presenter_path = Some(PathBuf::from(path));
    }

    if let Some(dir) = non_empty("PARLEY_BIN_DIR") {
        config.bin_dir = Some(PathBuf::from(dir));
    }

    if let Some(dir) = non_empty("PARLEY_TEMP_DIR") {
        config.temp_dir = Some(PathBuf::from(dir));
    }

    if let Some(sound) = non_empty("PARLEY_SOUND") {
        config.notification.enabled = parse_flag(&sound);
    }

    if let Some(level) = non_empty("PARLEY_LOG") {
        config.logging.level = level;
    }
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "off" | "no"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_overrides_applied() {
        let mut config = ParleyConfig::default();
        apply_overrides_with(
            &mut config,
            lookup(&[
                ("PARLEY_PRESENTER", "/bin/ask"),
                ("PARLEY_TEMP_DIR", "/scratch"),
                ("PARLEY_SOUND", "off"),
                ("PARLEY_LOG", "debug"),
            ]),
        );
        assert_eq!(config.presenter_path, Some(PathBuf::from("/bin/ask")));
        assert_eq!(config.temp_dir, Some(PathBuf::from("/scratch")));
        assert!(config.bin_dir.is_none());
        assert!(!config.notification.enabled);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_blank_values_ignored() {
        let mut config = ParleyConfig::default();
        apply_overrides_with(&mut config, lookup(&[("PARLEY_BIN_DIR", "  ")]));
        assert!(config.bin_dir.is_none());
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("1"));
        assert!(parse_flag("yes"));
        assert!(!parse_flag("FALSE"));
        assert!(!parse_flag("0"));
    }

    #[test]
    #[serial]
    fn test_reads_process_env() {
        unsafe {
            env::set_var("PARLEY_BIN_DIR", "/from/env");
        }
        let mut config = ParleyConfig::default();
        apply_env_overrides(&mut config);
        unsafe {
            env::remove_var("PARLEY_BIN_DIR");
        }
        assert_eq!(config.bin_dir, Some(PathBuf::from("/from/env")));
    }
}
