//! Presenter executable resolution

use std::path::{Path, PathBuf};
use tracing::debug;

use super::PlatformId;
use super::table::presenter_binary;
use crate::config::ParleyConfig;
use crate::error::{AskError, ParleyResult};

/// Maps a platform to a usable presenter executable
pub trait ExecutableResolver: Send + Sync {
    /// Resolve the presenter for `platform`, or fail with
    /// `PlatformUnsupported` / `BinaryMissing`
    fn resolve(&self, platform: &PlatformId) -> ParleyResult<PathBuf>;
}

/// Looks the platform up in the presenter table and expects the binary in `bin_dir`
#[derive(Debug, Clone)]
pub struct BinDirResolver {
    bin_dir: PathBuf,
}

impl BinDirResolver {
    pub fn new(bin_dir: impl Into<PathBuf>) -> Self {
        Self {
            bin_dir: bin_dir.into(),
        }
    }

    pub fn bin_dir(&self) -> &Path {
        &self.bin_dir
    }
}

impl ExecutableResolver for BinDirResolver {
    fn resolve(&self, platform: &PlatformId) -> ParleyResult<PathBuf> {
        let binary = presenter_binary(platform)
            .ok_or_else(|| AskError::platform_unsupported(platform.to_string()))?;
        let path = self.bin_dir.join(binary);
        ensure_file(&path, platform)?;
        debug!("resolved presenter for {}: {}", platform, path.display());
        Ok(path)
    }
}

/// Always resolves to one explicit executable, whatever the platform
#[derive(Debug, Clone)]
pub struct FixedResolver {
    path: PathBuf,
}

impl FixedResolver {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ExecutableResolver for FixedResolver {
    fn resolve(&self, platform: &PlatformId) -> ParleyResult<PathBuf> {
        ensure_file(&self.path, platform)?;
        Ok(self.path.clone())
    }
}

/// Build the resolver a configuration asks for: an explicit presenter path
/// wins over the per-platform binary directory
pub fn resolver_for_config(config: &ParleyConfig) -> ParleyResult<Box<dyn ExecutableResolver>> {
    match &config.presenter_path {
        Some(path) => Ok(Box::new(FixedResolver::new(path))),
        None => Ok(Box::new(BinDirResolver::new(config.effective_bin_dir()?))),
    }
}

fn ensure_file(path: &Path, platform: &PlatformId) -> ParleyResult<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(AskError::binary_missing(
            path.display().to_string(),
            platform.to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_bin_dir_resolves_known_platform() {
        let temp_dir = TempDir::new().unwrap();
        let binary = temp_dir.path().join("ask-user-linux-x64");
        fs::write(&binary, "").unwrap();

        let resolver = BinDirResolver::new(temp_dir.path());
        let path = resolver.resolve(&PlatformId::new("linux", "x64")).unwrap();
        assert_eq!(path, binary);
    }

    #[test]
    fn test_bin_dir_unknown_platform() {
        let temp_dir = TempDir::new().unwrap();
        let resolver = BinDirResolver::new(temp_dir.path());
        let err = resolver
            .resolve(&PlatformId::new("freebsd", "x64"))
            .unwrap_err();
        match err {
            AskError::PlatformUnsupported { platform } => assert_eq!(platform, "freebsd-x64"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_bin_dir_missing_binary() {
        let temp_dir = TempDir::new().unwrap();
        let resolver = BinDirResolver::new(temp_dir.path());
        let err = resolver
            .resolve(&PlatformId::new("win32", "x64"))
            .unwrap_err();
        match err {
            AskError::BinaryMissing { path, platform } => {
                assert!(path.ends_with("ask-user-win32-x64.exe"));
                assert_eq!(platform, "win32-x64");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_fixed_resolver() {
        let temp_dir = TempDir::new().unwrap();
        let binary = temp_dir.path().join("my-presenter");
        let platform = PlatformId::new("plan9", "mips");

        let resolver = FixedResolver::new(&binary);
        assert!(matches!(
            resolver.resolve(&platform),
            Err(AskError::BinaryMissing { .. })
        ));

        fs::write(&binary, "").unwrap();
        assert_eq!(resolver.resolve(&platform).unwrap(), binary);
    }

    #[test]
    fn test_resolver_for_config_prefers_explicit_path() {
        let temp_dir = TempDir::new().unwrap();
        let binary = temp_dir.path().join("explicit");
        fs::write(&binary, "").unwrap();

        let config = ParleyConfig {
            presenter_path: Some(binary.clone()),
            bin_dir: Some(temp_dir.path().join("unused")),
            ..Default::default()
        };
        let resolver = resolver_for_config(&config).unwrap();
        assert_eq!(
            resolver.resolve(&PlatformId::new("linux", "x64")).unwrap(),
            binary
        );
    }
}
