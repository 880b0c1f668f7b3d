//! Platform identification and presenter lookup

mod resolver;
mod table;

pub use resolver::{BinDirResolver, ExecutableResolver, FixedResolver, resolver_for_config};
pub use table::{
    PRESENTER_BINARIES, SOUND_COMMANDS, SoundCommand, presenter_binary, sound_command,
    supported_platforms,
};

use std::fmt;

/// Operating system and CPU architecture, rendered as `<os>-<arch>`.
///
/// Rust's names are translated to the presenter package names
/// (`macos` -> `darwin`, `windows` -> `win32`, `aarch64` -> `arm64`,
/// `x86_64` -> `x64`); anything else passes through unchanged and is
/// rejected later by the lookup tables.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlatformId {
    os: String,
    arch: String,
}

impl PlatformId {
    /// Create a platform id from already-translated names
    pub fn new(os: impl Into<String>, arch: impl Into<String>) -> Self {
        Self {
            os: os.into(),
            arch: arch.into(),
        }
    }

    /// The platform this process is running on
    pub fn current() -> Self {
        Self::from_rust_names(std::env::consts::OS, std::env::consts::ARCH)
    }

    /// Translate `std::env::consts` style names
    pub fn from_rust_names(os: &str, arch: &str) -> Self {
        let os = match os {
            "macos" => "darwin",
            "windows" => "win32",
            other => other,
        };
        let arch = match arch {
            "aarch64" => "arm64",
            "x86_64" => "x64",
            "x86" => "ia32",
            other => other,
        };
        Self::new(os, arch)
    }

    pub fn os(&self) -> &str {
        &self.os
    }

    pub fn arch(&self) -> &str {
        &self.arch
    }
}

impl fmt::Display for PlatformId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.os, self.arch)
    }
}
