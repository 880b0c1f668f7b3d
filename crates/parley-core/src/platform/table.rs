//! Static platform lookup tables
//!
//! Keys use the `<os>-<arch>` names the presenter packages are published
//! under (`darwin-arm64`, `win32-x64`, ...). A missing key is an explicit
//! failure, never a fallback.

use super::PlatformId;

/// Presenter file name for each supported platform
pub const PRESENTER_BINARIES: &[(&str, &str)] = &[
    ("darwin-arm64", "ask-user-darwin-arm64"),
    ("darwin-x64", "ask-user-darwin-x64"),
    ("linux-x64", "ask-user-linux-x64"),
    ("linux-arm64", "ask-user-linux-arm64"),
    ("win32-x64", "ask-user-win32-x64.exe"),
];

/// A command that plays a short sound and exits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SoundCommand {
    pub program: &'static str,
    pub args: &'static [&'static str],
}

/// Sound cue command per operating system
pub const SOUND_COMMANDS: &[(&str, SoundCommand)] = &[
    (
        "darwin",
        SoundCommand {
            program: "afplay",
            args: &["/System/Library/Sounds/Glass.aiff"],
        },
    ),
    (
        "linux",
        SoundCommand {
            program: "paplay",
            args: &["/usr/share/sounds/freedesktop/stereo/complete.oga"],
        },
    ),
    (
        "win32",
        SoundCommand {
            program: "powershell",
            args: &[
                "-NoProfile",
                "-c",
                "[System.Media.SystemSounds]::Asterisk.Play()",
            ],
        },
    ),
];

/// Presenter file name for `platform`, if the platform is supported
pub fn presenter_binary(platform: &PlatformId) -> Option<&'static str> {
    let key = platform.to_string();
    PRESENTER_BINARIES
        .iter()
        .find(|(id, _)| *id == key)
        .map(|(_, binary)| *binary)
}

/// Sound command for an operating system name (`darwin`, `linux`, `win32`)
pub fn sound_command(os: &str) -> Option<SoundCommand> {
    SOUND_COMMANDS
        .iter()
        .find(|(name, _)| *name == os)
        .map(|(_, command)| *command)
}

/// All platform ids with a published presenter
pub fn supported_platforms() -> impl Iterator<Item = &'static str> {
    PRESENTER_BINARIES.iter().map(|(id, _)| *id)
}
