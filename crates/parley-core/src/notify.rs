//! Best-effort sound cue before a dialog appears

use std::process::Stdio;
use tracing::debug;

use crate::config::NotificationConfig;
use crate::platform::{PlatformId, SoundCommand, sound_command};

/// Launches the platform's sound command without waiting for it.
///
/// Nothing about the cue is observable by the exchange: launch failures are
/// logged at debug level and dropped, and the command is never joined.
#[derive(Debug, Clone, Default)]
pub struct Notifier {
    command: Option<SoundCommand>,
}

impl Notifier {
    /// Notifier for `platform`, or a silent one if disabled or unsupported
    pub fn for_platform(platform: &PlatformId, config: &NotificationConfig) -> Self {
        if !config.enabled {
            return Self::disabled();
        }
        Self {
            command: sound_command(platform.os()),
        }
    }

    /// A notifier that does nothing
    pub fn disabled() -> Self {
        Self { command: None }
    }

    /// A notifier running a specific command
    pub fn with_command(command: SoundCommand) -> Self {
        Self {
            command: Some(command),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.command.is_some()
    }

    /// Fire the cue and return immediately
    pub fn notify(&self) {
        let Some(command) = self.command else {
            return;
        };

        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(play(command));
            }
            Err(_) => {
                std::thread::spawn(move || play_blocking(command));
            }
        }
    }
}

async fn play(command: SoundCommand) {
    let child = tokio::process::Command::new(command.program)
        .args(command.args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn();

    match child {
        // Reap it so it doesn't linger as a zombie
        Ok(mut child) => {
            let _ = child.wait().await;
        }
        Err(e) => debug!("sound cue '{}' unavailable: {}", command.program, e),
    }
}

fn play_blocking(command: SoundCommand) {
    let status = std::process::Command::new(command.program)
        .args(command.args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    if let Err(e) = status {
        debug!("sound cue '{}' unavailable: {}", command.program, e);
    }
}
