//! Presenter backed by an external executable

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;
use tracing::{info, instrument};

use super::{Presenter, RawOutcome};
use crate::error::{AskError, ParleyResult};

/// Exit code reported when the presenter was terminated by a signal
pub const SIGNAL_EXIT_CODE: i32 = -1;

/// Runs `<executable> --input <request file>` and captures its output.
///
/// Stdin is closed. The call resolves once the process has exited; the child
/// is killed if the future is dropped before that.
#[derive(Debug, Clone)]
pub struct ProcessPresenter {
    executable: PathBuf,
}

impl ProcessPresenter {
    pub fn new(executable: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
        }
    }

    pub fn executable(&self) -> &Path {
        &self.executable
    }
}

#[async_trait]
impl Presenter for ProcessPresenter {
    #[instrument(skip(self), fields(executable = %self.executable.display()))]
    async fn present(&self, request_file: &Path) -> ParleyResult<RawOutcome> {
        let output = Command::new(&self.executable)
            .arg("--input")
            .arg(request_file)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| {
                AskError::spawn(
                    format!(
                        "Failed to start '{}': {}. Check that the presenter is installed and executable.",
                        self.executable.display(),
                        e
                    ),
                    self.executable.display().to_string(),
                )
            })?;

        let exit_code = output.status.code().unwrap_or(SIGNAL_EXIT_CODE);
        info!(
            exit_code,
            stdout_bytes = output.stdout.len(),
            stderr_bytes = output.stderr.len(),
            "presenter exited"
        );

        Ok(RawOutcome {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            exit_code,
        })
    }
}
