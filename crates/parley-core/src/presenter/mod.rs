//! Presenter orchestration
//!
//! A presenter draws the dialog and reports what the user picked. Parley only
//! knows its contract: it gets the request file path, and reports stdout,
//! stderr and an exit code. [`ProcessPresenter`] is the real implementation;
//! anything else implementing [`Presenter`] can stand in for it.

mod process;
mod response;

pub use process::{ProcessPresenter, SIGNAL_EXIT_CODE};
pub use response::{
    AnswerValue, BinaryResponse, OTHER_INDEX, QuestionAnswer, ResponseStatus, SelectedIndex,
};

use async_trait::async_trait;
use std::path::Path;
use tracing::debug;

use crate::error::{AskError, ParleyResult};

/// Everything a finished presenter left behind
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawOutcome {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

impl RawOutcome {
    /// A clean exit with the given stdout
    pub fn success(stdout: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: String::new(),
            exit_code: 0,
        }
    }

    /// Apply the exit code policy and hand back stdout.
    ///
    /// A non-zero exit with anything at all on stderr (whitespace included)
    /// is a failure. A non-zero exit with empty stderr is tolerated and stdout
    /// is used as-is, which covers presenters that signal cancellation through
    /// the exit code.
    pub fn into_stdout(self) -> ParleyResult<String> {
        if self.exit_code != 0 {
            if !self.stderr.is_empty() {
                return Err(AskError::presenter_failed(
                    self.exit_code,
                    self.stderr.trim(),
                ));
            }
            debug!(
                exit_code = self.exit_code,
                "presenter exited non-zero without diagnostics, using stdout"
            );
        }
        Ok(self.stdout)
    }
}

/// Shows a request file to the user and waits for the outcome
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Presenter: Send + Sync {
    /// Present the questions in `request_file`; resolves when the dialog is gone
    async fn present(&self, request_file: &Path) -> ParleyResult<RawOutcome>;
}
