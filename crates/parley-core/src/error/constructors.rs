//! Constructor methods for AskError

use super::types::AskError;

impl AskError {
    /// Create an invalid spec error for the whole batch
    pub fn invalid_spec(message: impl Into<String>) -> Self {
        Self::InvalidSpec {
            message: message.into(),
            question: None,
        }
    }

    /// Create an invalid spec error pointing at one question (1-based)
    pub fn invalid_question(question: usize, message: impl Into<String>) -> Self {
        Self::InvalidSpec {
            message: format!("Question {}: {}", question, message.into()),
            question: Some(question),
        }
    }

    /// Create an unsupported platform error
    pub fn platform_unsupported(platform: impl Into<String>) -> Self {
        Self::PlatformUnsupported {
            platform: platform.into(),
        }
    }

    /// Create a missing binary error
    pub fn binary_missing(path: impl Into<String>, platform: impl Into<String>) -> Self {
        Self::BinaryMissing {
            path: path.into(),
            platform: platform.into(),
        }
    }

    /// Create a transport write error
    pub fn transport_write(message: impl Into<String>) -> Self {
        Self::TransportWrite {
            message: message.into(),
            path: None,
        }
    }

    /// Create a transport write error for a specific file
    pub fn transport_write_at(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self::TransportWrite {
            message: message.into(),
            path: Some(path.into()),
        }
    }

    /// Create a spawn error
    pub fn spawn(message: impl Into<String>, executable: impl Into<String>) -> Self {
        Self::Spawn {
            message: message.into(),
            executable: Some(executable.into()),
        }
    }

    /// Create a presenter failure from its exit code and stderr
    pub fn presenter_failed(exit_code: i32, stderr: impl Into<String>) -> Self {
        Self::PresenterFailed {
            exit_code,
            stderr: stderr.into(),
        }
    }

    /// Create a response parse error
    pub fn response_parse(message: impl Into<String>) -> Self {
        Self::ResponseParse {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            context: None,
        }
    }

    /// Create a configuration error with context
    pub fn config_with_context(message: impl Into<String>, context: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            context: Some(context.into()),
        }
    }

    /// Create an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
            path: None,
        }
    }

    /// Create an IO error for a specific path
    pub fn io_with_path(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
            path: Some(path.into()),
        }
    }
}
