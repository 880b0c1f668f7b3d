//! Core error types for Parley

use thiserror::Error;

/// Result type alias for Parley operations
pub type ParleyResult<T> = Result<T, AskError>;

/// Unified error trait shared by the Parley error types.
///
/// - error_code(): Unique code for programmatic error identification
/// - message(): Human-readable error message
/// - context(): Optional additional context
pub trait UnifiedError: std::error::Error + Send + Sync {
    /// Get the error code for programmatic handling
    fn error_code(&self) -> &str;

    /// Get the human-readable error message
    fn message(&self) -> &str;

    /// Get optional context about the error
    fn context(&self) -> Option<&str> {
        None
    }
}

/// Everything that can go wrong during a single question exchange.
///
/// None of these escape [`crate::AskExchange::ask`]; they are folded into an
/// `AskResult` with `status = "error"` at the exchange boundary.
#[derive(Error, Debug, Clone)]
pub enum AskError {
    /// Malformed question batch, rejected before any file or process exists
    #[error("Invalid question spec: {message}")]
    InvalidSpec {
        message: String,
        /// Position of the offending question (1-based), if any
        question: Option<usize>,
    },

    /// No presenter is published for the running platform
    #[error("Unsupported platform: {platform}")]
    PlatformUnsupported { platform: String },

    /// The platform is known but the presenter executable is not on disk
    #[error("Presenter binary not found: {path}")]
    BinaryMissing { path: String, platform: String },

    /// The ephemeral request file could not be created or written
    #[error("Failed to write request file: {message}")]
    TransportWrite {
        message: String,
        path: Option<String>,
    },

    /// The presenter process could not be started
    #[error("Failed to spawn presenter: {message}")]
    Spawn {
        message: String,
        executable: Option<String>,
    },

    /// The presenter exited non-zero and wrote diagnostics
    #[error("Presenter failed (exit code {exit_code}): {stderr}")]
    PresenterFailed { exit_code: i32, stderr: String },

    /// Non-empty stdout that is not a valid presenter response
    #[error("Failed to parse presenter response: {message}")]
    ResponseParse { message: String },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        context: Option<String>,
    },

    /// IO errors outside the transport
    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
    },
}

impl UnifiedError for AskError {
    fn error_code(&self) -> &str {
        match self {
            Self::InvalidSpec { .. } => "ASK_INVALID_SPEC",
            Self::PlatformUnsupported { .. } => "ASK_PLATFORM_UNSUPPORTED",
            Self::BinaryMissing { .. } => "ASK_BINARY_MISSING",
            Self::TransportWrite { .. } => "ASK_TRANSPORT_WRITE",
            Self::Spawn { .. } => "ASK_SPAWN",
            Self::PresenterFailed { .. } => "ASK_PRESENTER_FAILED",
            Self::ResponseParse { .. } => "ASK_RESPONSE_PARSE",
            Self::Config { .. } => "ASK_CONFIG",
            Self::Io { .. } => "ASK_IO",
        }
    }

    fn message(&self) -> &str {
        match self {
            Self::InvalidSpec { message, .. } => message,
            Self::PlatformUnsupported { platform } => platform,
            Self::BinaryMissing { path, .. } => path,
            Self::TransportWrite { message, .. } => message,
            Self::Spawn { message, .. } => message,
            Self::PresenterFailed { stderr, .. } => stderr,
            Self::ResponseParse { message } => message,
            Self::Config { message, .. } => message,
            Self::Io { message, .. } => message,
        }
    }

    fn context(&self) -> Option<&str> {
        match self {
            Self::BinaryMissing { platform, .. } => Some(platform),
            Self::TransportWrite { path, .. } => path.as_deref(),
            Self::Spawn { executable, .. } => executable.as_deref(),
            Self::Config { context, .. } => context.as_deref(),
            Self::Io { path, .. } => path.as_deref(),
            _ => None,
        }
    }
}
