//! Conversions from external error types into AskError

use super::types::AskError;

impl From<std::io::Error> for AskError {
    fn from(err: std::io::Error) -> Self {
        AskError::io(err.to_string())
    }
}
