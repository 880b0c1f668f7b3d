//! Error types for tool operations

use crate::error::UnifiedError;

/// Error type for tool operations
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    /// Invalid arguments provided to the tool
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl UnifiedError for ToolError {
    fn error_code(&self) -> &str {
        match self {
            ToolError::InvalidArguments(_) => "TOOL_INVALID_ARGS",
            ToolError::Json(_) => "TOOL_JSON_ERROR",
        }
    }

    fn message(&self) -> &str {
        match self {
            ToolError::InvalidArguments(msg) => msg,
            ToolError::Json(_) => "JSON error occurred",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = ToolError::InvalidArguments("Missing required parameter: questions".into());
        assert_eq!(err.error_code(), "TOOL_INVALID_ARGS");
        assert_eq!(err.message(), "Missing required parameter: questions");
        assert_eq!(
            err.to_string(),
            "Invalid arguments: Missing required parameter: questions"
        );

        let json: ToolError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert_eq!(json.error_code(), "TOOL_JSON_ERROR");
    }
}
