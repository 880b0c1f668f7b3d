//! Error types for Parley
//!
//! Every failure of an exchange maps onto one [`AskError`] variant, each with a
//! stable error code for programmatic handling.

mod constructors;
mod conversions;
mod types;

pub use types::{AskError, ParleyResult, UnifiedError};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            AskError::invalid_spec("empty").error_code(),
            "ASK_INVALID_SPEC"
        );
        assert_eq!(
            AskError::platform_unsupported("plan9-mips").error_code(),
            "ASK_PLATFORM_UNSUPPORTED"
        );
        assert_eq!(
            AskError::presenter_failed(1, "boom").error_code(),
            "ASK_PRESENTER_FAILED"
        );
        assert_eq!(
            AskError::response_parse("eof").error_code(),
            "ASK_RESPONSE_PARSE"
        );
    }

    #[test]
    fn test_invalid_question_message() {
        let err = AskError::invalid_question(2, "must have at least 2 options");
        assert_eq!(
            err.to_string(),
            "Invalid question spec: Question 2: must have at least 2 options"
        );
        match err {
            AskError::InvalidSpec { question, .. } => assert_eq!(question, Some(2)),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_context() {
        let err = AskError::binary_missing("/opt/bin/ask-user-linux-x64", "linux-x64");
        assert_eq!(err.context(), Some("linux-x64"));
        assert_eq!(err.message(), "/opt/bin/ask-user-linux-x64");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: AskError = io.into();
        assert_eq!(err.error_code(), "ASK_IO");
        assert!(err.to_string().contains("gone"));
    }
}
