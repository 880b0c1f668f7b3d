//! Parley Core Library
//!
//! This crate lets an agent pause and collect structured answers from a human
//! by handing a batch of questions to a separate presenter process. It covers
//! the question schema, the request file transport, presenter orchestration,
//! answer normalization and the cleanup around a single exchange.

pub mod config;
pub mod error;
pub mod exchange;
pub mod normalize;
pub mod notify;
pub mod platform;
pub mod presenter;
pub mod question;
pub mod tools;
pub mod transport;

// Re-export commonly used types
pub use config::{LoggingConfig, NotificationConfig, ParleyConfig};
pub use error::{AskError, ParleyResult, UnifiedError};
pub use exchange::AskExchange;
pub use normalize::{AskResult, AskStatus, normalize};
pub use notify::Notifier;
pub use platform::{BinDirResolver, ExecutableResolver, FixedResolver, PlatformId};
pub use presenter::{
    AnswerValue, BinaryResponse, Presenter, ProcessPresenter, QuestionAnswer, RawOutcome,
    ResponseStatus, SelectedIndex,
};
pub use question::{Question, QuestionBatch, QuestionOption};
pub use transport::{RequestFile, RequestPayload};
