//! Question schema and validation
//!
//! A batch holds 1-4 questions, each with 2-4 options and a header of at most
//! 12 characters. Validation runs before anything touches the filesystem.

mod types;
mod validation;

pub use types::{Question, QuestionBatch, QuestionOption};
pub use validation::validate_questions;

/// Minimum number of questions per batch
pub const MIN_QUESTIONS: usize = 1;
/// Maximum number of questions per batch
pub const MAX_QUESTIONS: usize = 4;
/// Minimum number of options per question
pub const MIN_OPTIONS: usize = 2;
/// Maximum number of options per question
pub const MAX_OPTIONS: usize = 4;
/// Maximum header length, in characters
pub const MAX_HEADER_CHARS: usize = 12;
