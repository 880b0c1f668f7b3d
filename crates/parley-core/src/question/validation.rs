//! Validation logic for question batches

use tracing::warn;

use super::types::Question;
use super::{MAX_HEADER_CHARS, MAX_OPTIONS, MAX_QUESTIONS, MIN_OPTIONS, MIN_QUESTIONS};
use crate::error::AskError;

/// Validate that a batch of questions is well-formed
pub fn validate_questions(questions: &[Question]) -> Result<(), AskError> {
    let result = check_questions(questions);
    if let Err(err) = &result {
        warn!("rejecting question batch: {}", err);
    }
    result
}

fn check_questions(questions: &[Question]) -> Result<(), AskError> {
    if questions.len() < MIN_QUESTIONS {
        return Err(AskError::invalid_spec("At least one question is required"));
    }

    if questions.len() > MAX_QUESTIONS {
        return Err(AskError::invalid_spec(format!(
            "Maximum of {} questions allowed per call (got {})",
            MAX_QUESTIONS,
            questions.len()
        )));
    }

    for (idx, question) in questions.iter().enumerate() {
        validate_question(idx + 1, question)?;
    }

    Ok(())
}

/// Validate a single question (`position` is 1-based)
fn validate_question(position: usize, question: &Question) -> Result<(), AskError> {
    if question.question.trim().is_empty() {
        return Err(AskError::invalid_question(position, "has empty question text"));
    }

    let header_chars = question.header.chars().count();
    if header_chars > MAX_HEADER_CHARS {
        return Err(AskError::invalid_question(
            position,
            format!(
                "header '{}' exceeds {} characters (length: {})",
                question.header, MAX_HEADER_CHARS, header_chars
            ),
        ));
    }

    if question.options.len() < MIN_OPTIONS {
        return Err(AskError::invalid_question(
            position,
            format!("must have at least {} options", MIN_OPTIONS),
        ));
    }

    if question.options.len() > MAX_OPTIONS {
        return Err(AskError::invalid_question(
            position,
            format!("has too many options (max {})", MAX_OPTIONS),
        ));
    }

    for (opt_idx, option) in question.options.iter().enumerate() {
        if option.label.trim().is_empty() {
            return Err(AskError::invalid_question(
                position,
                format!("option {} has empty label", opt_idx + 1),
            ));
        }
    }

    Ok(())
}
