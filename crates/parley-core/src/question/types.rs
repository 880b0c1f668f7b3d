//! Data structures for question batches

use serde::{Deserialize, Serialize, Serializer};

use super::validation::validate_questions;
use crate::error::AskError;

/// A single selectable choice in a question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionOption {
    /// Display text for the option
    pub label: String,
    /// Explanation of what this option means
    #[serde(default)]
    pub description: String,
}

impl QuestionOption {
    /// Create a new option
    pub fn new(label: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            description: description.into(),
        }
    }
}

/// A single question shown to the user.
///
/// The presenter always offers a free-text "Other" entry on its own, so it is
/// never part of `options`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// The question text to ask
    pub question: String,
    /// Short label (max 12 chars) like "Auth method", "Library"
    #[serde(default)]
    pub header: String,
    /// Options to choose from (2-4)
    pub options: Vec<QuestionOption>,
    /// Whether multiple options can be selected
    #[serde(rename = "multiSelect", alias = "multi_select")]
    pub multi_select: bool,
}

impl Question {
    /// Create a new single-select question
    pub fn new(
        question: impl Into<String>,
        header: impl Into<String>,
        options: Vec<QuestionOption>,
    ) -> Self {
        Self {
            question: question.into(),
            header: header.into(),
            options,
            multi_select: false,
        }
    }

    /// Enable multi-select
    pub fn with_multi_select(mut self) -> Self {
        self.multi_select = true;
        self
    }

    /// Key under which this question's answer is reported: the header, or the
    /// full question text when the header is empty
    pub fn answer_key(&self) -> &str {
        if self.header.is_empty() {
            &self.question
        } else {
            &self.header
        }
    }
}

/// An ordered, validated batch of 1-4 questions.
///
/// A `QuestionBatch` can only be obtained through validation, so the rest of
/// the pipeline never sees a malformed batch.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<Question>")]
pub struct QuestionBatch {
    questions: Vec<Question>,
}

impl QuestionBatch {
    /// Validate and wrap a list of questions
    pub fn new(questions: Vec<Question>) -> Result<Self, AskError> {
        validate_questions(&questions)?;
        Ok(Self { questions })
    }

    /// Parse and validate a batch from raw JSON.
    ///
    /// Accepts either `{ "questions": [...] }` or a bare array of questions.
    /// Shape errors (missing `multiSelect`, wrong types) surface as `InvalidSpec`.
    pub fn from_value(value: serde_json::Value) -> Result<Self, AskError> {
        let questions = match value {
            serde_json::Value::Object(mut map) => map
                .remove("questions")
                .ok_or_else(|| AskError::invalid_spec("Missing required field: questions"))?,
            serde_json::Value::Array(_) => value,
            other => {
                return Err(AskError::invalid_spec(format!(
                    "Expected an object or array of questions, got {}",
                    json_kind(&other)
                )));
            }
        };

        let questions: Vec<Question> = serde_json::from_value(questions)
            .map_err(|e| AskError::invalid_spec(format!("Invalid questions format: {}", e)))?;

        Self::new(questions)
    }

    /// Parse and validate a batch from JSON text
    pub fn from_json(text: &str) -> Result<Self, AskError> {
        let value: serde_json::Value = serde_json::from_str(text)
            .map_err(|e| AskError::invalid_spec(format!("Questions are not valid JSON: {}", e)))?;
        Self::from_value(value)
    }

    /// The questions, in caller order
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Number of questions in the batch
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false for a validated batch; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Unwrap into the underlying questions
    pub fn into_questions(self) -> Vec<Question> {
        self.questions
    }
}

impl TryFrom<Vec<Question>> for QuestionBatch {
    type Error = AskError;

    fn try_from(questions: Vec<Question>) -> Result<Self, Self::Error> {
        Self::new(questions)
    }
}

impl Serialize for QuestionBatch {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.questions.serialize(serializer)
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
