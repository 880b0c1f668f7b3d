//! Response normalization
//!
//! Turns whatever the presenter printed into an [`AskResult`]: a status plus a
//! `key -> answer` map, where the key is the question's header (or its full
//! text when the header is empty).

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::{info, warn};

use crate::error::{AskError, ParleyResult};
use crate::presenter::{AnswerValue, BinaryResponse, QuestionAnswer, ResponseStatus};

/// Longest stdout excerpt quoted in a parse error
const STDOUT_PREVIEW_CHARS: usize = 200;

/// Outcome status reported to the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AskStatus {
    Selected,
    Cancelled,
    Error,
}

/// The caller-facing result of one exchange
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskResult {
    pub status: AskStatus,
    #[serde(default)]
    pub answers: BTreeMap<String, AnswerValue>,
    /// The presenter's answer list, verbatim and in order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AskResult {
    /// The user dismissed the dialog
    pub fn cancelled() -> Self {
        Self {
            status: AskStatus::Cancelled,
            answers: BTreeMap::new(),
            raw: None,
            error: None,
        }
    }

    /// The exchange failed
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: AskStatus::Error,
            answers: BTreeMap::new(),
            raw: None,
            error: Some(message.into()),
        }
    }

    /// Build a selected result from the presenter's typed answers, keeping
    /// `raw` as the untouched answer list they were parsed from.
    ///
    /// Later answers overwrite earlier ones sharing a key; an answer without
    /// `selected` maps to an empty string.
    pub fn from_answers(typed: &[QuestionAnswer], raw: Vec<Value>) -> Self {
        let mut answers = BTreeMap::new();
        for answer in typed {
            answers.insert(
                answer.key().to_string(),
                answer.selected.clone().unwrap_or_default(),
            );
        }
        Self {
            status: AskStatus::Selected,
            answers,
            raw: Some(raw),
            error: None,
        }
    }

    /// Look up an answer by header (or question text)
    pub fn get(&self, key: &str) -> Option<&AnswerValue> {
        self.answers.get(key)
    }

    pub fn is_selected(&self) -> bool {
        self.status == AskStatus::Selected
    }

    pub fn is_cancelled(&self) -> bool {
        self.status == AskStatus::Cancelled
    }

    pub fn is_error(&self) -> bool {
        self.status == AskStatus::Error
    }
}

/// Normalize presenter stdout. Never fails: parse problems become an error result.
pub fn normalize(stdout: &str) -> AskResult {
    match parse_stdout(stdout) {
        Ok(result) => {
            info!(status = ?result.status, answers = result.answers.len(), "normalized presenter response");
            result
        }
        Err(err) => {
            warn!("{}", err);
            AskResult::error(err.to_string())
        }
    }
}

/// Strict variant of [`normalize`] that surfaces `ResponseParse` errors
pub fn parse_stdout(stdout: &str) -> ParleyResult<AskResult> {
    let trimmed = stdout.trim();
    if trimmed.is_empty() {
        return Ok(AskResult::cancelled());
    }

    let parse_error =
        |e: serde_json::Error| AskError::response_parse(format!("{} (stdout: {})", e, preview(trimmed)));

    let document: Value = serde_json::from_str(trimmed).map_err(parse_error)?;
    let raw = match document.get("answers") {
        Some(Value::Array(items)) => items.clone(),
        _ => Vec::new(),
    };
    let response: BinaryResponse = serde_json::from_value(document).map_err(parse_error)?;

    Ok(match response.status {
        ResponseStatus::Cancelled => AskResult::cancelled(),
        ResponseStatus::Selected => AskResult::from_answers(&response.answers, raw),
    })
}

fn preview(text: &str) -> String {
    if text.chars().count() <= STDOUT_PREVIEW_CHARS {
        text.to_string()
    } else {
        let head: String = text.chars().take(STDOUT_PREVIEW_CHARS).collect();
        format!("{}...", head)
    }
}
