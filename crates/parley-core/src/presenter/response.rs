//! Wire types reported by the presenter on stdout

use serde::{Deserialize, Serialize};

/// Terminal status reported by the presenter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Selected,
    Cancelled,
}

/// A selected label (single-select) or labels in selection order (multiSelect).
///
/// Free-text "Other" answers appear here as the typed text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Single(String),
    Multiple(Vec<String>),
}

impl AnswerValue {
    /// The single value, if this is a single-select answer
    pub fn as_single(&self) -> Option<&str> {
        match self {
            Self::Single(value) => Some(value),
            Self::Multiple(_) => None,
        }
    }

    /// All selected values, in order
    pub fn values(&self) -> Vec<&str> {
        match self {
            Self::Single(value) => vec![value.as_str()],
            Self::Multiple(values) => values.iter().map(String::as_str).collect(),
        }
    }
}

impl Default for AnswerValue {
    fn default() -> Self {
        Self::Single(String::new())
    }
}

impl From<&str> for AnswerValue {
    fn from(value: &str) -> Self {
        Self::Single(value.to_string())
    }
}

impl From<Vec<String>> for AnswerValue {
    fn from(values: Vec<String>) -> Self {
        Self::Multiple(values)
    }
}

/// Index of the chosen option(s); `-1` marks the free-text entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SelectedIndex {
    Single(i64),
    Multiple(Vec<i64>),
}

/// Index value the presenter uses for the free-text "Other" entry
pub const OTHER_INDEX: i64 = -1;

/// One answered question as reported by the presenter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionAnswer {
    pub question: String,
    #[serde(default)]
    pub header: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected: Option<AnswerValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_index: Option<SelectedIndex>,
}

impl QuestionAnswer {
    /// Header if non-empty, else the question text
    pub fn key(&self) -> &str {
        if self.header.is_empty() {
            &self.question
        } else {
            &self.header
        }
    }

    /// Whether the free-text entry was used for this answer
    pub fn used_other(&self) -> bool {
        match &self.selected_index {
            Some(SelectedIndex::Single(idx)) => *idx == OTHER_INDEX,
            Some(SelectedIndex::Multiple(indices)) => indices.contains(&OTHER_INDEX),
            None => false,
        }
    }
}

/// The full JSON document a presenter writes on stdout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinaryResponse {
    pub status: ResponseStatus,
    #[serde(default)]
    pub answers: Vec<QuestionAnswer>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_single_and_multi_answers() {
        let response: BinaryResponse = serde_json::from_value(json!({
            "status": "selected",
            "answers": [
                { "question": "Which DB?", "header": "DB", "selected": "Postgres", "selected_index": 0 },
                { "question": "Features?", "header": "Feat", "selected": ["Dark mode", "Custom"], "selected_index": [0, -1] }
            ]
        }))
        .unwrap();

        assert_eq!(response.status, ResponseStatus::Selected);
        assert_eq!(
            response.answers[0].selected,
            Some(AnswerValue::Single("Postgres".into()))
        );
        assert_eq!(
            response.answers[1].selected_index,
            Some(SelectedIndex::Multiple(vec![0, -1]))
        );
        assert!(!response.answers[0].used_other());
        assert!(response.answers[1].used_other());
    }

    #[test]
    fn test_optional_fields() {
        let response: BinaryResponse =
            serde_json::from_str(r#"{"status":"cancelled"}"#).unwrap();
        assert_eq!(response.status, ResponseStatus::Cancelled);
        assert!(response.answers.is_empty());

        let answer: QuestionAnswer =
            serde_json::from_str(r#"{"question":"Skipped?","selected":null}"#).unwrap();
        assert_eq!(answer.header, "");
        assert_eq!(answer.key(), "Skipped?");
        assert!(answer.selected.is_none());

        // Absent fields stay absent when re-serialized
        assert_eq!(
            serde_json::to_value(&answer).unwrap(),
            json!({ "question": "Skipped?", "header": "" })
        );
    }

    #[test]
    fn test_unknown_status_rejected() {
        let result: Result<BinaryResponse, _> =
            serde_json::from_str(r#"{"status":"maybe","answers":[]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_answer_value_helpers() {
        let single = AnswerValue::from("Postgres");
        assert_eq!(single.as_single(), Some("Postgres"));
        assert_eq!(single.values(), vec!["Postgres"]);

        let multi = AnswerValue::from(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(multi.as_single(), None);
        assert_eq!(multi.values(), vec!["a", "b"]);

        assert_eq!(AnswerValue::default(), AnswerValue::Single(String::new()));
    }
}
