//! Schema definition for the AskUserQuestion tool

use parley_core::question::{MAX_HEADER_CHARS, MAX_OPTIONS, MAX_QUESTIONS, MIN_OPTIONS, MIN_QUESTIONS};
use parley_core::tools::ToolSchema;
use serde_json::json;

/// Creates the JSON schema for the AskUserQuestion tool
pub fn create_schema(name: &str, description: &str) -> ToolSchema {
    ToolSchema {
        name: name.to_string(),
        description: description.to_string(),
        parameters: json!({
            "type": "object",
            "properties": {
                "questions": {
                    "type": "array",
                    "description": "Questions to show the user in a single dialog (1-4)",
                    "minItems": MIN_QUESTIONS,
                    "maxItems": MAX_QUESTIONS,
                    "items": {
                        "type": "object",
                        "properties": {
                            "question": {
                                "type": "string",
                                "description": "The full question text shown to the user"
                            },
                            "header": {
                                "type": "string",
                                "description": "Short label (max 12 chars) like 'Auth method' or 'Library'. Answers are keyed by it.",
                                "maxLength": MAX_HEADER_CHARS
                            },
                            "options": {
                                "type": "array",
                                "description": "2-4 choices. The user can always type a free-text answer instead.",
                                "minItems": MIN_OPTIONS,
                                "maxItems": MAX_OPTIONS,
                                "items": {
                                    "type": "object",
                                    "properties": {
                                        "label": {
                                            "type": "string",
                                            "description": "Display text for this option"
                                        },
                                        "description": {
                                            "type": "string",
                                            "description": "What choosing this option means"
                                        }
                                    },
                                    "required": ["label"]
                                }
                            },
                            "multiSelect": {
                                "type": "boolean",
                                "description": "Allow the user to pick several options"
                            }
                        },
                        "required": ["question", "options", "multiSelect"]
                    }
                }
            },
            "required": ["questions"]
        }),
    }
}
