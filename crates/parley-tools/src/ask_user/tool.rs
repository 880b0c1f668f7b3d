//! AskUserQuestion tool implementation

use async_trait::async_trait;
use parley_core::tools::{Tool, ToolCall, ToolError, ToolResult, ToolSchema};
use parley_core::{AskExchange, AskResult, AskStatus, ParleyConfig, QuestionBatch};
use tracing::{info, warn};

use super::schema::create_schema;

/// Tool for asking the user questions during execution
///
/// Each call opens one presenter dialog and blocks until the user answers,
/// cancels or the presenter fails. The output is always the JSON form of an
/// [`AskResult`], so the agent sees `status`, `answers` and (for failures)
/// `error` in one place.
#[derive(Clone)]
pub struct AskUserQuestionTool {
    exchange: AskExchange,
}

impl Default for AskUserQuestionTool {
    fn default() -> Self {
        Self::new(ParleyConfig::default())
    }
}

impl AskUserQuestionTool {
    pub fn new(config: ParleyConfig) -> Self {
        Self::with_exchange(AskExchange::new(config))
    }

    pub fn with_exchange(exchange: AskExchange) -> Self {
        Self { exchange }
    }

    pub fn exchange(&self) -> &AskExchange {
        &self.exchange
    }

    fn to_tool_result(&self, call: &ToolCall, result: &AskResult) -> Result<ToolResult, ToolError> {
        let body = serde_json::to_string(result)?;
        let status = status_name(result.status);

        let tool_result = if result.is_error() {
            let message = result
                .error
                .clone()
                .unwrap_or_else(|| "Unknown presenter error".to_string());
            ToolResult::error(&call.id, self.name(), message).with_output(body)
        } else {
            ToolResult::success(&call.id, self.name(), body)
        };

        Ok(tool_result.with_metadata("status", status))
    }
}

fn status_name(status: AskStatus) -> &'static str {
    match status {
        AskStatus::Selected => "selected",
        AskStatus::Cancelled => "cancelled",
        AskStatus::Error => "error",
    }
}

#[async_trait]
impl Tool for AskUserQuestionTool {
    fn name(&self) -> &str {
        "ask_user_question"
    }

    fn description(&self) -> &str {
        "Ask the user one or more multiple-choice questions in a native dialog and wait for the answers. \
        Use this when there are several valid approaches and the user should choose, or when a requirement is unclear. \
        Each question has 2-4 options; the user may also type a free-text answer or cancel. \
        Answers come back keyed by each question's header."
    }

    fn schema(&self) -> ToolSchema {
        create_schema(self.name(), self.description())
    }

    async fn execute(&self, tool_call: &ToolCall) -> Result<ToolResult, ToolError> {
        let questions = tool_call
            .get_argument::<serde_json::Value>("questions")
            .ok_or_else(|| {
                ToolError::InvalidArguments("Missing required parameter: questions".to_string())
            })?;

        let result = match QuestionBatch::from_value(questions) {
            Ok(batch) => self.exchange.ask(&batch).await,
            Err(err) => {
                warn!(call_id = %tool_call.id, "rejected question batch: {}", err);
                AskResult::error(err.to_string())
            }
        };
        info!(
            call_id = %tool_call.id,
            status = status_name(result.status),
            answers = result.answers.len(),
            "ask_user_question finished"
        );

        self.to_tool_result(tool_call, &result)
    }

    fn validate(&self, call: &ToolCall) -> Result<(), ToolError> {
        // Shape and limits are checked by QuestionBatch in execute
        if !call.arguments.contains_key("questions") {
            return Err(ToolError::InvalidArguments(
                "Missing required parameter: questions".to_string(),
            ));
        }
        Ok(())
    }

    fn requires_user_interaction(&self) -> bool {
        true
    }
}
