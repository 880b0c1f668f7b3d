//! Core Tool trait definition

use super::error::ToolError;
use super::types::{ToolCall, ToolResult, ToolSchema};
use async_trait::async_trait;
use std::time::Instant;

/// Base trait for tools exposed to a host agent
#[async_trait]
pub trait Tool: Send + Sync {
    /// Get the tool's unique name (e.g., "ask_user_question")
    fn name(&self) -> &str;

    /// Get the tool's description for LLM understanding
    fn description(&self) -> &str;

    /// Get the tool's JSON schema for input parameters
    fn schema(&self) -> ToolSchema;

    /// Execute the tool with the given arguments
    ///
    /// # Errors
    ///
    /// Returns `ToolError` if arguments are invalid or execution fails.
    async fn execute(&self, call: &ToolCall) -> Result<ToolResult, ToolError>;

    /// Validate the tool call arguments
    ///
    /// Called before `execute()`. Default implementation accepts all arguments.
    fn validate(&self, call: &ToolCall) -> Result<(), ToolError> {
        let _ = call;
        Ok(())
    }

    /// Whether this tool requires user interaction to complete
    fn requires_user_interaction(&self) -> bool {
        false
    }

    /// Execute the tool with timing and error handling
    ///
    /// Validates, executes, measures the elapsed time and converts errors to
    /// `ToolResult::error`. Always returns a `ToolResult`.
    async fn execute_with_timing(&self, call: &ToolCall) -> ToolResult {
        let start_time = Instant::now();

        if let Err(err) = self.validate(call) {
            return ToolResult::error(&call.id, self.name(), err.to_string())
                .with_execution_time(start_time.elapsed().as_millis() as u64);
        }

        match self.execute(call).await {
            Ok(mut result) => {
                result.execution_time_ms = Some(start_time.elapsed().as_millis() as u64);
                result
            }
            Err(err) => ToolResult::error(&call.id, self.name(), err.to_string())
                .with_execution_time(start_time.elapsed().as_millis() as u64),
        }
    }
}
