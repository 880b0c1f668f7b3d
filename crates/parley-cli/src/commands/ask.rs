//! Ask command: run one exchange and print the result

use anyhow::{Context, Result};
use parley_core::{AskExchange, AskResult, ParleyConfig, QuestionBatch};
use std::process::ExitCode;
use tokio::io::AsyncReadExt;
use tracing::debug;

/// Read a batch from `input` (a path, or `-` for stdin), ask it and print the
/// result JSON. Exits non-zero only for `status = "error"`.
pub async fn run(input: &str, config: ParleyConfig) -> Result<ExitCode> {
    let text = read_input(input).await?;

    let result = match QuestionBatch::from_json(&text) {
        Ok(batch) => AskExchange::new(config).ask(&batch).await,
        Err(err) => AskResult::error(err.to_string()),
    };
    debug!(status = ?result.status, "exchange complete");

    println!("{}", serde_json::to_string(&result)?);

    Ok(ExitCode::from(exit_status(&result)))
}

async fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut text = String::new();
        tokio::io::stdin()
            .read_to_string(&mut text)
            .await
            .context("Failed to read questions from stdin")?;
        return Ok(text);
    }

    tokio::fs::read_to_string(input)
        .await
        .with_context(|| format!("Failed to read questions from {}", input))
}

fn exit_status(result: &AskResult) -> u8 {
    if result.is_error() { 1 } else { 0 }
}
