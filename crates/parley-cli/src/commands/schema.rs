//! Schema command: print the tool schema the agent sees

use anyhow::Result;
use parley_core::ParleyConfig;
use parley_core::tools::Tool;
use parley_tools::AskUserQuestionTool;
use std::process::ExitCode;

pub fn show(config: ParleyConfig) -> Result<ExitCode> {
    let tool = AskUserQuestionTool::new(config);
    println!("{}", serde_json::to_string_pretty(&tool.schema())?);
    Ok(ExitCode::SUCCESS)
}
