//! AskUserQuestion tool
//!
//! Hands a batch of questions to the presenter process and returns the
//! normalized answers to the agent as JSON.

mod schema;
mod tool;


pub use schema::create_schema;
pub use tool::AskUserQuestionTool;
