//! Agent-facing tools built on parley-core

pub mod ask_user;

pub use ask_user::AskUserQuestionTool;
