//! Tool abstractions for exposing Parley to a host agent
//!
//! - [`Tool`] - The trait a host-facing tool implements
//! - [`ToolError`] - Error types for tool operations
//! - [`ToolCall`], [`ToolResult`], [`ToolSchema`] - Call and result payloads

pub mod error;
pub mod tool_trait;
pub mod types;

pub use error::ToolError;
pub use tool_trait::Tool;
pub use types::{ToolCall, ToolResult, ToolSchema};
