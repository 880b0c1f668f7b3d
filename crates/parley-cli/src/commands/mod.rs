//! CLI command implementations

pub mod ask;
pub mod platform;
pub mod schema;
