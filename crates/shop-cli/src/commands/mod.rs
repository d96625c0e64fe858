//! CLI command handlers.

pub mod browse;
pub mod categories;
pub mod replay;
