//! CLI library components for the `eda` tool.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
