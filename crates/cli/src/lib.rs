//! CLI tool for working with node ids.
//!
//! Provides commands for:
//! - Validating hex-encoded ids
//! - Comparing and sorting ids
//! - Listing the permitted id lengths

pub mod commands;
pub mod config;

pub use commands::{Command, CommandResult};
pub use config::CliConfig;
