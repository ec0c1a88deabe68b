//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `check` - Validate a password (the default)
//! - `rules` - List the active rule requirements

pub mod args;

pub use args::{CheckArgs, Cli, Commands};
