//! passcheck - Password validation against a composable rule set
//!
//! This crate validates a candidate password against a fixed set of
//! rules and reports which rules failed.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application constants
//! - **domain**: Password rules and their composition
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Check a password read from stdin
//! cargo run
//!
//! # Check a password given as an argument, reporting as JSON
//! cargo run -- check 'LongEnough1!' --json
//!
//! # List the active rule requirements
//! cargo run -- rules
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;

// Re-export commonly used types at crate root
pub use domain::{CompositeRule, Rule, ValidationReport};
pub use errors::{AppError, AppResult};
