//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Parser, Subcommand};

/// passcheck - validate a password against a fixed rule set
#[derive(Parser, Debug)]
#[command(name = "passcheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check a password (the default when no subcommand is given)
    Check(CheckArgs),

    /// List the active rule requirements
    Rules,
}

/// Arguments for the check command
#[derive(Parser, Debug, Default)]
pub struct CheckArgs {
    /// Password to check; read from stdin when omitted
    pub password: Option<String>,

    /// Print the report as JSON instead of human-readable text
    #[arg(long)]
    pub json: bool,
}
