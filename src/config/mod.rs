//! Application configuration module
//!
//! The rule set is fixed at compile time; there is no file or environment
//! configuration, only application-wide constants.

mod constants;

pub use constants::*;
