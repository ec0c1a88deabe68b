//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Validation
// =============================================================================

/// Minimum password length requirement
pub const MIN_PASSWORD_LENGTH: usize = 8;

// =============================================================================
// User-facing output
// =============================================================================

/// Prompt shown before reading a password from stdin
pub const PROMPT: &str = "Enter a password:";

/// Verdict printed when every rule passes
pub const MSG_VALID: &str = "Password is valid.";

/// Verdict header printed when at least one rule fails
pub const MSG_INVALID: &str = "Password is invalid.";
