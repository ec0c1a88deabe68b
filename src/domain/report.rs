//! Validation report - the result type returned to callers.

use serde::Serialize;

/// Outcome of checking one password against a rule set.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    /// True when every rule accepted the password.
    pub valid: bool,
    /// Messages of the rules that rejected the password, in rule order.
    pub failures: Vec<String>,
}
