//! Password rule value objects.
//!
//! DDD: each rule is an immutable value object - a pure predicate over a
//! candidate password plus a human-readable failure message.
//!
//! Character classification is pinned as follows: `HasDigit` matches ASCII
//! decimal digits only, `HasSpecialChar` uses Rust's Unicode classification
//! (anything neither alphabetic nor numeric), and `MinLength` counts Unicode
//! scalar values rather than bytes.

use crate::config::MIN_PASSWORD_LENGTH;

/// A single pass/fail check over a candidate password.
///
/// The rule set is closed; variants are matched exhaustively instead of
/// being dispatched through a trait object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// Requires at least this many characters.
    MinLength(usize),
    /// Requires at least one ASCII decimal digit (0-9).
    HasDigit,
    /// Requires at least one character that is neither a letter nor a digit.
    HasSpecialChar,
}

impl Rule {
    /// The fixed rule set applied to every password, in reporting order.
    pub fn default_set() -> Vec<Rule> {
        vec![
            Rule::MinLength(MIN_PASSWORD_LENGTH),
            Rule::HasDigit,
            Rule::HasSpecialChar,
        ]
    }

    /// Check the password against this rule.
    ///
    /// Pure and infallible: same input always yields the same verdict,
    /// and no input can make it panic.
    pub fn validate(&self, password: &str) -> bool {
        match self {
            Rule::MinLength(min) => password.chars().count() >= *min,
            Rule::HasDigit => password.chars().any(|ch| ch.is_ascii_digit()),
            Rule::HasSpecialChar => password.chars().any(|ch| !ch.is_alphanumeric()),
        }
    }

    /// The explanation shown when this rule rejects a password.
    pub fn error_message(&self) -> String {
        match self {
            Rule::MinLength(min) => {
                format!("Password must be at least {} characters long.", min)
            }
            Rule::HasDigit => "Password must contain at least one digit.".to_string(),
            Rule::HasSpecialChar => {
                "Password must contain at least one special character.".to_string()
            }
        }
    }
}
