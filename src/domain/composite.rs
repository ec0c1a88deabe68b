//! Composite rule - combines member rules under logical AND.

use super::report::ValidationReport;
use super::rule::Rule;

/// An ordered collection of rules combined under logical AND.
///
/// Owns its member rules exclusively. An empty composite accepts every
/// password (vacuous truth).
///
/// Failure messages are always computed against the password actually being
/// checked, so the explanation and the verdict cannot disagree.
#[derive(Debug, Clone)]
pub struct CompositeRule {
    rules: Vec<Rule>,
}

impl CompositeRule {
    /// Create a composite from an ordered rule sequence.
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Composite over the fixed default rule set.
    pub fn default_set() -> Self {
        Self::new(Rule::default_set())
    }

    /// True only if every member rule accepts the password.
    pub fn validate(&self, password: &str) -> bool {
        self.rules.iter().all(|rule| rule.validate(password))
    }

    /// Newline-joined messages of the member rules that reject the password.
    ///
    /// Empty string when the password passes every rule.
    pub fn error_message(&self, password: &str) -> String {
        self.check(password).failures.join("\n")
    }

    /// Run every member rule against the password and collect the verdict
    /// along with the messages of the rules that failed, in rule order.
    pub fn check(&self, password: &str) -> ValidationReport {
        let failures: Vec<String> = self
            .rules
            .iter()
            .filter(|rule| !rule.validate(password))
            .map(|rule| rule.error_message())
            .collect();

        ValidationReport {
            valid: failures.is_empty(),
            failures,
        }
    }

    /// The member rules, in order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }
}
