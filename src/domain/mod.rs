//! Domain layer - Password rules and their composition
//!
//! Contains the rule value objects and the composite that combines them,
//! independent of CLI and I/O concerns.

pub mod composite;
pub mod report;
pub mod rule;

pub use composite::CompositeRule;
pub use report::ValidationReport;
pub use rule::Rule;
