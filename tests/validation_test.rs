//! End-to-end validation scenarios through the library API.

use passcheck::config::MIN_PASSWORD_LENGTH;
use passcheck::domain::{CompositeRule, Rule};

#[test]
fn test_short_password_fails_every_rule() {
    let composite = CompositeRule::default_set();
    let report = composite.check("short");

    assert!(!report.valid);
    assert_eq!(
        report.failures,
        vec![
            "Password must be at least 8 characters long.",
            "Password must contain at least one digit.",
            "Password must contain at least one special character.",
        ]
    );
}

#[test]
fn test_conforming_password_is_valid() {
    let composite = CompositeRule::default_set();
    let report = composite.check("LongEnough1!");

    assert!(report.valid);
    assert!(report.failures.is_empty());
}

#[test]
fn test_long_alphabetic_password_fails_digit_and_special_only() {
    let composite = CompositeRule::default_set();
    let report = composite.check("longenough");

    assert!(!report.valid);
    assert_eq!(
        report.failures,
        vec![
            "Password must contain at least one digit.",
            "Password must contain at least one special character.",
        ]
    );
}

#[test]
fn test_empty_password_fails_every_rule() {
    // EOF on stdin flows through the pipeline as an empty password
    let composite = CompositeRule::default_set();
    let report = composite.check("");

    assert!(!report.valid);
    assert_eq!(report.failures.len(), 3);
}

#[test]
fn test_any_conforming_password_is_valid() {
    let composite = CompositeRule::default_set();

    for password in ["p4ss word", "!2345678", "Abcdef1?", "ümläut-9x"] {
        assert!(
            password.chars().count() >= MIN_PASSWORD_LENGTH,
            "test vector too short: {}",
            password
        );
        assert!(composite.validate(password), "rejected: {}", password);
    }
}

#[test]
fn test_verdict_is_stable_across_calls() {
    let composite = CompositeRule::default_set();

    assert_eq!(composite.validate("abc!23"), composite.validate("abc!23"));
    assert_eq!(
        composite.check("abc!23").failures,
        composite.check("abc!23").failures
    );
}

#[test]
fn test_report_serializes_to_expected_json_shape() {
    let composite = CompositeRule::default_set();
    let report = composite.check("longenough");

    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["valid"], false);
    assert_eq!(
        value["failures"],
        serde_json::json!([
            "Password must contain at least one digit.",
            "Password must contain at least one special character.",
        ])
    );
}

#[test]
fn test_default_composite_exposes_rules_in_reporting_order() {
    let composite = CompositeRule::default_set();
    assert_eq!(composite.rules(), Rule::default_set().as_slice());
}
