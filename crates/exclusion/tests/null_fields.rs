//! Tests for null value suppression.
//!
//! The two null flags suppress a pair from its null side alone, regardless
//! of path, regex and type rules.

use exclusion::{FieldValue, IgnoreReasonKind, IgnoreRules, TypeDescriptor};
use test_support::{dual_value, dual_value_at, some};

fn date() -> Option<FieldValue> {
    Some(FieldValue::object("Date", "2021-03-14T15:09:26Z"))
}

// =============================================================================
// Actual Null Fields
// =============================================================================

/// Any pair with a null actual value is ignored.
#[test]
fn ignore_actual_null_fields() {
    let rules = IgnoreRules::new().with_ignore_all_actual_null_fields(true);

    for dual_value in [
        dual_value(None, some("John")),
        dual_value(None, some(123)),
        dual_value(None, None),
        dual_value(None, date()),
    ] {
        assert!(rules.should_ignore(&dual_value), "{dual_value} should be ignored");
    }
}

/// Non-null actual values are not affected by the flag.
#[test]
fn non_null_actual_is_compared() {
    let rules = IgnoreRules::new().with_ignore_all_actual_null_fields(true);

    assert!(!rules.should_ignore(&dual_value(some("John"), None)));
    assert!(!rules.should_ignore(&dual_value(some(1), some(2))));
}

// =============================================================================
// Expected Null Fields
// =============================================================================

/// Any pair with a null expected value is ignored.
#[test]
fn ignore_expected_null_fields() {
    let rules = IgnoreRules::new().with_ignore_all_expected_null_fields(true);

    for dual_value in [
        dual_value(some("John"), None),
        dual_value(some(123), None),
        dual_value(None, None),
        dual_value(date(), None),
    ] {
        assert!(rules.should_ignore(&dual_value), "{dual_value} should be ignored");
    }
}

/// Non-null expected values are not affected by the flag.
#[test]
fn non_null_expected_is_compared() {
    let rules = IgnoreRules::new().with_ignore_all_expected_null_fields(true);

    assert!(!rules.should_ignore(&dual_value(None, some("John"))));
}

// =============================================================================
// Interaction With Other Rules
// =============================================================================

/// Null suppression holds whatever the path and type of the pair.
#[test]
fn null_suppression_ignores_other_rules() {
    let rules = IgnoreRules::new()
        .with_ignored_fields(["unrelated"])
        .unwrap()
        .with_ignored_types([TypeDescriptor::named("UUID")])
        .unwrap()
        .with_ignore_all_actual_null_fields(true);

    let dual_value = dual_value_at("person.address.street", None, some(12));
    assert!(rules.should_ignore(&dual_value));
}

/// The null checks are reported before path rules.
#[test]
fn null_reason_takes_precedence() {
    let rules = IgnoreRules::new()
        .with_ignored_fields(["name"])
        .unwrap()
        .with_ignore_all_actual_null_fields(true)
        .with_ignore_all_expected_null_fields(true);

    let both_null = dual_value_at("name", None, None);
    let reason = rules.ignore_reason(&both_null).unwrap();
    assert_eq!(reason.kind(), IgnoreReasonKind::ActualNull);

    let expected_null = dual_value_at("name", some("Jack"), None);
    let reason = rules.ignore_reason(&expected_null).unwrap();
    assert_eq!(reason.kind(), IgnoreReasonKind::ExpectedNull);
    assert_eq!(reason.to_string(), "expected value is null");
}

/// Turning a flag back off restores comparison.
#[test]
fn flags_can_be_cleared() {
    let mut rules = IgnoreRules::new();
    rules.set_ignore_all_actual_null_fields(true);
    rules.set_ignore_all_actual_null_fields(false);

    assert!(!rules.should_ignore(&dual_value(None, some("John"))));
    assert!(rules.is_empty());
}
