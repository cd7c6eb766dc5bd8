//! Shared fixtures for exclusion tests.
//!
//! Builds [`FieldLocation`]s and [`DualValue`]s the way a traversal would
//! hand them to [`IgnoreRules`](exclusion::IgnoreRules), so integration
//! tests can focus on the rules under test.

use exclusion::{DualValue, FieldLocation, FieldValue};
use rand::Rng;
use rand::distributions::Alphanumeric;

/// Type name of the values produced by [`dual_key_with_path`].
pub const OPAQUE_TYPE: &str = "Opaque";

/// Parses a dotted path, panicking on invalid input.
#[must_use]
pub fn location(path: &str) -> FieldLocation {
    FieldLocation::parse(path).unwrap_or_else(|error| panic!("invalid test path {path:?}: {error}"))
}

/// Returns a location with two random alphanumeric segments.
///
/// Segments start with `_` so they never collide with the field names used
/// by tests.
#[must_use]
pub fn random_location() -> FieldLocation {
    let mut rng = rand::thread_rng();
    let segments: Vec<String> = (0..2)
        .map(|_| {
            let suffix: String = (&mut rng)
                .sample_iter(&Alphanumeric)
                .take(12)
                .map(char::from)
                .collect();
            format!("_{suffix}")
        })
        .collect();
    FieldLocation::new(segments).unwrap_or_else(|error| panic!("random location: {error}"))
}

/// Pair at a random location.
#[must_use]
pub fn dual_value(actual: Option<FieldValue>, expected: Option<FieldValue>) -> DualValue {
    DualValue::new(random_location(), actual, expected)
}

/// Pair at `path`.
#[must_use]
pub fn dual_value_at(
    path: &str,
    actual: Option<FieldValue>,
    expected: Option<FieldValue>,
) -> DualValue {
    DualValue::new(location(path), actual, expected)
}

/// Pair at the location made of `segments`, holding two distinct non-null
/// values of type [`OPAQUE_TYPE`], so that only path-based rules can match.
#[must_use]
pub fn dual_key_with_path(segments: &[&str]) -> DualValue {
    let location = FieldLocation::new(segments.iter().copied())
        .unwrap_or_else(|error| panic!("invalid test segments {segments:?}: {error}"));
    DualValue::new(
        location,
        Some(FieldValue::object(OPAQUE_TYPE, "actual")),
        Some(FieldValue::object(OPAQUE_TYPE, "expected")),
    )
}

/// Shorthand for `Some(FieldValue::from(value))`.
#[must_use]
pub fn some(value: impl Into<FieldValue>) -> Option<FieldValue> {
    Some(value.into())
}
