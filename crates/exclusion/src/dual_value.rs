use std::fmt;

use crate::location::FieldLocation;
use crate::types::TypeDescriptor;
use crate::value::{FieldValue, Typed};

/// Actual and expected values found at the same field location.
///
/// `None` stands for a null value on that side. Pairs are produced by the
/// traversal that walks both object graphs in parallel and are evaluated
/// once by [`IgnoreRules::should_ignore`](crate::IgnoreRules::should_ignore).
#[derive(Clone, Debug, PartialEq)]
pub struct DualValue<V = FieldValue> {
    location: FieldLocation,
    actual: Option<V>,
    expected: Option<V>,
}

impl<V> DualValue<V> {
    /// Creates a pair located at `location`.
    #[must_use]
    pub const fn new(location: FieldLocation, actual: Option<V>, expected: Option<V>) -> Self {
        Self {
            location,
            actual,
            expected,
        }
    }

    /// Returns the field location shared by both values.
    #[must_use]
    pub const fn location(&self) -> &FieldLocation {
        &self.location
    }

    /// Returns the canonical dot-joined path of the location.
    #[must_use]
    pub fn path(&self) -> &str {
        self.location.as_str()
    }

    /// Returns the actual value, `None` when null.
    #[must_use]
    pub const fn actual(&self) -> Option<&V> {
        self.actual.as_ref()
    }

    /// Returns the expected value, `None` when null.
    #[must_use]
    pub const fn expected(&self) -> Option<&V> {
        self.expected.as_ref()
    }

    /// Returns `true` when the actual side is null.
    #[must_use]
    pub const fn is_actual_null(&self) -> bool {
        self.actual.is_none()
    }

    /// Returns `true` when the expected side is null.
    #[must_use]
    pub const fn is_expected_null(&self) -> bool {
        self.expected.is_none()
    }
}

impl<V: fmt::Display> fmt::Display for DualValue<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DualValue [path={}, actual=", self.location)?;
        write_nullable(f, self.actual.as_ref())?;
        f.write_str(", expected=")?;
        write_nullable(f, self.expected.as_ref())?;
        f.write_str("]")
    }
}

fn write_nullable<V: fmt::Display>(f: &mut fmt::Formatter<'_>, value: Option<&V>) -> fmt::Result {
    match value {
        Some(value) => write!(f, "{value}"),
        None => f.write_str("null"),
    }
}

impl<V: Typed> DualValue<V> {
    /// Returns the type that type-based exclusion applies to.
    ///
    /// The actual value's type wins when present. A null actual falls back to
    /// the expected value's type only when `strict_type_checking` is set;
    /// otherwise the type is unknown and `None` is returned.
    #[must_use]
    pub fn effective_type(&self, strict_type_checking: bool) -> Option<TypeDescriptor> {
        match (&self.actual, &self.expected) {
            (Some(actual), _) => Some(actual.type_descriptor()),
            (None, Some(expected)) if strict_type_checking => Some(expected.type_descriptor()),
            _ => None,
        }
    }
}
