use std::fmt;

use crate::debug_ignore::trace_ignore_decision;
use crate::dual_value::DualValue;
use crate::location::FieldLocation;
use crate::pattern::FieldPattern;
use crate::rule_set::IgnoreRules;
use crate::types::TypeDescriptor;
use crate::value::Typed;

/// Rule family that suppressed a difference.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum IgnoreReasonKind {
    /// The actual value was null and actual nulls are ignored.
    ActualNull,
    /// The expected value was null and expected nulls are ignored.
    ExpectedNull,
    /// The location was registered as an ignored field.
    Field,
    /// The location matched an ignored field regex.
    Regex,
    /// The effective type was registered as ignored.
    Type,
}

impl fmt::Display for IgnoreReasonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ActualNull => f.write_str("actual-null"),
            Self::ExpectedNull => f.write_str("expected-null"),
            Self::Field => f.write_str("field"),
            Self::Regex => f.write_str("regex"),
            Self::Type => f.write_str("type"),
        }
    }
}

/// Why [`IgnoreRules::ignore_reason`] suppressed a pair, borrowing the rule
/// that matched.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum IgnoreReason<'a> {
    /// Actual side is null.
    ActualNull,
    /// Expected side is null.
    ExpectedNull,
    /// Exact match on a registered location.
    Field(&'a FieldLocation),
    /// Whole-path match on a registered regex.
    Regex(&'a FieldPattern),
    /// Effective type matched this registered type (canonical form).
    Type(&'a TypeDescriptor),
}

impl IgnoreReason<'_> {
    /// Returns the rule family.
    #[must_use]
    pub const fn kind(&self) -> IgnoreReasonKind {
        match self {
            Self::ActualNull => IgnoreReasonKind::ActualNull,
            Self::ExpectedNull => IgnoreReasonKind::ExpectedNull,
            Self::Field(_) => IgnoreReasonKind::Field,
            Self::Regex(_) => IgnoreReasonKind::Regex,
            Self::Type(_) => IgnoreReasonKind::Type,
        }
    }
}

impl fmt::Display for IgnoreReason<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ActualNull => f.write_str("actual value is null"),
            Self::ExpectedNull => f.write_str("expected value is null"),
            Self::Field(location) => write!(f, "field '{location}' is ignored"),
            Self::Regex(pattern) => write!(f, "field matches ignored regex '{pattern}'"),
            Self::Type(descriptor) => write!(f, "fields of type {descriptor} are ignored"),
        }
    }
}

impl IgnoreRules {
    /// Returns `true` when a difference at `dual_value` must not be reported.
    ///
    /// Pure read of the rule set; safe to call from several threads sharing
    /// `&IgnoreRules` once registration is finished.
    ///
    /// # Examples
    ///
    /// ```
    /// use exclusion::{DualValue, FieldLocation, FieldValue, IgnoreRules};
    ///
    /// let mut rules = IgnoreRules::new();
    /// rules.ignore_fields(["name.first"]).unwrap();
    ///
    /// let location = FieldLocation::parse("name.first").unwrap();
    /// let pair = DualValue::new(location, Some(FieldValue::from("Jack")), Some(FieldValue::from("John")));
    /// assert!(rules.should_ignore(&pair));
    /// ```
    #[must_use]
    pub fn should_ignore<V: Typed>(&self, dual_value: &DualValue<V>) -> bool {
        self.ignore_reason(dual_value).is_some()
    }

    /// Returns the first rule that suppresses `dual_value`, checking
    /// actual-null, expected-null, field, regex and type rules in that order.
    ///
    /// The families are independent, so the order only decides which reason
    /// is reported, never whether the pair is ignored.
    #[must_use]
    pub fn ignore_reason<V: Typed>(&self, dual_value: &DualValue<V>) -> Option<IgnoreReason<'_>> {
        let reason = self
            .null_reason(dual_value)
            .or_else(|| self.matching_field(dual_value.location()).map(IgnoreReason::Field))
            .or_else(|| self.matching_regex(dual_value.path()).map(IgnoreReason::Regex))
            .or_else(|| self.matching_type(dual_value).map(IgnoreReason::Type));

        trace_ignore_decision(dual_value.path(), reason.as_ref());
        reason
    }

    fn null_reason<V>(&self, dual_value: &DualValue<V>) -> Option<IgnoreReason<'_>> {
        if self.ignores_all_actual_null_fields() && dual_value.is_actual_null() {
            return Some(IgnoreReason::ActualNull);
        }
        if self.ignores_all_expected_null_fields() && dual_value.is_expected_null() {
            return Some(IgnoreReason::ExpectedNull);
        }
        None
    }

    fn matching_field(&self, location: &FieldLocation) -> Option<&FieldLocation> {
        self.ignored_fields().get(location)
    }

    fn matching_regex(&self, path: &str) -> Option<&FieldPattern> {
        self.ignored_fields_regexes()
            .iter()
            .find(|pattern| pattern.matches(path))
    }

    fn matching_type<V: Typed>(&self, dual_value: &DualValue<V>) -> Option<&TypeDescriptor> {
        let effective = dual_value.effective_type(self.is_strict_type_checking())?;
        self.ignored_canonical_types().get(&effective.canonical())
    }
}
