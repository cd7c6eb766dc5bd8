//! Tracing for ignore rule registration and evaluation.
//!
//! All events are emitted under the `comparison::ignore` target when the
//! `tracing` feature is enabled. Without the feature every function is an
//! inline no-op, so the decision path carries no logging cost.
//!
//! # Examples
//!
//! ```
//! use exclusion::debug_ignore::IgnoreTracer;
//! use exclusion::{DualValue, FieldLocation, FieldValue, IgnoreRules};
//!
//! let mut rules = IgnoreRules::new();
//! rules.ignore_fields(["id"]).unwrap();
//!
//! let mut tracer = IgnoreTracer::new();
//! for path in ["id", "name"] {
//!     let location = FieldLocation::parse(path).unwrap();
//!     let pair = DualValue::new(location, Some(FieldValue::from(1)), Some(FieldValue::from(2)));
//!     tracer.record(rules.ignore_reason(&pair).map(|reason| reason.kind()));
//! }
//!
//! tracer.summary();
//! assert_eq!(tracer.total_evaluated(), 2);
//! assert_eq!(tracer.total_ignored(), 1);
//! ```

use crate::decision::{IgnoreReason, IgnoreReasonKind};
use crate::types::TypeDescriptor;

/// Target name for tracing events.
#[cfg(feature = "tracing")]
const IGNORE_TARGET: &str = "comparison::ignore";

// ============================================================================
// Tracing functions (feature-gated)
// ============================================================================

/// Traces registration of an ignored field location.
///
/// `added` is `false` when the location was already registered.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_field_registered(path: &str, added: bool) {
    tracing::debug!(
        target: IGNORE_TARGET,
        path = %path,
        added = added,
        "ignored_field_registered"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_field_registered(_path: &str, _added: bool) {}

/// Traces registration of an ignored field regex.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_regex_registered(pattern: &str) {
    tracing::debug!(
        target: IGNORE_TARGET,
        pattern = %pattern,
        "ignored_regex_registered"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_regex_registered(_pattern: &str) {}

/// Traces registration of an ignored type.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_type_registered(descriptor: &TypeDescriptor, added: bool) {
    tracing::debug!(
        target: IGNORE_TARGET,
        type_name = %descriptor,
        canonical = %descriptor.canonical(),
        added = added,
        "ignored_type_registered"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_type_registered(_descriptor: &TypeDescriptor, _added: bool) {}

/// Traces the outcome of evaluating one located pair.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_ignore_decision(path: &str, reason: Option<&IgnoreReason<'_>>) {
    match reason {
        Some(reason) => tracing::trace!(
            target: IGNORE_TARGET,
            path = %path,
            ignored = true,
            kind = %reason.kind(),
            reason = %reason,
            "ignore_decision"
        ),
        None => tracing::trace!(
            target: IGNORE_TARGET,
            path = %path,
            ignored = false,
            "ignore_decision"
        ),
    }
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_ignore_decision(_path: &str, _reason: Option<&IgnoreReason<'_>>) {}

/// Traces aggregate statistics for a comparison session.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_ignore_summary(tracer: &IgnoreTracer) {
    tracing::info!(
        target: IGNORE_TARGET,
        total_evaluated = tracer.total_evaluated(),
        total_ignored = tracer.total_ignored(),
        total_compared = tracer.total_compared(),
        actual_null = tracer.ignored_by(IgnoreReasonKind::ActualNull),
        expected_null = tracer.ignored_by(IgnoreReasonKind::ExpectedNull),
        field = tracer.ignored_by(IgnoreReasonKind::Field),
        regex = tracer.ignored_by(IgnoreReasonKind::Regex),
        type_ = tracer.ignored_by(IgnoreReasonKind::Type),
        "ignore_summary"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_ignore_summary(_tracer: &IgnoreTracer) {}

// ============================================================================
// IgnoreTracer - caller-owned statistics
// ============================================================================

/// Aggregates ignore decisions over a comparison session.
///
/// The rule set itself stays read-only during evaluation; a traversal that
/// wants statistics keeps one tracer per worker and merges them at the end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreTracer {
    total_evaluated: usize,
    actual_null: usize,
    expected_null: usize,
    field: usize,
    regex: usize,
    type_: usize,
}

impl IgnoreTracer {
    /// Creates a tracer with zero counts.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            total_evaluated: 0,
            actual_null: 0,
            expected_null: 0,
            field: 0,
            regex: 0,
            type_: 0,
        }
    }

    /// Records one evaluation; `None` means the pair was compared.
    pub fn record(&mut self, kind: Option<IgnoreReasonKind>) {
        self.total_evaluated += 1;
        if let Some(kind) = kind {
            *self.counter_mut(kind) += 1;
        }
    }

    /// Adds the counts of `other` into this tracer.
    pub fn merge(&mut self, other: &Self) {
        self.total_evaluated += other.total_evaluated;
        self.actual_null += other.actual_null;
        self.expected_null += other.expected_null;
        self.field += other.field;
        self.regex += other.regex;
        self.type_ += other.type_;
    }

    /// Emits a summary trace event.
    pub fn summary(&self) {
        trace_ignore_summary(self);
    }

    /// Resets all counters to zero.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Returns the number of evaluated pairs.
    #[must_use]
    pub const fn total_evaluated(&self) -> usize {
        self.total_evaluated
    }

    /// Returns the number of ignored pairs.
    #[must_use]
    pub const fn total_ignored(&self) -> usize {
        self.actual_null + self.expected_null + self.field + self.regex + self.type_
    }

    /// Returns the number of pairs that were not ignored.
    #[must_use]
    pub const fn total_compared(&self) -> usize {
        self.total_evaluated - self.total_ignored()
    }

    /// Returns how many pairs the given rule family suppressed.
    #[must_use]
    pub const fn ignored_by(&self, kind: IgnoreReasonKind) -> usize {
        match kind {
            IgnoreReasonKind::ActualNull => self.actual_null,
            IgnoreReasonKind::ExpectedNull => self.expected_null,
            IgnoreReasonKind::Field => self.field,
            IgnoreReasonKind::Regex => self.regex,
            IgnoreReasonKind::Type => self.type_,
        }
    }

    fn counter_mut(&mut self, kind: IgnoreReasonKind) -> &mut usize {
        match kind {
            IgnoreReasonKind::ActualNull => &mut self.actual_null,
            IgnoreReasonKind::ExpectedNull => &mut self.expected_null,
            IgnoreReasonKind::Field => &mut self.field,
            IgnoreReasonKind::Regex => &mut self.regex,
            IgnoreReasonKind::Type => &mut self.type_,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
