use std::fmt;

use thiserror::Error;

/// Classification describing why a field location was rejected.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InvalidPathReason {
    /// No segment was supplied (empty path string or empty segment list).
    Empty,
    /// The segment at `index` was empty, e.g. `"name..first"` or `"name."`.
    EmptySegment {
        /// Zero-based position of the offending segment.
        index: usize,
    },
    /// The segment at `index` contains the `.` separator, so it would render
    /// like two segments.
    SeparatorInSegment {
        /// Zero-based position of the offending segment.
        index: usize,
    },
}

impl fmt::Display for InvalidPathReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("field path is empty"),
            Self::EmptySegment { index } => write!(f, "segment {index} is empty"),
            Self::SeparatorInSegment { index } => {
                write!(f, "segment {index} contains the '.' separator")
            }
        }
    }
}

/// Error produced when an ignore rule cannot be registered.
///
/// Every variant is raised while rules are being registered. Evaluating a
/// [`DualValue`](crate::DualValue) against an [`IgnoreRules`](crate::IgnoreRules)
/// never fails.
#[derive(Debug, Error)]
pub enum IgnoreRulesError {
    /// A field path was empty or contained an empty segment.
    #[error("invalid field path '{path}': {reason}")]
    InvalidPath {
        /// The offending path text, segments joined with `.`.
        path: String,
        /// Why the path was rejected.
        reason: InvalidPathReason,
    },
    /// A pattern or type descriptor argument was empty.
    #[error("invalid {what}: '{value}'")]
    InvalidArgument {
        /// Which kind of argument was rejected (`"pattern"`, `"type"`).
        what: &'static str,
        /// The rejected text.
        value: String,
    },
    /// A field path regex did not compile.
    #[error("failed to compile field regex '{pattern}': {source}")]
    PatternSyntax {
        /// The regex text as supplied by the caller.
        pattern: String,
        /// Error reported by the regex compiler.
        #[source]
        source: regex::Error,
    },
}

impl IgnoreRulesError {
    pub(crate) fn invalid_path(path: impl Into<String>, reason: InvalidPathReason) -> Self {
        Self::InvalidPath {
            path: path.into(),
            reason,
        }
    }

    pub(crate) fn invalid_argument(what: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidArgument {
            what,
            value: value.into(),
        }
    }

    /// Returns the offending path, pattern or type text.
    #[must_use]
    pub fn offending_text(&self) -> &str {
        match self {
            Self::InvalidPath { path, .. } => path,
            Self::InvalidArgument { value, .. } => value,
            Self::PatternSyntax { pattern, .. } => pattern,
        }
    }
}
