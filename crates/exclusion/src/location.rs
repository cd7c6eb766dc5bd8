use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::error::{IgnoreRulesError, InvalidPathReason};

/// Separator between field names in the canonical rendering of a location.
pub const SEGMENT_SEPARATOR: char = '.';

/// Location of a field inside a compared object graph.
///
/// A location is an ordered, non-empty sequence of field names such as
/// `["father", "name", "first"]`, rendered canonically as
/// `"father.name.first"`. Equality and hashing only consider the canonical
/// string, so two locations built from different inputs compare equal when
/// they render the same.
///
/// # Examples
///
/// ```
/// use exclusion::FieldLocation;
///
/// let parsed = FieldLocation::parse("father.name.first").unwrap();
/// let built = FieldLocation::new(["father", "name", "first"]).unwrap();
///
/// assert_eq!(parsed, built);
/// assert_eq!(built.to_string(), "father.name.first");
/// assert_eq!(built.last_segment(), "first");
/// ```
#[derive(Clone, Debug)]
pub struct FieldLocation {
    path: String,
    segments: Vec<String>,
}

impl FieldLocation {
    /// Builds a location from its field names, outermost first.
    ///
    /// # Errors
    ///
    /// Returns [`IgnoreRulesError::InvalidPath`] when `segments` is empty,
    /// when any segment is empty, or when a segment contains
    /// [`SEGMENT_SEPARATOR`].
    pub fn new<I, S>(segments: I) -> Result<Self, IgnoreRulesError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: Vec<String> = segments.into_iter().map(Into::into).collect();
        let path = segments.join(".");

        if segments.is_empty() {
            return Err(IgnoreRulesError::invalid_path(path, InvalidPathReason::Empty));
        }
        if let Some(index) = segments.iter().position(String::is_empty) {
            return Err(IgnoreRulesError::invalid_path(
                path,
                InvalidPathReason::EmptySegment { index },
            ));
        }
        if let Some(index) = segments
            .iter()
            .position(|segment| segment.contains(SEGMENT_SEPARATOR))
        {
            return Err(IgnoreRulesError::invalid_path(
                path,
                InvalidPathReason::SeparatorInSegment { index },
            ));
        }

        Ok(Self { path, segments })
    }

    /// Parses a dot-separated path such as `"name.first"`.
    ///
    /// # Errors
    ///
    /// Returns [`IgnoreRulesError::InvalidPath`] for the empty string and for
    /// paths with an empty segment (`"a..b"`, `".a"`, `"a."`).
    pub fn parse(path: &str) -> Result<Self, IgnoreRulesError> {
        if path.is_empty() {
            return Err(IgnoreRulesError::invalid_path(path, InvalidPathReason::Empty));
        }
        Self::new(path.split(SEGMENT_SEPARATOR))
    }

    /// Returns the location of the field `name` nested under this one.
    ///
    /// # Errors
    ///
    /// Returns [`IgnoreRulesError::InvalidPath`] when `name` is empty or
    /// contains [`SEGMENT_SEPARATOR`].
    pub fn child(&self, name: impl Into<String>) -> Result<Self, IgnoreRulesError> {
        let name = name.into();
        let path = format!("{}{SEGMENT_SEPARATOR}{name}", self.path);
        let index = self.segments.len();
        if name.is_empty() {
            return Err(IgnoreRulesError::invalid_path(
                path,
                InvalidPathReason::EmptySegment { index },
            ));
        }
        if name.contains(SEGMENT_SEPARATOR) {
            return Err(IgnoreRulesError::invalid_path(
                path,
                InvalidPathReason::SeparatorInSegment { index },
            ));
        }

        let mut segments = self.segments.clone();
        segments.push(name);
        Ok(Self { path, segments })
    }

    /// Returns the enclosing location, or `None` for a top-level field.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        if self.segments.len() < 2 {
            return None;
        }
        let (_, enclosing) = self.segments.split_last()?;
        Some(Self {
            path: enclosing.join("."),
            segments: enclosing.to_vec(),
        })
    }

    /// Returns the canonical dot-joined rendering.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.path
    }

    /// Returns the field names, outermost first.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Returns the number of segments; top-level fields have depth 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Returns the innermost field name.
    #[must_use]
    pub fn last_segment(&self) -> &str {
        self.segments.last().map_or("", String::as_str)
    }
}

impl PartialEq for FieldLocation {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl Eq for FieldLocation {}

impl Hash for FieldLocation {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.path.hash(state);
    }
}

impl fmt::Display for FieldLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

impl FromStr for FieldLocation {
    type Err = IgnoreRulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for FieldLocation {
    fn as_ref(&self) -> &str {
        &self.path
    }
}

/// Parses `path` and inserts it into `set` unless an equal location is
/// already present. Returns whether the location was new.
pub(crate) fn register(
    set: &mut HashSet<FieldLocation>,
    path: &str,
) -> Result<bool, IgnoreRulesError> {
    let location = FieldLocation::parse(path)?;
    Ok(set.insert(location))
}
