use std::fmt;

use regex::Regex;

use crate::error::IgnoreRulesError;

/// Field path regex compiled for whole-string matching.
///
/// The caller's pattern is wrapped in `^(?:...)$` so that `"name"` only
/// matches the path `name`, never `surname` or `name.first`. Verbose-mode
/// patterns (`(?x)`) may end in a `# comment`.
#[derive(Clone, Debug)]
pub struct FieldPattern {
    pattern: String,
    regex: Regex,
}

impl FieldPattern {
    /// Compiles `pattern`.
    ///
    /// # Errors
    ///
    /// Returns [`IgnoreRulesError::InvalidArgument`] for an empty pattern and
    /// [`IgnoreRulesError::PatternSyntax`] when the regex does not compile.
    pub fn new(pattern: impl Into<String>) -> Result<Self, IgnoreRulesError> {
        let pattern = pattern.into();
        if pattern.is_empty() {
            return Err(IgnoreRulesError::invalid_argument("pattern", pattern));
        }

        // The bare pattern must compile on its own, otherwise text such as
        // `a)|(b` would slip out of the anchoring group.
        let compiled = Regex::new(&pattern).and_then(|_| anchored(&pattern));
        match compiled {
            Ok(regex) => Ok(Self { pattern, regex }),
            Err(source) => Err(IgnoreRulesError::PatternSyntax { pattern, source }),
        }
    }

    /// Returns the pattern text as registered.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// Returns `true` when the whole of `path` matches.
    #[must_use]
    pub fn matches(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }
}

/// Compiles the whole-string form of an already valid `pattern`.
///
/// A balanced pattern only fails to compile once wrapped when it ends inside
/// a verbose-mode comment that swallows the closing `)$`. A line break ends
/// the comment and is itself ignored in verbose mode.
fn anchored(pattern: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!("^(?:{pattern})$"))
        .or_else(|error| Regex::new(&format!("^(?:{pattern}\n)$")).map_err(|_| error))
}

impl fmt::Display for FieldPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

impl PartialEq for FieldPattern {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern
    }
}

impl Eq for FieldPattern {}
