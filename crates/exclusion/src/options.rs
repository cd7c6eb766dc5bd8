//! User-facing options from which a session's [`IgnoreRules`] are built.

use crate::error::IgnoreRulesError;
use crate::rule_set::IgnoreRules;
use crate::types::TypeDescriptor;

/// Exclusion settings as supplied by the user of a comparison.
///
/// Types are given in their textual form (`int`, `Integer`, `UUID`, ...),
/// see [`TypeDescriptor`]'s `FromStr` implementation. With the `serde`
/// feature the struct (de)serializes with camel-cased keys and every field
/// optional.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct IgnoreOptions {
    /// Dot-separated field paths to ignore.
    pub ignored_fields: Vec<String>,
    /// Regexes matched against whole dot-separated field paths.
    pub ignored_fields_regexes: Vec<String>,
    /// Textual type descriptors whose fields are ignored.
    pub ignored_types: Vec<String>,
    /// Ignore every pair whose actual value is null.
    pub ignore_all_actual_null_fields: bool,
    /// Ignore every pair whose expected value is null.
    pub ignore_all_expected_null_fields: bool,
    /// Take the expected value's type when the actual value is null.
    pub strict_type_checking: bool,
}

impl IgnoreRules {
    /// Builds a rule set from user options.
    ///
    /// # Errors
    ///
    /// Returns the first registration error: an invalid path, an empty or
    /// malformed regex, or a blank type name.
    ///
    /// # Examples
    ///
    /// ```
    /// use exclusion::{IgnoreOptions, IgnoreRules};
    ///
    /// let options = IgnoreOptions {
    ///     ignored_fields: vec!["id".into()],
    ///     ignored_types: vec!["boolean".into()],
    ///     strict_type_checking: true,
    ///     ..IgnoreOptions::default()
    /// };
    /// let rules = IgnoreRules::from_options(&options).unwrap();
    /// assert_eq!(rules.ignored_fields().len(), 1);
    /// assert!(rules.is_strict_type_checking());
    /// ```
    pub fn from_options(options: &IgnoreOptions) -> Result<Self, IgnoreRulesError> {
        let types = options
            .ignored_types
            .iter()
            .map(|text| text.parse::<TypeDescriptor>())
            .collect::<Result<Vec<_>, _>>()?;

        let mut rules = Self::new();
        rules
            .ignore_fields(&options.ignored_fields)?
            .ignore_fields_matching_regexes(options.ignored_fields_regexes.iter().cloned())?
            .ignore_fields_of_types(types)?
            .set_ignore_all_actual_null_fields(options.ignore_all_actual_null_fields)
            .set_ignore_all_expected_null_fields(options.ignore_all_expected_null_fields)
            .set_strict_type_checking(options.strict_type_checking);
        Ok(rules)
    }

    /// Returns the options that rebuild an equivalent rule set.
    #[must_use]
    pub fn to_options(&self) -> IgnoreOptions {
        let mut ignored_fields: Vec<String> = self
            .ignored_fields()
            .iter()
            .map(|location| location.as_str().to_owned())
            .collect();
        ignored_fields.sort_unstable();

        IgnoreOptions {
            ignored_fields,
            ignored_fields_regexes: self
                .ignored_fields_regexes()
                .iter()
                .map(|pattern| pattern.as_str().to_owned())
                .collect(),
            ignored_types: self.ignored_types().iter().map(ToString::to_string).collect(),
            ignore_all_actual_null_fields: self.ignores_all_actual_null_fields(),
            ignore_all_expected_null_fields: self.ignores_all_expected_null_fields(),
            strict_type_checking: self.is_strict_type_checking(),
        }
    }
}

impl TryFrom<&IgnoreOptions> for IgnoreRules {
    type Error = IgnoreRulesError;

    fn try_from(options: &IgnoreOptions) -> Result<Self, Self::Error> {
        Self::from_options(options)
    }
}
