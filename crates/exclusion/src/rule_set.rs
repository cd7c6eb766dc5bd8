use std::collections::HashSet;
use std::fmt;

use crate::debug_ignore::{trace_field_registered, trace_regex_registered, trace_type_registered};
use crate::error::IgnoreRulesError;
use crate::location::{self, FieldLocation};
use crate::pattern::FieldPattern;
use crate::types::TypeDescriptor;

/// Accumulated exclusion rules of one comparison session.
///
/// Rules are registered before the traversal starts and then only read.
/// Five independent families decide whether a difference is suppressed:
///
/// - **fields**: exact field locations, deduplicated;
/// - **regexes**: whole-path regexes, appended in registration order;
/// - **types**: runtime types, where a primitive kind and its wrapper are
///   the same entry and no subtype relation applies;
/// - **actual nulls** and **expected nulls**: flags suppressing every pair
///   whose actual (resp. expected) side is null.
///
/// Registration never removes or replaces earlier entries. Each
/// registration call validates every argument before storing any of them, so
/// a failing call leaves the rules untouched.
///
/// `IgnoreRules` is `Send + Sync`; once populated it can be shared by
/// reference across traversal workers.
///
/// # Examples
///
/// ```
/// use exclusion::{DualValue, FieldLocation, FieldValue, IgnoreRules, TypeDescriptor};
///
/// let rules = IgnoreRules::new()
///     .with_ignored_fields(["id"])
///     .unwrap()
///     .with_ignored_fields_matching_regexes([".*Date"])
///     .unwrap()
///     .with_ignored_types([TypeDescriptor::named("UUID")])
///     .unwrap();
///
/// let at = |path: &str| FieldLocation::parse(path).unwrap();
/// let uuid = FieldValue::object("UUID", "3f0e...");
///
/// let id = DualValue::new(at("id"), Some(FieldValue::from(1)), Some(FieldValue::from(2)));
/// let birth_date: DualValue = DualValue::new(at("birthDate"), None, None);
/// let token = DualValue::new(at("token"), Some(uuid.clone()), Some(uuid));
/// let name = DualValue::new(at("name"), Some(FieldValue::from("a")), Some(FieldValue::from("b")));
///
/// assert!(rules.should_ignore(&id));
/// assert!(rules.should_ignore(&birth_date));
/// assert!(rules.should_ignore(&token));
/// assert!(!rules.should_ignore(&name));
/// ```
#[derive(Clone, Debug, Default)]
pub struct IgnoreRules {
    ignored_fields: HashSet<FieldLocation>,
    ignored_fields_regexes: Vec<FieldPattern>,
    ignored_types: Vec<TypeDescriptor>,
    ignored_canonical_types: HashSet<TypeDescriptor>,
    ignore_all_actual_null_fields: bool,
    ignore_all_expected_null_fields: bool,
    strict_type_checking: bool,
}

impl IgnoreRules {
    /// Creates an empty rule set that ignores nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers field locations, given as dot-separated paths, to ignore.
    ///
    /// Paths already registered are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`IgnoreRulesError::InvalidPath`] if any path is empty or has
    /// an empty segment; nothing is registered in that case.
    pub fn ignore_fields<I, S>(&mut self, paths: I) -> Result<&mut Self, IgnoreRulesError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut staged = HashSet::new();
        for path in paths {
            location::register(&mut staged, path.as_ref())?;
        }

        for location in staged {
            let path = location.as_str().to_owned();
            let added = self.ignored_fields.insert(location);
            trace_field_registered(&path, added);
        }
        Ok(self)
    }

    /// Registers regexes; fields whose whole dotted path matches one of them
    /// are ignored.
    ///
    /// Earlier regexes are kept, and duplicates are not collapsed.
    ///
    /// # Errors
    ///
    /// Returns [`IgnoreRulesError::InvalidArgument`] for an empty regex and
    /// [`IgnoreRulesError::PatternSyntax`] for one that does not compile;
    /// nothing is registered in either case.
    pub fn ignore_fields_matching_regexes<I, S>(
        &mut self,
        patterns: I,
    ) -> Result<&mut Self, IgnoreRulesError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let compiled = patterns
            .into_iter()
            .map(FieldPattern::new)
            .collect::<Result<Vec<_>, _>>()?;

        for pattern in &compiled {
            trace_regex_registered(pattern.as_str());
        }
        self.ignored_fields_regexes.extend(compiled);
        Ok(self)
    }

    /// Registers types whose fields are ignored.
    ///
    /// Registering a primitive kind also covers its wrapper and vice versa.
    /// Supertypes do not cover their subtypes.
    ///
    /// # Errors
    ///
    /// Returns [`IgnoreRulesError::InvalidArgument`] for a named type with a
    /// blank name; nothing is registered in that case.
    pub fn ignore_fields_of_types<I>(&mut self, types: I) -> Result<&mut Self, IgnoreRulesError>
    where
        I: IntoIterator<Item = TypeDescriptor>,
    {
        let staged: Vec<TypeDescriptor> = types.into_iter().collect();
        staged.iter().try_for_each(TypeDescriptor::validate)?;

        for descriptor in staged {
            let added = !self.ignored_types.contains(&descriptor);
            trace_type_registered(&descriptor, added);
            if added {
                self.ignored_canonical_types.insert(descriptor.canonical());
                self.ignored_types.push(descriptor);
            }
        }
        Ok(self)
    }

    /// Sets whether every pair with a null actual value is ignored.
    pub fn set_ignore_all_actual_null_fields(&mut self, ignore: bool) -> &mut Self {
        self.ignore_all_actual_null_fields = ignore;
        self
    }

    /// Sets whether every pair with a null expected value is ignored.
    pub fn set_ignore_all_expected_null_fields(&mut self, ignore: bool) -> &mut Self {
        self.ignore_all_expected_null_fields = ignore;
        self
    }

    /// Sets strict type checking.
    ///
    /// When enabled, a pair with a null actual value takes the expected
    /// value's type for type-based exclusion.
    pub fn set_strict_type_checking(&mut self, strict: bool) -> &mut Self {
        self.strict_type_checking = strict;
        self
    }

    /// Consuming variant of [`ignore_fields`](Self::ignore_fields).
    pub fn with_ignored_fields<I, S>(mut self, paths: I) -> Result<Self, IgnoreRulesError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.ignore_fields(paths)?;
        Ok(self)
    }

    /// Consuming variant of
    /// [`ignore_fields_matching_regexes`](Self::ignore_fields_matching_regexes).
    pub fn with_ignored_fields_matching_regexes<I, S>(
        mut self,
        patterns: I,
    ) -> Result<Self, IgnoreRulesError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore_fields_matching_regexes(patterns)?;
        Ok(self)
    }

    /// Consuming variant of [`ignore_fields_of_types`](Self::ignore_fields_of_types).
    pub fn with_ignored_types<I>(mut self, types: I) -> Result<Self, IgnoreRulesError>
    where
        I: IntoIterator<Item = TypeDescriptor>,
    {
        self.ignore_fields_of_types(types)?;
        Ok(self)
    }

    /// Consuming variant of
    /// [`set_ignore_all_actual_null_fields`](Self::set_ignore_all_actual_null_fields).
    pub fn with_ignore_all_actual_null_fields(mut self, ignore: bool) -> Self {
        self.ignore_all_actual_null_fields = ignore;
        self
    }

    /// Consuming variant of
    /// [`set_ignore_all_expected_null_fields`](Self::set_ignore_all_expected_null_fields).
    pub fn with_ignore_all_expected_null_fields(mut self, ignore: bool) -> Self {
        self.ignore_all_expected_null_fields = ignore;
        self
    }

    /// Consuming variant of [`set_strict_type_checking`](Self::set_strict_type_checking).
    pub fn with_strict_type_checking(mut self, strict: bool) -> Self {
        self.strict_type_checking = strict;
        self
    }

    /// Registered field locations.
    #[must_use]
    pub fn ignored_fields(&self) -> &HashSet<FieldLocation> {
        &self.ignored_fields
    }

    /// Registered field regexes, in registration order.
    #[must_use]
    pub fn ignored_fields_regexes(&self) -> &[FieldPattern] {
        &self.ignored_fields_regexes
    }

    /// Registered types, in first-registration order.
    #[must_use]
    pub fn ignored_types(&self) -> &[TypeDescriptor] {
        &self.ignored_types
    }

    pub(crate) fn ignored_canonical_types(&self) -> &HashSet<TypeDescriptor> {
        &self.ignored_canonical_types
    }

    /// Returns whether null actual values are ignored.
    #[must_use]
    pub const fn ignores_all_actual_null_fields(&self) -> bool {
        self.ignore_all_actual_null_fields
    }

    /// Returns whether null expected values are ignored.
    #[must_use]
    pub const fn ignores_all_expected_null_fields(&self) -> bool {
        self.ignore_all_expected_null_fields
    }

    /// Returns whether strict type checking is enabled.
    #[must_use]
    pub const fn is_strict_type_checking(&self) -> bool {
        self.strict_type_checking
    }

    /// Returns `true` when no rule of any family is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ignored_fields.is_empty()
            && self.ignored_fields_regexes.is_empty()
            && self.ignored_types.is_empty()
            && !self.ignore_all_actual_null_fields
            && !self.ignore_all_expected_null_fields
    }
}

/// Multi-line summary of the active rules, one `- ` bullet per family.
impl fmt::Display for IgnoreRules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ignore_all_actual_null_fields {
            writeln!(f, "- all actual null fields were ignored in the comparison")?;
        }
        if self.ignore_all_expected_null_fields {
            writeln!(f, "- all expected null fields were ignored in the comparison")?;
        }
        if !self.ignored_fields.is_empty() {
            let mut paths: Vec<&str> = self
                .ignored_fields
                .iter()
                .map(FieldLocation::as_str)
                .collect();
            paths.sort_unstable();
            writeln!(
                f,
                "- the following fields were ignored in the comparison: {}",
                paths.join(", ")
            )?;
        }
        if !self.ignored_fields_regexes.is_empty() {
            let patterns: Vec<&str> = self
                .ignored_fields_regexes
                .iter()
                .map(FieldPattern::as_str)
                .collect();
            writeln!(
                f,
                "- the fields matching the following regexes were ignored in the comparison: {}",
                patterns.join(", ")
            )?;
        }
        if !self.ignored_types.is_empty() {
            let types: Vec<String> = self.ignored_types.iter().map(ToString::to_string).collect();
            writeln!(
                f,
                "- the following types were ignored in the comparison: {}",
                types.join(", ")
            )?;
        }
        if self.strict_type_checking {
            writeln!(
                f,
                "- actual and expected were required to have the same type (strict type checking)"
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PrimitiveKind;

    fn paths(rules: &IgnoreRules) -> Vec<&str> {
        let mut paths: Vec<&str> = rules
            .ignored_fields()
            .iter()
            .map(FieldLocation::as_str)
            .collect();
        paths.sort_unstable();
        paths
    }

    #[test]
    fn new_rules_are_empty() {
        let rules = IgnoreRules::new();
        assert!(rules.is_empty());
        assert!(!rules.is_strict_type_checking());
        assert!(!rules.ignores_all_actual_null_fields());
        assert!(!rules.ignores_all_expected_null_fields());
        assert_eq!(rules.to_string(), "");
    }

    #[test]
    fn ignore_fields_deduplicates() {
        let mut rules = IgnoreRules::new();
        rules.ignore_fields(["foo", "bar", "foo.bar", "bar"]).unwrap();
        rules.ignore_fields(["foo"]).unwrap();

        assert_eq!(paths(&rules), ["bar", "foo", "foo.bar"]);
    }

    #[test]
    fn failing_field_registration_is_all_or_nothing() {
        let mut rules = IgnoreRules::new();
        rules.ignore_fields(["kept"]).unwrap();

        let error = rules.ignore_fields(["valid", "in..valid"]).unwrap_err();
        assert_eq!(error.offending_text(), "in..valid");
        assert_eq!(paths(&rules), ["kept"]);
    }

    #[test]
    fn regexes_accumulate_without_dedup() {
        let mut rules = IgnoreRules::new();
        rules.ignore_fields_matching_regexes(["foo"]).unwrap();
        rules.ignore_fields_matching_regexes(["bar", "baz", "foo"]).unwrap();

        let patterns: Vec<&str> = rules
            .ignored_fields_regexes()
            .iter()
            .map(FieldPattern::as_str)
            .collect();
        assert_eq!(patterns, ["foo", "bar", "baz", "foo"]);
    }

    #[test]
    fn failing_regex_registration_is_all_or_nothing() {
        let mut rules = IgnoreRules::new();
        rules.ignore_fields_matching_regexes(["foo"]).unwrap();

        assert!(rules.ignore_fields_matching_regexes(["bar", "(", "baz"]).is_err());
        assert!(rules.ignore_fields_matching_regexes(["bar", ""]).is_err());
        assert_eq!(rules.ignored_fields_regexes().len(), 1);
    }

    #[test]
    fn types_deduplicate_by_identity() {
        let mut rules = IgnoreRules::new();
        rules
            .ignore_fields_of_types([
                TypeDescriptor::Primitive(PrimitiveKind::Boolean),
                TypeDescriptor::Wrapper(PrimitiveKind::Boolean),
                TypeDescriptor::string(),
            ])
            .unwrap();
        rules.ignore_fields_of_types([TypeDescriptor::string()]).unwrap();

        assert_eq!(
            rules.ignored_types(),
            [
                TypeDescriptor::Primitive(PrimitiveKind::Boolean),
                TypeDescriptor::Wrapper(PrimitiveKind::Boolean),
                TypeDescriptor::string(),
            ]
        );
        assert_eq!(rules.ignored_canonical_types().len(), 2);
    }

    #[test]
    fn failing_type_registration_is_all_or_nothing() {
        let mut rules = IgnoreRules::new();
        let error = rules
            .ignore_fields_of_types([TypeDescriptor::named("UUID"), TypeDescriptor::named(" ")])
            .unwrap_err();

        assert!(matches!(error, IgnoreRulesError::InvalidArgument { what: "type", .. }));
        assert!(rules.ignored_types().is_empty());
    }

    #[test]
    fn flag_setters_overwrite() {
        let mut rules = IgnoreRules::new();
        rules
            .set_ignore_all_actual_null_fields(true)
            .set_ignore_all_expected_null_fields(true)
            .set_strict_type_checking(true);
        assert!(rules.ignores_all_actual_null_fields());
        assert!(rules.ignores_all_expected_null_fields());
        assert!(rules.is_strict_type_checking());

        rules.set_ignore_all_actual_null_fields(false);
        assert!(!rules.ignores_all_actual_null_fields());
        assert!(rules.ignores_all_expected_null_fields());
    }

    #[test]
    fn builder_matches_mutators() {
        let built = IgnoreRules::new()
            .with_ignored_fields(["a.b"])
            .unwrap()
            .with_ignored_fields_matching_regexes(["c.*"])
            .unwrap()
            .with_ignored_types([TypeDescriptor::named("UUID")])
            .unwrap()
            .with_ignore_all_actual_null_fields(true)
            .with_ignore_all_expected_null_fields(true)
            .with_strict_type_checking(true);

        let mut mutated = IgnoreRules::new();
        mutated
            .ignore_fields(["a.b"])
            .unwrap()
            .ignore_fields_matching_regexes(["c.*"])
            .unwrap()
            .ignore_fields_of_types([TypeDescriptor::named("UUID")])
            .unwrap()
            .set_ignore_all_actual_null_fields(true)
            .set_ignore_all_expected_null_fields(true)
            .set_strict_type_checking(true);

        assert_eq!(built.to_string(), mutated.to_string());
        assert_eq!(built.ignored_fields(), mutated.ignored_fields());
    }

    #[test]
    fn description_lists_active_families() {
        let mut rules = IgnoreRules::new();
        rules.ignore_fields(["name", "age"]).unwrap();
        rules.ignore_fields_matching_regexes([".*Date"]).unwrap();
        rules
            .ignore_fields_of_types([TypeDescriptor::Primitive(PrimitiveKind::Int)])
            .unwrap();
        rules.set_ignore_all_expected_null_fields(true);

        assert_eq!(
            rules.to_string(),
            "- all expected null fields were ignored in the comparison\n\
             - the following fields were ignored in the comparison: age, name\n\
             - the fields matching the following regexes were ignored in the comparison: .*Date\n\
             - the following types were ignored in the comparison: int\n"
        );
    }

    #[test]
    fn strict_type_checking_alone_keeps_rules_empty() {
        let rules = IgnoreRules::new().with_strict_type_checking(true);
        assert!(rules.is_empty());
        assert!(rules.to_string().contains("strict type checking"));
    }

    #[test]
    fn rules_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<IgnoreRules>();
    }
}
