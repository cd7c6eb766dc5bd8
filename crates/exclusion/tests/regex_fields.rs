//! Tests for regex based field exclusion.
//!
//! Regexes are matched against the whole dotted path of a pair. Every
//! registration appends; nothing is replaced or deduplicated.

use exclusion::{FieldPattern, IgnoreRules, IgnoreRulesError};
use test_support::dual_key_with_path;

// =============================================================================
// Registration
// =============================================================================

/// A later call keeps the regexes of earlier calls.
#[test]
fn ignoring_fields_with_regex_does_not_replace_previous_regexes() {
    let mut rules = IgnoreRules::new();
    rules.ignore_fields_matching_regexes(["foo"]).unwrap();
    rules.ignore_fields_matching_regexes(["bar", "baz"]).unwrap();

    let patterns: Vec<&str> = rules
        .ignored_fields_regexes()
        .iter()
        .map(FieldPattern::as_str)
        .collect();
    assert_eq!(patterns, ["foo", "bar", "baz"]);
}

/// Duplicate regexes are kept as given.
#[test]
fn duplicate_regexes_are_kept() {
    let mut rules = IgnoreRules::new();
    rules.ignore_fields_matching_regexes(["foo", "foo"]).unwrap();

    assert_eq!(rules.ignored_fields_regexes().len(), 2);
}

// =============================================================================
// Evaluation
// =============================================================================

/// Each pair is ignored when one of the regexes matches its whole path.
#[test]
fn ignore_fields_matching_given_regexes() {
    let cases: [(&[&str], &[&str]); 6] = [
        (&["name"], &[".*name"]),
        (&["name"], &["foo", "n.m.", "foo"]),
        (&["name", "first"], &["name\\.first"]),
        (&["name", "first"], &[".*first"]),
        (&["name", "first"], &["name.*"]),
        (&["father", "name", "first"], &["father", "name.first", "father\\.name\\.first"]),
    ];

    for (segments, regexes) in cases {
        let mut rules = IgnoreRules::new();
        rules.ignore_fields_matching_regexes(regexes.iter().copied()).unwrap();

        let dual_value = dual_key_with_path(segments);
        assert!(
            rules.should_ignore(&dual_value),
            "{dual_value} should be ignored with these regexes {regexes:?}"
        );
    }
}

/// A regex matching only part of the path does not exclude the pair.
#[test]
fn substring_match_is_not_enough() {
    let mut rules = IgnoreRules::new();
    rules.ignore_fields_matching_regexes(["name", "first"]).unwrap();

    assert!(!rules.should_ignore(&dual_key_with_path(&["surname"])));
    assert!(!rules.should_ignore(&dual_key_with_path(&["name", "first"])));
    assert!(!rules.should_ignore(&dual_key_with_path(&["firstName"])));
}

/// Alternation is anchored as a whole.
#[test]
fn alternation_is_anchored_as_a_whole() {
    let mut rules = IgnoreRules::new();
    rules.ignore_fields_matching_regexes(["id|name"]).unwrap();

    assert!(rules.should_ignore(&dual_key_with_path(&["id"])));
    assert!(rules.should_ignore(&dual_key_with_path(&["name"])));
    assert!(!rules.should_ignore(&dual_key_with_path(&["identity"])));
    assert!(!rules.should_ignore(&dual_key_with_path(&["surname"])));
}

/// Verbose-mode regexes may end in a comment.
#[test]
fn verbose_regex_with_trailing_comment() {
    let mut rules = IgnoreRules::new();
    rules
        .ignore_fields_matching_regexes(["(?x)name # trailing comment"])
        .unwrap();

    assert!(rules.should_ignore(&dual_key_with_path(&["name"])));
    assert!(!rules.should_ignore(&dual_key_with_path(&["surname"])));
    assert_eq!(rules.ignored_fields_regexes()[0].as_str(), "(?x)name # trailing comment");
}

// =============================================================================
// Invalid Regexes
// =============================================================================

/// An empty regex is an invalid argument.
#[test]
fn empty_regex_is_rejected() {
    let mut rules = IgnoreRules::new();
    let error = rules.ignore_fields_matching_regexes([""]).unwrap_err();

    assert!(matches!(
        error,
        IgnoreRulesError::InvalidArgument { what: "pattern", .. }
    ));
}

/// A malformed regex reports the compiler error and registers nothing.
#[test]
fn malformed_regex_is_rejected_atomically() {
    let mut rules = IgnoreRules::new();
    let error = rules
        .ignore_fields_matching_regexes(["valid.*", "(unclosed"])
        .unwrap_err();

    assert!(matches!(error, IgnoreRulesError::PatternSyntax { .. }));
    assert_eq!(error.offending_text(), "(unclosed");
    assert!(std::error::Error::source(&error).is_some());
    assert!(rules.ignored_fields_regexes().is_empty());
}

/// A regex that is only balanced once wrapped in a group is still rejected.
#[test]
fn regex_cannot_escape_anchoring() {
    let mut rules = IgnoreRules::new();
    let error = rules.ignore_fields_matching_regexes(["a)|(b"]).unwrap_err();

    assert!(matches!(error, IgnoreRulesError::PatternSyntax { .. }));
}
