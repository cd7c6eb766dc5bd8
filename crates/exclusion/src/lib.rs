#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `exclusion` decides which differences a recursive, field-by-field object
//! comparison must not report. The comparison walks an "actual" and an
//! "expected" object graph in parallel and hands every visited location to
//! [`IgnoreRules::should_ignore`] as a [`DualValue`]: the field location plus
//! the value found on each side. This crate does not walk graphs and does not
//! compute equality; it only answers whether a potential difference at that
//! location is suppressed.
//!
//! # Design
//!
//! - [`FieldLocation`] is the dotted path of a field (`father.name.first`).
//!   Equality and hashing use the canonical dotted string.
//! - [`TypeDescriptor`] describes a runtime type: a [`PrimitiveKind`] in
//!   primitive or wrapper form, or a nominal name. [`Typed`] lets any value
//!   representation report its descriptor; [`FieldValue`] is the one shipped
//!   here.
//! - [`IgnoreRules`] accumulates five independent rule families (fields,
//!   regexes, types, actual nulls, expected nulls) plus the strict type
//!   checking flag, and evaluates them as a logical OR.
//! - [`IgnoreOptions`] carries the same settings as plain data so a session
//!   can be configured from user input (JSON with the `serde` feature).
//!
//! # Invariants
//!
//! - Registration is additive. Fields and types are deduplicated, regexes
//!   are appended as given, and nothing is ever removed.
//! - A failing registration call stores none of its arguments.
//! - Field regexes match the whole dotted path, never a substring.
//! - A primitive kind and its wrapper are the same ignored type. Nominal
//!   types have no subtype relation.
//! - The effective type of a pair is the actual value's type. When the
//!   actual value is null it is the expected value's type under strict type
//!   checking, and unknown otherwise.
//! - A registered field excludes exactly that location, not its descendants.
//!
//! # Errors
//!
//! Registration reports [`IgnoreRulesError`]: `InvalidPath` for empty paths,
//! empty segments or segments containing `.`, `InvalidArgument` for empty
//! regexes or blank type names, and `PatternSyntax` for regexes that fail to
//! compile. Evaluation never fails.
//!
//! # Examples
//!
//! ```
//! use exclusion::{DualValue, FieldLocation, FieldValue, IgnoreRules, PrimitiveKind, TypeDescriptor};
//!
//! let mut rules = IgnoreRules::new();
//! rules
//!     .ignore_fields(["father.name.first"])
//!     .unwrap()
//!     .ignore_fields_matching_regexes([".*Date"])
//!     .unwrap()
//!     .ignore_fields_of_types([TypeDescriptor::Primitive(PrimitiveKind::Boolean)])
//!     .unwrap();
//!
//! let at = |path: &str| FieldLocation::parse(path).unwrap();
//!
//! let first_name = DualValue::new(at("father.name.first"), Some(FieldValue::from("Jack")), Some(FieldValue::from("John")));
//! let birth = DualValue::new(at("birthDate"), Some(FieldValue::from("2001")), Some(FieldValue::from("2002")));
//! let flag = DualValue::new(at("active"), Some(FieldValue::boxed(true)), Some(FieldValue::boxed(false)));
//! let age = DualValue::new(at("age"), Some(FieldValue::from(40)), Some(FieldValue::from(41)));
//!
//! assert!(rules.should_ignore(&first_name));
//! assert!(rules.should_ignore(&birth));
//! assert!(rules.should_ignore(&flag));
//! assert!(!rules.should_ignore(&age));
//! ```
//!
//! # See also
//!
//! - [`debug_ignore`] for tracing events and per-session statistics.
//! - [`regex`] for the pattern syntax accepted by
//!   [`IgnoreRules::ignore_fields_matching_regexes`].

pub mod debug_ignore;
mod decision;
mod dual_value;
mod error;
mod location;
mod options;
mod pattern;
mod rule_set;
mod types;
mod value;

pub use decision::{IgnoreReason, IgnoreReasonKind};
pub use dual_value::DualValue;
pub use error::{IgnoreRulesError, InvalidPathReason};
pub use location::{FieldLocation, SEGMENT_SEPARATOR};
pub use options::IgnoreOptions;
pub use pattern::FieldPattern;
pub use rule_set::IgnoreRules;
pub use types::{PrimitiveKind, TypeDescriptor};
pub use value::{FieldValue, ObjectValue, PrimitiveValue, Typed};
