//! Runtime type descriptors used by type-based exclusion.
//!
//! Descriptors form a closed set of primitive kinds, each with a primitive
//! and a boxed ("wrapper") representation, plus an open set of nominal
//! identities. Exclusion treats the two representations of a primitive kind
//! as the same type; nothing else is widened, and nominal identities carry
//! no subtype relation.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::error::IgnoreRulesError;

/// Primitive-like kinds that have both a primitive and a wrapper form.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum PrimitiveKind {
    /// Two-valued truth type.
    Boolean,
    /// 8-bit signed integer.
    Byte,
    /// 16-bit signed integer.
    Short,
    /// 32-bit signed integer.
    Int,
    /// 64-bit signed integer.
    Long,
    /// 32-bit IEEE 754 float.
    Float,
    /// 64-bit IEEE 754 float.
    Double,
    /// Single character.
    Char,
}

impl PrimitiveKind {
    /// Every primitive kind, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::Boolean,
        Self::Byte,
        Self::Short,
        Self::Int,
        Self::Long,
        Self::Float,
        Self::Double,
        Self::Char,
    ];

    /// Name of the primitive representation (`int`, `boolean`, ...).
    #[must_use]
    pub const fn primitive_name(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Byte => "byte",
            Self::Short => "short",
            Self::Int => "int",
            Self::Long => "long",
            Self::Float => "float",
            Self::Double => "double",
            Self::Char => "char",
        }
    }

    /// Name of the boxed representation (`Integer`, `Boolean`, ...).
    #[must_use]
    pub const fn wrapper_name(self) -> &'static str {
        match self {
            Self::Boolean => "Boolean",
            Self::Byte => "Byte",
            Self::Short => "Short",
            Self::Int => "Integer",
            Self::Long => "Long",
            Self::Float => "Float",
            Self::Double => "Double",
            Self::Char => "Character",
        }
    }

    fn from_primitive_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.primitive_name() == name)
    }

    fn from_wrapper_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.wrapper_name() == name)
    }
}

/// Runtime type of a compared value, or a type registered for exclusion.
///
/// # Examples
///
/// ```
/// use exclusion::{PrimitiveKind, TypeDescriptor};
///
/// let int: TypeDescriptor = "int".parse().unwrap();
/// let integer: TypeDescriptor = "Integer".parse().unwrap();
///
/// assert_eq!(int, TypeDescriptor::Primitive(PrimitiveKind::Int));
/// assert_ne!(int, integer);
/// assert_eq!(int.canonical(), integer.canonical());
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum TypeDescriptor {
    /// Unboxed representation of a primitive kind.
    Primitive(PrimitiveKind),
    /// Boxed representation of a primitive kind.
    Wrapper(PrimitiveKind),
    /// Any other type, identified by name.
    Named(Cow<'static, str>),
}

impl TypeDescriptor {
    /// Name used for text values.
    pub const STRING_NAME: &'static str = "String";

    /// Creates a descriptor from a type name.
    ///
    /// The name is trimmed. Primitive and wrapper names (`int`, `Integer`,
    /// ...) resolve to [`Primitive`](Self::Primitive) and
    /// [`Wrapper`](Self::Wrapper); any other name is nominal.
    #[must_use]
    pub fn named(name: impl Into<Cow<'static, str>>) -> Self {
        Self::resolve(name.into())
    }

    fn resolve(name: Cow<'static, str>) -> Self {
        let trimmed = name.trim();
        if let Some(kind) = PrimitiveKind::from_primitive_name(trimmed) {
            return Self::Primitive(kind);
        }
        if let Some(kind) = PrimitiveKind::from_wrapper_name(trimmed) {
            return Self::Wrapper(kind);
        }
        if trimmed.len() == name.len() {
            Self::Named(name)
        } else {
            Self::Named(Cow::Owned(trimmed.to_owned()))
        }
    }

    /// Descriptor reported by text values.
    #[must_use]
    pub const fn string() -> Self {
        Self::Named(Cow::Borrowed(Self::STRING_NAME))
    }

    /// Returns the primitive kind for primitive and wrapper descriptors.
    #[must_use]
    pub const fn primitive_kind(&self) -> Option<PrimitiveKind> {
        match self {
            Self::Primitive(kind) | Self::Wrapper(kind) => Some(*kind),
            Self::Named(_) => None,
        }
    }

    /// Normalizes the descriptor for exclusion lookups.
    ///
    /// Primitive descriptors map to their wrapper. Names are trimmed, and a
    /// `Named` descriptor spelling a primitive or wrapper name maps to that
    /// wrapper.
    #[must_use]
    pub fn canonical(&self) -> Self {
        match self {
            Self::Primitive(kind) | Self::Wrapper(kind) => Self::Wrapper(*kind),
            Self::Named(name) => match Self::resolve(name.clone()) {
                Self::Primitive(kind) => Self::Wrapper(kind),
                resolved => resolved,
            },
        }
    }

    pub(crate) fn validate(&self) -> Result<(), IgnoreRulesError> {
        match self {
            Self::Named(name) if name.trim().is_empty() => {
                Err(IgnoreRulesError::invalid_argument("type", name.to_string()))
            }
            _ => Ok(()),
        }
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(kind) => f.write_str(kind.primitive_name()),
            Self::Wrapper(kind) => f.write_str(kind.wrapper_name()),
            Self::Named(name) => f.write_str(name),
        }
    }
}

impl FromStr for TypeDescriptor {
    type Err = IgnoreRulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if name.is_empty() {
            return Err(IgnoreRulesError::invalid_argument("type", s));
        }
        Ok(Self::resolve(Cow::Owned(name.to_owned())))
    }
}

impl From<PrimitiveKind> for TypeDescriptor {
    fn from(kind: PrimitiveKind) -> Self {
        Self::Primitive(kind)
    }
}
