use std::fmt;

use crate::types::{PrimitiveKind, TypeDescriptor};

/// A value that can report its runtime type.
///
/// Traversal collaborators implement this for whatever value representation
/// they walk; [`FieldValue`] is the representation shipped with this crate.
pub trait Typed {
    /// Returns the runtime type of the value.
    fn type_descriptor(&self) -> TypeDescriptor;
}

macro_rules! impl_typed_for_primitive {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl Typed for $ty {
                fn type_descriptor(&self) -> TypeDescriptor {
                    TypeDescriptor::Primitive(PrimitiveKind::$kind)
                }
            }
        )*
    };
}

impl_typed_for_primitive! {
    bool => Boolean,
    i8 => Byte,
    i16 => Short,
    i32 => Int,
    i64 => Long,
    f32 => Float,
    f64 => Double,
    char => Char,
}

impl Typed for String {
    fn type_descriptor(&self) -> TypeDescriptor {
        TypeDescriptor::string()
    }
}

impl Typed for str {
    fn type_descriptor(&self) -> TypeDescriptor {
        TypeDescriptor::string()
    }
}

impl<T: Typed + ?Sized> Typed for &T {
    fn type_descriptor(&self) -> TypeDescriptor {
        (**self).type_descriptor()
    }
}

/// Primitive payload carried by [`FieldValue::Primitive`] and
/// [`FieldValue::Boxed`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PrimitiveValue {
    /// `boolean`
    Boolean(bool),
    /// `byte`
    Byte(i8),
    /// `short`
    Short(i16),
    /// `int`
    Int(i32),
    /// `long`
    Long(i64),
    /// `float`
    Float(f32),
    /// `double`
    Double(f64),
    /// `char`
    Char(char),
}

impl PrimitiveValue {
    /// Returns the primitive kind of the payload.
    #[must_use]
    pub const fn kind(self) -> PrimitiveKind {
        match self {
            Self::Boolean(_) => PrimitiveKind::Boolean,
            Self::Byte(_) => PrimitiveKind::Byte,
            Self::Short(_) => PrimitiveKind::Short,
            Self::Int(_) => PrimitiveKind::Int,
            Self::Long(_) => PrimitiveKind::Long,
            Self::Float(_) => PrimitiveKind::Float,
            Self::Double(_) => PrimitiveKind::Double,
            Self::Char(_) => PrimitiveKind::Char,
        }
    }
}

impl fmt::Display for PrimitiveValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean(v) => write!(f, "{v}"),
            Self::Byte(v) => write!(f, "{v}"),
            Self::Short(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Long(v) => write!(f, "{v}L"),
            Self::Float(v) => write!(f, "{v:?}f"),
            Self::Double(v) => write!(f, "{v:?}"),
            Self::Char(v) => write!(f, "'{v}'"),
        }
    }
}

/// Value of a nominally typed object, reduced to what exclusion needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObjectValue {
    type_name: String,
    display: String,
}

impl ObjectValue {
    /// Creates an object value of type `type_name` rendered as `display`.
    #[must_use]
    pub fn new(type_name: impl Into<String>, display: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            display: display.into(),
        }
    }

    /// Returns the nominal type name.
    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }
}

/// Non-null value found at a field location.
///
/// # Examples
///
/// ```
/// use exclusion::{FieldValue, PrimitiveKind, TypeDescriptor, Typed};
///
/// let boxed = FieldValue::boxed(true);
/// assert_eq!(
///     boxed.type_descriptor(),
///     TypeDescriptor::Wrapper(PrimitiveKind::Boolean)
/// );
/// assert_eq!(FieldValue::text("John").type_descriptor(), TypeDescriptor::string());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    /// Unboxed primitive.
    Primitive(PrimitiveValue),
    /// Boxed primitive.
    Boxed(PrimitiveValue),
    /// Text.
    Text(String),
    /// Any other object.
    Object(ObjectValue),
}

impl FieldValue {
    /// Creates an unboxed primitive value.
    #[must_use]
    pub fn primitive(value: impl Into<PrimitiveValue>) -> Self {
        Self::Primitive(value.into())
    }

    /// Creates a boxed primitive value.
    #[must_use]
    pub fn boxed(value: impl Into<PrimitiveValue>) -> Self {
        Self::Boxed(value.into())
    }

    /// Creates a text value.
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Creates an object value of type `type_name`.
    #[must_use]
    pub fn object(type_name: impl Into<String>, display: impl Into<String>) -> Self {
        Self::Object(ObjectValue::new(type_name, display))
    }
}

impl Typed for FieldValue {
    fn type_descriptor(&self) -> TypeDescriptor {
        match self {
            Self::Primitive(value) => TypeDescriptor::Primitive(value.kind()),
            Self::Boxed(value) => TypeDescriptor::Wrapper(value.kind()),
            Self::Text(_) => TypeDescriptor::string(),
            Self::Object(object) => TypeDescriptor::named(object.type_name.clone()),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(value) | Self::Boxed(value) => fmt::Display::fmt(value, f),
            Self::Text(text) => write!(f, "\"{text}\""),
            Self::Object(object) => f.write_str(&object.display),
        }
    }
}

macro_rules! impl_primitive_conversions {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for PrimitiveValue {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }

            impl From<$ty> for FieldValue {
                fn from(value: $ty) -> Self {
                    Self::Primitive(PrimitiveValue::$variant(value))
                }
            }
        )*
    };
}

impl_primitive_conversions! {
    bool => Boolean,
    i8 => Byte,
    i16 => Short,
    i32 => Int,
    i64 => Long,
    f32 => Float,
    f64 => Double,
    char => Char,
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<ObjectValue> for FieldValue {
    fn from(value: ObjectValue) -> Self {
        Self::Object(value)
    }
}
