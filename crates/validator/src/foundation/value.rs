//! Runtime view of a field value
//!
//! Checkers never see the concrete field type. Each annotated field is read
//! through [`AsFieldValue`], which borrows text and normalizes the numeric
//! primitives into one of a few shapes.

use std::borrow::Cow;
use std::fmt;

// ============================================================================
// FIELD VALUE
// ============================================================================

/// A borrowed, type-erased field value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    /// Any string-like field.
    Text(&'a str),
    /// Signed integers up to 64 bits.
    Int(i64),
    /// Unsigned integers up to 64 bits.
    Unsigned(u64),
    /// `f32` / `f64`.
    Float(f64),
}

impl<'a> FieldValue<'a> {
    /// Returns the text if this is a [`FieldValue::Text`].
    #[must_use]
    pub fn as_text(&self) -> Option<&'a str> {
        match *self {
            FieldValue::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Normalizes any numeric shape to `f64`. Text yields `None`.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            FieldValue::Text(_) => None,
            FieldValue::Int(n) => Some(n as f64),
            FieldValue::Unsigned(n) => Some(n as f64),
            FieldValue::Float(n) => Some(n),
        }
    }

    /// Short name of the value shape, used in type-mismatch errors.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            FieldValue::Text(_) => "text",
            FieldValue::Int(_) | FieldValue::Unsigned(_) | FieldValue::Float(_) => "number",
        }
    }
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(text) => f.write_str(text),
            FieldValue::Int(n) => write!(f, "{n}"),
            FieldValue::Unsigned(n) => write!(f, "{n}"),
            FieldValue::Float(n) => write!(f, "{n}"),
        }
    }
}

// ============================================================================
// CONVERSION TRAIT
// ============================================================================

/// Types that can be read as a [`FieldValue`].
///
/// Implemented for the string types and the numeric primitives. A field
/// whose type has no implementation cannot carry an annotation; the derive
/// reports that at compile time.
pub trait AsFieldValue {
    /// Borrows `self` as a field value.
    fn as_field_value(&self) -> FieldValue<'_>;
}

impl AsFieldValue for str {
    #[inline]
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Text(self)
    }
}

impl AsFieldValue for String {
    #[inline]
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Text(self)
    }
}

impl AsFieldValue for Box<str> {
    #[inline]
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Text(self)
    }
}

impl AsFieldValue for Cow<'_, str> {
    #[inline]
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Text(self)
    }
}

impl<T: AsFieldValue + ?Sized> AsFieldValue for &T {
    #[inline]
    fn as_field_value(&self) -> FieldValue<'_> {
        (**self).as_field_value()
    }
}

macro_rules! impl_as_field_value {
    ($variant:ident => $target:ty: $($ty:ty),+ $(,)?) => {
        $(
            impl AsFieldValue for $ty {
                #[inline]
                fn as_field_value(&self) -> FieldValue<'_> {
                    FieldValue::$variant(<$target>::from(*self))
                }
            }
        )+
    };
}

impl_as_field_value!(Int => i64: i8, i16, i32, i64);
impl_as_field_value!(Unsigned => u64: u8, u16, u32, u64);
impl_as_field_value!(Float => f64: f32, f64);

impl AsFieldValue for isize {
    #[inline]
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Int(*self as i64)
    }
}

impl AsFieldValue for usize {
    #[inline]
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Unsigned(*self as u64)
    }
}

// ============================================================================
// TESTS
// ============================================================================
