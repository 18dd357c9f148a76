//! Built-in constraint checkers and the factory that selects them
//!
//! The checker set is closed: [`Checker`] has one arm per annotation kind,
//! and [`Checker::from_spec`] maps a parsed
//! [`ConstraintSpec`](crate::annotation::ConstraintSpec) onto it.
//!
//! # Examples
//!
//! ```
//! use fieldcheck::annotation::ConstraintSpec;
//! use fieldcheck::checkers::Checker;
//! use fieldcheck::foundation::FieldValue;
//!
//! let spec = ConstraintSpec::parse("number,min=18,max=120").unwrap();
//! let checker = Checker::from_spec(&spec);
//!
//! assert!(checker.check(FieldValue::Int(30)).is_ok());
//! assert_eq!(
//!     checker.check(FieldValue::Float(130.0)).unwrap_err().message,
//!     "must not exceed 120.00"
//! );
//! ```

pub mod email;
pub mod length;
pub mod pattern;
pub mod range;

pub use email::Email;
pub use length::Length;
pub use pattern::Pattern;
pub use range::Range;

use crate::annotation::ConstraintSpec;
use crate::foundation::{AnnotationError, FieldValue, Validate, ValidationError};

/// One of the built-in constraint checkers.
#[derive(Debug, Clone, PartialEq)]
pub enum Checker {
    /// Accepts every value.
    AlwaysValid,
    /// Text length.
    Length(Length),
    /// Full-string regular expression.
    Pattern(Pattern),
    /// Numeric range.
    Range(Range),
    /// Email address.
    Email(Email),
}

impl Checker {
    /// Builds the checker for a spec. Never fails: a pattern that does not
    /// compile is reported by the checker itself on every non-empty value.
    #[must_use]
    pub fn from_spec(spec: &ConstraintSpec) -> Self {
        match spec {
            ConstraintSpec::AlwaysValid => Self::AlwaysValid,
            ConstraintSpec::Length { min, max } => Self::Length(Length::new(*min, *max)),
            ConstraintSpec::Range { min, max } => Self::Range(Range::new(*min, *max)),
            ConstraintSpec::Pattern(expr) => Self::Pattern(Pattern::new(expr.as_str())),
            ConstraintSpec::Email => Self::Email(Email),
        }
    }

    /// Builds the checker for a spec, rejecting a pattern that does not
    /// compile.
    pub fn try_from_spec(spec: &ConstraintSpec) -> Result<Self, AnnotationError> {
        match spec {
            ConstraintSpec::Pattern(expr) => Pattern::try_new(expr.as_str()).map(Self::Pattern),
            other => Ok(Self::from_spec(other)),
        }
    }

    /// Runs the checker against a field value.
    ///
    /// Text checkers given a number, or the range checker given text,
    /// fail with a `type_mismatch` error.
    pub fn check(&self, value: FieldValue<'_>) -> Result<(), ValidationError> {
        match self {
            Self::AlwaysValid => Ok(()),
            Self::Length(checker) => checker.validate(text(value)?),
            Self::Pattern(checker) => checker.validate(text(value)?),
            Self::Email(checker) => checker.validate(text(value)?),
            Self::Range(checker) => {
                let number = value
                    .as_f64()
                    .ok_or_else(|| ValidationError::type_mismatch("number", value.kind_name()))?;
                checker.validate(&number)
            }
        }
    }
}

fn text(value: FieldValue<'_>) -> Result<&str, ValidationError> {
    value
        .as_text()
        .ok_or_else(|| ValidationError::type_mismatch("text", value.kind_name()))
}

impl From<&ConstraintSpec> for Checker {
    fn from(spec: &ConstraintSpec) -> Self {
        Self::from_spec(spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn checker(annotation: &str) -> Checker {
        Checker::from_spec(&ConstraintSpec::parse(annotation).unwrap())
    }

    #[test]
    fn test_factory_maps_each_kind() {
        assert_eq!(checker("url"), Checker::AlwaysValid);
        assert_eq!(checker("string,min=2"), Checker::Length(Length::new(2, Some(0))));
        assert_eq!(
            checker("number,max=5"),
            Checker::Range(Range::new(0.0, Some(5.0)))
        );
        assert_eq!(checker("regex,[a-z]+"), Checker::Pattern(Pattern::new("[a-z]+")));
        assert_eq!(checker("email"), Checker::Email(Email));
    }

    #[test]
    fn test_always_valid_accepts_anything() {
        let checker = Checker::AlwaysValid;
        assert!(checker.check(FieldValue::Text("")).is_ok());
        assert!(checker.check(FieldValue::Int(-1)).is_ok());
    }

    #[test]
    fn test_range_normalizes_numeric_shapes() {
        let checker = checker("number,min=1,max=10");
        assert!(checker.check(FieldValue::Int(5)).is_ok());
        assert!(checker.check(FieldValue::Unsigned(10)).is_ok());
        assert!(checker.check(FieldValue::Float(0.5)).is_err());
        assert!(checker.check(FieldValue::Int(11)).is_err());
    }

    #[test]
    fn test_omitted_max_defaults_to_zero() {
        let negative = checker("number,min=-5");
        assert!(negative.check(FieldValue::Int(-5)).is_ok());
        assert!(negative.check(FieldValue::Int(0)).is_ok());
        assert_eq!(
            negative.check(FieldValue::Int(3)).unwrap_err().message,
            "must not exceed 0.00"
        );

        let empty_only = checker("string,min=0");
        assert!(empty_only.check(FieldValue::Text("")).is_ok());
        assert_eq!(
            empty_only.check(FieldValue::Text("abc")).unwrap_err().message,
            "maximum length is 0 characters"
        );

        // max=0 falls below min, so only the lower bound applies
        assert!(checker("string,min=3").check(FieldValue::Text("a long name")).is_ok());
        assert!(checker("number,min=18").check(FieldValue::Int(99)).is_ok());
    }

    #[test]
    fn test_no_bounds_is_unbounded_above() {
        assert!(checker("string").check(FieldValue::Text("anything at all")).is_ok());
        assert!(checker("number").check(FieldValue::Float(1e12)).is_ok());
        assert!(checker("number").check(FieldValue::Int(-1)).is_err());
    }

    #[test]
    fn test_type_mismatch() {
        let error = checker("string,min=1").check(FieldValue::Int(3)).unwrap_err();
        assert_eq!(error.code, "type_mismatch");
        assert_eq!(error.param("actual"), Some("number"));

        let error = checker("number,min=1").check(FieldValue::Text("3")).unwrap_err();
        assert_eq!(error.message, "must be a number value");
    }

    #[test]
    fn test_try_from_spec_rejects_bad_pattern() {
        let spec = ConstraintSpec::parse("regex,(unclosed").unwrap();
        assert!(matches!(Checker::from_spec(&spec), Checker::Pattern(_)));
        assert!(Checker::try_from_spec(&spec).is_err());
    }
}
