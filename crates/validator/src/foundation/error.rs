//! Error types for validation failures and schema configuration faults
//!
//! Two classes of problems exist and they never mix:
//!
//! - [`ValidationError`] is an *expected* outcome: a value broke the
//!   constraint its field declares. It travels inside a report, never as a
//!   Rust `Err` out of the record walk.
//! - [`AnnotationError`] / [`SchemaError`] describe a *misconfigured*
//!   annotation. Whether they surface depends on the
//!   [`MalformedPolicy`](crate::config::MalformedPolicy) in effect.
//!
//! All string fields of [`ValidationError`] use `Cow<'static, str>` for
//! zero-allocation in the common case of static codes and messages.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;
use smallvec::SmallVec;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A single constraint violation reported by a checker.
///
/// The `message` never contains the field label; the record walker prefixes
/// it with the resolved label when the failure is aggregated.
///
/// # Examples
///
/// ```
/// use fieldcheck::foundation::ValidationError;
///
/// let error = ValidationError::min_length(5);
/// assert_eq!(error.code, "min_length");
/// assert_eq!(error.message, "must be at least 5 characters");
/// assert_eq!(error.param("min"), Some("5"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// Error code for programmatic handling.
    ///
    /// Examples: "not_empty", "min_length", "pattern", "email"
    pub code: Cow<'static, str>,

    /// Human-readable message, without the field label.
    pub message: Cow<'static, str>,

    /// Parameters the message was built from (typically 0-2).
    #[serde(skip_serializing_if = "SmallVec::is_empty")]
    pub params: SmallVec<[(Cow<'static, str>, Cow<'static, str>); 2]>,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            params: SmallVec::new(),
        }
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValidationError {
    /// Creates a "not_empty" error.
    pub fn not_empty() -> Self {
        Self::new("not_empty", "must not be empty")
    }

    /// Creates a "min_length" error.
    pub fn min_length(min: usize) -> Self {
        Self::new("min_length", format!("must be at least {min} characters"))
            .with_param("min", min.to_string())
    }

    /// Creates a "max_length" error.
    pub fn max_length(max: usize) -> Self {
        Self::new("max_length", format!("maximum length is {max} characters"))
            .with_param("max", max.to_string())
    }

    /// Creates a "pattern" error for a well-formed pattern that did not match.
    pub fn pattern_mismatch(pattern: impl Into<Cow<'static, str>>) -> Self {
        Self::new("pattern", "does not match the required pattern").with_param("pattern", pattern)
    }

    /// Creates an "invalid_pattern" error; the compile error is the message.
    pub fn invalid_pattern(
        pattern: impl Into<Cow<'static, str>>,
        reason: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::new("invalid_pattern", reason).with_param("pattern", pattern)
    }

    /// Creates a "min" error.
    pub fn below_min(min: f64) -> Self {
        Self::new("min", format!("must be at least {min}")).with_param("min", min.to_string())
    }

    /// Creates a "max" error. The bound is rendered with two decimals.
    pub fn above_max(max: f64) -> Self {
        Self::new("max", format!("must not exceed {max:.2}")).with_param("max", max.to_string())
    }

    /// Creates an "email" error.
    pub fn invalid_email() -> Self {
        Self::new("email", "is not a valid email address")
    }

    /// Creates a "type_mismatch" error.
    pub fn type_mismatch(
        expected: impl Into<Cow<'static, str>>,
        actual: impl Into<Cow<'static, str>>,
    ) -> Self {
        let expected = expected.into();
        Self::new("type_mismatch", format!("must be a {expected} value"))
            .with_param("expected", expected)
            .with_param("actual", actual)
    }
}

// ============================================================================
// ANNOTATION ERRORS
// ============================================================================

/// A fault in the annotation grammar of a single field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnnotationError {
    /// The annotation contains no kind token.
    #[error("annotation is empty")]
    Empty,

    /// More than two bound tokens follow a `string` or `number` kind.
    #[error("`{kind}` takes at most two bounds, found {found}")]
    TooManyBounds {
        /// The constraint kind.
        kind: &'static str,
        /// Number of bound tokens supplied.
        found: usize,
    },

    /// A bound token mentions neither `min` nor `max`.
    #[error("unknown bound `{token}` for `{kind}`, expected `min=` or `max=`")]
    UnknownBound {
        /// The constraint kind.
        kind: &'static str,
        /// The offending token.
        token: String,
    },

    /// The same bound is given twice.
    #[error("bound `{key}` is given more than once")]
    DuplicateBound {
        /// `min` or `max`.
        key: &'static str,
    },

    /// A bound value does not parse (or is not finite).
    #[error("invalid value `{value}` for bound `{key}`")]
    InvalidBound {
        /// `min` or `max`.
        key: &'static str,
        /// The raw value text.
        value: String,
    },

    /// `regex` with nothing after it.
    #[error("`regex` requires a pattern")]
    MissingPattern,

    /// The pattern does not compile.
    #[error("invalid pattern `{pattern}`: {reason}")]
    InvalidPattern {
        /// The pattern as written.
        pattern: String,
        /// Compiler diagnostic.
        reason: String,
    },

    /// `email` followed by parameters.
    #[error("`email` takes no parameters, found `{params}`")]
    UnexpectedParameters {
        /// Everything after the kind token.
        params: String,
    },
}

/// A malformed annotation rejected while compiling a schema.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("field `{field}` has an invalid annotation `{annotation}`: {source}")]
pub struct SchemaError {
    /// Declared name of the offending field.
    pub field: &'static str,
    /// The annotation text as written.
    pub annotation: String,
    /// What is wrong with it.
    #[source]
    pub source: AnnotationError,
}

/// Failure to load a [`ValidatorConfig`](crate::config::ValidatorConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The JSON document does not describe a valid config.
    #[error("invalid validator config: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_simple_error() {
        let error = ValidationError::new("test", "Test error");
        assert_eq!(error.code, "test");
        assert_eq!(error.message, "Test error");
        assert!(error.params.is_empty());
    }

    #[test]
    fn test_error_with_params() {
        let error = ValidationError::new("min", "Too small")
            .with_param("min", "5")
            .with_param("actual", "3");

        assert_eq!(error.param("min"), Some("5"));
        assert_eq!(error.param("actual"), Some("3"));
        assert_eq!(error.param("max"), None);
    }

    #[test]
    fn test_zero_alloc_static_strings() {
        let error = ValidationError::not_empty();
        assert!(matches!(error.code, Cow::Borrowed(_)));
        assert!(matches!(error.message, Cow::Borrowed(_)));
    }

    #[test]
    fn test_range_messages() {
        assert_eq!(ValidationError::below_min(18.0).message, "must be at least 18");
        assert_eq!(ValidationError::below_min(0.5).message, "must be at least 0.5");
        assert_eq!(ValidationError::below_min(0.25).message, "must be at least 0.25");
        assert_eq!(ValidationError::below_min(-5.0).message, "must be at least -5");
        // never in exponent form
        assert_eq!(ValidationError::below_min(1e-5).message, "must be at least 0.00001");
        assert_eq!(ValidationError::below_min(0.25).param("min"), Some("0.25"));
        assert_eq!(ValidationError::above_max(100.0).message, "must not exceed 100.00");
        assert_eq!(ValidationError::above_max(9.999).message, "must not exceed 10.00");
    }

    #[test]
    fn test_type_mismatch() {
        let error = ValidationError::type_mismatch("text", "number");
        assert_eq!(error.message, "must be a text value");
        assert_eq!(error.param("actual"), Some("number"));
    }

    #[test]
    fn test_display_is_bare_message() {
        assert_eq!(
            ValidationError::invalid_email().to_string(),
            "is not a valid email address"
        );
    }

    #[test]
    fn test_schema_error_source() {
        use std::error::Error as _;

        let error = SchemaError {
            field: "age",
            annotation: "number,min=x".into(),
            source: AnnotationError::InvalidBound {
                key: "min",
                value: "x".into(),
            },
        };
        assert_eq!(
            error.to_string(),
            "field `age` has an invalid annotation `number,min=x`: invalid value `x` for bound `min`"
        );
        assert!(error.source().is_some());
    }
}
