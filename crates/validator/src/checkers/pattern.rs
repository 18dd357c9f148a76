//! Regular-expression checker

use regex::Regex;

use crate::foundation::{AnnotationError, Validate, ValidationError};

/// Validates that non-empty text matches a pattern in full.
///
/// Empty text always passes: absence is not a pattern violation. The
/// pattern is compiled once, when the checker is built. A pattern that does
/// not compile is kept, and every non-empty input then fails with the
/// compiler diagnostic as the message.
///
/// # Examples
///
/// ```
/// use fieldcheck::checkers::Pattern;
/// use fieldcheck::foundation::Validate;
///
/// let zip = Pattern::new(r"\d{5}");
/// assert!(zip.validate("90210").is_ok());
/// assert!(zip.validate("90210-1234").is_err()); // full-string match
/// assert!(zip.validate("").is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct Pattern {
    expr: String,
    compiled: Result<Regex, String>,
}

impl Pattern {
    /// Creates a pattern checker, keeping a compile failure for check time.
    pub fn new(expr: impl Into<String>) -> Self {
        let expr = expr.into();
        let compiled = compile_full_match(&expr);
        Self { expr, compiled }
    }

    /// Creates a pattern checker, rejecting a pattern that does not compile.
    pub fn try_new(expr: impl Into<String>) -> Result<Self, AnnotationError> {
        let checker = Self::new(expr);
        match &checker.compiled {
            Ok(_) => Ok(checker),
            Err(reason) => Err(AnnotationError::InvalidPattern {
                pattern: checker.expr.clone(),
                reason: reason.clone(),
            }),
        }
    }

    /// The pattern as written in the annotation.
    #[must_use]
    pub fn expr(&self) -> &str {
        &self.expr
    }

    /// The compiler diagnostic, if the pattern is malformed.
    #[must_use]
    pub fn compile_error(&self) -> Option<&str> {
        self.compiled.as_ref().err().map(String::as_str)
    }
}

// The user's pattern is compiled on its own first so that an unbalanced
// group cannot escape the anchoring wrapper.
fn compile_full_match(expr: &str) -> Result<Regex, String> {
    Regex::new(expr).map_err(|e| e.to_string())?;
    Regex::new(&format!("^(?:{expr})$")).map_err(|e| e.to_string())
}

impl Validate for Pattern {
    type Input = str;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if input.is_empty() {
            return Ok(());
        }

        match &self.compiled {
            Ok(re) if re.is_match(input) => Ok(()),
            Ok(_) => Err(ValidationError::pattern_mismatch(self.expr.clone())),
            Err(reason) => Err(ValidationError::invalid_pattern(
                self.expr.clone(),
                reason.clone(),
            )),
        }
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.expr == other.expr
    }
}
