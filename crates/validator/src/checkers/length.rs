//! Text length checker
//!
//! Length is measured in Unicode scalar values (chars), never bytes.

use crate::foundation::{Validate, ValidationError};

/// Validates that text length lies between `min` and an optional `max`.
///
/// `max` is only enforced when it is at least `min`; `Length::new(5, Some(3))`
/// checks the lower bound only.
///
/// # Examples
///
/// ```
/// use fieldcheck::checkers::Length;
/// use fieldcheck::foundation::Validate;
///
/// let name = Length::new(1, Some(5));
/// assert!(name.validate("Zoë").is_ok());
/// assert_eq!(name.validate("").unwrap_err().message, "must not be empty");
/// assert_eq!(
///     name.validate("Margaret").unwrap_err().message,
///     "maximum length is 5 characters"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Length {
    /// Minimum length (inclusive).
    pub min: usize,
    /// Maximum length (inclusive).
    pub max: Option<usize>,
}

impl Length {
    /// Creates a new length checker.
    #[must_use]
    pub const fn new(min: usize, max: Option<usize>) -> Self {
        Self { min, max }
    }

    /// The upper bound actually enforced, if any.
    #[must_use]
    pub fn effective_max(&self) -> Option<usize> {
        self.max.filter(|max| *max >= self.min)
    }
}

impl Validate for Length {
    type Input = str;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        let len = input.chars().count();

        if len < self.min {
            return Err(if self.min == 1 {
                ValidationError::not_empty()
            } else {
                ValidationError::min_length(self.min)
            });
        }

        match self.effective_max() {
            Some(max) if len > max => Err(ValidationError::max_length(max)),
            _ => Ok(()),
        }
    }
}
