//! Numeric range checker

use crate::foundation::{Validate, ValidationError};

/// Validates that a number is at least `min` and, when `max >= min`, at most
/// `max`. All numeric field types are compared as `f64`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    /// Lower bound (inclusive).
    pub min: f64,
    /// Upper bound (inclusive).
    pub max: Option<f64>,
}

impl Range {
    /// Creates a new range checker.
    #[must_use]
    pub const fn new(min: f64, max: Option<f64>) -> Self {
        Self { min, max }
    }

    /// The upper bound actually enforced, if any.
    #[must_use]
    pub fn effective_max(&self) -> Option<f64> {
        self.max.filter(|max| *max >= self.min)
    }
}

impl Validate for Range {
    type Input = f64;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        let value = *input;

        if value < self.min {
            return Err(ValidationError::below_min(self.min));
        }

        match self.effective_max() {
            Some(max) if value > max => Err(ValidationError::above_max(max)),
            _ => Ok(()),
        }
    }
}
