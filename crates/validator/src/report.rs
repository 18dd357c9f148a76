//! Aggregated result of validating one record
//!
//! The report collects every failure in field declaration order and never
//! stops at the first one. An empty report means the record is valid.

use std::fmt;

use serde::Serialize;

use crate::foundation::ValidationError;

// ============================================================================
// FIELD FAILURE
// ============================================================================

/// A violated constraint on one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldFailure {
    /// Declared name of the field.
    pub field: &'static str,
    /// Resolved display label.
    pub label: &'static str,
    /// The checker's error.
    pub error: ValidationError,
    /// The label followed by the checker message.
    pub message: String,
}

impl FieldFailure {
    /// Creates a failure, rendering `label + separator + error.message`.
    pub fn new(
        field: &'static str,
        label: &'static str,
        error: ValidationError,
        separator: &str,
    ) -> Self {
        let message = format!("{label}{separator}{}", error.message);
        Self {
            field,
            label,
            error,
            message,
        }
    }
}

impl fmt::Display for FieldFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

// ============================================================================
// REPORT
// ============================================================================

/// Ordered failures of one record evaluation.
///
/// # Examples
///
/// ```
/// use fieldcheck::foundation::ValidationError;
/// use fieldcheck::report::{FieldFailure, ValidationReport};
///
/// let mut report = ValidationReport::new();
/// assert!(report.is_valid());
///
/// report.push(FieldFailure::new("name", "Name", ValidationError::not_empty(), " "));
/// assert_eq!(report.messages(), vec!["Name must not be empty"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationReport {
    failures: Vec<FieldFailure>,
}

impl ValidationReport {
    /// Creates an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self {
            failures: Vec::new(),
        }
    }

    /// Appends a failure.
    pub fn push(&mut self, failure: FieldFailure) {
        self.failures.push(failure);
    }

    /// Returns true if no constraint was violated.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }

    /// Returns true if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    /// Returns the number of failures.
    #[must_use]
    pub fn len(&self) -> usize {
        self.failures.len()
    }

    /// Returns all failures in field order.
    #[must_use]
    pub fn failures(&self) -> &[FieldFailure] {
        &self.failures
    }

    /// Iterates over the failures.
    pub fn iter(&self) -> std::slice::Iter<'_, FieldFailure> {
        self.failures.iter()
    }

    /// Returns the failure for a declared field name, if any.
    #[must_use]
    pub fn failure_for(&self, field: &str) -> Option<&FieldFailure> {
        self.failures.iter().find(|failure| failure.field == field)
    }

    /// Rendered messages in field order.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.failures.iter().map(|f| f.message.clone()).collect()
    }

    /// Consumes the report into its rendered messages.
    #[must_use]
    pub fn into_messages(self) -> Vec<String> {
        self.failures.into_iter().map(|f| f.message).collect()
    }

    /// Converts to a Result.
    #[must_use = "result must be used"]
    pub fn into_result(self) -> Result<(), ValidationReport> {
        if self.is_valid() { Ok(()) } else { Err(self) }
    }
}

impl FromIterator<FieldFailure> for ValidationReport {
    fn from_iter<I: IntoIterator<Item = FieldFailure>>(iter: I) -> Self {
        Self {
            failures: iter.into_iter().collect(),
        }
    }
}

impl Extend<FieldFailure> for ValidationReport {
    fn extend<I: IntoIterator<Item = FieldFailure>>(&mut self, iter: I) {
        self.failures.extend(iter);
    }
}

impl IntoIterator for ValidationReport {
    type Item = FieldFailure;
    type IntoIter = std::vec::IntoIter<FieldFailure>;

    fn into_iter(self) -> Self::IntoIter {
        self.failures.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationReport {
    type Item = &'a FieldFailure;
    type IntoIter = std::slice::Iter<'a, FieldFailure>;

    fn into_iter(self) -> Self::IntoIter {
        self.failures.iter()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} error(s):", self.failures.len())?;
        for (i, failure) in self.failures.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, failure)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationReport {}

// ============================================================================
// TESTS
// ============================================================================
