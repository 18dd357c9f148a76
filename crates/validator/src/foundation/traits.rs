//! Core trait for the individual constraint checkers
//!
//! Every checker validates one concrete input shape (`str` for the text
//! checkers, `f64` for the range checker). The
//! [`Checker`](crate::checkers::Checker) enum adapts a
//! [`FieldValue`](crate::foundation::FieldValue) to the right shape before
//! delegating here.

use crate::foundation::ValidationError;

/// The trait all constraint checkers implement.
///
/// Checkers are immutable once built and never mutate their input, so a
/// single instance can be shared across threads and reused for any number
/// of records.
///
/// # Examples
///
/// ```
/// use fieldcheck::foundation::{Validate, ValidationError};
///
/// struct NoSpaces;
///
/// impl Validate for NoSpaces {
///     type Input = str;
///
///     fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
///         if input.contains(' ') {
///             Err(ValidationError::new("no_spaces", "must not contain spaces"))
///         } else {
///             Ok(())
///         }
///     }
/// }
///
/// assert!(NoSpaces.validate("alice").is_ok());
/// assert!(NoSpaces.validate("alice b").is_err());
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// Use `?Sized` to allow validation of unsized types like `str`.
    type Input: ?Sized;

    /// Validates the input value.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if validation succeeds
    /// * `Err(ValidationError)` if validation fails
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;

    /// Returns `true` if the input passes.
    fn is_valid(&self, input: &Self::Input) -> bool {
        self.validate(input).is_ok()
    }
}
