//! Email address checker

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::{Validate, ValidationError};

/// Address grammar, anchored to the whole input: a local part of ASCII
/// word characters, `+`, `-` and `.`; a lowercase domain label; optional
/// lowercase alphanumeric sub-labels; a lowercase alphabetic top label.
/// `\w` is ASCII-only here.
const EMAIL_PATTERN: &str = r"\A(?-u:[\w+\-.])+@[a-z0-9\-]+(?:\.[a-z0-9]+)*\.[a-z]+\z";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("EMAIL_PATTERN is a valid regex"));

/// Validates that text is an email address.
///
/// The compiled pattern is shared process-wide and built on first use.
///
/// # Examples
///
/// ```
/// use fieldcheck::checkers::Email;
/// use fieldcheck::foundation::Validate;
///
/// assert!(Email.validate("user.name+tag@sub.example.com").is_ok());
/// assert!(Email.validate("not-an-email").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Email;

impl Validate for Email {
    type Input = str;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if EMAIL_RE.is_match(input) {
            Ok(())
        } else {
            Err(ValidationError::invalid_email())
        }
    }
}
