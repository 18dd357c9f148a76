//! # fieldcheck
//!
//! Declarative, annotation-driven validation of plain Rust structs.
//!
//! Each field carries a short annotation naming one constraint; validating
//! a record checks every annotated field and returns the violations as
//! human-readable messages prefixed with the field's label.
//!
//! ## Quick Start
//!
//! ```
//! use fieldcheck::prelude::*;
//!
//! #[derive(Record)]
//! struct Signup {
//!     #[validate("string,min=1,max=32", label = "User name")]
//!     name: String,
//!
//!     #[validate("email")]
//!     #[serde(rename = "mail")]
//!     email: String,
//!
//!     #[validate("number,min=18")]
//!     age: u8,
//!
//!     #[validate("-")]
//!     nickname: String,
//! }
//!
//! let signup = Signup {
//!     name: String::new(),
//!     email: "not-an-email".into(),
//!     age: 21,
//!     nickname: String::new(),
//! };
//!
//! assert_eq!(
//!     fieldcheck::validate_record(&signup),
//!     vec!["User name must not be empty", "mail is not a valid email address"]
//! );
//! ```
//!
//! ## Annotations
//!
//! | Annotation | Checks |
//! |------------|--------|
//! | `string,min=<int>,max=<int>` | length in characters |
//! | `number,min=<float>,max=<float>` | numeric range |
//! | `regex,<pattern>` | full-string match, empty text passes |
//! | `email` | email address |
//! | `-` | nothing, the field is skipped |
//!
//! An omitted bound is `0`, and `max` is only enforced when it is at least
//! `min`; with no bounds at all the upper side is unconstrained. An unknown
//! kind checks nothing.
//!
//! ## Labels
//!
//! A failure is prefixed with the field's `label`, else its serialized name
//! (`rename` or `#[serde(rename)]`), else its declared name.

extern crate self as fieldcheck;

pub mod annotation;
pub mod checkers;
pub mod config;
pub mod foundation;
pub mod prelude;
pub mod record;
pub mod report;

pub use config::{MalformedPolicy, ValidatorConfig};
pub use foundation::{AsFieldValue, FieldValue, SchemaError, ValidationError};
pub use record::{FieldDescriptor, Record, Schema, SchemaBuilder};
pub use report::{FieldFailure, ValidationReport};

#[cfg(feature = "derive")]
pub use fieldcheck_macros::Record;

/// Validates a record with its cached schema and returns the failure
/// messages in field order. An empty vector means the record is valid.
pub fn validate_record<R: Record>(record: &R) -> Vec<String> {
    R::schema().validate(record).into_messages()
}
