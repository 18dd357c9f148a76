//! Core validation types and traits
//!
//! This module contains the building blocks shared by every checker:
//!
//! - **Traits**: [`Validate`], [`AsFieldValue`]
//! - **Values**: [`FieldValue`]
//! - **Errors**: [`ValidationError`], [`AnnotationError`], [`SchemaError`],
//!   [`ConfigError`]

pub mod error;
pub mod traits;
pub mod value;

pub use error::{AnnotationError, ConfigError, SchemaError, ValidationError};
pub use traits::Validate;
pub use value::{AsFieldValue, FieldValue};
