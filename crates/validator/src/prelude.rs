//! Prelude module for convenient imports.
//!
//! ```
//! use fieldcheck::prelude::*;
//! ```

pub use crate::config::{MalformedPolicy, ValidatorConfig};
pub use crate::foundation::{AsFieldValue, FieldValue, SchemaError, Validate, ValidationError};
pub use crate::record::{FieldDescriptor, Record, Schema};
pub use crate::report::{FieldFailure, ValidationReport};

#[cfg(feature = "derive")]
pub use fieldcheck_macros::Record;
