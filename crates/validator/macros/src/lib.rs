//! # fieldcheck-macros
//!
//! Derive macro for the `fieldcheck` crate. Use it through the
//! `fieldcheck` re-export rather than depending on this crate directly.
//!
//! ```ignore
//! use fieldcheck::Record;
//!
//! #[derive(Record)]
//! pub struct Signup {
//!     #[validate("string,min=1,max=32", label = "User name")]
//!     name: String,
//!
//!     #[validate("email")]
//!     #[serde(rename = "mail")]
//!     email: String,
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

extern crate proc_macro;

use proc_macro::TokenStream;

mod record;
mod support;

/// Derive macro for the `Record` trait.
///
/// Registers every field carrying a `#[validate]` annotation, in
/// declaration order, and caches the compiled schema for the process.
///
/// # Field attributes
///
/// - `#[validate("<annotation>")]` - The constraint, e.g. `"string,min=1"`,
///   `"number,min=0,max=9.5"`, `"regex,[a-z]+"`, `"email"`
/// - `#[validate("-")]` or `#[validate(skip)]` - Do not validate the field
/// - `label = "..."` - Display label used in messages
/// - `rename = "..."` - Serialized name, used as the label when no `label`
///   is given
///
/// `#[serde(rename = "...")]` is honored as the serialized name when no
/// `rename` is given. Fields without `#[validate]` are ignored; annotated
/// field types must implement `fieldcheck::AsFieldValue`.
///
/// # Example
///
/// ```ignore
/// #[derive(Record)]
/// pub struct Order {
///     #[validate("number,min=1,max=99", label = "Quantity")]
///     quantity: u32,
///
///     #[validate("regex,[A-Z]{3}-\\d{4}", rename = "sku_code")]
///     sku: String,
/// }
/// ```
#[proc_macro_derive(Record, attributes(validate, serde))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    record::derive(input)
}
