use syn::spanned::Spanned;
use syn::{Data, DeriveInput, Fields};

/// Ensure input is a struct and return its fields.
pub fn require_struct_fields(input: &DeriveInput) -> syn::Result<&Fields> {
    match &input.data {
        Data::Struct(s) => Ok(&s.fields),
        _ => Err(syn::Error::new(
            input.ident.span(),
            "This derive can only be used on structs",
        )),
    }
}

/// Return named fields if struct has them; otherwise error.
pub fn require_named_fields(input: &DeriveInput) -> syn::Result<&syn::FieldsNamed> {
    let fields = require_struct_fields(input)?;
    match fields {
        Fields::Named(n) => Ok(n),
        Fields::Unnamed(_) => Err(syn::Error::new(
            fields.span(),
            "This derive requires a struct with named fields (e.g. `struct X { ... }`)",
        )),
        Fields::Unit => Err(syn::Error::new(
            fields.span(),
            "This derive requires a non-unit struct with fields",
        )),
    }
}

/// Reject generic structs: the derive caches one schema per concrete type.
pub fn require_no_generics(input: &DeriveInput) -> syn::Result<()> {
    if input.generics.params.is_empty() {
        Ok(())
    } else {
        Err(syn::Error::new_spanned(
            &input.generics,
            "This derive does not support generic structs; implement `Record` by hand",
        ))
    }
}

/// Strip the `r#` prefix from a raw identifier.
pub fn unraw(ident: &syn::Ident) -> String {
    let name = ident.to_string();
    match name.strip_prefix("r#") {
        Some(stripped) => stripped.to_owned(),
        None => name,
    }
}
