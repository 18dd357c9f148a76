use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{DeriveInput, Field, Ident, parse_macro_input};

use crate::support::{attrs, diag, utils};

/// Annotation that disables validation of a field.
const SKIP: &str = "-";

pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand(input) {
        Ok(ts) => ts,
        Err(e) => diag::to_compile_error(e),
    }
}

fn expand(input: DeriveInput) -> syn::Result<TokenStream> {
    utils::require_no_generics(&input)?;

    let struct_name = &input.ident;
    let fields = utils::require_named_fields(&input)?;

    let mut accessors = Vec::new();
    let mut descriptors = Vec::new();

    for field in &fields.named {
        let Some(def) = FieldDef::parse(field)? else {
            continue;
        };
        let (accessor, descriptor) = def.generate(struct_name);
        accessors.push(accessor);
        descriptors.push(descriptor);
    }

    let expanded = quote! {
        impl ::fieldcheck::Record for #struct_name {
            fn fields() -> ::std::vec::Vec<::fieldcheck::FieldDescriptor<Self>> {
                #(#accessors)*

                ::std::vec![#(#descriptors),*]
            }

            fn schema() -> &'static ::fieldcheck::Schema<Self> {
                static SCHEMA: ::std::sync::OnceLock<::fieldcheck::Schema<#struct_name>> =
                    ::std::sync::OnceLock::new();
                SCHEMA.get_or_init(|| {
                    ::fieldcheck::Schema::new(<Self as ::fieldcheck::Record>::fields())
                })
            }
        }
    };

    Ok(expanded.into())
}

/// One annotated field, as read from its attributes.
struct FieldDef<'a> {
    ident: &'a Ident,
    name: String,
    annotation: String,
    label: Option<String>,
    serialized_name: Option<String>,
}

impl<'a> FieldDef<'a> {
    /// Returns `None` for fields that are not validated.
    fn parse(field: &'a Field) -> syn::Result<Option<Self>> {
        let Some(ident) = field.ident.as_ref() else {
            return Ok(None);
        };
        let args = attrs::parse_attrs(&field.attrs, "validate")?;
        args.ensure_known(&["label", "rename"], &["skip"])?;

        if args.has_flag("skip") {
            return Ok(None);
        }
        let Some(annotation) = args.positional_string()? else {
            if args.items.is_empty() {
                return Ok(None);
            }
            return Err(diag::error_spanned(
                ident,
                "#[validate(...)] needs an annotation such as \"string,min=1\" or `skip`",
            ));
        };
        if annotation.is_empty() || annotation == SKIP {
            return Ok(None);
        }

        let serialized_name = args.get_string("rename").or_else(|| {
            attrs::parse_foreign_attrs(&field.attrs, "serde").get_string("rename")
        });

        Ok(Some(Self {
            ident,
            name: utils::unraw(ident),
            annotation,
            label: args.get_string("label"),
            serialized_name,
        }))
    }

    /// Emits the accessor fn and the descriptor expression.
    fn generate(&self, struct_name: &Ident) -> (TokenStream2, TokenStream2) {
        let ident = self.ident;
        let accessor = format_ident!("__fieldcheck_{}", self.name);
        let name = &self.name;
        let annotation = &self.annotation;

        let accessor_fn = quote! {
            #[allow(non_snake_case)]
            fn #accessor(record: &#struct_name) -> ::fieldcheck::FieldValue<'_> {
                ::fieldcheck::AsFieldValue::as_field_value(&record.#ident)
            }
        };

        let label = self
            .label
            .as_ref()
            .map(|label| quote!(.with_label(#label)));
        let serialized_name = self
            .serialized_name
            .as_ref()
            .map(|name| quote!(.with_serialized_name(#name)));

        let descriptor = quote! {
            ::fieldcheck::FieldDescriptor::new(#name, #accessor)
                .with_annotation(#annotation)
                #label
                #serialized_name
        };

        (accessor_fn, descriptor)
    }
}
