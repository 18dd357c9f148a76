use proc_macro2::TokenTree;
use syn::{
    Attribute, Ident, Lit, Meta, Result, Token,
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
};

use crate::support::diag;

/// Parsed attribute arguments container.
#[derive(Debug, Clone)]
pub struct AttrArgs {
    pub items: Vec<AttrItem>,
}

/// A single attribute item.
#[derive(Debug, Clone)]
pub enum AttrItem {
    /// A bare literal like `"string,min=1"`
    Positional(Lit),
    /// A flag like `skip`
    Flag(Ident),
    /// Key-value pair like `label = "Name"`
    KeyValue { key: Ident, value: AttrValue },
    /// Nested list like `rename(serialize = "a")`; only the key is kept
    List { key: Ident },
}

/// Value of a key-value pair.
#[derive(Debug, Clone)]
pub enum AttrValue {
    Lit(Lit),
    /// A path or expression; parsed so foreign attributes don't fail, then
    /// dropped
    Other,
}

impl AttrArgs {
    /// Find a key-value pair by key name.
    pub fn get_value(&self, key: &str) -> Option<&AttrValue> {
        self.items.iter().find_map(|item| match item {
            AttrItem::KeyValue { key: k, value } if k == key => Some(value),
            _ => None,
        })
    }

    /// Get a string value by key.
    pub fn get_string(&self, key: &str) -> Option<String> {
        self.get_value(key).and_then(|lit| match lit {
            AttrValue::Lit(Lit::Str(s)) => Some(s.value()),
            _ => None,
        })
    }

    /// Check if a flag is present.
    pub fn has_flag(&self, flag: &str) -> bool {
        self.items
            .iter()
            .any(|item| matches!(item, AttrItem::Flag(f) if f == flag))
    }

    /// All bare literals, in order.
    pub fn positional(&self) -> impl Iterator<Item = &Lit> {
        self.items.iter().filter_map(|item| match item {
            AttrItem::Positional(lit) => Some(lit),
            _ => None,
        })
    }

    /// The single bare string literal, if any. A second one, or a
    /// non-string literal, is an error.
    pub fn positional_string(&self) -> Result<Option<String>> {
        let mut found = None;
        for lit in self.positional() {
            let Lit::Str(s) = lit else {
                return Err(diag::error_spanned(lit, "expected a string literal"));
            };
            if found.is_some() {
                return Err(diag::error_spanned(s, "only one annotation per field"));
            }
            found = Some(s.value());
        }
        Ok(found)
    }

    /// Reject keys and flags not in the allowed lists.
    pub fn ensure_known(&self, keys: &[&str], flags: &[&str]) -> Result<()> {
        for item in &self.items {
            let (ident, allowed) = match item {
                AttrItem::Positional(_) => continue,
                AttrItem::Flag(ident) => (ident, flags),
                AttrItem::KeyValue { key, .. } | AttrItem::List { key, .. } => (key, keys),
            };
            if !allowed.iter().any(|name| ident == name) {
                return Err(diag::error_spanned(
                    ident,
                    format!("unknown attribute argument `{ident}`"),
                ));
            }
        }
        Ok(())
    }
}

/// Parse attribute like `#[validate(...)]` (the whole Attribute, not only args).
pub fn parse_attr(attr: &Attribute, expected: &str) -> Result<Option<AttrArgs>> {
    if !attr.path().is_ident(expected) {
        return Ok(None);
    }

    match &attr.meta {
        Meta::Path(_) => Ok(Some(AttrArgs { items: vec![] })),
        Meta::List(list) => {
            let args = syn::parse2::<AttrArgsParser>(list.tokens.clone())?;
            Ok(Some(args.0))
        }
        Meta::NameValue(nv) => Err(diag::error_spanned(
            nv,
            format!("#[{expected}] must be #[{expected}(...)] or #[{expected}] (not name-value)"),
        )),
    }
}

/// Parse all attributes of a given type and merge them.
pub fn parse_attrs(attrs: &[Attribute], name: &str) -> Result<AttrArgs> {
    let mut result = AttrArgs { items: vec![] };

    for attr in attrs {
        if let Some(args) = parse_attr(attr, name)? {
            result.items.extend(args.items);
        }
    }

    Ok(result)
}

/// Like [`parse_attrs`], but attributes that do not parse are ignored.
///
/// Used for attributes owned by other derives (`serde`), whose grammar is
/// wider than ours.
pub fn parse_foreign_attrs(attrs: &[Attribute], name: &str) -> AttrArgs {
    let mut result = AttrArgs { items: vec![] };

    for attr in attrs {
        if let Ok(Some(args)) = parse_attr(attr, name) {
            result.items.extend(args.items);
        }
    }

    result
}

struct AttrArgsParser(AttrArgs);

impl Parse for AttrArgsParser {
    fn parse(input: ParseStream) -> Result<Self> {
        let items = if input.is_empty() {
            vec![]
        } else {
            Punctuated::<AttrItemParser, Token![,]>::parse_terminated(input)?
                .into_iter()
                .map(|x| x.0)
                .collect()
        };
        Ok(Self(AttrArgs { items }))
    }
}

struct AttrItemParser(AttrItem);

impl Parse for AttrItemParser {
    fn parse(input: ParseStream) -> Result<Self> {
        if input.peek(Lit) {
            return Ok(Self(AttrItem::Positional(input.parse()?)));
        }

        let key: Ident = input.parse()?;

        if input.peek(Token![=]) {
            input.parse::<Token![=]>()?;
            let value: AttrValue = input.parse::<AttrValueParser>()?.0;
            return Ok(Self(AttrItem::KeyValue { key, value }));
        }

        if input.peek(syn::token::Paren) {
            let content;
            syn::parenthesized!(content in input);

            if !content.is_empty() {
                Punctuated::<AttrItemParser, Token![,]>::parse_terminated(&content)?;
            }

            return Ok(Self(AttrItem::List { key }));
        }

        Ok(Self(AttrItem::Flag(key)))
    }
}

struct AttrValueParser(AttrValue);

impl Parse for AttrValueParser {
    fn parse(input: ParseStream) -> Result<Self> {
        if input.peek(Lit) {
            return Ok(Self(AttrValue::Lit(input.parse()?)));
        }
        // Skip to the next top-level comma.
        input.step(|cursor| {
            let mut rest = *cursor;
            while let Some((tt, next)) = rest.token_tree() {
                if matches!(&tt, TokenTree::Punct(p) if p.as_char() == ',') {
                    break;
                }
                rest = next;
            }
            Ok(((), rest))
        })?;
        Ok(Self(AttrValue::Other))
    }
}
