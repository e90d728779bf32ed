use proc_macro2::Span;
use syn::{Attribute, Error, Result};

use crate::INSPECT_ATTRIBUTE_NAME;

/// Type level attributes: `#[inspect(default)]`.
#[derive(Default, Debug)]
pub(crate) struct TypeAttributes {
    /// Span of `default`, if present.
    pub default: Option<Span>,
}

/// Field level attributes: `#[inspect(ignore)]`.
#[derive(Default, Debug)]
pub(crate) struct FieldAttributes {
    /// Span of `ignore`, if present.
    pub ignore: Option<Span>,
}

impl TypeAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> Result<Self> {
        let mut parsed = Self::default();
        for attr in attrs {
            if !attr.path().is_ident(INSPECT_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("default") {
                    if parsed.default.is_some() {
                        return Err(meta.error("duplicate `default`"));
                    }
                    parsed.default = Some(meta.path.require_ident()?.span());
                    Ok(())
                } else if meta.path.is_ident("ignore") {
                    Err(meta.error("`ignore` can only be applied to fields"))
                } else {
                    Err(meta.error("unknown inspect attribute, expected `default`"))
                }
            })?;
        }
        Ok(parsed)
    }
}

impl FieldAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> Result<Self> {
        let mut parsed = Self::default();
        for attr in attrs {
            if !attr.path().is_ident(INSPECT_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("ignore") {
                    if parsed.ignore.is_some() {
                        return Err(meta.error("duplicate `ignore`"));
                    }
                    parsed.ignore = Some(meta.path.require_ident()?.span());
                    Ok(())
                } else if meta.path.is_ident("default") {
                    Err(meta.error("`default` can only be applied at the type level"))
                } else {
                    Err(Error::new_spanned(
                        &meta.path,
                        "unknown inspect attribute, expected `ignore`",
                    ))
                }
            })?;
        }
        Ok(parsed)
    }
}
