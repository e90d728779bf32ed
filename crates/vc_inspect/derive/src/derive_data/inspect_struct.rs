use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{Data, DeriveInput, Error, Fields, Generics, Ident, Path, Result, Type};

use super::{FieldAttributes, TypeAttributes};

// -----------------------------------------------------------------------------
// Define

/// A struct with named fields, as seen by the derive.
pub(crate) struct InspectStruct<'a> {
    vc_inspect_path: Path,
    ident: &'a Ident,
    generics: &'a Generics,
    attrs: TypeAttributes,
    fields: Vec<StructField<'a>>,
}

/// A named field and its attributes.
pub(crate) struct StructField<'a> {
    pub ident: &'a Ident,
    pub ty: &'a Type,
    pub attrs: FieldAttributes,
}

// -----------------------------------------------------------------------------
// Parse

impl<'a> InspectStruct<'a> {
    pub fn from_ast(ast: &'a DeriveInput) -> Result<Self> {
        let named = match &ast.data {
            Data::Struct(data) => match &data.fields {
                Fields::Named(named) => named,
                Fields::Unnamed(_) | Fields::Unit => {
                    return Err(Error::new_spanned(
                        &ast.ident,
                        "`Inspect` can only be derived for structs with named fields",
                    ));
                }
            },
            Data::Enum(_) | Data::Union(_) => {
                return Err(Error::new_spanned(
                    &ast.ident,
                    "`Inspect` can only be derived for structs",
                ));
            }
        };

        if let Some(lifetime) = ast.generics.lifetimes().next() {
            return Err(Error::new_spanned(
                lifetime,
                "`Inspect` cannot be derived for types with lifetime parameters",
            ));
        }

        let attrs = TypeAttributes::parse_attrs(&ast.attrs)?;
        let fields = named
            .named
            .iter()
            .map(|field| {
                Ok(StructField {
                    // Named fields always carry an identifier.
                    ident: field.ident.as_ref().ok_or_else(|| {
                        Error::new_spanned(field, "expected a named field")
                    })?,
                    ty: &field.ty,
                    attrs: FieldAttributes::parse_attrs(&field.attrs)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            vc_inspect_path: crate::path::vc_inspect(),
            ident: &ast.ident,
            generics: &ast.generics,
            attrs,
            fields,
        })
    }
}

// -----------------------------------------------------------------------------
// Access

impl<'a> InspectStruct<'a> {
    #[inline]
    pub fn vc_inspect_path(&self) -> &Path {
        &self.vc_inspect_path
    }

    #[inline]
    pub fn ident(&self) -> &Ident {
        self.ident
    }

    #[inline]
    pub fn attrs(&self) -> &TypeAttributes {
        &self.attrs
    }

    /// Fields visible to the inspection API, in declaration order.
    pub fn active_fields(&self) -> impl Iterator<Item = &StructField<'a>> {
        self.fields
            .iter()
            .filter(|field| field.attrs.ignore.is_none())
    }

    /// Returns `(impl_generics, ty_generics, where_clause)`.
    ///
    /// Type parameters are bounded by `'static`, and active field types that
    /// mention a type parameter by `Inspect`. Field types without type
    /// parameters are checked where they are used instead, which keeps
    /// recursive types from producing cyclic bounds.
    pub fn split_generics(&self) -> (TokenStream, TokenStream, TokenStream) {
        let (impl_generics, ty_generics, where_clause) = self.generics.split_for_impl();

        let mut predicates = TokenStream::new();
        if let Some(where_clause) = where_clause {
            for predicate in &where_clause.predicates {
                predicates.extend(quote!(#predicate,));
            }
        }

        let type_param_idents = self
            .generics
            .type_params()
            .map(|param| param.ident.clone())
            .collect::<Vec<Ident>>();

        for ident in &type_param_idents {
            predicates.extend(quote!(#ident: 'static,));
        }

        if !type_param_idents.is_empty() {
            let inspect_ = crate::path::inspect_(&self.vc_inspect_path);
            let mut seen: Vec<&Type> = Vec::new();
            for field in self.active_fields() {
                if seen.contains(&field.ty) {
                    continue;
                }
                seen.push(field.ty);
                if is_any_ident_in_token_stream(&type_param_idents, field.ty.to_token_stream()) {
                    let ty = field.ty;
                    predicates.extend(quote!(#ty: #inspect_,));
                }
            }
        }

        let where_clause = if predicates.is_empty() {
            TokenStream::new()
        } else {
            quote!(where #predicates)
        };

        (
            impl_generics.to_token_stream(),
            ty_generics.to_token_stream(),
            where_clause,
        )
    }
}

/// Do any of the identifiers in `idents` appear in `token_stream`?
fn is_any_ident_in_token_stream(idents: &[Ident], token_stream: TokenStream) -> bool {
    for token_tree in token_stream {
        match token_tree {
            proc_macro2::TokenTree::Ident(ident) => {
                if idents.contains(&ident) {
                    return true;
                }
            }
            proc_macro2::TokenTree::Group(group) => {
                if is_any_ident_in_token_stream(idents, group.stream()) {
                    return true;
                }
            }
            _ => {}
        }
    }
    false
}
