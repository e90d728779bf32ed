//! Paths of the items generated code refers to.

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// Get the access path to the `vc_inspect` crate.
///
/// 1. For crates that depend on `vc_inspect`, `::vc_inspect` is returned.
/// 2. For crates that depend on `vc_testkit`, `::vc_testkit::inspect` is returned.
/// 3. Otherwise `::vc_inspect` is returned, which may be incorrect.
pub(crate) fn vc_inspect() -> syn::Path {
    vc_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("vc_inspect"))
}

// -----------------------------------------------------------------------------
// Internal API

#[inline(always)]
pub(crate) fn inspect_(vc_inspect_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_inspect_path::Inspect
    }
}

#[inline(always)]
pub(crate) fn inspect_ref_(vc_inspect_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_inspect_path::InspectRef
    }
}

#[inline(always)]
pub(crate) fn composite_(vc_inspect_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_inspect_path::access::Composite
    }
}

#[inline(always)]
pub(crate) fn typed_(vc_inspect_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_inspect_path::access::Typed
    }
}

#[inline(always)]
pub(crate) fn field_iter_(vc_inspect_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_inspect_path::access::FieldIter
    }
}

#[inline(always)]
pub(crate) fn composite_info_(vc_inspect_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_inspect_path::info::CompositeInfo
    }
}

#[inline(always)]
pub(crate) fn field_info_(vc_inspect_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_inspect_path::info::FieldInfo
    }
}

#[inline(always)]
pub(crate) fn box_(vc_inspect_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_inspect_path::__macro_exports::Box
    }
}
