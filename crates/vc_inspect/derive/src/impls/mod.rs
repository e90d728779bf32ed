//! Code generation.

// -----------------------------------------------------------------------------
// Modules

mod trait_composite;
mod trait_inspect;
mod trait_typed;

// -----------------------------------------------------------------------------
// Internal API

use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::InspectStruct;

pub(crate) use trait_composite::impl_trait_composite;
pub(crate) use trait_inspect::impl_trait_inspect;
pub(crate) use trait_typed::impl_trait_typed;

/// Implement `Inspect`, `Composite` and `Typed` for a struct.
pub(crate) fn impl_struct(info: &InspectStruct) -> TokenStream {
    let inspect_tokens = impl_trait_inspect(info);
    let composite_tokens = impl_trait_composite(info);
    let typed_tokens = impl_trait_typed(info);

    quote! {
        const _: () = {
            #inspect_tokens

            #composite_tokens

            #typed_tokens
        };
    }
}
