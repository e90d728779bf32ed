//! Fully qualified paths of `core` items.
//!
//! Generated code must not depend on what the caller has imported or shadowed,
//! so every standard item is spelled out from the crate root.
//!
//! ```
//! use quote::quote;
//! use vc_macro_utils::full_path::OptionFP;
//!
//! let tokens = quote!( #OptionFP::<u8>::None );
//! assert!(tokens.to_string().contains("Option"));
//! ```

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

macro_rules! define_full_path {
    ($($(#[$meta:meta])* $name:ident => $path:path;)*) => {
        $(
            $(#[$meta])*
            #[derive(Clone, Copy, Debug)]
            pub struct $name;

            impl ToTokens for $name {
                #[inline]
                fn to_tokens(&self, tokens: &mut TokenStream) {
                    tokens.extend(quote!($path));
                }
            }
        )*
    };
}

define_full_path! {
    /// `::core::default::Default`
    DefaultFP => ::core::default::Default;
    /// `::core::option::Option`
    OptionFP => ::core::option::Option;
    /// `::core::result::Result`
    ResultFP => ::core::result::Result;
}
