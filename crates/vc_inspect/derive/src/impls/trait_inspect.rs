use proc_macro2::TokenStream;
use quote::quote;
use vc_macro_utils::full_path::{OptionFP, ResultFP};

use crate::derive_data::InspectStruct;

/// Generate the `Inspect` implementation.
pub(crate) fn impl_trait_inspect(info: &InspectStruct) -> TokenStream {
    let vc_inspect_path = info.vc_inspect_path();
    let inspect_ = crate::path::inspect_(vc_inspect_path);
    let inspect_ref_ = crate::path::inspect_ref_(vc_inspect_path);
    let composite_ = crate::path::composite_(vc_inspect_path);
    let box_ = crate::path::box_(vc_inspect_path);

    let ident = info.ident();
    let (impl_generics, ty_generics, where_clause) = info.split_generics();

    quote! {
        impl #impl_generics #inspect_ for #ident #ty_generics #where_clause {
            #[inline]
            fn inspect_ref(&self) -> #inspect_ref_<'_> {
                #inspect_ref_::Composite(self)
            }

            fn assign(
                &mut self,
                value: #box_<dyn #inspect_>,
            ) -> #ResultFP<(), #box_<dyn #inspect_>> {
                *self = value.take::<Self>()?;
                #ResultFP::Ok(())
            }

            #[inline]
            fn as_composite_mut(&mut self) -> #OptionFP<&mut dyn #composite_> {
                #OptionFP::Some(self)
            }
        }
    }
}
