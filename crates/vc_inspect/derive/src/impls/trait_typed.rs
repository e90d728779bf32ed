use proc_macro2::TokenStream;
use quote::{quote, quote_spanned};
use vc_macro_utils::full_path::DefaultFP;

use crate::derive_data::InspectStruct;

/// Generate the `Typed` implementation, holding the static field table.
pub(crate) fn impl_trait_typed(info: &InspectStruct) -> TokenStream {
    let vc_inspect_path = info.vc_inspect_path();
    let inspect_ = crate::path::inspect_(vc_inspect_path);
    let typed_ = crate::path::typed_(vc_inspect_path);
    let composite_info_ = crate::path::composite_info_(vc_inspect_path);
    let field_info_ = crate::path::field_info_(vc_inspect_path);
    let box_ = crate::path::box_(vc_inspect_path);

    let ident = info.ident();
    let (impl_generics, ty_generics, where_clause) = info.split_generics();

    let field_infos = info.active_fields().enumerate().map(|(index, field)| {
        let name = field.ident.to_string().trim_start_matches("r#").to_owned();
        quote!(#field_info_::new(#name, #index))
    });

    let with_constructor = info.attrs().default.map(|span| {
        quote_spanned! { span =>
            .with_constructor(|| -> #box_<dyn #inspect_> {
                #box_::new(<Self as #DefaultFP>::default())
            })
        }
    });

    quote! {
        impl #impl_generics #typed_ for #ident #ty_generics #where_clause {
            fn type_info() -> #composite_info_ {
                const FIELDS: &[#field_info_] = &[ #( #field_infos, )* ];
                #composite_info_::new::<Self>(FIELDS) #with_constructor
            }
        }
    }
}
