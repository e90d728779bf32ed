use proc_macro2::{Literal, TokenStream};
use quote::{ToTokens, quote};
use vc_macro_utils::full_path::OptionFP;

use crate::derive_data::InspectStruct;

/// Generate the `Composite` implementation.
///
/// Fields are matched by name and by declaration index among the active
/// fields.
pub(crate) fn impl_trait_composite(info: &InspectStruct) -> TokenStream {
    let vc_inspect_path = info.vc_inspect_path();
    let inspect_ = crate::path::inspect_(vc_inspect_path);
    let composite_ = crate::path::composite_(vc_inspect_path);
    let typed_ = crate::path::typed_(vc_inspect_path);
    let field_iter_ = crate::path::field_iter_(vc_inspect_path);
    let composite_info_ = crate::path::composite_info_(vc_inspect_path);
    // A unit struct cannot be bound inside `#(...)*`.
    let option_ = OptionFP.to_token_stream();

    let ident = info.ident();
    let (impl_generics, ty_generics, where_clause) = info.split_generics();

    let members = info
        .active_fields()
        .map(|field| field.ident)
        .collect::<Vec<_>>();
    let names = members
        .iter()
        .map(|member| member.to_string().trim_start_matches("r#").to_owned())
        .collect::<Vec<String>>();
    let indices = (0..members.len()).map(Literal::usize_unsuffixed).collect::<Vec<_>>();
    let field_len = members.len();

    quote! {
        impl #impl_generics #composite_ for #ident #ty_generics #where_clause {
            #[inline]
            fn composite_info(&self) -> #composite_info_ {
                <Self as #typed_>::type_info()
            }

            fn field(&self, name: &str) -> #OptionFP<&dyn #inspect_> {
                match name {
                    #( #names => #option_::Some(&self.#members), )*
                    _ => #OptionFP::None,
                }
            }

            fn field_mut(&mut self, name: &str) -> #OptionFP<&mut dyn #inspect_> {
                match name {
                    #( #names => #option_::Some(&mut self.#members), )*
                    _ => #OptionFP::None,
                }
            }

            fn field_at(&self, index: usize) -> #OptionFP<&dyn #inspect_> {
                match index {
                    #( #indices => #option_::Some(&self.#members), )*
                    _ => #OptionFP::None,
                }
            }

            fn field_at_mut(&mut self, index: usize) -> #OptionFP<&mut dyn #inspect_> {
                match index {
                    #( #indices => #option_::Some(&mut self.#members), )*
                    _ => #OptionFP::None,
                }
            }

            fn name_at(&self, index: usize) -> #OptionFP<&'static str> {
                match index {
                    #( #indices => #option_::Some(#names), )*
                    _ => #OptionFP::None,
                }
            }

            #[inline]
            fn field_len(&self) -> usize {
                #field_len
            }

            #[inline]
            fn iter_fields(&self) -> #field_iter_<'_> {
                #field_iter_::new(self)
            }
        }
    }
}
