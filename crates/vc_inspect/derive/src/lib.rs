//! See [`derive Inspect`](derive_inspect).
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static INSPECT_ATTRIBUTE_NAME: &str = "inspect";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;

// -----------------------------------------------------------------------------
// Macros

/// # Inspect Derivation
///
/// `#[derive(Inspect)]` implements the following traits for a struct with
/// named fields:
///
/// - `Inspect`, classifying the value as a composite.
/// - `Composite`, giving access to fields by name and by index.
/// - `Typed`, providing the static field table.
///
/// Tuple structs, unit structs, enums and unions are rejected.
///
/// ## Ignoring Fields
///
/// A field marked `#[inspect(ignore)]` is absent from the field table: it is
/// not rendered, compared or populated, and its type does not need to
/// implement `Inspect`.
///
/// ```rust, ignore
/// #[derive(Inspect)]
/// struct Session {
///     user: String,
///     #[inspect(ignore)]
///     socket: TcpStream,
/// }
/// ```
///
/// This attribute can only be applied to fields.
///
/// ## Constructor
///
/// `#[inspect(default)]` records `Default::default` as the constructor of
/// the type, used by `create_instance` and `Populator::instantiate_many`.
/// The type must implement `Default`.
///
/// ```rust, ignore
/// #[derive(Inspect, Default)]
/// #[inspect(default)]
/// struct Person {
///     name: String,
///     age: u32,
/// }
/// ```
///
/// This attribute can only be applied at the type level.
///
/// ## Generics
///
/// Every type parameter gets a `'static` bound, and every field type that
/// mentions a type parameter an `Inspect` bound. Lifetime parameters are not
/// supported.
#[proc_macro_derive(Inspect, attributes(inspect))]
pub fn derive_inspect(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    match derive_data::InspectStruct::from_ast(&ast) {
        Ok(info) => impls::impl_struct(&info).into(),
        Err(err) => err.into_compile_error().into(),
    }
}
