//! Uniform access to the inside of a value.
//!
//! ## Menu
//!
//! - [`Composite`], [`Typed`]: named fields of a struct, generated by `#[derive(Inspect)]`.
//! - [`Field`], [`FieldIter`]: a field name paired with its current value.
//! - [`Sequence`], [`Associative`]: elements and entries of containers.
//! - [`Indirect`], [`Pointee`]: values reached through cells and weak pointers.
//! - [`get`], [`set`], [`get_by_name`], [`set_by_name`], [`create_instance`]:
//!   descriptor based access, reporting misuse as [`AccessError`].
//! - [`VisitedSet`], [`Identity`]: identity keyed guard against reference cycles.

// -----------------------------------------------------------------------------
// Modules

mod accessor;
mod composite;
mod containers;
mod indirect;
mod visited;

// -----------------------------------------------------------------------------
// Exports

pub use accessor::{
    AccessError, create_instance, fields, get, get_by_name, get_mut, set, set_by_name,
};
pub use composite::{Composite, Field, FieldIter, Typed};
pub use containers::{Associative, ElementIter, EntryIter, Sequence};
pub use indirect::{Indirect, Pointee, PointeeRef};
pub use visited::{Identity, VisitedSet};

pub(crate) use accessor::assign_to;
pub(crate) use visited::HASH_STATE;
