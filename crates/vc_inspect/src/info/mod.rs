//! Type classification and static type descriptors.
//!
//! ## Menu
//!
//! - [`Classification`]: the structural category that drives every traversal.
//! - [`LeafKind`]: the category of an immutable leaf.
//! - [`Leaf`]: a borrowed leaf payload, compared and rendered by value.
//! - [`Temporal`]: canonical date-time payload (feature `chrono`).
//! - [`CompositeInfo`], [`FieldInfo`]: the static field table of a composite.
//! - [`Absent`]: a value that always classifies as null.

// -----------------------------------------------------------------------------
// Modules

mod classification;
mod composite_info;
mod leaf;

// -----------------------------------------------------------------------------
// Exports

pub use classification::{Absent, Classification, LeafKind};
pub use composite_info::{CompositeInfo, FieldInfo};
pub use leaf::Leaf;

pub(crate) use composite_info::simple_name;
pub(crate) use leaf::write_escaped;

#[cfg(feature = "chrono")]
pub use leaf::Temporal;
