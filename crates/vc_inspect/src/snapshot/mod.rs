//! Canonical text rendering of any [`Inspect`] value.
//!
//! ## Menu
//!
//! - [`to_snapshot`], [`to_snapshot_pretty`]: render into a `String`.
//! - [`Snapshot`]: a value paired with a [`Layout`], implements `Display`.
//! - [`SnapshotWriter`]: render into any `core::fmt::Write`.
//! - [`SerializeDriver`]: the same rendering through a serde data format
//!   (feature `serde`).
//!
//! ## Format
//!
//! | classification | output |
//! |---|---|
//! | null | `null` |
//! | leaf | quoted and escaped strings and characters, plain numbers and booleans, quoted ISO-8601 dates |
//! | sequence, array | `[a,b]` in iteration order |
//! | associative | `{key:value}` in iteration order, keys rendered like any value |
//! | composite | `{"field":value}` in declaration order, null fields omitted |
//!
//! A composite met again while it is still being rendered (a reference
//! cycle) is written as `{}`. A cell that cannot be read is rendered as null.
//!
//! The pretty layout puts every element on its own line, indented by two
//! spaces per level, and adds a space after each `:`.
//!
//! ```
//! use vc_inspect::Inspect;
//! use vc_inspect::snapshot::{to_snapshot, to_snapshot_pretty};
//!
//! #[derive(Inspect)]
//! struct Point {
//!     x: i32,
//!     label: Option<String>,
//!     tags: Vec<&'static str>,
//! }
//!
//! let point = Point { x: 1, label: None, tags: vec!["a"] };
//! assert_eq!(to_snapshot(&point), r#"{"x":1,"tags":["a"]}"#);
//! assert_eq!(
//!     to_snapshot_pretty(&point),
//!     "{\n  \"x\": 1,\n  \"tags\": [\n    \"a\"\n  ]\n}",
//! );
//! ```
//!
//! [`Inspect`]: crate::Inspect

// -----------------------------------------------------------------------------
// Modules

mod writer;

#[cfg(feature = "serde")]
mod serde;

// -----------------------------------------------------------------------------
// Exports

pub use writer::{Layout, Snapshot, SnapshotWriter, to_snapshot, to_snapshot_pretty};

#[cfg(feature = "serde")]
pub use serde::SerializeDriver;
