//! Items referenced by `#[derive(Inspect)]` output.
//!
//! The caller may not have `alloc` in scope, so generated code reaches it
//! through here.

pub use alloc::boxed::Box;
