#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// Extern Self

// Generated code refers to this crate as `vc_inspect`, including the derives
// used by this crate's own tests.
extern crate self as vc_inspect;

// -----------------------------------------------------------------------------
// no_std support

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod inspection;

pub mod access;
pub mod compare;
pub mod impls;
pub mod info;
pub mod populate;
pub mod snapshot;

// -----------------------------------------------------------------------------
// Top-Level exports

#[doc(hidden)]
pub mod __macro_exports;

pub use inspection::{Inspect, InspectRef};
pub use vc_inspect_derive::Inspect;
