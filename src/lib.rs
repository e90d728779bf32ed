#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use vc_inspect as inspect;

/// Most commonly used items, for glob import in test modules.
pub mod prelude {
    pub use vc_inspect::access::{Composite, Typed};
    pub use vc_inspect::compare::{assert_same, compare};
    pub use vc_inspect::populate::{Options, Populator};
    pub use vc_inspect::snapshot::{to_snapshot, to_snapshot_pretty};
    pub use vc_inspect::{Inspect, assert_same};
}
