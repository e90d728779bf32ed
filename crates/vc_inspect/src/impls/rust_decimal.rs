use ::rust_decimal::Decimal;

use crate::info::Leaf;
use crate::inspection::{impl_assign_self, impl_populate_from_synthesize};
use crate::{Inspect, InspectRef};

/// Compared by numeric value, scale is ignored.
impl Inspect for Decimal {
    #[inline]
    fn inspect_ref(&self) -> InspectRef<'_> {
        InspectRef::Leaf(Leaf::Decimal(*self))
    }

    impl_assign_self!();

    impl_populate_from_synthesize!();

    #[inline]
    fn synthesize(_field: &str, seed: usize) -> Option<Self> {
        Some(Decimal::from(seed))
    }
}
