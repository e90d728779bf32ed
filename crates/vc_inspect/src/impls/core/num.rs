use crate::inspection::{impl_assign_self, impl_populate_from_synthesize};
use crate::info::Leaf;
use crate::{Inspect, InspectRef};

macro_rules! impl_inspect_integer {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl Inspect for $ty {
                #[inline]
                fn inspect_ref(&self) -> InspectRef<'_> {
                    InspectRef::Leaf(Leaf::$variant(*self as _))
                }

                impl_assign_self!();

                impl_populate_from_synthesize!();

                /// The seed, wrapping into the target width.
                #[inline]
                fn synthesize(_field: &str, seed: usize) -> Option<Self> {
                    Some(seed as $ty)
                }
            }
        )*
    };
}

macro_rules! impl_inspect_float {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl Inspect for $ty {
                #[inline]
                fn inspect_ref(&self) -> InspectRef<'_> {
                    InspectRef::Leaf(Leaf::$variant(*self))
                }

                impl_assign_self!();

                impl_populate_from_synthesize!();

                #[inline]
                fn synthesize(_field: &str, seed: usize) -> Option<Self> {
                    Some(seed as $ty)
                }
            }
        )*
    };
}

impl_inspect_integer!(
    i8 => Int,
    i16 => Int,
    i32 => Int,
    i64 => Int,
    i128 => Int,
    isize => Int,
    u8 => UInt,
    u16 => UInt,
    u32 => UInt,
    u64 => UInt,
    u128 => UInt,
    usize => UInt,
);

impl_inspect_float!(f32 => F32, f64 => F64);
