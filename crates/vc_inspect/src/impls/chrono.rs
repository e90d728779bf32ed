use ::chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::info::{Leaf, Temporal};
use crate::inspection::impl_assign_self;
use crate::{Inspect, InspectRef};

// Temporal leaves have no population rule and are left untouched.
macro_rules! impl_inspect_temporal {
    ($($ty:ty => |$value:ident| $temporal:expr;)*) => {
        $(
            impl Inspect for $ty {
                #[inline]
                fn inspect_ref(&self) -> InspectRef<'_> {
                    let $value = *self;
                    InspectRef::Leaf(Leaf::Temporal($temporal))
                }

                impl_assign_self!();
            }
        )*
    };
}

impl_inspect_temporal! {
    NaiveDate => |value| Temporal::Date(value);
    NaiveTime => |value| Temporal::Time(value);
    NaiveDateTime => |value| Temporal::DateTime(value);
    DateTime<FixedOffset> => |value| Temporal::Zoned(value);
    DateTime<Utc> => |value| Temporal::Zoned(value.fixed_offset());
}
