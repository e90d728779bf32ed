//! Shared implementation macros.

/// Implement [`Inspect`](crate::Inspect) and [`Sequence`](crate::access::Sequence) for a container with an
/// inherent `len` whose shared reference iterates `&T`. The population rule is
/// a fresh empty value.
macro_rules! impl_inspect_sequence {
    ($ty:ident<$($param:ident),*> $(where $($bound:tt)+)?) => {
        impl<$($param),*> $crate::Inspect for $ty<$($param),*>
        where
            T: $crate::Inspect,
            $($($bound)+)?
        {
            #[inline]
            fn inspect_ref(&self) -> $crate::InspectRef<'_> {
                $crate::InspectRef::Sequence(self)
            }

            $crate::inspection::impl_assign_self!();

            $crate::inspection::impl_populate_from_synthesize!();

            #[inline]
            fn synthesize(_field: &str, _seed: usize) -> Option<Self> {
                Some(Self::default())
            }
        }

        impl<$($param),*> $crate::access::Sequence for $ty<$($param),*>
        where
            T: $crate::Inspect,
            $($($bound)+)?
        {
            #[inline]
            fn len(&self) -> usize {
                $ty::len(self)
            }

            fn iter(&self) -> $crate::access::ElementIter<'_> {
                $crate::__macro_exports::Box::new(
                    ::core::iter::IntoIterator::into_iter(self).map(|value| value as &dyn $crate::Inspect),
                )
            }
        }
    };
}

/// Implement [`Inspect`](crate::Inspect) and [`Associative`](crate::access::Associative) for a map with an
/// inherent `len` whose shared reference iterates `(&K, &V)`.
macro_rules! impl_inspect_map {
    ($ty:ident<$($param:ident),*> $(where $($bound:tt)+)?) => {
        impl<$($param),*> $crate::Inspect for $ty<$($param),*>
        where
            K: $crate::Inspect,
            V: $crate::Inspect,
            $($($bound)+)?
        {
            #[inline]
            fn inspect_ref(&self) -> $crate::InspectRef<'_> {
                $crate::InspectRef::Associative(self)
            }

            $crate::inspection::impl_assign_self!();

            $crate::inspection::impl_populate_from_synthesize!();

            #[inline]
            fn synthesize(_field: &str, _seed: usize) -> Option<Self> {
                Some(Self::default())
            }
        }

        impl<$($param),*> $crate::access::Associative for $ty<$($param),*>
        where
            K: $crate::Inspect,
            V: $crate::Inspect,
            $($($bound)+)?
        {
            #[inline]
            fn len(&self) -> usize {
                $ty::len(self)
            }

            fn iter(&self) -> $crate::access::EntryIter<'_> {
                $crate::__macro_exports::Box::new(::core::iter::IntoIterator::into_iter(self).map(|(key, value)| {
                    (key as &dyn $crate::Inspect, value as &dyn $crate::Inspect)
                }))
            }
        }
    };
}

pub(crate) use impl_inspect_map;
pub(crate) use impl_inspect_sequence;
