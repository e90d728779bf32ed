use alloc::boxed::Box;

use crate::access::{ElementIter, Sequence};
use crate::inspection::impl_assign_self;
use crate::{Inspect, InspectRef};

impl<T: Inspect, const N: usize> Inspect for [T; N] {
    #[inline]
    fn inspect_ref(&self) -> InspectRef<'_> {
        InspectRef::Array(self)
    }

    impl_assign_self!();
}

impl<T: Inspect, const N: usize> Sequence for [T; N] {
    #[inline]
    fn len(&self) -> usize {
        N
    }

    fn iter(&self) -> ElementIter<'_> {
        Box::new(self.as_slice().iter().map(|value| value as &dyn Inspect))
    }
}

#[cfg(test)]
mod tests {
    use crate::Inspect;
    use crate::access::Sequence;
    use crate::info::Classification;

    #[test]
    fn arrays_are_not_populated() {
        let mut values = [1_u8, 2];
        assert_eq!(values.classify(), Classification::Array);
        assert!(!values.populate_default("values", 5));
        assert_eq!(values, [1, 2]);
        assert_eq!(Sequence::len(&values), 2);
    }
}
