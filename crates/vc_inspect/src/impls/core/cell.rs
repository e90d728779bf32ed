use alloc::boxed::Box;
use core::cell::{Ref, RefCell};

use crate::access::{Composite, Indirect, Pointee};
use crate::{Inspect, InspectRef};

/// A `RefCell` is read through a shared borrow. While it is mutably
/// borrowed its pointee is [`Pointee::Locked`].
impl<T: Inspect> Inspect for RefCell<T> {
    #[inline]
    fn inspect_ref(&self) -> InspectRef<'_> {
        InspectRef::Indirect(self)
    }

    /// Accepts a `RefCell<T>`, or anything the content accepts.
    fn assign(&mut self, value: Box<dyn Inspect>) -> Result<(), Box<dyn Inspect>> {
        match value.take::<Self>() {
            Ok(value) => {
                *self = value;
                Ok(())
            }
            Err(value) => self.get_mut().assign(value),
        }
    }

    #[inline]
    fn assign_null(&mut self) -> bool {
        self.get_mut().assign_null()
    }

    #[inline]
    fn populate_default(&mut self, field: &str, seed: usize) -> bool {
        self.get_mut().populate_default(field, seed)
    }

    #[inline]
    fn synthesize(field: &str, seed: usize) -> Option<Self> {
        T::synthesize(field, seed).map(RefCell::new)
    }

    #[inline]
    fn as_composite_mut(&mut self) -> Option<&mut dyn Composite> {
        self.get_mut().as_composite_mut()
    }
}

impl<T: Inspect> Indirect for RefCell<T> {
    fn pointee(&self) -> Pointee<'_> {
        match self.try_borrow() {
            Ok(guard) => Pointee::Value(Box::new(Ref::map(guard, |value| value as &dyn Inspect))),
            Err(_) => Pointee::Locked,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::Inspect;
    use crate::info::{Classification, LeafKind};
    use alloc::boxed::Box;
    use core::cell::RefCell;

    #[test]
    fn classified_as_content() {
        let cell = RefCell::new(5_u8);
        assert_eq!(cell.classify(), Classification::Leaf(LeafKind::Integer));

        let guard = cell.borrow_mut();
        assert_eq!(cell.classify(), Classification::Null);
        drop(guard);
    }

    #[test]
    fn assign_through_cell() {
        let mut cell = RefCell::new(5_u8);
        cell.assign(Box::new(6_u8)).unwrap();
        assert_eq!(*cell.borrow(), 6);
        cell.assign(Box::new(RefCell::new(7_u8))).unwrap();
        assert_eq!(cell.into_inner(), 7);
    }
}
