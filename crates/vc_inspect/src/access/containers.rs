use alloc::boxed::Box;

use crate::Inspect;

/// Iterator over the elements of a [`Sequence`].
pub type ElementIter<'a> = Box<dyn Iterator<Item = &'a dyn Inspect> + 'a>;

/// Iterator over the entries of an [`Associative`] container.
pub type EntryIter<'a> = Box<dyn Iterator<Item = (&'a dyn Inspect, &'a dyn Inspect)> + 'a>;

/// An ordered or unordered multi-element container, or a native array.
///
/// Elements are yielded in the container's own iteration order.
pub trait Sequence {
    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn iter(&self) -> ElementIter<'_>;
}

/// A key-value container.
pub trait Associative {
    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Entries in the container's iteration order.
    fn iter(&self) -> EntryIter<'_>;

    /// Values in the container's iteration order.
    fn values(&self) -> ElementIter<'_> {
        Box::new(self.iter().map(|(_, value)| value))
    }
}
