use alloc::boxed::Box;
use core::any::{Any, TypeId};
use core::fmt;

use crate::access::{Associative, Composite, Indirect, Sequence};
use crate::info::{Classification, Leaf};

// -----------------------------------------------------------------------------
// InspectRef

/// A borrowed view of a value, one variant per [`Classification`] plus
/// [`InspectRef::Indirect`] for values reached through a cell or weak pointer.
///
/// Traversals dispatch on this view; see [`Inspect::inspect_ref`].
#[derive(Clone, Copy)]
pub enum InspectRef<'a> {
    Null,
    Leaf(Leaf<'a>),
    Sequence(&'a dyn Sequence),
    Associative(&'a dyn Associative),
    Array(&'a dyn Sequence),
    Composite(&'a dyn Composite),
    Indirect(&'a dyn Indirect),
}

impl InspectRef<'_> {
    /// Classification of the viewed value.
    ///
    /// An [`InspectRef::Indirect`] is classified as its pointee.
    pub fn classify(&self) -> Classification {
        match self {
            Self::Null => Classification::Null,
            Self::Leaf(leaf) => Classification::Leaf(leaf.kind()),
            Self::Sequence(_) => Classification::Sequence,
            Self::Associative(_) => Classification::Associative,
            Self::Array(_) => Classification::Array,
            Self::Composite(_) => Classification::Composite,
            Self::Indirect(indirect) => indirect.classify(),
        }
    }
}

impl fmt::Debug for InspectRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Leaf(leaf) => f.debug_tuple("Leaf").field(leaf).finish(),
            Self::Indirect(_) => f.write_str("Indirect"),
            other => fmt::Debug::fmt(&other.classify(), f),
        }
    }
}

// -----------------------------------------------------------------------------
// Inspect

/// The capability every value processed by this crate provides.
///
/// Implemented for library types in [`crate::impls`] and generated for
/// named-field structs by `#[derive(Inspect)]`.
///
/// ## Required methods
///
/// - [`Inspect::inspect_ref`]: the borrowed view used by all traversals.
/// - [`Inspect::assign`]: replace the value with a boxed value of the same type.
///
/// ## Population hooks
///
/// [`Inspect::populate_default`] and [`Inspect::synthesize`] implement the
/// default population rule of a type. Both do nothing by default, which is
/// the rule for composites.
pub trait Inspect: Any {
    /// Borrowed view of this value.
    fn inspect_ref(&self) -> InspectRef<'_>;

    /// Structural category of this value.
    #[inline]
    fn classify(&self) -> Classification {
        self.inspect_ref().classify()
    }

    /// Type id used for type equality checks.
    ///
    /// Transparent wrappers such as `Box<T>` report the wrapped value's id.
    #[inline]
    fn ty_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    /// Type name used in messages. Follows [`Inspect::ty_id`].
    #[inline]
    fn type_name(&self) -> &'static str {
        core::any::type_name::<Self>()
    }

    /// Replace `self` with `value`.
    ///
    /// Returns the value back if its type is not accepted.
    fn assign(&mut self, value: Box<dyn Inspect>) -> Result<(), Box<dyn Inspect>>;

    /// Set `self` to null. Returns `false` if the type cannot be null.
    #[inline]
    fn assign_null(&mut self) -> bool {
        false
    }

    /// Apply the default population rule for a field named `field`.
    ///
    /// Returns `false` if the type has no rule and was left untouched.
    #[inline]
    fn populate_default(&mut self, field: &str, seed: usize) -> bool {
        let _ = (field, seed);
        false
    }

    /// Produce the value the default population rule assigns.
    #[inline]
    fn synthesize(field: &str, seed: usize) -> Option<Self>
    where
        Self: Sized,
    {
        let _ = (field, seed);
        None
    }

    /// Mutable composite view, if this value is a composite.
    #[inline]
    fn as_composite_mut(&mut self) -> Option<&mut dyn Composite> {
        None
    }
}

impl dyn Inspect {
    /// Returns `true` if the concrete type is `T`.
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        (self as &dyn Any).is::<T>()
    }

    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        (self as &dyn Any).downcast_ref::<T>()
    }

    #[inline]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        (self as &mut dyn Any).downcast_mut::<T>()
    }

    /// Unbox into `T`, or give the box back.
    pub fn take<T: Any>(self: Box<dyn Inspect>) -> Result<T, Box<dyn Inspect>> {
        if !self.is::<T>() {
            return Err(self);
        }
        let any: Box<dyn Any> = self;
        match any.downcast::<T>() {
            Ok(value) => Ok(*value),
            Err(_) => unreachable!("type checked above"),
        }
    }
}

/// Writes the compact snapshot.
impl fmt::Debug for dyn Inspect {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::snapshot::SnapshotWriter::compact(f).write(self)
    }
}

/// Shared body of [`Inspect::assign`] for types that only accept themselves.
macro_rules! impl_assign_self {
    () => {
        fn assign(
            &mut self,
            value: $crate::__macro_exports::Box<dyn $crate::Inspect>,
        ) -> ::core::result::Result<(), $crate::__macro_exports::Box<dyn $crate::Inspect>> {
            *self = value.take::<Self>()?;
            Ok(())
        }
    };
}

/// Shared body of [`Inspect::populate_default`] for types whose rule is
/// [`Inspect::synthesize`].
macro_rules! impl_populate_from_synthesize {
    () => {
        fn populate_default(&mut self, field: &str, seed: usize) -> bool {
            match <Self as $crate::Inspect>::synthesize(field, seed) {
                Some(value) => {
                    *self = value;
                    true
                }
                None => false,
            }
        }
    };
}

pub(crate) use impl_assign_self;
pub(crate) use impl_populate_from_synthesize;

#[cfg(test)]
mod tests {
    use super::Inspect;
    use alloc::boxed::Box;
    use alloc::string::String;

    #[test]
    fn downcast_and_take() {
        let mut value: Box<dyn Inspect> = Box::new(5_u16);
        assert!(value.is::<u16>());
        assert!(!value.is::<u32>());
        assert_eq!(value.downcast_ref::<u16>(), Some(&5));
        *value.downcast_mut::<u16>().unwrap() = 6;

        let value = value.take::<u32>().unwrap_err();
        assert_eq!(value.take::<u16>().ok(), Some(6));
    }

    #[test]
    fn assign_checks_type() {
        let mut name = String::from("a");
        assert!(name.assign(Box::new(String::from("b"))).is_ok());
        assert_eq!(name, "b");

        let rejected = name.assign(Box::new(3_i32)).unwrap_err();
        assert!(rejected.is::<i32>());
        assert_eq!(name, "b");
    }
}
