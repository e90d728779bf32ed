use alloc::boxed::Box;
use core::ops::Deref;

use crate::Inspect;
use crate::info::Classification;

/// A guard dereferencing to the target of an [`Indirect`] value.
///
/// Holds the borrow (or strong reference) for as long as it lives.
pub type PointeeRef<'a> = Box<dyn Deref<Target = dyn Inspect> + 'a>;

/// Result of following an [`Indirect`] value.
pub enum Pointee<'a> {
    /// The target, borrowed for the guard's lifetime.
    Value(PointeeRef<'a>),
    /// The target no longer exists, treated as null.
    Dangling,
    /// The target exists but cannot be read now, e.g. a mutably borrowed
    /// `RefCell` or a locked `Mutex`.
    Locked,
}

/// A value whose content is reached through a runtime-checked borrow or a
/// weak reference: `RefCell`, `Weak`, `Mutex`, `RwLock`.
pub trait Indirect {
    fn pointee(&self) -> Pointee<'_>;

    /// Classification of the target, [`Classification::Null`] if it is
    /// dangling or locked.
    fn classify(&self) -> Classification {
        match self.pointee() {
            Pointee::Value(value) => value.classify(),
            Pointee::Dangling | Pointee::Locked => Classification::Null,
        }
    }
}
