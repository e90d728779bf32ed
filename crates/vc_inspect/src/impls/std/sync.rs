use alloc::boxed::Box;
use core::ops::Deref;
use std::sync::{Mutex, PoisonError, RwLock, TryLockError};

use crate::access::{Composite, Indirect, Pointee};
use crate::{Inspect, InspectRef};

/// Adapts a lock guard to [`PointeeRef`](crate::access::PointeeRef).
struct Guarded<G>(G);

impl<G> Deref for Guarded<G>
where
    G: Deref,
    G::Target: Inspect + Sized,
{
    type Target = dyn Inspect;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

// A lock is read with `try_lock`/`try_read`, never blocking. A lock held
// elsewhere is `Pointee::Locked`; a poisoned lock is still read.
macro_rules! impl_inspect_lock {
    ($($lock:ident => $try_lock:ident, $get_mut:ident;)*) => {
        $(
            impl<T: Inspect> Inspect for $lock<T> {
                #[inline]
                fn inspect_ref(&self) -> InspectRef<'_> {
                    InspectRef::Indirect(self)
                }

                /// Accepts the lock itself, or anything the content accepts.
                fn assign(&mut self, value: Box<dyn Inspect>) -> Result<(), Box<dyn Inspect>> {
                    match value.take::<Self>() {
                        Ok(value) => {
                            *self = value;
                            Ok(())
                        }
                        Err(value) => self.$get_mut().unwrap_or_else(PoisonError::into_inner).assign(value),
                    }
                }

                #[inline]
                fn assign_null(&mut self) -> bool {
                    self.$get_mut().unwrap_or_else(PoisonError::into_inner).assign_null()
                }

                #[inline]
                fn populate_default(&mut self, field: &str, seed: usize) -> bool {
                    self.$get_mut()
                        .unwrap_or_else(PoisonError::into_inner)
                        .populate_default(field, seed)
                }

                #[inline]
                fn synthesize(field: &str, seed: usize) -> Option<Self> {
                    T::synthesize(field, seed).map($lock::new)
                }

                #[inline]
                fn as_composite_mut(&mut self) -> Option<&mut dyn Composite> {
                    self.$get_mut().unwrap_or_else(PoisonError::into_inner).as_composite_mut()
                }
            }

            impl<T: Inspect> Indirect for $lock<T> {
                fn pointee(&self) -> Pointee<'_> {
                    match self.$try_lock() {
                        Ok(guard) => Pointee::Value(Box::new(Guarded(guard))),
                        Err(TryLockError::Poisoned(poisoned)) => {
                            Pointee::Value(Box::new(Guarded(poisoned.into_inner())))
                        }
                        Err(TryLockError::WouldBlock) => Pointee::Locked,
                    }
                }
            }
        )*
    };
}

impl_inspect_lock! {
    Mutex => try_lock, get_mut;
    RwLock => try_read, get_mut;
}
