use alloc::boxed::Box;
use alloc::rc::{self, Rc};
use alloc::sync::{self, Arc};
use core::any::TypeId;

use crate::access::{Indirect, Pointee};
use crate::inspection::impl_assign_self;
use crate::{Inspect, InspectRef};

// Shared pointers inspect as their content. Population leaves them untouched,
// the content may be shared with other owners.
macro_rules! impl_inspect_shared {
    ($($ptr:ident),*) => {
        $(
            impl<T: ?Sized + Inspect> Inspect for $ptr<T> {
                #[inline]
                fn inspect_ref(&self) -> InspectRef<'_> {
                    (**self).inspect_ref()
                }

                #[inline]
                fn ty_id(&self) -> TypeId {
                    (**self).ty_id()
                }

                #[inline]
                fn type_name(&self) -> &'static str {
                    (**self).type_name()
                }

                impl_assign_self!();
            }
        )*
    };
}

impl_inspect_shared!(Rc, Arc);

// A weak pointer is followed while its target is alive. Once dropped it is
// null, and assigning null resets it to a fresh dangling pointer.
macro_rules! impl_inspect_weak {
    ($($weak:ident => $strong:ident),*) => {
        $(
            impl<T: Inspect> Inspect for $weak::Weak<T> {
                #[inline]
                fn inspect_ref(&self) -> InspectRef<'_> {
                    InspectRef::Indirect(self)
                }

                impl_assign_self!();

                #[inline]
                fn assign_null(&mut self) -> bool {
                    *self = $weak::Weak::new();
                    true
                }
            }

            impl<T: Inspect> Indirect for $weak::Weak<T> {
                fn pointee(&self) -> Pointee<'_> {
                    match self.upgrade() {
                        Some(strong) => {
                            let strong: $strong<dyn Inspect> = strong;
                            Pointee::Value(Box::new(strong))
                        }
                        None => Pointee::Dangling,
                    }
                }
            }
        )*
    };
}

impl_inspect_weak!(rc => Rc, sync => Arc);

#[cfg(test)]
mod tests {
    use crate::Inspect;
    use crate::info::{Classification, LeafKind};
    use alloc::rc::{Rc, Weak};
    use alloc::sync::Arc;
    use core::any::TypeId;

    #[test]
    fn shared_pointers_are_transparent() {
        let rc = Rc::new(1_u32);
        assert_eq!(rc.ty_id(), TypeId::of::<u32>());
        assert_eq!(Arc::new(1_u32).classify(), Classification::Leaf(LeafKind::Integer));
        assert!(!Rc::new(1_u32).populate_default("n", 3));
    }

    #[test]
    fn weak_follows_target() {
        let strong = Rc::new(1_u32);
        let mut weak = Rc::downgrade(&strong);
        assert_eq!(weak.classify(), Classification::Leaf(LeafKind::Integer));

        drop(strong);
        assert_eq!(weak.classify(), Classification::Null);

        assert!(weak.assign_null());
        assert!(weak.upgrade().is_none());
        assert_eq!(Weak::<u32>::new().classify(), Classification::Null);
    }
}
