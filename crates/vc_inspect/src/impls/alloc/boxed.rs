use alloc::boxed::Box;
use core::any::TypeId;

use crate::access::Composite;
use crate::{Inspect, InspectRef};

/// Transparent: classification, type identity and population all follow the
/// boxed value.
impl<T: ?Sized + Inspect> Inspect for Box<T> {
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

    /// Accepts a `Box<T>`, or anything the content accepts.
    fn assign(&mut self, value: Box<dyn Inspect>) -> Result<(), Box<dyn Inspect>> {
        match value.take::<Self>() {
            Ok(value) => {
                *self = value;
                Ok(())
            }
            Err(value) => (**self).assign(value),
        }
    }

    #[inline]
    fn assign_null(&mut self) -> bool {
        (**self).assign_null()
    }

    #[inline]
    fn populate_default(&mut self, field: &str, seed: usize) -> bool {
        (**self).populate_default(field, seed)
    }

    #[inline]
    fn as_composite_mut(&mut self) -> Option<&mut dyn Composite> {
        (**self).as_composite_mut()
    }
}

#[cfg(test)]
mod tests {
    use crate::Inspect;
    use alloc::boxed::Box;
    use alloc::string::String;
    use core::any::TypeId;

    #[test]
    fn transparent() {
        let boxed: Box<dyn Inspect> = Box::new(String::from("a"));
        assert_eq!(boxed.ty_id(), TypeId::of::<String>());
        assert_eq!(Inspect::type_name(&boxed), "alloc::string::String");

        let mut boxed = Box::new(1_u8);
        boxed.assign(Box::new(2_u8)).unwrap();
        assert_eq!(*boxed, 2);
        assert!(boxed.populate_default("n", 4));
        assert_eq!(*boxed, 4);
    }
}
