use alloc::boxed::Box;
use core::any::TypeId;

use crate::access::Composite;
use crate::inspection::impl_populate_from_synthesize;
use crate::{Inspect, InspectRef};

/// `Some` is transparent, `None` is null.
///
/// Assignment accepts both `Option<T>` and `T`.
impl<T: Inspect> Inspect for Option<T> {
    #[inline]
    fn inspect_ref(&self) -> InspectRef<'_> {
        match self {
            Some(value) => value.inspect_ref(),
            None => InspectRef::Null,
        }
    }

    #[inline]
    fn ty_id(&self) -> TypeId {
        match self {
            Some(value) => value.ty_id(),
            None => TypeId::of::<T>(),
        }
    }

    #[inline]
    fn type_name(&self) -> &'static str {
        match self {
            Some(value) => value.type_name(),
            None => core::any::type_name::<T>(),
        }
    }

    fn assign(&mut self, value: Box<dyn Inspect>) -> Result<(), Box<dyn Inspect>> {
        let value = match value.take::<Self>() {
            Ok(value) => {
                *self = value;
                return Ok(());
            }
            Err(value) => value,
        };
        *self = Some(value.take::<T>()?);
        Ok(())
    }

    #[inline]
    fn assign_null(&mut self) -> bool {
        *self = None;
        true
    }

    impl_populate_from_synthesize!();

    #[inline]
    fn synthesize(field: &str, seed: usize) -> Option<Self> {
        T::synthesize(field, seed).map(Some)
    }

    #[inline]
    fn as_composite_mut(&mut self) -> Option<&mut dyn Composite> {
        self.as_mut()?.as_composite_mut()
    }
}
