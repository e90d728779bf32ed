use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::format;
use alloc::string::{String, ToString};

use crate::info::Leaf;
use crate::inspection::impl_populate_from_synthesize;
use crate::{Inspect, InspectRef};

/// Accepts a `String` or a `&'static str`.
impl Inspect for String {
    #[inline]
    fn inspect_ref(&self) -> InspectRef<'_> {
        InspectRef::Leaf(Leaf::Str(self))
    }

    fn assign(&mut self, value: Box<dyn Inspect>) -> Result<(), Box<dyn Inspect>> {
        let value = match value.take::<Self>() {
            Ok(value) => {
                *self = value;
                return Ok(());
            }
            Err(value) => value,
        };
        *self = value.take::<&'static str>()?.to_string();
        Ok(())
    }

    impl_populate_from_synthesize!();

    /// The field name followed by the seed.
    #[inline]
    fn synthesize(field: &str, seed: usize) -> Option<Self> {
        Some(format!("{field}{seed}"))
    }
}

/// Accepts a `Cow<'static, str>`, a `String` or a `&'static str`.
impl Inspect for Cow<'static, str> {
    #[inline]
    fn inspect_ref(&self) -> InspectRef<'_> {
        InspectRef::Leaf(Leaf::Str(self))
    }

    fn assign(&mut self, value: Box<dyn Inspect>) -> Result<(), Box<dyn Inspect>> {
        let value = match value.take::<Self>() {
            Ok(value) => {
                *self = value;
                return Ok(());
            }
            Err(value) => value,
        };
        let value = match value.take::<String>() {
            Ok(value) => {
                *self = Cow::Owned(value);
                return Ok(());
            }
            Err(value) => value,
        };
        *self = Cow::Borrowed(value.take::<&'static str>()?);
        Ok(())
    }

    impl_populate_from_synthesize!();

    #[inline]
    fn synthesize(field: &str, seed: usize) -> Option<Self> {
        String::synthesize(field, seed).map(Cow::Owned)
    }
}
