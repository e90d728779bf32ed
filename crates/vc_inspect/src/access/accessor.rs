use alloc::boxed::Box;
use alloc::string::{String, ToString};

use thiserror::Error;

use crate::Inspect;
use crate::access::{Composite, Typed};
use crate::info::{CompositeInfo, FieldInfo};

/// Misuse of the field accessor.
///
/// These signal a bug in a fixture or model (wrong descriptor, wrong value
/// type), not in the subject under test.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    #[error("`{type_path}` has no field named `{field}`")]
    NoSuchField {
        type_path: &'static str,
        field: String,
    },
    #[error("descriptor of field `{field}` does not belong to `{type_path}`")]
    ForeignDescriptor {
        type_path: &'static str,
        field: &'static str,
    },
    #[error("cannot assign a `{found}` to field `{field}` of type `{expected}`")]
    IncompatibleValue {
        field: String,
        expected: &'static str,
        found: &'static str,
    },
    #[error("field `{field}` of type `{expected}` cannot be null")]
    NotNullable {
        field: String,
        expected: &'static str,
    },
    #[error("`{type_path}` is not a composite")]
    NotComposite { type_path: &'static str },
    #[error("`{type_path}` cannot be read while it is borrowed mutably or locked")]
    Unreadable { type_path: &'static str },
}

/// Field descriptors of `T`, in declaration order.
#[inline]
pub fn fields<T: Typed>() -> &'static [FieldInfo] {
    T::type_info().fields()
}

fn check_descriptor(field: &FieldInfo, instance: &dyn Composite) -> Result<(), AccessError> {
    match instance.name_at(field.index()) {
        Some(name) if name == field.name() => Ok(()),
        _ => Err(AccessError::ForeignDescriptor {
            type_path: instance.type_name(),
            field: field.name(),
        }),
    }
}

/// Read the value of `field` in `instance`.
///
/// Fails if the descriptor was taken from another type.
pub fn get<'a>(field: &FieldInfo, instance: &'a dyn Composite) -> Result<&'a dyn Inspect, AccessError> {
    check_descriptor(field, instance)?;
    instance
        .field_at(field.index())
        .ok_or(AccessError::ForeignDescriptor {
            type_path: instance.type_name(),
            field: field.name(),
        })
}

/// Mutable counterpart of [`get`].
pub fn get_mut<'a>(
    field: &FieldInfo,
    instance: &'a mut dyn Composite,
) -> Result<&'a mut dyn Inspect, AccessError> {
    check_descriptor(field, instance)?;
    let type_path = instance.type_name();
    instance
        .field_at_mut(field.index())
        .ok_or(AccessError::ForeignDescriptor {
            type_path,
            field: field.name(),
        })
}

/// Write `value` into `field` of `instance`.
///
/// The value must have the field's type, or be the wrapped type of an
/// `Option` field.
pub fn set(
    field: &FieldInfo,
    instance: &mut dyn Composite,
    value: Box<dyn Inspect>,
) -> Result<(), AccessError> {
    let slot = get_mut(field, instance)?;
    assign_to(slot, field.name(), value)
}

/// Read the field called `name`.
pub fn get_by_name<'a>(instance: &'a dyn Composite, name: &str) -> Result<&'a dyn Inspect, AccessError> {
    instance.field(name).ok_or_else(|| AccessError::NoSuchField {
        type_path: instance.type_name(),
        field: name.to_string(),
    })
}

/// Write `value` into the field called `name`.
pub fn set_by_name(
    instance: &mut dyn Composite,
    name: &str,
    value: Box<dyn Inspect>,
) -> Result<(), AccessError> {
    let type_path = instance.type_name();
    let slot = instance
        .field_mut(name)
        .ok_or_else(|| AccessError::NoSuchField {
            type_path,
            field: name.to_string(),
        })?;
    assign_to(slot, name, value)
}

/// Build a fresh default instance of the described type.
///
/// Returns `None` and logs a warning if the type has no constructor, which
/// is the case unless it derives `Default` and is marked `#[inspect(default)]`.
pub fn create_instance(info: &CompositeInfo) -> Option<Box<dyn Inspect>> {
    match info.constructor() {
        Some(constructor) => Some(constructor()),
        None => {
            log::warn!(
                "`{}` has no constructor, mark it `#[inspect(default)]` to allow instantiation",
                info.type_path()
            );
            None
        }
    }
}

pub(crate) fn assign_to(
    slot: &mut dyn Inspect,
    field: &str,
    value: Box<dyn Inspect>,
) -> Result<(), AccessError> {
    let expected = slot.type_name();
    slot.assign(value)
        .map_err(|rejected| AccessError::IncompatibleValue {
            field: field.to_string(),
            expected,
            found: rejected.type_name(),
        })
}
