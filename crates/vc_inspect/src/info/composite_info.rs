use alloc::boxed::Box;
use core::any::{Any, TypeId};
use core::fmt;

use crate::Inspect;

/// Static descriptor of one named field.
///
/// Only the name and declaration index are stored, the declared type is the
/// runtime type of the field value, see [`Field::declared_type`].
///
/// [`Field::declared_type`]: crate::access::Field::declared_type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldInfo {
    name: &'static str,
    index: usize,
}

impl FieldInfo {
    #[inline]
    pub const fn new(name: &'static str, index: usize) -> Self {
        Self { name, index }
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Position of the field in declaration order.
    #[inline]
    pub const fn index(&self) -> usize {
        self.index
    }
}

/// Static descriptor of a composite type: its path, its visible fields in
/// declaration order and, if available, a constructor.
///
/// Produced by `#[derive(Inspect)]`. Fields marked `#[inspect(ignore)]` are
/// not listed.
#[derive(Clone, Copy)]
pub struct CompositeInfo {
    ty_id: TypeId,
    type_path: &'static str,
    fields: &'static [FieldInfo],
    constructor: Option<fn() -> Box<dyn Inspect>>,
}

impl CompositeInfo {
    /// Create a descriptor for `T` without constructor.
    pub fn new<T: Any>(fields: &'static [FieldInfo]) -> Self {
        Self {
            ty_id: TypeId::of::<T>(),
            type_path: core::any::type_name::<T>(),
            fields,
            constructor: None,
        }
    }

    /// Attach a constructor producing a fresh default instance.
    #[inline]
    pub const fn with_constructor(mut self, constructor: fn() -> Box<dyn Inspect>) -> Self {
        self.constructor = Some(constructor);
        self
    }

    #[inline]
    pub const fn ty_id(&self) -> TypeId {
        self.ty_id
    }

    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        self.ty_id == TypeId::of::<T>()
    }

    /// Full type path, e.g. `my_crate::model::Person<u8>`.
    #[inline]
    pub const fn type_path(&self) -> &'static str {
        self.type_path
    }

    /// Type path without module prefix and generic arguments, e.g. `Person`.
    pub fn type_name(&self) -> &'static str {
        simple_name(self.type_path)
    }

    #[inline]
    pub const fn fields(&self) -> &'static [FieldInfo] {
        self.fields
    }

    #[inline]
    pub const fn field_len(&self) -> usize {
        self.fields.len()
    }

    #[inline]
    pub fn field_at(&self, index: usize) -> Option<&'static FieldInfo> {
        self.fields.get(index)
    }

    pub fn field(&self, name: &str) -> Option<&'static FieldInfo> {
        self.fields.iter().find(|field| field.name == name)
    }

    #[inline]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.field(name).map(FieldInfo::index)
    }

    #[inline]
    pub const fn constructor(&self) -> Option<fn() -> Box<dyn Inspect>> {
        self.constructor
    }
}

impl fmt::Debug for CompositeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeInfo")
            .field("type_path", &self.type_path)
            .field("fields", &self.fields)
            .field("constructor", &self.constructor.is_some())
            .finish()
    }
}

/// Strip the module path and generic arguments from a type path.
pub(crate) fn simple_name(type_path: &'static str) -> &'static str {
    let base = match type_path.find('<') {
        Some(end) => &type_path[..end],
        None => type_path,
    };
    match base.rfind("::") {
        Some(start) => &base[start + 2..],
        None => base,
    }
}
