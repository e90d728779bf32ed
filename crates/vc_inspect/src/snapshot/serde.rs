use alloc::vec::Vec;
use core::cell::RefCell;

use serde_core::ser::{SerializeMap, SerializeSeq, SerializeStruct};
use serde_core::{Serialize, Serializer};

use crate::access::{Associative, Composite, Identity, Pointee, Sequence, VisitedSet};
use crate::info::Leaf;
use crate::{Inspect, InspectRef};

// -----------------------------------------------------------------------------
// SerializeDriver

/// Serializes any [`Inspect`] value through a serde data format, following
/// the snapshot rules.
///
/// - Composites become structs named after their simple type name, with null
///   fields omitted; a reference cycle becomes an empty map.
/// - Sequences and arrays become sequences, associative containers maps.
/// - Decimals and temporal values are serialized as their canonical text.
///
/// ```
/// use vc_inspect::Inspect;
/// use vc_inspect::snapshot::SerializeDriver;
///
/// #[derive(Inspect)]
/// struct Item {
///     id: u32,
///     note: Option<String>,
/// }
///
/// let item = Item { id: 3, note: None };
/// let json = serde_json::to_string(&SerializeDriver::new(&item)).unwrap();
/// assert_eq!(json, r#"{"id":3}"#);
/// ```
pub struct SerializeDriver<'a> {
    value: &'a dyn Inspect,
    visited: RefCell<VisitedSet>,
}

impl<'a> SerializeDriver<'a> {
    #[inline]
    pub fn new(value: &'a dyn Inspect) -> Self {
        Self {
            value,
            visited: RefCell::new(VisitedSet::new()),
        }
    }
}

impl Serialize for SerializeDriver<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ValueSerializer {
            value: self.value,
            visited: &self.visited,
        }
        .serialize(serializer)
    }
}

// -----------------------------------------------------------------------------
// ValueSerializer

struct ValueSerializer<'a> {
    value: &'a dyn Inspect,
    visited: &'a RefCell<VisitedSet>,
}

impl ValueSerializer<'_> {
    #[inline]
    fn nested<'b>(&'b self, value: &'b dyn Inspect) -> ValueSerializer<'b> {
        ValueSerializer {
            value,
            visited: self.visited,
        }
    }
}

impl Serialize for ValueSerializer<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.value.inspect_ref() {
            InspectRef::Null => serializer.serialize_none(),
            InspectRef::Leaf(leaf) => serialize_leaf(leaf, serializer),
            InspectRef::Sequence(sequence) | InspectRef::Array(sequence) => {
                self.serialize_sequence(sequence, serializer)
            }
            InspectRef::Associative(map) => self.serialize_map(map, serializer),
            InspectRef::Composite(composite) => self.serialize_composite(composite, serializer),
            InspectRef::Indirect(indirect) => match indirect.pointee() {
                Pointee::Value(target) => self.nested(&*target).serialize(serializer),
                Pointee::Dangling | Pointee::Locked => serializer.serialize_none(),
            },
        }
    }
}

impl ValueSerializer<'_> {
    fn serialize_sequence<S: Serializer>(
        &self,
        sequence: &dyn Sequence,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_seq(Some(sequence.len()))?;
        for element in sequence.iter() {
            state.serialize_element(&self.nested(element))?;
        }
        state.end()
    }

    fn serialize_map<S: Serializer>(
        &self,
        map: &dyn Associative,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_map(Some(map.len()))?;
        for (key, value) in map.iter() {
            state.serialize_entry(&self.nested(key), &self.nested(value))?;
        }
        state.end()
    }

    fn serialize_composite<S: Serializer>(
        &self,
        composite: &dyn Composite,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let identity = Identity::of_composite(composite);
        if !self.visited.borrow_mut().insert(identity) {
            return serializer.serialize_map(Some(0))?.end();
        }

        let result = self.serialize_fields(composite, serializer);
        self.visited.borrow_mut().remove(&identity);
        result
    }

    fn serialize_fields<S: Serializer>(
        &self,
        composite: &dyn Composite,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let fields: Vec<_> = composite
            .iter_fields()
            .filter(|field| !field.value().classify().is_null())
            .collect();

        let name = composite.composite_info().type_name();
        let mut state = serializer.serialize_struct(name, fields.len())?;
        for field in &fields {
            state.serialize_field(field.name(), &self.nested(field.value()))?;
        }
        state.end()
    }
}

fn serialize_leaf<S: Serializer>(leaf: Leaf<'_>, serializer: S) -> Result<S::Ok, S::Error> {
    match leaf {
        Leaf::Str(s) => serializer.serialize_str(s),
        Leaf::Char(c) => serializer.serialize_char(c),
        Leaf::Bool(b) => serializer.serialize_bool(b),
        Leaf::Int(n) => match i64::try_from(n) {
            Ok(n) => serializer.serialize_i64(n),
            Err(_) => serializer.serialize_i128(n),
        },
        Leaf::UInt(n) => match u64::try_from(n) {
            Ok(n) => serializer.serialize_u64(n),
            Err(_) => serializer.serialize_u128(n),
        },
        Leaf::F32(n) => serializer.serialize_f32(n),
        Leaf::F64(n) => serializer.serialize_f64(n),
        #[cfg(feature = "decimal")]
        Leaf::Decimal(n) => serializer.collect_str(&n),
        #[cfg(feature = "chrono")]
        Leaf::Temporal(t) => serializer.collect_str(&t),
    }
}
