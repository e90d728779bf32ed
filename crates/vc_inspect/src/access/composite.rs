use core::fmt;

use crate::Inspect;
use crate::info::CompositeInfo;

/// A struct with named fields.
///
/// Implemented by `#[derive(Inspect)]`. Fields are addressed by name or by
/// declaration index, and [`Composite::iter_fields`] yields them in
/// declaration order.
///
/// ## Example
///
/// ```
/// use vc_inspect::Inspect;
/// use vc_inspect::access::Composite;
///
/// #[derive(Inspect)]
/// struct Person {
///     name: String,
///     age: u32,
/// }
///
/// let mut person = Person { name: "Ada".into(), age: 36 };
/// assert_eq!(person.field_len(), 2);
/// assert_eq!(person.name_at(1), Some("age"));
///
/// let age = person.field_mut("age").unwrap().downcast_mut::<u32>().unwrap();
/// *age += 1;
/// assert_eq!(person.age, 37);
/// ```
pub trait Composite: Inspect {
    /// Static descriptor of the concrete type.
    fn composite_info(&self) -> CompositeInfo;

    fn field(&self, name: &str) -> Option<&dyn Inspect>;

    fn field_mut(&mut self, name: &str) -> Option<&mut dyn Inspect>;

    fn field_at(&self, index: usize) -> Option<&dyn Inspect>;

    fn field_at_mut(&mut self, index: usize) -> Option<&mut dyn Inspect>;

    fn name_at(&self, index: usize) -> Option<&'static str>;

    fn field_len(&self) -> usize;

    fn iter_fields(&self) -> FieldIter<'_>;
}

/// Static access to the descriptor of a composite type.
pub trait Typed: Composite + Sized {
    fn type_info() -> CompositeInfo;
}

/// A field of a composite value: its name, declaration index and value.
#[derive(Clone, Copy)]
pub struct Field<'a> {
    name: &'static str,
    index: usize,
    value: &'a dyn Inspect,
}

impl<'a> Field<'a> {
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub const fn value(&self) -> &'a dyn Inspect {
        self.value
    }

    /// Type of the field. Field types are static, so this is the type of
    /// the current value.
    #[inline]
    pub fn declared_type(&self) -> &'static str {
        self.value.type_name()
    }
}

impl fmt::Debug for Field<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("index", &self.index)
            .field("value", &self.value)
            .finish()
    }
}

/// An iterator over the fields of a [`Composite`] in declaration order.
pub struct FieldIter<'a> {
    composite: &'a dyn Composite,
    index: usize,
}

impl<'a> FieldIter<'a> {
    #[inline]
    pub fn new(composite: &'a dyn Composite) -> Self {
        Self {
            composite,
            index: 0,
        }
    }
}

impl<'a> Iterator for FieldIter<'a> {
    type Item = Field<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.index;
        let name = self.composite.name_at(index)?;
        let value = self.composite.field_at(index)?;
        self.index += 1;
        Some(Field { name, index, value })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.composite.field_len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for FieldIter<'_> {}

#[cfg(test)]
mod tests {
    use crate::Inspect;
    use crate::access::{Composite, Typed};
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;
    use core::marker::PhantomData;

    #[derive(Inspect, Default)]
    #[inspect(default)]
    struct Order {
        id: u64,
        label: String,
        #[inspect(ignore)]
        cache: Vec<u8>,
        lines: Vec<String>,
    }

    #[derive(Inspect)]
    struct Shipment {
        r#type: String,
        weight: f64,
        stops: Vec<String>,
    }

    #[derive(Inspect)]
    struct Tagged<T> {
        tag: T,
        #[inspect(ignore)]
        _marker: PhantomData<T>,
    }

    #[test]
    fn fields_in_declaration_order() {
        let order = Order {
            id: 1,
            label: String::from("a"),
            cache: Vec::new(),
            lines: Vec::new(),
        };
        let names: Vec<_> = order.iter_fields().map(|f| f.name()).collect();
        assert_eq!(names, ["id", "label", "lines"]);
        assert_eq!(order.iter_fields().len(), 3);

        let indexes: Vec<_> = order.iter_fields().map(|f| f.index()).collect();
        assert_eq!(indexes, [0, 1, 2]);
        assert!(order.cache.is_empty());
    }

    #[test]
    fn ignored_fields_are_invisible() {
        let order = Order::default();
        assert!(order.field("cache").is_none());
        assert_eq!(order.field_len(), 3);
        assert_eq!(Order::type_info().index_of("lines"), Some(2));
    }

    #[test]
    fn field_lookup_by_name_and_index() {
        let mut order = Order::default();
        *order.field_mut("id").unwrap().downcast_mut::<u64>().unwrap() = 9;
        assert_eq!(order.field_at(0).unwrap().downcast_ref::<u64>(), Some(&9));
        assert!(order.field_at(3).is_none());
        assert!(order.name_at(3).is_none());

        let field = order.iter_fields().nth(1).unwrap();
        assert_eq!(field.declared_type(), "alloc::string::String");
    }

    #[test]
    fn descriptor() {
        let info = Order::type_info();
        assert!(info.is::<Order>());
        assert_eq!(info.type_name(), "Order");
        assert!(info.constructor().is_some());
        assert_eq!(Order::default().composite_info().field_len(), 3);

        let tagged = Tagged {
            tag: 3_u8,
            _marker: PhantomData,
        };
        assert_eq!(tagged.composite_info().type_name(), "Tagged");
        assert!(tagged.composite_info().constructor().is_none());
        assert_eq!(tagged.field("tag").unwrap().downcast_ref::<u8>(), Some(&3));
    }

    #[test]
    fn generated_accessors_agree() {
        let mut shipment = Shipment {
            r#type: String::from("air"),
            weight: 1.5,
            stops: vec![String::from("LHR")],
        };
        let names: Vec<_> = (0..shipment.field_len())
            .map(|index| shipment.name_at(index).unwrap())
            .collect();
        assert_eq!(names, ["type", "weight", "stops"]);
        assert_eq!(shipment.field("type").unwrap().downcast_ref::<String>().unwrap(), "air");
        assert_eq!(shipment.field_at(1).unwrap().downcast_ref::<f64>(), Some(&1.5));

        *shipment.field_at_mut(1).unwrap().downcast_mut::<f64>().unwrap() = 2.5;
        shipment
            .field_mut("stops")
            .unwrap()
            .downcast_mut::<Vec<String>>()
            .unwrap()
            .push(String::from("JFK"));
        assert_eq!(shipment.weight, 2.5);
        assert_eq!(
            crate::snapshot::to_snapshot(&shipment),
            r#"{"type":"air","weight":2.5,"stops":["LHR","JFK"]}"#
        );
    }
}
