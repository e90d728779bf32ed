//! Deep structural comparison of two values of the same type.
//!
//! ## Menu
//!
//! - [`compare`]: compare two values, returning a [`CompareError`] on failure.
//! - [`assert_same`] and the [`assert_same!`](crate::assert_same) macro:
//!   panic with the rendered failure, for use in tests.
//! - [`Comparator`]: the reusable comparison state.
//!
//! ## Rules
//!
//! | Classification | Rule |
//! |----------------|------|
//! | Null | equal to null only |
//! | Leaf | same type and same value, decimals by numeric value |
//! | Sequence, Array | same size, then order-independent pairing |
//! | Associative | as a sequence of its values, keys are ignored |
//! | Composite | every non-excluded field, all failing names collected |
//!
//! Pairing is greedy: each expected element is matched with the first
//! remaining actual element that compares equal.
//!
//! ## Example
//!
//! ```
//! use vc_inspect::Inspect;
//! use vc_inspect::compare::{CompareError, compare};
//!
//! #[derive(Inspect)]
//! struct Person {
//!     name: String,
//!     age: u32,
//! }
//!
//! let expected = Person { name: "name3".into(), age: 3 };
//! let actual = Person { name: "name3".into(), age: 4 };
//!
//! let Err(CompareError::Mismatch(mismatch)) = compare(&expected, &actual, &[]) else {
//!     panic!("expected a mismatch");
//! };
//! assert_eq!(mismatch.fields(), ["age"]);
//! assert!(compare(&expected, &actual, &["age"]).is_ok());
//! ```

// -----------------------------------------------------------------------------
// Modules

mod comparator;
mod error;

// -----------------------------------------------------------------------------
// Exports

pub use comparator::Comparator;
pub use error::{CompareError, Mismatch, UsageError};

use crate::Inspect;

/// Compare `expected` with `actual`, ignoring composite fields whose name is
/// in `excluded`, at any depth.
#[inline]
pub fn compare(expected: &dyn Inspect, actual: &dyn Inspect, excluded: &[&str]) -> Result<(), CompareError> {
    Comparator::new(excluded).compare(expected, actual)
}

/// Panics with the rendered failure if `expected` and `actual` differ.
///
/// See also the [`assert_same!`](crate::assert_same) macro.
#[track_caller]
pub fn assert_same(expected: &dyn Inspect, actual: &dyn Inspect, excluded: &[&str]) {
    if let Err(err) = compare(expected, actual, excluded) {
        panic!("{err}");
    }
}

/// Asserts that two values are structurally equal.
///
/// ```
/// use vc_inspect::{Inspect, assert_same};
///
/// #[derive(Inspect)]
/// struct Event {
///     id: u64,
///     kind: String,
/// }
///
/// let expected = Event { id: 1, kind: "created".into() };
/// let actual = Event { id: 2, kind: "created".into() };
///
/// assert_same!(expected, actual, exclude = ["id"]);
/// ```
#[macro_export]
macro_rules! assert_same {
    ($expected:expr, $actual:expr $(,)?) => {
        $crate::compare::assert_same(&$expected, &$actual, &[])
    };
    ($expected:expr, $actual:expr, exclude = [$($field:expr),* $(,)?] $(,)?) => {
        $crate::compare::assert_same(&$expected, &$actual, &[$($field),*])
    };
}

#[cfg(test)]
mod tests {
    use super::{CompareError, Mismatch, UsageError, compare};
    use crate::Inspect;
    use crate::access::AccessError;
    use alloc::boxed::Box;
    use alloc::collections::BTreeMap;
    use alloc::rc::Rc;
    use alloc::string::{String, ToString};
    use alloc::vec;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    #[derive(Inspect, Clone)]
    struct Person {
        name: String,
        age: u32,
    }

    #[derive(Inspect, Clone)]
    struct Profile {
        login: String,
        level: u8,
        email: Option<String>,
        tags: Vec<String>,
        score: f64,
    }

    #[derive(Inspect)]
    struct Order {
        id: u64,
        lines: Vec<Line>,
    }

    #[derive(Inspect)]
    struct Line {
        id: u64,
        sku: String,
    }

    #[derive(Inspect)]
    struct Node {
        name: String,
        next: Option<Rc<RefCell<Node>>>,
    }

    #[derive(Inspect)]
    struct Holder {
        value: RefCell<u8>,
    }

    #[cfg(feature = "std")]
    #[derive(Inspect)]
    struct Counters {
        count: std::sync::Mutex<u8>,
        names: std::sync::RwLock<Vec<String>>,
        shared: std::sync::Arc<std::sync::Mutex<u8>>,
    }

    fn person(name: &str, age: u32) -> Person {
        Person {
            name: name.to_string(),
            age,
        }
    }

    fn profile() -> Profile {
        Profile {
            login: String::from("ada"),
            level: 3,
            email: Some(String::from("ada@example.com")),
            tags: vec![String::from("a"), String::from("b")],
            score: 1.5,
        }
    }

    fn expect_mismatch(result: Result<(), CompareError>) -> Mismatch {
        match result {
            Err(CompareError::Mismatch(mismatch)) => mismatch,
            other => panic!("expected a mismatch, got {other:?}"),
        }
    }

    #[test]
    fn reflexive() {
        let value = profile();
        assert!(compare(&value, &value, &[]).is_ok());
        assert!(compare(&value, &value.clone(), &[]).is_ok());
        assert!(compare(&vec![f64::NAN], &vec![f64::NAN], &[]).is_ok());
    }

    #[test]
    fn size_mismatch() {
        let result = compare(&vec![1, 2, 3], &vec![1, 2], &[]);
        assert_eq!(
            expect_mismatch(result),
            Mismatch::Size {
                expected: 3,
                actual: 2
            }
        );
        assert!(compare(&Vec::<u8>::new(), &Vec::<u8>::new(), &[]).is_ok());
    }

    #[test]
    fn order_independent() {
        let expected = vec![person("a", 1), person("b", 2), person("c", 3)];
        let actual = vec![person("c", 3), person("a", 1), person("b", 2)];
        assert!(compare(&expected, &actual, &[]).is_ok());

        let result = compare(&vec![1, 2], &vec![1, 3], &[]);
        assert_eq!(
            expect_mismatch(result),
            Mismatch::MissingElement {
                element: String::from("2")
            }
        );
    }

    #[test]
    fn map_values_only() {
        let expected = BTreeMap::from([("a", 1), ("b", 2)]);
        let actual = BTreeMap::from([("x", 2), ("y", 1)]);
        assert!(compare(&expected, &actual, &[]).is_ok());
    }

    #[test]
    fn element_types() {
        let expected: Vec<Box<dyn Inspect>> = vec![Box::new(1_u8)];
        let actual: Vec<Box<dyn Inspect>> = vec![Box::new(String::from("1"))];
        assert_eq!(
            expect_mismatch(compare(&expected, &actual, &[])),
            Mismatch::ElementType {
                expected: "u8",
                actual: "String"
            }
        );
    }

    #[cfg(feature = "decimal")]
    #[test]
    fn decimal_scale() {
        use rust_decimal::Decimal;

        assert!(compare(&Decimal::new(1050, 2), &Decimal::new(105, 1), &[]).is_ok());
        assert!(compare(&Decimal::new(1050, 2), &Decimal::new(106, 1), &[]).is_err());
    }

    #[test]
    fn fields_aggregated() {
        let expected = profile();
        let mut actual = profile();
        actual.level = 4;
        actual.tags = vec![String::from("b"), String::from("c")];

        let mismatch = expect_mismatch(compare(&expected, &actual, &[]));
        assert_eq!(mismatch.fields(), ["level", "tags"]);

        let Mismatch::Fields {
            type_name,
            expected,
            ..
        } = &mismatch
        else {
            unreachable!();
        };
        assert_eq!(*type_name, "Profile");
        assert!(expected.starts_with("{\n  \"login\": \"ada\""));
    }

    #[test]
    fn one_null_field() {
        let expected = profile();
        let mut actual = profile();
        actual.email = None;

        let mismatch = expect_mismatch(compare(&expected, &actual, &[]));
        assert_eq!(mismatch.fields(), ["email"]);
        let mismatch = expect_mismatch(compare(&actual, &expected, &[]));
        assert_eq!(mismatch.fields(), ["email"]);
    }

    #[test]
    fn exclusions_at_every_depth() {
        let expected = Order {
            id: 1,
            lines: vec![Line {
                id: 10,
                sku: String::from("x"),
            }],
        };
        let actual = Order {
            id: 2,
            lines: vec![Line {
                id: 20,
                sku: String::from("x"),
            }],
        };

        assert_eq!(expect_mismatch(compare(&expected, &actual, &[])).fields(), ["id", "lines"]);
        assert!(compare(&expected, &actual, &["id"]).is_ok());
    }

    #[test]
    fn scenario() {
        let expected = person("name3", 3);
        let mut actual = person("name3", 3);
        assert!(compare(&expected, &actual, &[]).is_ok());

        actual.age = 4;
        let err = compare(&expected, &actual, &[]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "comparison failed. fields do not match for type Person: [\"age\"] \
             expected [{\n  \"name\": \"name3\",\n  \"age\": 3\n}] \
             but found [{\n  \"name\": \"name3\",\n  \"age\": 4\n}]"
        );
    }

    #[test]
    fn cycles_terminate() {
        let left = Rc::new(RefCell::new(Node {
            name: String::from("n"),
            next: None,
        }));
        let right = Rc::new(RefCell::new(Node {
            name: String::from("n"),
            next: None,
        }));
        left.borrow_mut().next = Some(Rc::clone(&left));
        right.borrow_mut().next = Some(Rc::clone(&right));

        assert!(compare(&left, &right, &[]).is_ok());

        right.borrow_mut().name = String::from("m");
        assert!(compare(&left, &right, &[]).is_err());

        left.borrow_mut().next = None;
        right.borrow_mut().next = None;
    }

    #[test]
    fn usage_errors() {
        assert_eq!(
            compare(&None::<u8>, &Some(1_u8), &[]),
            Err(CompareError::Usage(UsageError::NullArgument))
        );
        assert_eq!(
            compare(&1_u8, &1_u16, &[]),
            Err(CompareError::Usage(UsageError::TypeMismatch {
                expected: "u8",
                actual: "u16"
            }))
        );
    }

    #[test]
    fn option_reports_wrapped_type() {
        assert_eq!(
            compare(&Some(1_u8), &Some(1_u16), &[]),
            Err(CompareError::Usage(UsageError::TypeMismatch {
                expected: "u8",
                actual: "u16"
            }))
        );
    }

    #[cfg(feature = "std")]
    #[test]
    fn same_object_behind_locks() {
        use std::sync::{Arc, Mutex, RwLock};

        let shared = Arc::new(Mutex::new(4_u8));
        let counters = || Counters {
            count: Mutex::new(1),
            names: RwLock::new(vec![String::from("a")]),
            shared: Arc::clone(&shared),
        };
        let value = counters();
        let other = counters();

        assert_eq!(compare(&value, &value, &[]), Ok(()));
        assert_eq!(compare(&value, &other, &[]), Ok(()));
        assert_eq!(compare(&shared, &Arc::clone(&shared), &[]), Ok(()));

        *other.names.write().unwrap() = vec![String::from("b")];
        let mismatch = expect_mismatch(compare(&value, &other, &[]));
        assert_eq!(mismatch.fields(), ["names"]);

        let held = value.count.lock().unwrap();
        assert!(matches!(
            compare(&value, &other, &[]),
            Err(CompareError::Access(AccessError::Unreadable { .. }))
        ));
        drop(held);
    }

    #[test]
    fn unreadable_cell() {
        let expected = Holder {
            value: RefCell::new(1),
        };
        let actual = Holder {
            value: RefCell::new(1),
        };
        let _guard = actual.value.borrow_mut();
        assert_eq!(
            compare(&expected, &actual, &[]),
            Err(CompareError::Access(AccessError::Unreadable {
                type_path: "core::cell::RefCell<u8>"
            }))
        );
    }

    #[test]
    fn macro_forms() {
        let expected = person("a", 1);
        let actual = person("b", 1);
        crate::assert_same!(expected, actual, exclude = ["name"]);
        crate::assert_same!(expected, expected.clone());
    }

    #[test]
    #[should_panic(expected = "comparison failed. fields do not match for type Person: [\"age\"]")]
    fn macro_panics() {
        crate::assert_same!(person("a", 1), person("a", 2));
    }
}
