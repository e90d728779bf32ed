use alloc::vec::Vec;
use core::ptr;

use foldhash::fast::FixedState;
use hashbrown::HashSet;

use super::{CompareError, Mismatch, UsageError};
use crate::access::{
    AccessError, Composite, HASH_STATE, Identity, Indirect, Pointee, PointeeRef, VisitedSet,
};
use crate::info::{Absent, simple_name};
use crate::snapshot::{to_snapshot, to_snapshot_pretty};
use crate::{Inspect, InspectRef};

/// Deep structural comparison with a set of excluded field names.
///
/// Excluded names apply to composite fields at every depth. A comparator can
/// be reused for several comparisons; each call starts from a clean state.
///
/// ```
/// use vc_inspect::Inspect;
/// use vc_inspect::compare::Comparator;
///
/// #[derive(Inspect)]
/// struct Line {
///     sku: String,
///     quantity: u32,
/// }
///
/// let expected = vec![Line { sku: "a".into(), quantity: 1 }, Line { sku: "b".into(), quantity: 2 }];
/// let actual = vec![Line { sku: "b".into(), quantity: 2 }, Line { sku: "a".into(), quantity: 9 }];
///
/// let mut comparator = Comparator::new(&[]);
/// assert!(comparator.compare(&expected, &actual).is_err());
///
/// let mut comparator = Comparator::new(&["quantity"]);
/// assert!(comparator.compare(&expected, &actual).is_ok());
/// ```
pub struct Comparator<'a> {
    excluded: HashSet<&'a str, FixedState>,
    in_progress: VisitedSet<(Identity, Identity)>,
}

impl<'a> Comparator<'a> {
    pub fn new(excluded: &[&'a str]) -> Self {
        let mut set = HashSet::with_capacity_and_hasher(excluded.len(), HASH_STATE);
        set.extend(excluded.iter().copied());
        Self {
            excluded: set,
            in_progress: VisitedSet::new(),
        }
    }

    /// Add `name` to the excluded field names.
    #[inline]
    pub fn exclude(mut self, name: &'a str) -> Self {
        self.excluded.insert(name);
        self
    }

    #[inline]
    pub fn is_excluded(&self, name: &str) -> bool {
        self.excluded.contains(name)
    }

    /// Compare `expected` with `actual`.
    ///
    /// Both must be non-null and of the same type, otherwise a
    /// [`UsageError`] is returned before anything is compared.
    pub fn compare(&mut self, expected: &dyn Inspect, actual: &dyn Inspect) -> Result<(), CompareError> {
        self.in_progress = VisitedSet::new();
        let result = check_arguments(expected, actual).and_then(|()| self.compare_values(expected, actual));
        if let Err(err) = &result {
            log::debug!("{err}");
        }
        result
    }

    fn compare_values(&mut self, expected: &dyn Inspect, actual: &dyn Inspect) -> Result<(), CompareError> {
        // One object seen from both sides. A lock on it cannot be taken twice.
        if expected.ty_id() == actual.ty_id() && same_target(expected.inspect_ref(), actual.inspect_ref()) {
            return Ok(());
        }
        if let InspectRef::Indirect(indirect) = expected.inspect_ref() {
            return match follow(indirect, expected)? {
                Some(target) => self.compare_values(&*target, actual),
                None => self.compare_values(&Absent, actual),
            };
        }
        if let InspectRef::Indirect(indirect) = actual.inspect_ref() {
            return match follow(indirect, actual)? {
                Some(target) => self.compare_values(expected, &*target),
                None => self.compare_values(expected, &Absent),
            };
        }

        match (expected.inspect_ref(), actual.inspect_ref()) {
            (InspectRef::Null, InspectRef::Null) => Ok(()),
            (InspectRef::Leaf(left), InspectRef::Leaf(right)) => {
                if expected.ty_id() == actual.ty_id() && left.same_value(&right) {
                    Ok(())
                } else {
                    Err(value_mismatch(expected, actual))
                }
            }
            (InspectRef::Composite(left), InspectRef::Composite(right)) => {
                self.compare_composites(left, right)
            }
            (left, right) => match (elements(left), elements(right)) {
                (Some(left), Some(right)) => self.compare_collections(left, right),
                _ => Err(value_mismatch(expected, actual)),
            },
        }
    }

    fn compare_collections(
        &mut self,
        expected: Vec<&dyn Inspect>,
        mut remaining: Vec<&dyn Inspect>,
    ) -> Result<(), CompareError> {
        if expected.len() != remaining.len() {
            return Err(Mismatch::Size {
                expected: expected.len(),
                actual: remaining.len(),
            }
            .into());
        }

        let (Some(first), Some(other)) = (expected.first(), remaining.first()) else {
            return Ok(());
        };
        let expected_type = simple_name(first.type_name());
        let actual_type = simple_name(other.type_name());
        if expected_type != actual_type {
            return Err(Mismatch::ElementType {
                expected: expected_type,
                actual: actual_type,
            }
            .into());
        }

        // Greedy pairing: the first remaining candidate that matches is
        // consumed, earlier choices are never revisited.
        for element in expected {
            let mut found = None;
            for (index, candidate) in remaining.iter().enumerate() {
                match self.compare_values(element, *candidate) {
                    Ok(()) => {
                        found = Some(index);
                        break;
                    }
                    Err(CompareError::Mismatch(_)) => {}
                    Err(err) => return Err(err),
                }
            }
            match found {
                Some(index) => {
                    remaining.remove(index);
                }
                None => {
                    return Err(Mismatch::MissingElement {
                        element: to_snapshot(element),
                    }
                    .into());
                }
            }
        }
        Ok(())
    }

    fn compare_composites(
        &mut self,
        expected: &dyn Composite,
        actual: &dyn Composite,
    ) -> Result<(), CompareError> {
        // A pair already on the stack is assumed equal.
        let pair = (Identity::of_composite(expected), Identity::of_composite(actual));
        if !self.in_progress.insert(pair) {
            return Ok(());
        }
        let result = self.compare_fields(expected, actual);
        self.in_progress.remove(&pair);
        result
    }

    fn compare_fields(&mut self, expected: &dyn Composite, actual: &dyn Composite) -> Result<(), CompareError> {
        let mut mismatched = Vec::new();
        for field in expected.iter_fields() {
            if self.is_excluded(field.name()) {
                continue;
            }
            let Some(other) = actual.field(field.name()) else {
                mismatched.push(field.name());
                continue;
            };
            match self.compare_values(field.value(), other) {
                Ok(()) => {}
                Err(CompareError::Mismatch(_)) => mismatched.push(field.name()),
                Err(err) => return Err(err),
            }
        }

        if mismatched.is_empty() {
            return Ok(());
        }
        Err(Mismatch::Fields {
            type_name: expected.composite_info().type_name(),
            fields: mismatched,
            expected: to_snapshot_pretty(expected),
            actual: to_snapshot_pretty(actual),
        }
        .into())
    }
}

fn check_arguments(expected: &dyn Inspect, actual: &dyn Inspect) -> Result<(), CompareError> {
    if expected.classify().is_null() || actual.classify().is_null() {
        return Err(UsageError::NullArgument.into());
    }
    if expected.ty_id() != actual.ty_id() {
        return Err(UsageError::TypeMismatch {
            expected: expected.type_name(),
            actual: actual.type_name(),
        }
        .into());
    }
    Ok(())
}

/// The target of an indirect value, `None` if it is dangling.
fn follow<'a>(indirect: &'a dyn Indirect, value: &dyn Inspect) -> Result<Option<PointeeRef<'a>>, CompareError> {
    match indirect.pointee() {
        Pointee::Value(target) => Ok(Some(target)),
        Pointee::Dangling => Ok(None),
        Pointee::Locked => Err(AccessError::Unreadable {
            type_path: value.type_name(),
        }
        .into()),
    }
}

/// `true` if both views borrow the same object. Null and leaves have no
/// identity here, they are compared by value.
fn same_target(expected: InspectRef<'_>, actual: InspectRef<'_>) -> bool {
    fn addr(view: InspectRef<'_>) -> Option<*const ()> {
        match view {
            InspectRef::Null | InspectRef::Leaf(_) => None,
            InspectRef::Sequence(value) | InspectRef::Array(value) => Some(ptr::from_ref(value).cast()),
            InspectRef::Associative(value) => Some(ptr::from_ref(value).cast()),
            InspectRef::Composite(value) => Some(ptr::from_ref(value).cast()),
            InspectRef::Indirect(value) => Some(ptr::from_ref(value).cast()),
        }
    }
    matches!((addr(expected), addr(actual)), (Some(left), Some(right)) if left == right)
}

/// Elements compared by a collection comparison, values for associative
/// containers.
fn elements(value: InspectRef<'_>) -> Option<Vec<&dyn Inspect>> {
    match value {
        InspectRef::Sequence(sequence) | InspectRef::Array(sequence) => Some(sequence.iter().collect()),
        InspectRef::Associative(map) => Some(map.values().collect()),
        _ => None,
    }
}

fn value_mismatch(expected: &dyn Inspect, actual: &dyn Inspect) -> CompareError {
    Mismatch::Value {
        expected: to_snapshot_pretty(expected),
        actual: to_snapshot_pretty(actual),
    }
    .into()
}
