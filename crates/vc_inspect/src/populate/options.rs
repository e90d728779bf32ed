use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use foldhash::fast::FixedState;
use hashbrown::{HashMap, HashSet};

use crate::Inspect;
use crate::access::HASH_STATE;

// -----------------------------------------------------------------------------
// FixedValue

/// A value assigned by an override, cloned for every instance it is written
/// into.
pub struct FixedValue {
    make: Box<dyn Fn() -> Box<dyn Inspect>>,
    type_name: &'static str,
}

impl FixedValue {
    pub fn new<V: Inspect + Clone>(value: V) -> Self {
        Self {
            make: Box::new(move || Box::new(value.clone())),
            type_name: core::any::type_name::<V>(),
        }
    }

    /// A fresh copy of the value.
    #[inline]
    pub fn make(&self) -> Box<dyn Inspect> {
        (self.make)()
    }

    #[inline]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl fmt::Debug for FixedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.make())
    }
}

// -----------------------------------------------------------------------------
// OverrideAction

/// What the populator does with a field instead of its default rule.
#[derive(Debug)]
pub enum OverrideAction {
    /// Assign a copy of a fixed value.
    AssignValue(FixedValue),
    /// Assign one of the choices, picked uniformly at random.
    AssignOneOf(Vec<FixedValue>),
    /// Set the field to null.
    AssignNull,
    /// Assign the template followed by the seed.
    Rename(String),
}

// -----------------------------------------------------------------------------
// Options

/// Per-call population options: overrides by field name and ignored fields.
///
/// A later override for the same field replaces the earlier one.
///
/// ```
/// use vc_inspect::populate::{OverrideAction, Options};
///
/// let options = Options::new()
///     .rename("name", "user")
///     .assign_value("age", 42_u32)
///     .assign_null(["nickname"])
///     .ignore_fields(["id"]);
///
/// assert!(options.is_ignored("id"));
/// assert!(matches!(options.action("nickname"), Some(OverrideAction::AssignNull)));
/// assert!(options.action("id").is_none());
/// ```
#[derive(Debug)]
pub struct Options {
    actions: HashMap<String, OverrideAction, FixedState>,
    ignored: HashSet<String, FixedState>,
}

impl Options {
    #[inline]
    pub fn new() -> Self {
        Self {
            actions: HashMap::with_hasher(HASH_STATE),
            ignored: HashSet::with_hasher(HASH_STATE),
        }
    }

    /// Bind `action` to `field`.
    pub fn with_action(mut self, field: impl Into<String>, action: OverrideAction) -> Self {
        self.actions.insert(field.into(), action);
        self
    }

    /// Populate `field` with `template` followed by the seed.
    #[inline]
    pub fn rename(self, field: impl Into<String>, template: impl Into<String>) -> Self {
        self.with_action(field, OverrideAction::Rename(template.into()))
    }

    #[inline]
    pub fn assign_value<V: Inspect + Clone>(self, field: impl Into<String>, value: V) -> Self {
        self.with_action(field, OverrideAction::AssignValue(FixedValue::new(value)))
    }

    /// Populate `field` with a value picked at random from `choices`.
    ///
    /// # Panics
    ///
    /// Panics if `choices` is empty.
    #[track_caller]
    pub fn assign_one_of<V: Inspect + Clone>(
        self,
        field: impl Into<String>,
        choices: impl IntoIterator<Item = V>,
    ) -> Self {
        let choices: Vec<_> = choices.into_iter().map(FixedValue::new).collect();
        assert!(!choices.is_empty(), "`assign_one_of` needs at least one choice");
        self.with_action(field, OverrideAction::AssignOneOf(choices))
    }

    pub fn assign_null<I>(mut self, fields: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        for field in fields {
            self.actions.insert(field.into(), OverrideAction::AssignNull);
        }
        self
    }

    /// Leave `fields` untouched.
    pub fn ignore_fields<I>(mut self, fields: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.ignored.extend(fields.into_iter().map(Into::into));
        self
    }

    #[inline]
    pub fn is_ignored(&self, field: &str) -> bool {
        self.ignored.contains(field)
    }

    #[inline]
    pub fn action(&self, field: &str) -> Option<&OverrideAction> {
        self.actions.get(field)
    }
}

impl Default for Options {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
