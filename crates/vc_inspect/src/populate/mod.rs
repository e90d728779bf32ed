//! Deterministic fixture population.
//!
//! ## Menu
//!
//! - [`Populator`]: fills composites from a seed, owns the random source.
//! - [`Options`]: per-call overrides and ignored fields.
//! - [`OverrideAction`], [`FixedValue`]: the override set.
//! - [`populate`], [`populate_with`], [`populate_many`]: shortcuts using an
//!   entropy-seeded populator (feature `std`).
//!
//! ## Default rules
//!
//! Each non-ignored field without an override takes the rule of its type,
//! see [`crate::impls`]. Strings become `<field><seed>`, integers the
//! seed, booleans `seed is even`, characters `'A' + seed % 26`, containers a
//! fresh empty value. Other composites are left untouched.

// -----------------------------------------------------------------------------
// Modules

mod options;
mod populator;

// -----------------------------------------------------------------------------
// Exports

pub use options::{FixedValue, Options, OverrideAction};
pub use populator::Populator;

#[cfg(feature = "std")]
use crate::access::{AccessError, Composite};

/// Populate `instance` for `seed` with default rules only.
#[cfg(feature = "std")]
#[inline]
pub fn populate<T: Composite>(instance: &mut T, seed: usize) -> Result<&mut T, AccessError> {
    populate_with(instance, seed, &Options::new())
}

#[cfg(feature = "std")]
#[inline]
pub fn populate_with<'t, T: Composite>(
    instance: &'t mut T,
    seed: usize,
    options: &Options,
) -> Result<&'t mut T, AccessError> {
    Populator::new().populate(instance, seed, options)
}

/// Build `size` populated default instances, seeds `0..size`.
#[cfg(feature = "std")]
#[inline]
pub fn populate_many<T, C>(size: usize, options: &Options) -> Result<C, AccessError>
where
    T: Composite + Default,
    C: FromIterator<T>,
{
    Populator::new().populate_many(size, options)
}

#[cfg(test)]
mod tests {
    use super::{Options, Populator};
    use crate::Inspect;
    use crate::access::{AccessError, Composite, Typed};
    use crate::compare::compare;
    use alloc::boxed::Box;
    use alloc::collections::{BTreeMap, BTreeSet};
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    #[derive(Inspect, Default, Debug)]
    #[inspect(default)]
    struct Sample {
        key: Option<i32>,
        name: String,
        age: i32,
        is_man: bool,
        small: i8,
        short: i16,
        tall: Option<i64>,
        ratio: f32,
        weight: f64,
        letter: char,
        list: Vec<String>,
        set: BTreeSet<String>,
        map: BTreeMap<String, i32>,
        inner: Inner,
    }

    #[derive(Inspect, Default, Debug)]
    struct Inner {
        label: String,
    }

    #[derive(Inspect, Default)]
    struct Person {
        name: String,
        age: u32,
    }

    fn sample() -> Sample {
        Sample {
            list: vec![String::from("stale")],
            inner: Inner {
                label: String::from("kept"),
            },
            ..Sample::default()
        }
    }

    #[test]
    fn default_rules() {
        let mut value = sample();
        Populator::seeded(0)
            .populate(&mut value, 7, &Options::new())
            .unwrap();

        assert_eq!(value.key, Some(7));
        assert_eq!(value.name, "name7");
        assert_eq!(value.age, 7);
        assert!(!value.is_man);
        assert_eq!(value.small, 7);
        assert_eq!(value.short, 7);
        assert_eq!(value.tall, Some(7));
        assert_eq!(value.ratio, 7.0);
        assert_eq!(value.weight, 7.0);
        assert_eq!(value.letter, 'H');
        assert!(value.list.is_empty());
        assert!(value.set.is_empty());
        assert!(value.map.is_empty());
        assert_eq!(value.inner.label, "kept");
    }

    #[test]
    fn narrowing_wraps() {
        let mut value = sample();
        Populator::seeded(0)
            .populate(&mut value, 300, &Options::new())
            .unwrap();
        assert_eq!(value.small, 44);
        assert_eq!(value.short, 300);
        assert_eq!(value.letter, 'O');
        assert!(value.is_man);
    }

    #[test]
    fn overrides() {
        let options = Options::new()
            .rename("name", "newName")
            .assign_value("age", 42_i32)
            .assign_value("small", 10_i8)
            .assign_value("short", 1000_i16)
            .assign_null(["tall"])
            .ignore_fields(["key"]);

        let mut value = sample();
        value.tall = Some(2);
        Populator::seeded(0).populate(&mut value, 1, &options).unwrap();

        assert_eq!(value.key, None);
        assert_eq!(value.name, "newName1");
        assert_eq!(value.age, 42);
        assert!(!value.is_man);
        assert_eq!(value.small, 10);
        assert_eq!(value.short, 1000);
        assert_eq!(value.tall, None);
    }

    #[test]
    fn ignored_fields_keep_their_value() {
        let mut value = sample();
        value.key = Some(99);
        value.name = String::from("before");
        let options = Options::new().ignore_fields(["key", "name"]);
        Populator::seeded(0).populate(&mut value, 3, &options).unwrap();

        assert_eq!(value.key, Some(99));
        assert_eq!(value.name, "before");
        assert_eq!(value.age, 3);
    }

    #[test]
    fn one_of_picks_a_choice() {
        let options = Options::new().assign_one_of("age", [1_i32, 2, 3]);
        let mut first = Populator::seeded(5);
        let mut second = Populator::seeded(5);

        for seed in 0..20 {
            let mut a = sample();
            let mut b = sample();
            first.populate(&mut a, seed, &options).unwrap();
            second.populate(&mut b, seed, &options).unwrap();
            assert!([1, 2, 3].contains(&a.age));
            assert_eq!(a.age, b.age);
        }
    }

    #[test]
    fn override_errors() {
        let mut value = sample();
        let options = Options::new().assign_null(["age"]);
        let err = Populator::seeded(0)
            .populate(&mut value, 1, &options)
            .unwrap_err();
        assert_eq!(
            err,
            AccessError::NotNullable {
                field: String::from("age"),
                expected: "i32",
            }
        );

        let options = Options::new().assign_value("name", 3_u8);
        let err = Populator::seeded(0)
            .populate(&mut value, 1, &options)
            .unwrap_err();
        assert!(matches!(err, AccessError::IncompatibleValue { found: "u8", .. }));
    }

    #[test]
    fn many() {
        let people: Vec<Person> = Populator::seeded(0)
            .populate_many(3, &Options::new())
            .unwrap();
        let names: Vec<_> = people.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["name0", "name1", "name2"]);
        assert_eq!(people[2].age, 2);
    }

    #[test]
    fn instantiate() {
        let mut populator = Populator::seeded(0);
        let options = Options::new().ignore_fields(["inner"]);

        let samples = populator
            .instantiate_many(&Sample::type_info(), 2, &options)
            .unwrap();
        assert_eq!(samples.len(), 2);
        let second = samples[1].as_deref().unwrap();
        assert_eq!(second.downcast_ref::<Sample>().unwrap().name, "name1");

        let people = populator
            .instantiate_many(&Person::type_info(), 2, &options)
            .unwrap();
        assert!(people.iter().all(Option::is_none));
    }

    #[test]
    fn scenario() {
        let mut populator = Populator::seeded(0);
        let mut expected = Person::default();
        let mut actual = Person::default();
        populator.populate(&mut expected, 3, &Options::new()).unwrap();
        populator.populate(&mut actual, 3, &Options::new()).unwrap();

        assert_eq!(expected.name, "name3");
        assert_eq!(expected.age, 3);
        assert!(compare(&expected, &actual, &[]).is_ok());

        actual.age = 4;
        let err = compare(&expected, &actual, &[]).unwrap_err();
        assert!(matches!(err, crate::compare::CompareError::Mismatch(m) if m.fields() == ["age"]));
    }

    #[test]
    fn populate_returns_the_instance() {
        let mut populator = Populator::seeded(0);
        let renamed = Options::new().rename("name", "agent");
        let mut person = Person::default();

        let populated = populator
            .populate(&mut person, 1, &Options::new())
            .and_then(|person| populator.populate(person, 2, &renamed))
            .unwrap();
        populated.age += 10;

        assert_eq!(person.name, "agent2");
        assert_eq!(person.age, 12);

        let mut boxed: Box<dyn Inspect> = Box::new(Person::default());
        let composite = boxed.as_composite_mut().unwrap();
        let name = Populator::seeded(0)
            .populate_dyn(composite, 4, &Options::new())
            .unwrap()
            .field("name")
            .and_then(|name| name.downcast_ref::<String>())
            .cloned();
        assert_eq!(name.as_deref(), Some("name4"));
    }

    #[test]
    fn boxed_composite() {
        let mut boxed: Box<dyn Inspect> = Box::new(Person::default());
        let composite = boxed.as_composite_mut().unwrap();
        Populator::seeded(0)
            .populate_dyn(composite, 5, &Options::new())
            .unwrap();
        assert_eq!(boxed.downcast_ref::<Person>().unwrap().age, 5);
    }

    #[cfg(feature = "std")]
    #[test]
    fn free_functions() {
        let mut person = Person::default();
        super::populate(&mut person, 2).unwrap();
        assert_eq!(person.name, "name2");

        let options = Options::new().assign_one_of("name", [String::from("x")]);
        super::populate_with(&mut person, 2, &options).unwrap();
        assert_eq!(person.name, "x");

        let people: Vec<Person> = super::populate_many(2, &Options::new()).unwrap();
        assert_eq!(people[1].age, 1);
    }
}
