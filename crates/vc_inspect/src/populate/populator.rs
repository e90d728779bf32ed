use alloc::boxed::Box;
use alloc::format;
use alloc::string::ToString;
use alloc::vec::Vec;

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{RngCore, SeedableRng};

use super::{OverrideAction, Options};
use crate::Inspect;
use crate::access::{AccessError, Composite, assign_to, create_instance};
use crate::info::CompositeInfo;

/// Fills composite values with seed-derived data.
///
/// The populator owns the random source used by
/// [`OverrideAction::AssignOneOf`]; every other rule only depends on the seed
/// and the field name.
///
/// ```
/// use vc_inspect::Inspect;
/// use vc_inspect::populate::{Options, Populator};
///
/// #[derive(Inspect, Default)]
/// struct Person {
///     name: String,
///     age: u32,
///     active: bool,
/// }
///
/// let mut populator = Populator::seeded(0);
/// let people: Vec<Person> = populator.populate_many(2, &Options::new()).unwrap();
///
/// assert_eq!(people[1].name, "name1");
/// assert_eq!(people[1].age, 1);
/// assert!(people[0].active);
/// ```
pub struct Populator<R = SmallRng> {
    rng: R,
}

impl Populator<SmallRng> {
    /// A populator whose random choices are reproducible.
    #[inline]
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(SmallRng::seed_from_u64(seed))
    }

    /// A populator seeded from the operating system.
    #[cfg(feature = "std")]
    #[inline]
    pub fn new() -> Self {
        Self::with_rng(SmallRng::from_entropy())
    }
}

#[cfg(feature = "std")]
impl Default for Populator<SmallRng> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore> Populator<R> {
    #[inline]
    pub const fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    #[inline]
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Populate every field of `instance` for `seed` and return it.
    ///
    /// Ignored fields keep their value. Nested composites are not
    /// descended into.
    #[inline]
    pub fn populate<'t, T: Composite>(
        &mut self,
        instance: &'t mut T,
        seed: usize,
        options: &Options,
    ) -> Result<&'t mut T, AccessError> {
        self.populate_dyn(instance, seed, options)?;
        Ok(instance)
    }

    /// Untyped counterpart of [`Populator::populate`].
    pub fn populate_dyn<'t>(
        &mut self,
        instance: &'t mut dyn Composite,
        seed: usize,
        options: &Options,
    ) -> Result<&'t mut dyn Composite, AccessError> {
        let type_path = instance.type_name();
        for index in 0..instance.field_len() {
            let Some(name) = instance.name_at(index) else {
                continue;
            };
            if options.is_ignored(name) {
                continue;
            }
            let slot = instance
                .field_at_mut(index)
                .ok_or(AccessError::ForeignDescriptor {
                    type_path,
                    field: name,
                })?;
            match options.action(name) {
                Some(action) => self.apply(action, slot, name, seed)?,
                None => {
                    slot.populate_default(name, seed);
                }
            }
        }
        Ok(instance)
    }

    /// Build `size` default instances populated with seeds `0..size`.
    pub fn populate_many<T, C>(&mut self, size: usize, options: &Options) -> Result<C, AccessError>
    where
        T: Composite + Default,
        C: FromIterator<T>,
    {
        (0..size)
            .map(|seed| {
                let mut instance = T::default();
                self.populate(&mut instance, seed, options)?;
                Ok(instance)
            })
            .collect()
    }

    /// Build `size` populated instances of the described type.
    ///
    /// Entries are `None` if the type has no constructor.
    pub fn instantiate_many(
        &mut self,
        info: &CompositeInfo,
        size: usize,
        options: &Options,
    ) -> Result<Vec<Option<Box<dyn Inspect>>>, AccessError> {
        let mut instances = Vec::with_capacity(size);
        for seed in 0..size {
            let Some(mut instance) = create_instance(info) else {
                instances.push(None);
                continue;
            };
            let composite = instance
                .as_composite_mut()
                .ok_or(AccessError::NotComposite {
                    type_path: info.type_path(),
                })?;
            self.populate_dyn(composite, seed, options)?;
            instances.push(Some(instance));
        }
        Ok(instances)
    }

    fn apply(
        &mut self,
        action: &OverrideAction,
        slot: &mut dyn Inspect,
        field: &str,
        seed: usize,
    ) -> Result<(), AccessError> {
        log::trace!("field `{field}`: {action:?}");
        match action {
            OverrideAction::AssignValue(value) => assign_to(slot, field, value.make()),
            OverrideAction::AssignOneOf(choices) => match choices.choose(&mut self.rng) {
                Some(choice) => assign_to(slot, field, choice.make()),
                None => Ok(()),
            },
            OverrideAction::AssignNull => {
                if slot.assign_null() {
                    Ok(())
                } else {
                    Err(AccessError::NotNullable {
                        field: field.to_string(),
                        expected: slot.type_name(),
                    })
                }
            }
            OverrideAction::Rename(template) => {
                assign_to(slot, field, Box::new(format!("{template}{seed}")))
            }
        }
    }
}
