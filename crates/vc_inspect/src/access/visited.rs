use core::any::TypeId;
use core::hash::Hash;

use foldhash::fast::FixedState;
use hashbrown::HashSet;

use crate::Inspect;
use crate::access::Composite;

pub(crate) const HASH_STATE: FixedState = FixedState::with_seed(0x95EE04C4F326B271);

/// Identity of a value: its address and type.
///
/// The type is part of the key because a struct and its first field can
/// share an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Identity {
    addr: usize,
    ty_id: TypeId,
}

impl Identity {
    #[inline]
    pub fn of(value: &dyn Inspect) -> Self {
        Self {
            addr: (value as *const dyn Inspect).cast::<()>().addr(),
            ty_id: value.ty_id(),
        }
    }

    #[inline]
    pub fn of_composite(value: &dyn Composite) -> Self {
        Self::of(value)
    }
}

/// A call-scoped set of values currently being traversed.
///
/// Keys are identities, never values. A traversal inserts a node before
/// descending into it and removes it when the subtree completes, so only
/// true ancestors are found in the set.
///
/// ```
/// use vc_inspect::access::{Identity, VisitedSet};
///
/// let value = 3_u8;
/// let mut visited = VisitedSet::new();
/// assert!(visited.insert(Identity::of(&value)));
/// assert!(!visited.insert(Identity::of(&value)));
/// assert!(visited.remove(&Identity::of(&value)));
/// assert!(visited.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct VisitedSet<K = Identity> {
    set: HashSet<K, FixedState>,
}

impl<K: Hash + Eq> VisitedSet<K> {
    #[inline]
    pub fn new() -> Self {
        Self {
            set: HashSet::with_hasher(HASH_STATE),
        }
    }

    /// Returns `false` if `key` was already present.
    #[inline]
    pub fn insert(&mut self, key: K) -> bool {
        self.set.insert(key)
    }

    #[inline]
    pub fn remove(&mut self, key: &K) -> bool {
        self.set.remove(key)
    }

    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.set.contains(key)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.set.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }
}

impl<K: Hash + Eq> Default for VisitedSet<K> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{Identity, VisitedSet};
    use crate::Inspect;
    use alloc::string::String;

    #[derive(Inspect)]
    struct Wrapper {
        inner: u32,
    }

    #[test]
    fn type_is_part_of_identity() {
        let wrapper = Wrapper { inner: 1 };
        let outer = Identity::of(&wrapper);
        let first = Identity::of(&wrapper.inner);
        assert_ne!(outer, first);
    }

    #[test]
    fn pairs_as_keys() {
        let a = String::from("a");
        let b = String::from("b");
        let mut visited = VisitedSet::new();
        assert!(visited.insert((Identity::of(&a), Identity::of(&b))));
        assert!(visited.contains(&(Identity::of(&a), Identity::of(&b))));
        assert!(!visited.contains(&(Identity::of(&b), Identity::of(&a))));
        assert_eq!(visited.len(), 1);
    }
}
