use std::collections::{HashMap, HashSet};

use crate::impls::utils::{impl_inspect_map, impl_inspect_sequence};

impl_inspect_sequence!(HashSet<T, S> where S: Default + 'static);

impl_inspect_map!(HashMap<K, V, S> where S: Default + 'static);

#[cfg(test)]
mod tests {
    use crate::Inspect;
    use crate::access::{Associative, Sequence};
    use crate::info::Classification;
    use std::collections::{HashMap, HashSet};

    #[test]
    fn hashed_containers() {
        let set = HashSet::from([1_u8, 2, 3]);
        assert_eq!(set.classify(), Classification::Sequence);
        assert_eq!(Sequence::len(&set), 3);

        let mut map = HashMap::from([(1_u8, 2_u8)]);
        assert_eq!(map.classify(), Classification::Associative);
        assert_eq!(Associative::len(&map), 1);

        assert!(map.populate_default("map", 0));
        assert!(map.is_empty());
    }
}
