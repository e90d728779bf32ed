use ::hashbrown::{HashMap, HashSet};

use crate::impls::utils::{impl_inspect_map, impl_inspect_sequence};

impl_inspect_sequence!(HashSet<T, S> where S: Default + 'static);

impl_inspect_map!(HashMap<K, V, S> where S: Default + 'static);
