use alloc::collections::{BTreeMap, BTreeSet, BinaryHeap, LinkedList, VecDeque};
use alloc::vec::Vec;

use crate::impls::utils::{impl_inspect_map, impl_inspect_sequence};

impl_inspect_sequence!(Vec<T>);
impl_inspect_sequence!(VecDeque<T>);
impl_inspect_sequence!(LinkedList<T>);
impl_inspect_sequence!(BTreeSet<T>);
impl_inspect_sequence!(BinaryHeap<T> where T: Ord);

impl_inspect_map!(BTreeMap<K, V>);
