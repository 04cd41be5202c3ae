//! Cardinality of the values in a group.

use super::CombineFn;
use std::collections::HashSet;
use std::hash::Hash;
use std::marker::PhantomData;

/// How many **different** values were seen; repeats count once.
#[derive(Clone, Copy, Debug, Default)]
pub struct DistinctCount<T>(pub PhantomData<T>);

impl<T> DistinctCount<T> {
    /// Same as `Default`.
    #[must_use]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T: Eq + Hash> CombineFn<T, HashSet<T>, u64> for DistinctCount<T> {
    fn create(&self) -> HashSet<T> {
        HashSet::new()
    }

    fn add_input(&self, seen: &mut HashSet<T>, v: T) {
        seen.insert(v);
    }

    fn finish(&self, seen: HashSet<T>) -> u64 {
        seen.len() as u64
    }
}
