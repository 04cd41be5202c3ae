//! Grouping operators built on [`Lookup`].
//!
//! Every form runs a single pass over the source, building a [`Lookup`] and
//! then either returning its groups or reducing each group to one result.
//! Output is ordered by the first occurrence of each key, and every input
//! element lands in exactly one group.
//!
//! ## Available operations
//! - [`group_by`] -- groups of the source elements.
//! - [`group_by_select`] -- groups of projected values.
//! - [`group_by_result`] -- one result per key from `(key, elements)`.
//! - [`group_by_select_result`] -- one result per key from `(key, values)`.
//! - [`group_by_cmp`] -- groups under a caller comparator.
//! - [`group_by_with`] -- groups under any [`KeyMatcher`].
//! - [`group_by_combine`] -- one `(key, output)` per key through a [`CombineFn`].
//!
//! ## Example
//! ```
//! use lava::*;
//!
//! let names = vec!["Alex", "Todd", "Mark", "Dan"];
//! let groups = group_by(names, |n| n.len());
//!
//! assert_eq!(groups.len(), 2);
//! assert_eq!(*groups[0].key(), 4);
//! assert_eq!(groups[0].values(), &["Alex", "Todd", "Mark"]);
//! assert_eq!(groups[1].values(), &["Dan"]);
//! ```

use crate::collection::Sequence;
use crate::combiners::CombineFn;
use crate::lookup::{CompareKeys, Group, KeyMatcher, Lookup};
use std::cmp::Ordering;
use std::hash::Hash;

/// Group the source elements by `key_fn`.
pub fn group_by<T, K, I, KF>(source: I, key_fn: KF) -> Vec<Group<K, T>>
where
    K: Eq + Hash,
    I: IntoIterator<Item = T>,
    KF: FnMut(&T) -> K,
{
    Lookup::build(source, key_fn, |t| t).into_groups()
}

/// Group projected values by `key_fn`.
pub fn group_by_select<T, K, V, I, KF, VF>(source: I, key_fn: KF, value_fn: VF) -> Vec<Group<K, V>>
where
    K: Eq + Hash,
    I: IntoIterator<Item = T>,
    KF: FnMut(&T) -> K,
    VF: FnMut(T) -> V,
{
    Lookup::build(source, key_fn, value_fn).into_groups()
}

/// Reduce each group of source elements to one result.
///
/// ```
/// use lava::*;
///
/// let counts = group_by_result(vec!["a", "bb", "cc", "d"], |s| s.len(), |len, items| (len, items.len()));
/// assert_eq!(counts, vec![(1, 2), (2, 2)]);
/// ```
pub fn group_by_result<T, K, R, I, KF, RF>(source: I, key_fn: KF, result_fn: RF) -> Vec<R>
where
    K: Eq + Hash,
    I: IntoIterator<Item = T>,
    KF: FnMut(&T) -> K,
    RF: FnMut(K, Vec<T>) -> R,
{
    group_by_select_result(source, key_fn, |t| t, result_fn)
}

/// Reduce each group of projected values to one result.
pub fn group_by_select_result<T, K, V, R, I, KF, VF, RF>(
    source: I,
    key_fn: KF,
    value_fn: VF,
    mut result_fn: RF,
) -> Vec<R>
where
    K: Eq + Hash,
    I: IntoIterator<Item = T>,
    KF: FnMut(&T) -> K,
    VF: FnMut(T) -> V,
    RF: FnMut(K, Vec<V>) -> R,
{
    Lookup::build(source, key_fn, value_fn)
        .into_iter()
        .map(|group| {
            let (key, values) = group.into_parts();
            result_fn(key, values)
        })
        .collect()
}

/// Group the source elements under a comparator; keys match on [`Ordering::Equal`].
pub fn group_by_cmp<T, K, I, KF, C>(source: I, key_fn: KF, cmp: C) -> Vec<Group<K, T>>
where
    I: IntoIterator<Item = T>,
    KF: FnMut(&T) -> K,
    C: Fn(&K, &K) -> Ordering,
{
    group_by_with(source, key_fn, CompareKeys(cmp))
}

/// Group the source elements under an explicit [`KeyMatcher`].
pub fn group_by_with<T, K, I, KF, M>(source: I, key_fn: KF, matcher: M) -> Vec<Group<K, T>>
where
    I: IntoIterator<Item = T>,
    KF: FnMut(&T) -> K,
    M: KeyMatcher<K>,
{
    Lookup::build_with(source, key_fn, |t| t, matcher).into_groups()
}

/// Aggregate each group with a combiner, yielding `(key, output)` per key.
///
/// ```
/// use lava::*;
///
/// let sales = vec![("a", 100u64), ("b", 200), ("a", 150)];
/// let totals = group_by_combine(sales, |s| s.0, |s| s.1, Sum::<u64>::new());
/// assert_eq!(totals, vec![("a", 250), ("b", 200)]);
/// ```
pub fn group_by_combine<T, K, V, A, O, I, KF, VF, C>(
    source: I,
    key_fn: KF,
    value_fn: VF,
    comb: C,
) -> Vec<(K, O)>
where
    K: Eq + Hash,
    I: IntoIterator<Item = T>,
    KF: FnMut(&T) -> K,
    VF: FnMut(T) -> V,
    C: CombineFn<V, A, O>,
{
    group_by_select_result(source, key_fn, value_fn, |key, values| {
        (key, comb.apply(values))
    })
}

impl<T> Sequence<T> {
    /// Method form of [`group_by`](crate::group_by).
    pub fn group_by<K, KF>(self, key_fn: KF) -> Sequence<Group<K, T>>
    where
        K: Eq + Hash,
        KF: FnMut(&T) -> K,
    {
        Sequence::list(group_by(self.items, key_fn))
    }

    /// Method form of [`group_by_select`](crate::group_by_select).
    pub fn group_by_select<K, V, KF, VF>(self, key_fn: KF, value_fn: VF) -> Sequence<Group<K, V>>
    where
        K: Eq + Hash,
        KF: FnMut(&T) -> K,
        VF: FnMut(T) -> V,
    {
        Sequence::list(group_by_select(self.items, key_fn, value_fn))
    }

    /// Method form of [`group_by_result`](crate::group_by_result).
    pub fn group_by_result<K, R, KF, RF>(self, key_fn: KF, result_fn: RF) -> Sequence<R>
    where
        K: Eq + Hash,
        KF: FnMut(&T) -> K,
        RF: FnMut(K, Vec<T>) -> R,
    {
        Sequence::list(group_by_result(self.items, key_fn, result_fn))
    }

    /// Method form of [`group_by_select_result`](crate::group_by_select_result).
    pub fn group_by_select_result<K, V, R, KF, VF, RF>(
        self,
        key_fn: KF,
        value_fn: VF,
        result_fn: RF,
    ) -> Sequence<R>
    where
        K: Eq + Hash,
        KF: FnMut(&T) -> K,
        VF: FnMut(T) -> V,
        RF: FnMut(K, Vec<V>) -> R,
    {
        Sequence::list(group_by_select_result(self.items, key_fn, value_fn, result_fn))
    }

    /// Method form of [`group_by_cmp`](crate::group_by_cmp).
    pub fn group_by_cmp<K, KF, C>(self, key_fn: KF, cmp: C) -> Sequence<Group<K, T>>
    where
        KF: FnMut(&T) -> K,
        C: Fn(&K, &K) -> Ordering,
    {
        Sequence::list(group_by_cmp(self.items, key_fn, cmp))
    }

    /// Method form of [`group_by_combine`](crate::group_by_combine).
    pub fn group_by_combine<K, V, A, O, KF, VF, C>(
        self,
        key_fn: KF,
        value_fn: VF,
        comb: C,
    ) -> Sequence<(K, O)>
    where
        K: Eq + Hash,
        KF: FnMut(&T) -> K,
        VF: FnMut(T) -> V,
        C: CombineFn<V, A, O>,
    {
        Sequence::list(group_by_combine(self.items, key_fn, value_fn, comb))
    }

    /// Materialize the hash-indexed [`Lookup`] itself, for repeated probing.
    pub fn to_lookup<K, KF>(self, key_fn: KF) -> Lookup<K, T>
    where
        K: Eq + Hash,
        KF: FnMut(&T) -> K,
    {
        Lookup::build(self.items, key_fn, |t| t)
    }
}
