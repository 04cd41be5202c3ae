//! Join helpers built on a [`Lookup`] over the inner side.
//!
//! Both joins build a [`Lookup`] from the `inner` sequence keyed by
//! `inner_key`, then walk `outer` once in order and probe the lookup with
//! `outer_key` (probing never opens groups).
//!
//! ## Available operations
//! - [`join`] / [`join_by`] / [`join_with`] -- inner equi-join. Each outer element
//!   emits one row per matching inner element; unmatched outer elements emit
//!   nothing. Rows are outer-major, inner-minor, both in source order.
//! - [`group_join`] / [`group_join_by`] / [`group_join_with`] -- one row per outer
//!   element, paired with the full ordered slice of matching inner elements
//!   (the empty slice when nothing matches).
//!
//! The `*_by` forms take a key comparator (keys match on `Ordering::Equal`),
//! the `*_with` forms any [`KeyMatcher`]; the plain forms hash `Eq + Hash` keys.
//!
//! ## Example
//! ```
//! use lava::*;
//!
//! let people = vec!["Robbie", "Alex"];
//! let pets = vec![("Rex", "Robbie")];
//!
//! let rows = join(people.clone(), pets.clone(), |p| *p, |pet| pet.1, |p, pet| (*p, pet.0));
//! assert_eq!(rows, vec![("Robbie", "Rex")]);
//!
//! let owned = group_join(people, pets, |p| *p, |pet| pet.1, |p, pets| (p, pets.len()));
//! assert_eq!(owned, vec![("Robbie", 1), ("Alex", 0)]);
//! ```

use crate::collection::Sequence;
use crate::lookup::{CompareKeys, KeyMatcher, Lookup};
use std::cmp::Ordering;
use std::hash::Hash;
use tracing::trace;

fn probe_join<O, I, K, M, R, OI, OK, RF>(
    outer: OI,
    lookup: &Lookup<K, I, M>,
    mut outer_key: OK,
    mut result_fn: RF,
) -> Vec<R>
where
    M: KeyMatcher<K>,
    OI: IntoIterator<Item = O>,
    OK: FnMut(&O) -> K,
    RF: FnMut(&O, &I) -> R,
{
    let mut out = Vec::new();
    let mut outer_rows = 0usize;
    for o in outer {
        outer_rows += 1;
        if let Some(group) = lookup.get(&outer_key(&o)) {
            out.extend(group.iter().map(|i| result_fn(&o, i)));
        }
    }
    trace!(outer_rows, inner_keys = lookup.len(), rows = out.len(), "join");
    out
}

fn probe_group_join<O, I, K, M, R, OI, OK, RF>(
    outer: OI,
    lookup: &Lookup<K, I, M>,
    mut outer_key: OK,
    mut result_fn: RF,
) -> Vec<R>
where
    M: KeyMatcher<K>,
    OI: IntoIterator<Item = O>,
    OK: FnMut(&O) -> K,
    RF: FnMut(O, &[I]) -> R,
{
    let mut unmatched = 0usize;
    let out: Vec<R> = outer
        .into_iter()
        .map(|o| {
            let matched = lookup.values_for(&outer_key(&o));
            if matched.is_empty() {
                unmatched += 1;
            }
            result_fn(o, matched)
        })
        .collect();
    trace!(rows = out.len(), unmatched, inner_keys = lookup.len(), "group join");
    out
}

/// Inner equi-join on hashed keys; `result_fn(&outer, &inner)` per matching pair.
pub fn join<O, I, K, R, OI, II, OK, IK, RF>(
    outer: OI,
    inner: II,
    outer_key: OK,
    inner_key: IK,
    result_fn: RF,
) -> Vec<R>
where
    K: Eq + Hash,
    OI: IntoIterator<Item = O>,
    II: IntoIterator<Item = I>,
    OK: FnMut(&O) -> K,
    IK: FnMut(&I) -> K,
    RF: FnMut(&O, &I) -> R,
{
    let lookup = Lookup::build(inner, inner_key, |i| i);
    probe_join(outer, &lookup, outer_key, result_fn)
}

/// Inner equi-join where keys match when `cmp` returns [`Ordering::Equal`].
pub fn join_by<O, I, K, R, OI, II, OK, IK, RF, C>(
    outer: OI,
    inner: II,
    outer_key: OK,
    inner_key: IK,
    result_fn: RF,
    cmp: C,
) -> Vec<R>
where
    OI: IntoIterator<Item = O>,
    II: IntoIterator<Item = I>,
    OK: FnMut(&O) -> K,
    IK: FnMut(&I) -> K,
    RF: FnMut(&O, &I) -> R,
    C: Fn(&K, &K) -> Ordering,
{
    join_with(outer, inner, outer_key, inner_key, result_fn, CompareKeys(cmp))
}

/// Inner equi-join under an explicit [`KeyMatcher`].
pub fn join_with<O, I, K, R, OI, II, OK, IK, RF, M>(
    outer: OI,
    inner: II,
    outer_key: OK,
    inner_key: IK,
    result_fn: RF,
    matcher: M,
) -> Vec<R>
where
    OI: IntoIterator<Item = O>,
    II: IntoIterator<Item = I>,
    OK: FnMut(&O) -> K,
    IK: FnMut(&I) -> K,
    RF: FnMut(&O, &I) -> R,
    M: KeyMatcher<K>,
{
    let lookup = Lookup::build_with(inner, inner_key, |i| i, matcher);
    probe_join(outer, &lookup, outer_key, result_fn)
}

/// One `result_fn(outer, matched)` per outer element; `matched` is empty when
/// no inner element shares the key.
pub fn group_join<O, I, K, R, OI, II, OK, IK, RF>(
    outer: OI,
    inner: II,
    outer_key: OK,
    inner_key: IK,
    result_fn: RF,
) -> Vec<R>
where
    K: Eq + Hash,
    OI: IntoIterator<Item = O>,
    II: IntoIterator<Item = I>,
    OK: FnMut(&O) -> K,
    IK: FnMut(&I) -> K,
    RF: FnMut(O, &[I]) -> R,
{
    let lookup = Lookup::build(inner, inner_key, |i| i);
    probe_group_join(outer, &lookup, outer_key, result_fn)
}

/// Group join where keys match when `cmp` returns [`Ordering::Equal`].
pub fn group_join_by<O, I, K, R, OI, II, OK, IK, RF, C>(
    outer: OI,
    inner: II,
    outer_key: OK,
    inner_key: IK,
    result_fn: RF,
    cmp: C,
) -> Vec<R>
where
    OI: IntoIterator<Item = O>,
    II: IntoIterator<Item = I>,
    OK: FnMut(&O) -> K,
    IK: FnMut(&I) -> K,
    RF: FnMut(O, &[I]) -> R,
    C: Fn(&K, &K) -> Ordering,
{
    group_join_with(outer, inner, outer_key, inner_key, result_fn, CompareKeys(cmp))
}

/// Group join under an explicit [`KeyMatcher`].
pub fn group_join_with<O, I, K, R, OI, II, OK, IK, RF, M>(
    outer: OI,
    inner: II,
    outer_key: OK,
    inner_key: IK,
    result_fn: RF,
    matcher: M,
) -> Vec<R>
where
    OI: IntoIterator<Item = O>,
    II: IntoIterator<Item = I>,
    OK: FnMut(&O) -> K,
    IK: FnMut(&I) -> K,
    RF: FnMut(O, &[I]) -> R,
    M: KeyMatcher<K>,
{
    let lookup = Lookup::build_with(inner, inner_key, |i| i, matcher);
    probe_group_join(outer, &lookup, outer_key, result_fn)
}

impl<O> Sequence<O> {
    /// Inner join with `inner`.
    ///
    /// # Example
    /// ```
    /// use lava::*;
    ///
    /// let users = from_vec(vec![(1u32, "Alice"), (2, "Bob")]);
    /// let scores = vec![(1u32, 95u32), (2, 87), (3, 92), (1, 70)];
    ///
    /// let joined = users.join(scores, |u| u.0, |s| s.0, |u, s| (u.1, s.1));
    /// assert_eq!(joined.into_vec(), vec![("Alice", 95), ("Alice", 70), ("Bob", 87)]);
    /// ```
    pub fn join<I, K, R, II, OK, IK, RF>(
        self,
        inner: II,
        outer_key: OK,
        inner_key: IK,
        result_fn: RF,
    ) -> Sequence<R>
    where
        K: Eq + Hash,
        II: IntoIterator<Item = I>,
        OK: FnMut(&O) -> K,
        IK: FnMut(&I) -> K,
        RF: FnMut(&O, &I) -> R,
    {
        Sequence::list(join(self.items, inner, outer_key, inner_key, result_fn))
    }

    /// Inner join with `inner`, matching keys through `cmp`.
    pub fn join_by<I, K, R, II, OK, IK, RF, C>(
        self,
        inner: II,
        outer_key: OK,
        inner_key: IK,
        result_fn: RF,
        cmp: C,
    ) -> Sequence<R>
    where
        II: IntoIterator<Item = I>,
        OK: FnMut(&O) -> K,
        IK: FnMut(&I) -> K,
        RF: FnMut(&O, &I) -> R,
        C: Fn(&K, &K) -> Ordering,
    {
        Sequence::list(join_by(self.items, inner, outer_key, inner_key, result_fn, cmp))
    }

    /// One row per element, paired with its matches in `inner`.
    pub fn group_join<I, K, R, II, OK, IK, RF>(
        self,
        inner: II,
        outer_key: OK,
        inner_key: IK,
        result_fn: RF,
    ) -> Sequence<R>
    where
        K: Eq + Hash,
        II: IntoIterator<Item = I>,
        OK: FnMut(&O) -> K,
        IK: FnMut(&I) -> K,
        RF: FnMut(O, &[I]) -> R,
    {
        Sequence::list(group_join(self.items, inner, outer_key, inner_key, result_fn))
    }

    /// Group join with `inner`, matching keys through `cmp`.
    pub fn group_join_by<I, K, R, II, OK, IK, RF, C>(
        self,
        inner: II,
        outer_key: OK,
        inner_key: IK,
        result_fn: RF,
        cmp: C,
    ) -> Sequence<R>
    where
        II: IntoIterator<Item = I>,
        OK: FnMut(&O) -> K,
        IK: FnMut(&I) -> K,
        RF: FnMut(O, &[I]) -> R,
        C: Fn(&K, &K) -> Ordering,
    {
        Sequence::list(group_join_by(
            self.items, inner, outer_key, inner_key, result_fn, cmp,
        ))
    }
}
