//! Keyed multi-map behind `group_by`, `join` and `group_join`.
//!
//! A [`Lookup`] is built in a single pass over a source sequence. Every element
//! is mapped to a key and a value; the value is appended to the [`Group`] for
//! that key, and a new group is opened at the end of the group list the first
//! time a key is seen. The result is therefore ordered by **first occurrence**
//! of each key, and the values inside a group keep source encounter order.
//!
//! How two keys are decided to be "the same" is a [`KeyMatcher`]:
//!
//! | Matcher            | Key bound            | Lookup cost per element |
//! |--------------------|----------------------|-------------------------|
//! | [`HashedKeys`]     | `Eq + Hash`          | O(1) amortized          |
//! | [`EqKeys`]         | `PartialEq`          | O(g), g = groups so far |
//! | [`CompareKeys`]    | any, via comparator  | O(g)                    |
//!
//! [`Lookup::build`] uses [`HashedKeys`]; [`Lookup::build_with`] takes any matcher.
//!
//! # Example
//! ```
//! use lava::lookup::{CompareKeys, Lookup};
//!
//! let words = vec!["Apple", "avocado", "Banana", "blueberry", "cherry"];
//!
//! // Hash-indexed grouping by first letter
//! let by_letter = Lookup::build(words.clone(), |w| w.chars().next(), |w| w);
//! assert_eq!(by_letter.len(), 5);
//!
//! // Case-insensitive grouping through a comparator
//! let folded = Lookup::build_with(
//!     words,
//!     |w| w[..1].to_string(),
//!     |w| w.len(),
//!     CompareKeys(|a: &String, b: &String| a.to_lowercase().cmp(&b.to_lowercase())),
//! );
//! assert_eq!(folded.len(), 3);
//! assert_eq!(folded.values_for(&"a".to_string()), &[5, 7]);
//! ```

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::collections::hash_map::RandomState;
use std::hash::{BuildHasher, Hash};
use tracing::trace;

/* ===================== Group<K, V> ===================== */

/// One key together with every value that mapped to it, in encounter order.
///
/// Groups are only appended to while their [`Lookup`] is being built; callers
/// get read-only access afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Group<K, V> {
    key: K,
    values: Vec<V>,
}

impl<K, V> Group<K, V> {
    pub(crate) const fn new(key: K) -> Self {
        Self {
            key,
            values: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, value: V) {
        self.values.push(value);
    }

    /// The key shared by every value in this group.
    pub const fn key(&self) -> &K {
        &self.key
    }

    /// Values in encounter order.
    pub fn values(&self) -> &[V] {
        &self.values
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// `true` for a group opened by `get_or_insert` and never pushed to.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate the values by reference.
    pub fn iter(&self) -> std::slice::Iter<'_, V> {
        self.values.iter()
    }

    /// Split the group into its key and owned values.
    pub fn into_parts(self) -> (K, Vec<V>) {
        (self.key, self.values)
    }
}

impl<K, V> IntoIterator for Group<K, V> {
    type Item = V;
    type IntoIter = std::vec::IntoIter<V>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a, K, V> IntoIterator for &'a Group<K, V> {
    type Item = &'a V;
    type IntoIter = std::slice::Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

/* ===================== Key matching ===================== */

/// Policy deciding which existing group (if any) a key belongs to.
///
/// `locate` is consulted for every element; `record` is called once for each
/// newly opened group so indexed matchers can remember its position.
pub trait KeyMatcher<K> {
    /// Position of the group whose key matches `key`.
    fn locate<V>(&self, groups: &[Group<K, V>], key: &K) -> Option<usize>;

    fn record(&mut self, _key: &K, _position: usize) {}
}

/// Value equality through `Eq + Hash`, indexed by hash.
///
/// Keys are never cloned: the index stores positions bucketed by hash and
/// resolves collisions against the group keys themselves.
#[derive(Clone, Debug, Default)]
pub struct HashedKeys {
    state: RandomState,
    buckets: HashMap<u64, Vec<usize>>,
}

impl<K: Eq + Hash> KeyMatcher<K> for HashedKeys {
    fn locate<V>(&self, groups: &[Group<K, V>], key: &K) -> Option<usize> {
        let hash = self.state.hash_one(key);
        self.buckets
            .get(&hash)?
            .iter()
            .copied()
            .find(|&pos| groups.get(pos).is_some_and(|g| g.key == *key))
    }

    fn record(&mut self, key: &K, position: usize) {
        let hash = self.state.hash_one(key);
        self.buckets.entry(hash).or_default().push(position);
    }
}

/// Value equality through `PartialEq` alone, for keys that cannot be hashed
/// (floats, for example). Scans the groups linearly.
#[derive(Clone, Copy, Debug, Default)]
pub struct EqKeys;

impl<K: PartialEq> KeyMatcher<K> for EqKeys {
    fn locate<V>(&self, groups: &[Group<K, V>], key: &K) -> Option<usize> {
        groups.iter().position(|g| g.key == *key)
    }
}

/// Caller-supplied comparator; keys match when it returns [`Ordering::Equal`].
/// Scans the groups linearly, so no hash function is required.
#[derive(Clone, Copy, Debug)]
pub struct CompareKeys<F>(pub F);

impl<K, F> KeyMatcher<K> for CompareKeys<F>
where
    F: Fn(&K, &K) -> Ordering,
{
    fn locate<V>(&self, groups: &[Group<K, V>], key: &K) -> Option<usize> {
        groups
            .iter()
            .position(|g| (self.0)(&g.key, key) == Ordering::Equal)
    }
}

/* ===================== Lookup<K, V, M> ===================== */

/// Ordered collection of [`Group`]s with at most one group per distinct key.
#[derive(Clone, Debug)]
pub struct Lookup<K, V, M = HashedKeys> {
    groups: Vec<Group<K, V>>,
    matcher: M,
}

impl<K: Eq + Hash, V> Lookup<K, V> {
    /// Build a hash-indexed lookup from `source`.
    pub fn build<S, I, KF, VF>(source: I, key_fn: KF, value_fn: VF) -> Self
    where
        I: IntoIterator<Item = S>,
        KF: FnMut(&S) -> K,
        VF: FnMut(S) -> V,
    {
        Self::build_with(source, key_fn, value_fn, HashedKeys::default())
    }
}

impl<K, V, M: KeyMatcher<K>> Lookup<K, V, M> {
    /// An empty lookup using `matcher`.
    pub const fn new(matcher: M) -> Self {
        Self {
            groups: Vec::new(),
            matcher,
        }
    }

    /// Build a lookup from `source` with an explicit key matcher.
    pub fn build_with<S, I, KF, VF>(source: I, mut key_fn: KF, mut value_fn: VF, matcher: M) -> Self
    where
        I: IntoIterator<Item = S>,
        KF: FnMut(&S) -> K,
        VF: FnMut(S) -> V,
    {
        let mut lookup = Self::new(matcher);
        let mut elements = 0usize;
        for item in source {
            let key = key_fn(&item);
            lookup.push(key, value_fn(item));
            elements += 1;
        }
        trace!(elements, groups = lookup.len(), "built lookup");
        lookup
    }

    /// Append `value` to the group for `key`, opening the group if needed.
    pub fn push(&mut self, key: K, value: V) {
        self.get_or_insert(key).push(value);
    }

    /// The group for `key`, if one exists.
    pub fn get(&self, key: &K) -> Option<&Group<K, V>> {
        self.matcher
            .locate(&self.groups, key)
            .map(|pos| &self.groups[pos])
    }

    /// The group for `key`, opened empty at the end of the group list if missing.
    pub fn get_or_insert(&mut self, key: K) -> &mut Group<K, V> {
        let pos = match self.matcher.locate(&self.groups, &key) {
            Some(pos) => pos,
            None => {
                let pos = self.groups.len();
                self.matcher.record(&key, pos);
                self.groups.push(Group::new(key));
                pos
            }
        };
        &mut self.groups[pos]
    }

    /// Values grouped under `key`; the empty slice when the key was never seen.
    pub fn values_for(&self, key: &K) -> &[V] {
        self.get(key).map_or(&[][..], Group::values)
    }

    /// `true` when a group exists for `key`.
    pub fn contains_key(&self, key: &K) -> bool {
        self.matcher.locate(&self.groups, key).is_some()
    }
}

impl<K, V, M> Lookup<K, V, M> {
    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// `true` when no key has been seen.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Borrow the groups in first-occurrence order.
    pub fn groups(&self) -> &[Group<K, V>] {
        &self.groups
    }

    /// Iterate the groups in first-occurrence order.
    pub fn iter(&self) -> std::slice::Iter<'_, Group<K, V>> {
        self.groups.iter()
    }

    /// Unwrap into the groups in first-occurrence order.
    pub fn into_groups(self) -> Vec<Group<K, V>> {
        self.groups
    }
}

impl<K, V, M> IntoIterator for Lookup<K, V, M> {
    type Item = Group<K, V>;
    type IntoIter = std::vec::IntoIter<Group<K, V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

impl<'a, K, V, M> IntoIterator for &'a Lookup<K, V, M> {
    type Item = &'a Group<K, V>;
    type IntoIter = std::slice::Iter<'a, Group<K, V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_follow_first_key_occurrence() {
        let lookup = Lookup::build(vec![3, 1, 4, 1, 5, 9, 2, 6], |n| n % 3, |n| n);
        let keys: Vec<_> = lookup.iter().map(|g| *g.key()).collect();
        assert_eq!(keys, vec![0, 1, 2]);
        assert_eq!(lookup.values_for(&0), &[3, 9, 6]);
        assert_eq!(lookup.values_for(&1), &[1, 4, 1]);
        assert_eq!(lookup.values_for(&2), &[5, 2]);
    }

    #[test]
    fn get_does_not_open_groups() {
        let lookup = Lookup::build(vec!["a", "bb"], |s| s.len(), |s| s);
        assert!(lookup.get(&7).is_none());
        assert!(!lookup.contains_key(&7));
        assert_eq!(lookup.values_for(&7), &[] as &[&str]);
        assert_eq!(lookup.len(), 2);
    }

    #[test]
    fn get_or_insert_appends_new_group_last() {
        let mut lookup: Lookup<&str, u32> = Lookup::build(vec![("x", 1)], |p| p.0, |p| p.1);
        assert!(lookup.get_or_insert("y").is_empty());
        lookup.push("x", 2);
        let keys: Vec<_> = lookup.iter().map(|g| *g.key()).collect();
        assert_eq!(keys, vec!["x", "y"]);
        assert_eq!(lookup.values_for(&"x"), &[1, 2]);
    }

    #[test]
    fn eq_keys_groups_unhashable_keys() {
        let readings = vec![(0.5_f64, "a"), (1.5, "b"), (0.5, "c")];
        let lookup = Lookup::build_with(readings, |r| r.0, |r| r.1, EqKeys);
        assert_eq!(lookup.len(), 2);
        assert_eq!(lookup.values_for(&0.5), &["a", "c"]);
    }

    #[test]
    fn comparator_decides_key_identity() {
        let lookup = Lookup::build_with(
            vec!["Rex", "rex", "Fido"],
            |s| s.to_string(),
            |s| s,
            CompareKeys(|a: &String, b: &String| a.to_lowercase().cmp(&b.to_lowercase())),
        );
        assert_eq!(lookup.len(), 2);
        // The first spelling seen becomes the group key.
        assert_eq!(lookup.groups()[0].key(), "Rex");
        assert_eq!(lookup.values_for(&"REX".to_string()), &["Rex", "rex"]);
    }

    #[test]
    fn stale_hash_positions_are_ignored() {
        let mut matcher = HashedKeys::default();
        KeyMatcher::<&str>::record(&mut matcher, &"x", 5);

        let mut lookup: Lookup<&str, i32> = Lookup::new(matcher);
        assert!(lookup.get(&"x").is_none());
        assert!(!lookup.contains_key(&"x"));

        lookup.push("x", 1);
        lookup.push("x", 2);
        assert_eq!(lookup.len(), 1);
        assert_eq!(lookup.values_for(&"x"), &[1, 2]);
    }

    #[test]
    fn group_iterates_in_encounter_order() {
        let lookup = Lookup::build(vec![10, 20, 30], |_| "all", |n| n * 2);
        let group = lookup.into_groups().remove(0);
        let borrowed: Vec<_> = (&group).into_iter().copied().collect();
        assert_eq!(borrowed, vec![20, 40, 60]);
        let (key, values) = group.into_parts();
        assert_eq!(key, "all");
        assert_eq!(values, vec![20, 40, 60]);
    }
}
