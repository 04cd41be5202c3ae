//! Assertion functions for testing operator outputs.
//!
//! Every function panics with the full expected/actual context so a failing
//! test shows what the operator actually produced.

use crate::lookup::Group;
use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

/// Assert that `actual` holds exactly `expected`, in the same order.
///
/// # Panics
///
/// Panics on a length difference or at the first differing position.
///
/// # Example
///
/// ```
/// use lava::testing::assert_collections_equal;
///
/// assert_collections_equal(&[1, 2, 3], &[1, 2, 3]);
/// ```
pub fn assert_collections_equal<T: Debug + PartialEq>(actual: &[T], expected: &[T]) {
    assert_same_len(actual, expected);

    if let Some(i) = actual.iter().zip(expected).position(|(a, e)| a != e) {
        panic!(
            "Collection mismatch at index {i}:\n  Expected: {:?}\n  Actual: {:?}\n  Full expected: {expected:?}\n  Full actual: {actual:?}",
            expected[i], actual[i]
        );
    }
}

/// Assert that `actual` and `expected` hold the same elements in any order.
///
/// Elements are compared as sets after the length check, so repeated elements
/// only need to match in total count.
///
/// # Panics
///
/// Panics on a length difference or when either side has elements the other lacks.
///
/// # Example
///
/// ```
/// use lava::testing::assert_collections_unordered_equal;
///
/// assert_collections_unordered_equal(&[3, 1, 2], &[1, 2, 3]);
/// ```
pub fn assert_collections_unordered_equal<T: Debug + Eq + Hash>(actual: &[T], expected: &[T]) {
    assert_same_len(actual, expected);

    let have: HashSet<&T> = actual.iter().collect();
    let want: HashSet<&T> = expected.iter().collect();
    let missing: Vec<_> = want.difference(&have).collect();
    let extra: Vec<_> = have.difference(&want).collect();
    assert!(
        missing.is_empty() && extra.is_empty(),
        "Collection content mismatch:\n  Missing elements: {missing:?}\n  Extra elements: {extra:?}\n  Expected: {expected:?}\n  Actual: {actual:?}"
    );
}

fn assert_same_len<T: Debug>(actual: &[T], expected: &[T]) {
    assert!(
        actual.len() == expected.len(),
        "Collection length mismatch: expected {}, got {}\n  Expected: {expected:?}\n  Actual: {actual:?}",
        expected.len(),
        actual.len()
    );
}

/// Assert that no element occurs twice.
///
/// # Panics
///
/// Panics naming the first repeated element and both positions.
pub fn assert_no_duplicates<T: Debug + Eq + Hash>(actual: &[T]) {
    let mut seen = HashMap::with_capacity(actual.len());
    for (i, item) in actual.iter().enumerate() {
        if let Some(first) = seen.insert(item, i) {
            panic!(
                "Duplicate element {item:?} at indices {first} and {i}\n  Actual: {actual:?}"
            );
        }
    }
}

/// Assert that groups match `(key, values)` pairs exactly, in order.
///
/// # Panics
///
/// Panics on a different number of groups, a key mismatch, or a value mismatch.
///
/// # Example
///
/// ```
/// use lava::*;
/// use lava::testing::assert_groups_equal;
///
/// let groups = group_by(vec![1, 2, 3, 4], |n| n % 2);
/// assert_groups_equal(&groups, &[(1, vec![1, 3]), (0, vec![2, 4])]);
/// ```
pub fn assert_groups_equal<K, V>(actual: &[Group<K, V>], expected: &[(K, Vec<V>)])
where
    K: Debug + PartialEq,
    V: Debug + PartialEq,
{
    assert_eq!(
        actual.len(),
        expected.len(),
        "Group count mismatch:\n  Expected: {expected:?}\n  Actual: {actual:?}"
    );

    for (i, (group, (key, values))) in actual.iter().zip(expected.iter()).enumerate() {
        assert!(
            group.key() == key,
            "Key mismatch at group {i}:\n  Expected key: {key:?}\n  Actual key: {:?}",
            group.key()
        );
        assert!(
            group.values() == values.as_slice(),
            "Values mismatch for key {key:?}:\n  Expected: {values:?}\n  Actual: {:?}",
            group.values()
        );
    }
}

/// Assert that grouping kept every source element: the group sizes sum to `source_len`.
///
/// # Panics
///
/// Panics when elements were lost or duplicated.
pub fn assert_counts_conserved<K: Debug, V: Debug>(groups: &[Group<K, V>], source_len: usize) {
    let total: usize = groups.iter().map(Group::len).sum();
    assert_eq!(
        total, source_len,
        "Grouped element count {total} differs from source length {source_len}\n  Groups: {groups:?}"
    );
}

/// Assert that all elements satisfy a predicate.
///
/// # Panics
///
/// Panics with the index of the first element that fails.
pub fn assert_all<T: Debug>(collection: &[T], predicate: impl Fn(&T) -> bool) {
    for (i, item) in collection.iter().enumerate() {
        assert!(
            predicate(item),
            "Element at index {i} does not satisfy predicate: {item:?}\n  Full collection: {collection:?}"
        );
    }
}
