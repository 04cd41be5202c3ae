//! Set algebra: `distinct`, `union`, `intersect`, `except`.
//!
//! Every operator is order preserving and uses hash-based membership, so each
//! runs in O(n + m). The `*_by_key` variants compare elements through a key
//! projection instead of the element's own `Eq + Hash`; that projection is how
//! a custom equality is expressed.
//!
//! ## Duplicates
//! - [`distinct`], [`union`] and [`intersect`] never emit an element twice.
//! - [`except`] keeps repeated elements of its left operand, so
//!   `except([1, 1, 2, 3], [2]) == [1, 1, 3]` while
//!   `intersect([1, 1, 2], [1]) == [1]`.
//!
//! ## Example
//! ```
//! use lava::*;
//!
//! assert_eq!(distinct(vec![3, 1, 3, 2, 1]), vec![3, 1, 2]);
//! assert_eq!(union(vec![1, 2], vec![2, 3]), vec![1, 2, 3]);
//! assert_eq!(intersect(vec![1, 2, 2, 3], vec![2, 3, 3, 4]), vec![2, 3]);
//! assert_eq!(except(vec![1, 1, 2, 3], vec![2]), vec![1, 1, 3]);
//! ```

use crate::collection::Sequence;
use std::collections::HashSet;
use std::hash::Hash;
use tracing::trace;

fn retain_marked<T>(items: Vec<T>, keep: &[bool]) -> Vec<T> {
    items
        .into_iter()
        .zip(keep)
        .filter_map(|(t, &k)| k.then_some(t))
        .collect()
}

/// Remove repeated elements, keeping the first occurrence of each.
pub fn distinct<T, I>(source: I) -> Vec<T>
where
    T: Eq + Hash,
    I: IntoIterator<Item = T>,
{
    let items: Vec<T> = source.into_iter().collect();
    let keep: Vec<bool> = {
        let mut seen = HashSet::with_capacity(items.len());
        items.iter().map(|t| seen.insert(t)).collect()
    };
    let input = items.len();
    let out = retain_marked(items, &keep);
    trace!(op = "distinct", input, output = out.len(), "set operator");
    out
}

/// Remove elements whose key was already produced by an earlier element.
pub fn distinct_by_key<T, K, I, F>(source: I, mut key_fn: F) -> Vec<T>
where
    K: Eq + Hash,
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> K,
{
    let mut seen = HashSet::new();
    source
        .into_iter()
        .filter(|t| seen.insert(key_fn(t)))
        .collect()
}

/// Elements of `first` then `second`, each distinct value once: `distinct(first ++ second)`.
pub fn union<T, A, B>(first: A, second: B) -> Vec<T>
where
    T: Eq + Hash,
    A: IntoIterator<Item = T>,
    B: IntoIterator<Item = T>,
{
    distinct(first.into_iter().chain(second))
}

/// Elements of `first` then `second`, one per distinct key.
pub fn union_by_key<T, K, A, B, F>(first: A, second: B, key_fn: F) -> Vec<T>
where
    K: Eq + Hash,
    A: IntoIterator<Item = T>,
    B: IntoIterator<Item = T>,
    F: FnMut(&T) -> K,
{
    distinct_by_key(first.into_iter().chain(second), key_fn)
}

/// Distinct elements of `first` that also occur in `second`, in `first`'s order.
pub fn intersect<T, A, B>(first: A, second: B) -> Vec<T>
where
    T: Eq + Hash,
    A: IntoIterator<Item = T>,
    B: IntoIterator<Item = T>,
{
    let right: Vec<T> = second.into_iter().collect();
    let members: HashSet<&T> = right.iter().collect();
    let items: Vec<T> = first.into_iter().collect();
    let keep: Vec<bool> = {
        let mut emitted = HashSet::with_capacity(members.len());
        items
            .iter()
            .map(|t| members.contains(t) && emitted.insert(t))
            .collect()
    };
    let input = items.len();
    let out = retain_marked(items, &keep);
    trace!(op = "intersect", input, output = out.len(), "set operator");
    out
}

/// Elements of `first` whose key occurs in `second`, one per key.
pub fn intersect_by_key<T, K, A, B, F>(first: A, second: B, mut key_fn: F) -> Vec<T>
where
    K: Eq + Hash,
    A: IntoIterator<Item = T>,
    B: IntoIterator<Item = T>,
    F: FnMut(&T) -> K,
{
    let members: HashSet<K> = second.into_iter().map(|t| key_fn(&t)).collect();
    let mut emitted = HashSet::with_capacity(members.len());
    first
        .into_iter()
        .filter(|t| {
            let key = key_fn(t);
            members.contains(&key) && emitted.insert(key)
        })
        .collect()
}

/// Elements of `first` absent from `second`, in `first`'s order. Repeats in
/// `first` are kept (see the module docs).
pub fn except<T, A, B>(first: A, second: B) -> Vec<T>
where
    T: Eq + Hash,
    A: IntoIterator<Item = T>,
    B: IntoIterator<Item = T>,
{
    let right: Vec<T> = second.into_iter().collect();
    let members: HashSet<&T> = right.iter().collect();
    let out: Vec<T> = first
        .into_iter()
        .filter(|t| !members.contains(t))
        .collect();
    trace!(op = "except", excluded = members.len(), output = out.len(), "set operator");
    out
}

/// Elements of `first` whose key does not occur in `second`; repeats are kept.
pub fn except_by_key<T, K, A, B, F>(first: A, second: B, mut key_fn: F) -> Vec<T>
where
    K: Eq + Hash,
    A: IntoIterator<Item = T>,
    B: IntoIterator<Item = T>,
    F: FnMut(&T) -> K,
{
    let members: HashSet<K> = second.into_iter().map(|t| key_fn(&t)).collect();
    first
        .into_iter()
        .filter(|t| !members.contains(&key_fn(t)))
        .collect()
}

impl<T: Eq + Hash> Sequence<T> {
    /// Exact distinct, first occurrences in order.
    ///
    /// # Example
    /// ```
    /// use lava::*;
    /// let out = from_vec(vec![1, 1, 2, 3, 3, 3]).distinct();
    /// assert_eq!(out.into_vec(), vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn distinct(self) -> Self {
        let shape = self.shape;
        Self {
            items: distinct(self.items),
            shape,
        }
    }

    /// Append `other` and drop repeats.
    #[must_use]
    pub fn union<I>(self, other: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let shape = self.shape;
        Self {
            items: union(self.items, other),
            shape,
        }
    }

    /// Keep the distinct elements also present in `other`.
    #[must_use]
    pub fn intersect<I>(self, other: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let shape = self.shape;
        Self {
            items: intersect(self.items, other),
            shape,
        }
    }

    /// Elements not in `other`; repeated elements of `self` are kept.
    #[must_use]
    pub fn except<I>(self, other: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let shape = self.shape;
        Self {
            items: except(self.items, other),
            shape,
        }
    }
}

impl<T> Sequence<T> {
    /// Keep the first element for each projected key.
    #[must_use]
    pub fn distinct_by_key<K, F>(self, key_fn: F) -> Self
    where
        K: Eq + Hash,
        F: FnMut(&T) -> K,
    {
        let shape = self.shape;
        Self {
            items: distinct_by_key(self.items, key_fn),
            shape,
        }
    }

    /// Append `other`, keeping the first element per key.
    #[must_use]
    pub fn union_by_key<K, I, F>(self, other: I, key_fn: F) -> Self
    where
        K: Eq + Hash,
        I: IntoIterator<Item = T>,
        F: FnMut(&T) -> K,
    {
        let shape = self.shape;
        Self {
            items: union_by_key(self.items, other, key_fn),
            shape,
        }
    }

    /// Keep one element per key that also occurs in `other`.
    #[must_use]
    pub fn intersect_by_key<K, I, F>(self, other: I, key_fn: F) -> Self
    where
        K: Eq + Hash,
        I: IntoIterator<Item = T>,
        F: FnMut(&T) -> K,
    {
        let shape = self.shape;
        Self {
            items: intersect_by_key(self.items, other, key_fn),
            shape,
        }
    }

    /// Drop elements whose key occurs in `other`.
    #[must_use]
    pub fn except_by_key<K, I, F>(self, other: I, key_fn: F) -> Self
    where
        K: Eq + Hash,
        I: IntoIterator<Item = T>,
        F: FnMut(&T) -> K,
    {
        let shape = self.shape;
        Self {
            items: except_by_key(self.items, other, key_fn),
            shape,
        }
    }
}
