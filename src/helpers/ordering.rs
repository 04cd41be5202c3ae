//! Ordering operators.
//!
//! All ascending variants are **stable**: elements that compare equal keep
//! their source order. The descending variants sort ascending and then reverse
//! the buffer, which means ties come out in *reversed* source order:
//!
//! ```
//! use lava::*;
//!
//! let runs = vec![("b", 1), ("a", 2), ("c", 1)];
//! let asc = order_by_key(runs.clone(), |r| r.1);
//! assert_eq!(asc, vec![("b", 1), ("c", 1), ("a", 2)]);
//!
//! let desc = order_by_key_descending(runs, |r| r.1);
//! assert_eq!(desc, vec![("a", 2), ("c", 1), ("b", 1)]);
//! ```

use crate::collection::Sequence;
use std::cmp::Ordering;

/// Stable ascending sort by the element's natural order.
pub fn order_by<T, I>(source: I) -> Vec<T>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut buf: Vec<T> = source.into_iter().collect();
    buf.sort();
    buf
}

/// Stable ascending sort with a caller comparator.
pub fn order_by_cmp<T, I, F>(source: I, cmp: F) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut buf: Vec<T> = source.into_iter().collect();
    buf.sort_by(cmp);
    buf
}

/// Stable ascending sort by a projected key; the key is computed once per element.
pub fn order_by_key<T, K, I, F>(source: I, key_fn: F) -> Vec<T>
where
    K: Ord,
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> K,
{
    let mut buf: Vec<T> = source.into_iter().collect();
    buf.sort_by_cached_key(key_fn);
    buf
}

/// Natural order reversed; ties come out in reversed source order.
pub fn order_by_descending<T, I>(source: I) -> Vec<T>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut buf = order_by(source);
    buf.reverse();
    buf
}

/// Comparator order reversed; ties come out in reversed source order.
pub fn order_by_descending_cmp<T, I, F>(source: I, cmp: F) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut buf = order_by_cmp(source, cmp);
    buf.reverse();
    buf
}

/// Projected-key order reversed; ties come out in reversed source order.
pub fn order_by_key_descending<T, K, I, F>(source: I, key_fn: F) -> Vec<T>
where
    K: Ord,
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> K,
{
    let mut buf = order_by_key(source, key_fn);
    buf.reverse();
    buf
}

impl<T: Ord> Sequence<T> {
    /// Stable ascending sort by natural order.
    #[must_use]
    pub fn order_by(self) -> Self {
        let items = order_by(self.items);
        Self { items, ..self }
    }

    /// Natural order reversed; ties come out in reversed source order.
    #[must_use]
    pub fn order_by_descending(self) -> Self {
        let items = order_by_descending(self.items);
        Self { items, ..self }
    }
}

impl<T> Sequence<T> {
    /// Stable ascending sort with a caller comparator.
    #[must_use]
    pub fn order_by_cmp<F>(self, cmp: F) -> Self
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let items = order_by_cmp(self.items, cmp);
        Self { items, ..self }
    }

    /// Comparator order reversed.
    #[must_use]
    pub fn order_by_descending_cmp<F>(self, cmp: F) -> Self
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let items = order_by_descending_cmp(self.items, cmp);
        Self { items, ..self }
    }

    /// Stable ascending sort by a projected key.
    #[must_use]
    pub fn order_by_key<K, F>(self, key_fn: F) -> Self
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        let items = order_by_key(self.items, key_fn);
        Self { items, ..self }
    }

    /// Projected-key order reversed.
    #[must_use]
    pub fn order_by_key_descending<K, F>(self, key_fn: F) -> Self
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        let items = order_by_key_descending(self.items, key_fn);
        Self { items, ..self }
    }
}
