use crate::error::{QueryError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

/// Backing shape of a [`Sequence`].
///
/// A `Set` sequence never holds two equal elements. Operators that can only
/// drop or reorder elements keep the receiver's shape; operators that may
/// introduce duplicates (`select`, `concat`, `zip`, joins, grouping) produce a
/// `List`. Use [`Sequence::into_shape`] to switch explicitly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    #[default]
    List,
    Set,
}

impl FromStr for Shape {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "list" => Ok(Shape::List),
            "set" => Ok(Shape::Set),
            other => Err(QueryError::UnsupportedShape(other.to_string())),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::List => f.write_str("list"),
            Shape::Set => f.write_str("set"),
        }
    }
}

/// An eagerly materialized, ordered sequence that every operator can be chained on.
///
/// Each operator consumes the receiver and returns a new `Sequence` (or a
/// scalar / `Result` for element operators); nothing is evaluated lazily.
///
/// Deserializing a `"set"`-shaped sequence drops repeated items, so a `Set`
/// never holds duplicates however it was built.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Sequence<T> {
    pub(crate) items: Vec<T>,
    pub(crate) shape: Shape,
}

impl<T> Sequence<T> {
    pub(crate) const fn list(items: Vec<T>) -> Self {
        Self {
            items,
            shape: Shape::List,
        }
    }

    /// List or set backing of this sequence.
    pub const fn shape(&self) -> Shape {
        self.shape
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// `true` when the sequence holds no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Borrow the elements in order.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Iterate the elements by reference.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Unwrap into the backing `Vec`.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// Move the elements into any collection the caller chooses.
    pub fn collect_into<C: FromIterator<T>>(self) -> C {
        self.items.into_iter().collect()
    }

    /* ---------- stateless operators ---------- */

    /// Keep the elements matching `pred` (`where`).
    #[must_use]
    pub fn filter<F>(self, mut pred: F) -> Self
    where
        F: FnMut(&T) -> bool,
    {
        let shape = self.shape;
        let items = self.items.into_iter().filter(|t| pred(t)).collect();
        Self { items, shape }
    }

    /// Project every element (`select`).
    pub fn select<O, F>(self, f: F) -> Sequence<O>
    where
        F: FnMut(T) -> O,
    {
        Sequence::list(self.items.into_iter().map(f).collect())
    }

    /// Project every element together with its position.
    pub fn select_indexed<O, F>(self, mut f: F) -> Sequence<O>
    where
        F: FnMut(T, usize) -> O,
    {
        Sequence::list(
            self.items
                .into_iter()
                .enumerate()
                .map(|(i, t)| f(t, i))
                .collect(),
        )
    }

    /// Project every element into zero or more outputs and flatten them.
    pub fn select_many<O, C, F>(self, f: F) -> Sequence<O>
    where
        C: IntoIterator<Item = O>,
        F: FnMut(T) -> C,
    {
        Sequence::list(self.items.into_iter().flat_map(f).collect())
    }

    /// Like [`Sequence::select_many`], also passing each element's position.
    pub fn select_many_indexed<O, C, F>(self, mut f: F) -> Sequence<O>
    where
        C: IntoIterator<Item = O>,
        F: FnMut(T, usize) -> C,
    {
        Sequence::list(
            self.items
                .into_iter()
                .enumerate()
                .flat_map(|(i, t)| f(t, i))
                .collect(),
        )
    }

    /// Flatten a per-element collection, then combine each inner item with its
    /// parent element through `result_fn`.
    pub fn select_many_with<C, R, CF, RF>(self, mut collection_fn: CF, mut result_fn: RF) -> Sequence<R>
    where
        C: IntoIterator,
        CF: FnMut(&T) -> C,
        RF: FnMut(&T, C::Item) -> R,
    {
        let mut out = Vec::new();
        for t in &self.items {
            for inner in collection_fn(t) {
                out.push(result_fn(t, inner));
            }
        }
        Sequence::list(out)
    }

    /// Append `other` after this sequence.
    #[must_use]
    pub fn concat<I>(mut self, other: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        self.items.extend(other);
        self.shape = Shape::List;
        self
    }

    /// Reverse the element order.
    #[must_use]
    pub fn reverse(mut self) -> Self {
        self.items.reverse();
        self
    }

    /// Pair elements positionally with `other`, stopping at the shorter side.
    pub fn zip<U, R, I, F>(self, other: I, mut f: F) -> Sequence<R>
    where
        I: IntoIterator<Item = U>,
        F: FnMut(T, U) -> R,
    {
        Sequence::list(
            self.items
                .into_iter()
                .zip(other)
                .map(|(t, u)| f(t, u))
                .collect(),
        )
    }

    /// The first `count` elements (all of them when `count` exceeds the length).
    #[must_use]
    pub fn take(mut self, count: usize) -> Self {
        self.items.truncate(count);
        self
    }

    /// Everything after the first `count` elements.
    #[must_use]
    pub fn skip(mut self, count: usize) -> Self {
        let count = count.min(self.items.len());
        self.items.drain(..count);
        self
    }

    /// The leading elements for which `pred` holds.
    #[must_use]
    pub fn take_while<F>(mut self, mut pred: F) -> Self
    where
        F: FnMut(&T) -> bool,
    {
        let end = self
            .items
            .iter()
            .position(|t| !pred(t))
            .unwrap_or(self.items.len());
        self.items.truncate(end);
        self
    }

    /// Everything from the first element for which `pred` fails.
    #[must_use]
    pub fn skip_while<F>(mut self, mut pred: F) -> Self
    where
        F: FnMut(&T) -> bool,
    {
        let start = self
            .items
            .iter()
            .position(|t| !pred(t))
            .unwrap_or(self.items.len());
        self.items.drain(..start);
        self
    }
}

impl<T: Clone> Sequence<T> {
    /// Copy the elements into a plain `Vec`.
    pub fn to_list(&self) -> Vec<T> {
        self.items.clone()
    }
}

impl<T: Clone + Eq + Hash> Sequence<T> {
    /// Copy the elements into a `HashSet`.
    pub fn to_set(&self) -> HashSet<T> {
        self.items.iter().cloned().collect()
    }
}

impl<T: Eq + Hash> Sequence<T> {
    /// Switch to `shape`; moving to [`Shape::Set`] drops repeated elements,
    /// keeping first occurrences.
    #[must_use]
    pub fn into_shape(self, shape: Shape) -> Self {
        match shape {
            Shape::List => Self {
                items: self.items,
                shape,
            },
            Shape::Set => Self {
                items: crate::helpers::sets::distinct(self.items),
                shape,
            },
        }
    }
}

impl<'de, T> Deserialize<'de> for Sequence<T>
where
    T: Deserialize<'de> + Eq + Hash,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Wire<T> {
            items: Vec<T>,
            shape: Shape,
        }

        let Wire { items, shape } = Wire::deserialize(deserializer)?;
        Ok(Sequence::list(items).into_shape(shape))
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::list(Vec::new())
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(items: Vec<T>) -> Self {
        Self::list(items)
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::list(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
