//! Element access and scalar reductions.
//!
//! These single-pass operators report failure through [`Result`]: a missing
//! element is [`QueryError::NotFound`], a violated uniqueness constraint is
//! [`QueryError::MultipleMatches`], and an out-of-range index is
//! [`QueryError::InvalidArgument`]. The `*_or_default` forms return `Option`
//! instead of failing on absence.
//!
//! The free functions consume any `IntoIterator`; the [`Sequence`] methods
//! borrow and hand back references into the sequence.
//!
//! ```
//! use lava::*;
//!
//! let ages = from_vec(vec![23, 24, 1, 34]);
//! assert_eq!(ages.first()?, &23);
//! assert_eq!(ages.last_where(|a| *a < 30)?, &1);
//! assert!(matches!(ages.single_where(|a| *a > 20), Err(QueryError::MultipleMatches { count: 3 })));
//! assert_eq!(ages.element_at_or_default(10), None);
//! # Ok::<(), QueryError>(())
//! ```

use crate::collection::Sequence;
use crate::error::{QueryError, Result};
use std::ops::Add;

/// First element.
///
/// # Errors
/// [`QueryError::NotFound`] when the source is empty.
pub fn first<T, I>(source: I) -> Result<T>
where
    I: IntoIterator<Item = T>,
{
    first_or_default(source).ok_or_else(|| QueryError::empty("first"))
}

/// First element, or `None` when empty.
pub fn first_or_default<T, I>(source: I) -> Option<T>
where
    I: IntoIterator<Item = T>,
{
    source.into_iter().next()
}

/// First element matching `pred`.
///
/// # Errors
/// [`QueryError::NotFound`] when nothing matches.
pub fn first_where<T, I, F>(source: I, pred: F) -> Result<T>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> bool,
{
    first_where_or_default(source, pred).ok_or_else(|| QueryError::no_match("first_where"))
}

/// First element matching `pred`, or `None`.
pub fn first_where_or_default<T, I, F>(source: I, pred: F) -> Option<T>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> bool,
{
    source.into_iter().find(pred)
}

/// Last element.
///
/// # Errors
/// [`QueryError::NotFound`] when the source is empty.
pub fn last<T, I>(source: I) -> Result<T>
where
    I: IntoIterator<Item = T>,
{
    last_or_default(source).ok_or_else(|| QueryError::empty("last"))
}

/// Last element, or `None` when empty.
pub fn last_or_default<T, I>(source: I) -> Option<T>
where
    I: IntoIterator<Item = T>,
{
    source.into_iter().last()
}

/// Last element matching `pred`.
///
/// # Errors
/// [`QueryError::NotFound`] when nothing matches.
pub fn last_where<T, I, F>(source: I, pred: F) -> Result<T>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> bool,
{
    last_where_or_default(source, pred).ok_or_else(|| QueryError::no_match("last_where"))
}

/// Last element matching `pred`, or `None`.
pub fn last_where_or_default<T, I, F>(source: I, mut pred: F) -> Option<T>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> bool,
{
    source.into_iter().filter(|t| pred(t)).last()
}

/// The only element of `source`.
///
/// # Errors
/// [`QueryError::NotFound`] when empty, [`QueryError::MultipleMatches`] when
/// there is more than one element.
pub fn single<T, I>(source: I) -> Result<T>
where
    I: IntoIterator<Item = T>,
{
    single_where_or_default(source, |_| true)?.ok_or_else(|| QueryError::empty("single"))
}

/// The only element matching `pred`.
///
/// # Errors
/// [`QueryError::NotFound`] when nothing matches, [`QueryError::MultipleMatches`]
/// (with the total match count) when more than one element does.
pub fn single_where<T, I, F>(source: I, pred: F) -> Result<T>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> bool,
{
    single_where_or_default(source, pred)?.ok_or_else(|| QueryError::no_match("single_where"))
}

/// Like [`single_where`], but absence is `Ok(None)`.
///
/// # Errors
/// [`QueryError::MultipleMatches`] when more than one element matches.
pub fn single_where_or_default<T, I, F>(source: I, mut pred: F) -> Result<Option<T>>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> bool,
{
    let mut found = None;
    let mut count = 0usize;
    for t in source {
        if pred(&t) {
            count += 1;
            if found.is_none() {
                found = Some(t);
            }
        }
    }
    if count > 1 {
        return Err(QueryError::MultipleMatches { count });
    }
    Ok(found)
}

/// The element at `index`.
///
/// # Errors
/// [`QueryError::InvalidArgument`] when `index` is past the end.
pub fn element_at<T, I>(source: I, index: usize) -> Result<T>
where
    I: IntoIterator<Item = T>,
{
    let mut len = 0usize;
    for (i, t) in source.into_iter().enumerate() {
        if i == index {
            return Ok(t);
        }
        len = i + 1;
    }
    Err(QueryError::InvalidArgument(format!(
        "index {index} out of range for sequence of length {len}"
    )))
}

/// The element at `index`, or `None` past the end.
pub fn element_at_or_default<T, I>(source: I, index: usize) -> Option<T>
where
    I: IntoIterator<Item = T>,
{
    source.into_iter().nth(index)
}

/// Smallest element; the first of equal minima.
pub fn min<T, I>(source: I) -> Result<T>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    source
        .into_iter()
        .reduce(|best, t| if t < best { t } else { best })
        .ok_or_else(|| QueryError::empty("min"))
}

/// Largest element; the first of equal maxima.
pub fn max<T, I>(source: I) -> Result<T>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    source
        .into_iter()
        .reduce(|best, t| if t > best { t } else { best })
        .ok_or_else(|| QueryError::empty("max"))
}

/// Element with the smallest projected key.
pub fn min_by_key<T, K, I, F>(source: I, key_fn: F) -> Result<T>
where
    K: Ord,
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> K,
{
    source
        .into_iter()
        .min_by_key(key_fn)
        .ok_or_else(|| QueryError::empty("min_by_key"))
}

/// Element with the largest projected key.
pub fn max_by_key<T, K, I, F>(source: I, key_fn: F) -> Result<T>
where
    K: Ord,
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> K,
{
    source
        .into_iter()
        .max_by_key(key_fn)
        .ok_or_else(|| QueryError::empty("max_by_key"))
}

/// Smallest projected key itself, rather than the element carrying it.
///
/// ```
/// use lava::*;
///
/// let ages = min_of(vec![("Alex", 1), ("Todd", 34)], |p| p.1)?;
/// assert_eq!(ages, 1);
/// # Ok::<(), QueryError>(())
/// ```
pub fn min_of<T, K, I, F>(source: I, mut key_fn: F) -> Result<K>
where
    K: Ord,
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> K,
{
    min(source.into_iter().map(|t| key_fn(&t))).map_err(|_| QueryError::empty("min_of"))
}

/// Largest projected key itself, rather than the element carrying it.
pub fn max_of<T, K, I, F>(source: I, mut key_fn: F) -> Result<K>
where
    K: Ord,
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> K,
{
    max(source.into_iter().map(|t| key_fn(&t))).map_err(|_| QueryError::empty("max_of"))
}

/// Left fold seeded with the first element.
///
/// # Errors
/// [`QueryError::NotFound`] for an empty source.
pub fn reduce<T, I, F>(source: I, fold: F) -> Result<T>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T, T) -> T,
{
    source
        .into_iter()
        .reduce(fold)
        .ok_or_else(|| QueryError::empty("reduce"))
}

/// Left fold starting from `seed`.
pub fn aggregate<T, A, I, F>(source: I, seed: A, fold: F) -> A
where
    I: IntoIterator<Item = T>,
    F: FnMut(A, T) -> A,
{
    source.into_iter().fold(seed, fold)
}

/// Sum of all elements; `T::default()` for an empty source.
pub fn sum<T, I>(source: I) -> T
where
    T: Add<Output = T> + Default,
    I: IntoIterator<Item = T>,
{
    source.into_iter().fold(T::default(), |acc, t| acc + t)
}

/// Arithmetic mean as `f64`.
///
/// # Errors
/// [`QueryError::NotFound`] for an empty source.
#[allow(clippy::cast_precision_loss)]
pub fn average<T, I>(source: I) -> Result<f64>
where
    T: Into<f64>,
    I: IntoIterator<Item = T>,
{
    let (total, count) = source
        .into_iter()
        .fold((0.0_f64, 0u64), |(total, count), t| (total + t.into(), count + 1));
    if count == 0 {
        return Err(QueryError::empty("average"));
    }
    Ok(total / count as f64)
}

/// Same length and pairwise-equal elements, in order.
pub fn sequence_equal<T, U, A, B>(first: A, second: B) -> bool
where
    T: PartialEq<U>,
    A: IntoIterator<Item = T>,
    B: IntoIterator<Item = U>,
{
    first.into_iter().eq(second)
}

impl<T> Sequence<T> {
    /// Borrow the first element; see [`first`](crate::first).
    pub fn first(&self) -> Result<&T> {
        first(&self.items)
    }

    /// Borrow the first element, if any.
    pub fn first_or_default(&self) -> Option<&T> {
        self.items.first()
    }

    /// Borrow the first element matching `pred`.
    pub fn first_where<F>(&self, mut pred: F) -> Result<&T>
    where
        F: FnMut(&T) -> bool,
    {
        first_where(&self.items, |t| pred(*t))
    }

    /// Borrow the first element matching `pred`, if any.
    pub fn first_where_or_default<F>(&self, mut pred: F) -> Option<&T>
    where
        F: FnMut(&T) -> bool,
    {
        first_where_or_default(&self.items, |t| pred(*t))
    }

    /// Borrow the last element.
    pub fn last(&self) -> Result<&T> {
        last(&self.items)
    }

    /// Borrow the last element, if any.
    pub fn last_or_default(&self) -> Option<&T> {
        self.items.last()
    }

    /// Borrow the last element matching `pred`.
    pub fn last_where<F>(&self, mut pred: F) -> Result<&T>
    where
        F: FnMut(&T) -> bool,
    {
        last_where(&self.items, |t| pred(*t))
    }

    /// Borrow the last element matching `pred`, if any.
    pub fn last_where_or_default<F>(&self, mut pred: F) -> Option<&T>
    where
        F: FnMut(&T) -> bool,
    {
        last_where_or_default(&self.items, |t| pred(*t))
    }

    /// Borrow the only element; see [`single`](crate::single).
    pub fn single(&self) -> Result<&T> {
        single(&self.items)
    }

    /// Borrow the only element matching `pred`.
    pub fn single_where<F>(&self, mut pred: F) -> Result<&T>
    where
        F: FnMut(&T) -> bool,
    {
        single_where(&self.items, |t| pred(*t))
    }

    /// Borrow the only element matching `pred`; `Ok(None)` when nothing matches.
    pub fn single_where_or_default<F>(&self, mut pred: F) -> Result<Option<&T>>
    where
        F: FnMut(&T) -> bool,
    {
        single_where_or_default(&self.items, |t| pred(*t))
    }

    /// Borrow the element at `index`.
    ///
    /// # Errors
    /// [`QueryError::InvalidArgument`] when `index` is past the end.
    pub fn element_at(&self, index: usize) -> Result<&T> {
        self.items.get(index).ok_or_else(|| {
            QueryError::InvalidArgument(format!(
                "index {index} out of range for sequence of length {}",
                self.items.len()
            ))
        })
    }

    /// Borrow the element at `index`, if in range.
    pub fn element_at_or_default(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Borrow the element with the smallest projected key.
    pub fn min_by_key<K, F>(&self, mut key_fn: F) -> Result<&T>
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        min_by_key(&self.items, |t| key_fn(*t))
    }

    /// Borrow the element with the largest projected key.
    pub fn max_by_key<K, F>(&self, mut key_fn: F) -> Result<&T>
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        max_by_key(&self.items, |t| key_fn(*t))
    }

    /// Smallest projected key.
    ///
    /// ```
    /// use lava::*;
    /// use lava::testing::sample_people;
    ///
    /// assert_eq!(from_vec(sample_people()).min_of(|p| p.age)?, 1);
    /// # Ok::<(), QueryError>(())
    /// ```
    pub fn min_of<K, F>(&self, mut key_fn: F) -> Result<K>
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        min_of(&self.items, |t| key_fn(*t))
    }

    /// Largest projected key.
    pub fn max_of<K, F>(&self, mut key_fn: F) -> Result<K>
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        max_of(&self.items, |t| key_fn(*t))
    }

    /// Left fold over borrowed elements starting from `seed`.
    pub fn aggregate<A, F>(&self, seed: A, mut fold: F) -> A
    where
        F: FnMut(A, &T) -> A,
    {
        aggregate(&self.items, seed, |acc, t| fold(acc, t))
    }

    /// Number of elements.
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Number of elements matching `pred`.
    pub fn count_where<F>(&self, mut pred: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        self.items.iter().filter(|t| pred(*t)).count()
    }

    /// `true` when there is at least one element.
    pub fn any(&self) -> bool {
        !self.items.is_empty()
    }

    /// `true` when some element matches `pred`.
    pub fn any_where<F>(&self, pred: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.items.iter().any(pred)
    }

    /// `true` when every element matches (vacuously true when empty).
    pub fn all<F>(&self, pred: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.items.iter().all(pred)
    }

    /// Same length and pairwise-equal elements, in order.
    pub fn sequence_equal<'a, I>(&self, other: I) -> bool
    where
        T: PartialEq + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        sequence_equal(&self.items, other)
    }
}

impl<T: PartialEq> Sequence<T> {
    /// `true` when some element equals `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.items.contains(value)
    }
}

impl<T: Ord> Sequence<T> {
    /// Borrow the smallest element; the first of equal minima.
    pub fn min(&self) -> Result<&T> {
        min(&self.items)
    }

    /// Borrow the largest element; the first of equal maxima.
    pub fn max(&self) -> Result<&T> {
        max(&self.items)
    }
}

impl<T: Clone + Add<Output = T> + Default> Sequence<T> {
    /// Sum of all elements; `T::default()` when empty.
    pub fn sum(&self) -> T {
        sum(self.items.iter().cloned())
    }
}

impl<T: Clone> Sequence<T> {
    /// Fold the elements pairwise, seeded with the first one.
    pub fn reduce<F>(&self, fold: F) -> Result<T>
    where
        F: FnMut(T, T) -> T,
    {
        reduce(self.items.iter().cloned(), fold)
    }
}

impl<T: Clone + Into<f64>> Sequence<T> {
    /// Arithmetic mean as `f64`.
    pub fn average(&self) -> Result<f64> {
        average(self.items.iter().cloned())
    }
}
