//! Counting and arithmetic combiners: `Sum`, `Count`, `Min`, `Max`.

use super::CombineFn;
use std::marker::PhantomData;
use std::mem::take;
use std::ops::Add;

/// Keep the earlier value unless `v` is strictly better.
fn keep_best<T>(acc: &mut Option<T>, v: T, better: impl FnOnce(&T, &T) -> bool) {
    if acc.as_ref().is_none_or(|cur| better(&v, cur)) {
        *acc = Some(v);
    }
}

/* ===================== Sum<T> ===================== */

/// Running total; the empty total is `T::default()`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sum<T>(pub PhantomData<T>);

impl<T> Sum<T> {
    /// Same as `Default`.
    #[must_use]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> CombineFn<T, T, T> for Sum<T>
where
    T: Add<Output = T> + Default,
{
    fn create(&self) -> T {
        T::default()
    }

    fn add_input(&self, acc: &mut T, v: T) {
        *acc = take(acc) + v;
    }

    fn finish(&self, acc: T) -> T {
        acc
    }
}

/* ===================== Count ===================== */

/// Number of values seen, whatever their type.
#[derive(Clone, Copy, Debug, Default)]
pub struct Count;

impl<V> CombineFn<V, u64, u64> for Count {
    fn create(&self) -> u64 {
        0
    }

    fn add_input(&self, acc: &mut u64, _v: V) {
        *acc += 1;
    }

    fn finish(&self, acc: u64) -> u64 {
        acc
    }
}

/* ===================== Min<T> / Max<T> ===================== */

/// Smallest value; `None` for a group with no values. Ties keep the earliest.
#[derive(Clone, Copy, Debug, Default)]
pub struct Min<T>(pub PhantomData<T>);

impl<T> Min<T> {
    /// Same as `Default`.
    #[must_use]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T: Ord> CombineFn<T, Option<T>, Option<T>> for Min<T> {
    fn create(&self) -> Option<T> {
        None
    }

    fn add_input(&self, acc: &mut Option<T>, v: T) {
        keep_best(acc, v, |new, cur| new < cur);
    }

    fn finish(&self, acc: Option<T>) -> Option<T> {
        acc
    }
}

/// Largest value; `None` for a group with no values. Ties keep the earliest.
#[derive(Clone, Copy, Debug, Default)]
pub struct Max<T>(pub PhantomData<T>);

impl<T> Max<T> {
    /// Same as `Default`.
    #[must_use]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T: Ord> CombineFn<T, Option<T>, Option<T>> for Max<T> {
    fn create(&self) -> Option<T> {
        None
    }

    fn add_input(&self, acc: &mut Option<T>, v: T) {
        keep_best(acc, v, |new, cur| new > cur);
    }

    fn finish(&self, acc: Option<T>) -> Option<T> {
        acc
    }
}
