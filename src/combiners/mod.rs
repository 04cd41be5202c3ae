//! Reusable aggregations for whole sequences and for each group.
//!
//! A [`CombineFn`] describes an aggregation as an accumulator that is created
//! empty, fed one value at a time, and finished into an output:
//!
//! - [`Sum<T>`] -- sum of values.
//! - [`Count`] -- number of values.
//! - [`Min<T>`] / [`Max<T>`] -- extreme value, `None` when there were no values.
//! - [`AverageF64`] -- arithmetic mean as `f64` (values convertible to `f64`).
//! - [`DistinctCount<T>`] -- number of distinct values.
//!
//! Combiners are applied with [`Sequence::combine`] or per key with
//! [`group_by_combine`](crate::group_by_combine).
//!
//! # Examples
//! ```
//! use lava::*;
//!
//! let sales = from_vec(vec![("a", 3u64), ("b", 10), ("a", 2)]);
//!
//! let total = sales.clone().select(|s| s.1).combine(Sum::<u64>::new());
//! assert_eq!(total, 15);
//!
//! let per_key = sales.group_by_combine(|s| s.0, |s| s.1, Max::<u64>::new());
//! assert_eq!(per_key.into_vec(), vec![("a", Some(3)), ("b", Some(10))]);
//! ```

mod basic;
mod distinct;
mod statistical;

use crate::collection::Sequence;

pub use basic::{Count, Max, Min, Sum};
pub use distinct::DistinctCount;
pub use statistical::AverageF64;

/// An aggregation over values `V` with accumulator `A` and output `O`.
pub trait CombineFn<V, A, O> {
    fn create(&self) -> A;
    fn add_input(&self, acc: &mut A, v: V);
    fn finish(&self, acc: A) -> O;

    /// Run the whole aggregation over `values`.
    fn apply<I>(&self, values: I) -> O
    where
        I: IntoIterator<Item = V>,
        Self: Sized,
    {
        let mut acc = self.create();
        for v in values {
            self.add_input(&mut acc, v);
        }
        self.finish(acc)
    }
}

impl<T> Sequence<T> {
    /// Aggregate every element with `comb`.
    pub fn combine<A, O, C>(self, comb: C) -> O
    where
        C: CombineFn<T, A, O>,
    {
        comb.apply(self.items)
    }
}
