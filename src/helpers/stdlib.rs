//! Constructors for [`Sequence`]s from native Rust data.
//!
//! ### Overview
//! - [`from_vec`] -- wrap a `Vec<T>` as a list-shaped sequence.
//! - [`from_iter`] -- collect any `IntoIterator<Item = T>`.
//! - [`from_set`] -- build a set-shaped sequence, dropping repeats.
//! - [`cast`] -- checked conversion of type-erased values into a typed sequence.
//!
//! ### Example
//! ```
//! use lava::*;
//!
//! let words = from_vec(vec!["alpha", "beta", "alpha"]);
//! assert_eq!(words.len(), 3);
//!
//! let unique = from_set(vec!["alpha", "beta", "alpha"]);
//! assert_eq!(unique.shape(), Shape::Set);
//! assert_eq!(unique.into_vec(), vec!["alpha", "beta"]);
//!
//! let squares = from_iter((1..=4).map(|n| n * n));
//! assert_eq!(squares.into_vec(), vec![1, 4, 9, 16]);
//! ```

use crate::collection::{Sequence, Shape};
use crate::error::{QueryError, Result};
use std::any::{Any, type_name};
use std::hash::Hash;

/// Create a list-shaped [`Sequence<T>`] from a pre-existing [`Vec<T>`].
pub fn from_vec<T>(data: Vec<T>) -> Sequence<T> {
    Sequence::list(data)
}

/// Create a list-shaped [`Sequence<T>`] from any iterator or collection.
pub fn from_iter<T, I>(iter: I) -> Sequence<T>
where
    I: IntoIterator<Item = T>,
{
    from_vec(iter.into_iter().collect())
}

/// Create a set-shaped [`Sequence<T>`]; repeated elements keep their first
/// occurrence only.
pub fn from_set<T, I>(iter: I) -> Sequence<T>
where
    T: Eq + Hash,
    I: IntoIterator<Item = T>,
{
    from_iter(iter).into_shape(Shape::Set)
}

/// Convert type-erased values into a typed sequence, checking every element.
///
/// # Errors
/// Returns [`QueryError::InvalidArgument`] naming the first element that is
/// not a `T`.
///
/// ### Example
/// ```
/// use lava::*;
/// use std::any::Any;
///
/// let erased: Vec<Box<dyn Any>> = vec![Box::new(1u32), Box::new(2u32)];
/// let typed = cast::<u32>(erased).unwrap();
/// assert_eq!(typed.into_vec(), vec![1, 2]);
///
/// let mixed: Vec<Box<dyn Any>> = vec![Box::new(1u32), Box::new("two")];
/// assert!(cast::<u32>(mixed).is_err());
/// ```
pub fn cast<T: Any>(values: Vec<Box<dyn Any>>) -> Result<Sequence<T>> {
    let mut out = Vec::with_capacity(values.len());
    for (index, value) in values.into_iter().enumerate() {
        let typed = value.downcast::<T>().map_err(|_| {
            QueryError::InvalidArgument(format!(
                "element {index} is not a `{}`",
                type_name::<T>()
            ))
        })?;
        out.push(*typed);
    }
    Ok(from_vec(out))
}
