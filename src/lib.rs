//! # Lava
//!
//! **Declarative query operators** over in-memory sequences: grouping, joins,
//! set algebra, ordering, and element access, all chainable on one
//! [`Sequence`] type.
//!
//! ## Key Features
//!
//! - **Grouping** - four `group_by` forms plus comparator and combiner variants
//! - **Joins** - inner equi-join and group join backed by a keyed [`Lookup`]
//! - **Set operators** - `distinct`, `union`, `intersect`, `except`, with key projections
//! - **Stable ordering** - natural, comparator, and key-projected sorts
//! - **Element operators** - `first`, `single`, `element_at`, `min`, `max`, and friends
//! - **Combiners** - reusable aggregations through the [`CombineFn`] trait
//! - **Typed errors** - every fallible operator returns a [`QueryError`]
//!
//! ## Quick Start
//!
//! ```
//! use lava::*;
//!
//! let people = from_vec(vec![("Robbie", 23), ("Stephanie", 24), ("Alex", 1), ("Todd", 34)]);
//! let pets = vec![("Rex", "Robbie"), ("Tom", "Todd"), ("Spot", "Robbie")];
//!
//! // Who owns what, oldest owners first
//! let owners = people
//!     .clone()
//!     .order_by_key_descending(|p| p.1)
//!     .join(pets.clone(), |p| p.0, |pet| pet.1, |p, pet| (p.0, pet.0));
//! assert_eq!(owners.into_vec(), vec![("Todd", "Tom"), ("Robbie", "Rex"), ("Robbie", "Spot")]);
//!
//! // Pet counts per person, including people without pets
//! let counts = people.group_join(pets, |p| p.0, |pet| pet.1, |p, owned| (p.0, owned.len()));
//! assert_eq!(
//!     counts.into_vec(),
//!     vec![("Robbie", 2), ("Stephanie", 0), ("Alex", 0), ("Todd", 1)]
//! );
//! ```
//!
//! ## Core Concepts
//!
//! ### Sequence
//!
//! A [`Sequence<T>`] is an eagerly materialized, ordered collection with a
//! [`Shape`] (`List` or `Set`). Operators consume the receiver and return a new
//! sequence, so chains read top to bottom. Every operator is also available as
//! a free function over any `IntoIterator` (for example [`group_by`] or
//! [`order_by_key`]), returning a plain `Vec`.
//!
//! ### Lookup and Group
//!
//! A [`Lookup`] maps keys to [`Group`]s, ordered by the first occurrence of each
//! key. Key identity is decided by a [`KeyMatcher`]: hashed value equality
//! ([`HashedKeys`]) by default, plain `PartialEq` ([`EqKeys`]) for unhashable
//! keys, or a caller comparator ([`CompareKeys`]).
//!
//! ### Errors
//!
//! Fallible operators return [`error::Result`]. Absence is
//! [`QueryError::NotFound`], a broken uniqueness constraint is
//! [`QueryError::MultipleMatches`], and out-of-range arguments are
//! [`QueryError::InvalidArgument`].
//!
//! ### Logging
//!
//! Operators that build indexes or filter by membership emit `tracing` events
//! at `TRACE` level with element and group counts. Install any `tracing`
//! subscriber to see them.
//!
//! ## Module Overview
//!
//! - [`collection`] - `Sequence`, `Shape`, and the stateless operators
//! - [`lookup`] - `Lookup`, `Group`, and key matchers
//! - [`combiners`] - built-in aggregations (Sum, Count, Min, Max, ...)
//! - [`error`] - `QueryError` and the `Result` alias
//! - [`helpers`] - free-function forms of every operator and constructors
//! - [`testing`] - assertions and fixtures for tests

pub mod collection;
pub mod combiners;
pub mod error;
pub mod helpers;
pub mod lookup;
pub mod testing;

// General re-exports
pub use collection::{Sequence, Shape};
pub use combiners::{AverageF64, CombineFn, Count, DistinctCount, Max, Min, Sum};
pub use error::QueryError;
pub use lookup::{CompareKeys, EqKeys, Group, HashedKeys, KeyMatcher, Lookup};
pub use helpers::*;
