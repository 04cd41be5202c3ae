//! Testing utilities for code built on lava operators.
//!
//! - **Assertions**: compare operator outputs with expected results, check
//!   group contents and the element-count invariant of grouping.
//! - **Fixtures**: small people/pets datasets for grouping and join scenarios.
//!
//! # Quick Start
//!
//! ```
//! use lava::*;
//! use lava::testing::*;
//!
//! let people = sample_people();
//! let groups = group_by(people.clone(), |p| p.age);
//!
//! assert_counts_conserved(&groups, people.len());
//! assert_no_duplicates(&distinct(people));
//! ```

pub mod assertions;
pub mod fixtures;

pub use assertions::*;
pub use fixtures::*;
