pub(crate) mod elements;
pub(crate) mod grouping;
pub(crate) mod joins;
pub(crate) mod ordering;
pub(crate) mod sets;
pub(crate) mod stdlib;

// Free-function entry points for every operator
pub use elements::*;
pub use grouping::*;
pub use joins::*;
pub use ordering::*;
pub use sets::*;
pub use stdlib::*;
