//! The growable array, a contiguous container with automatic capacity management.

mod dyn_array;
mod iter;

pub use dyn_array::*;
pub use iter::*;
