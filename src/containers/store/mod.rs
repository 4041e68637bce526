//! Crate-private storage layer. [`Buf`] owns a heap allocation with an exact element count and
//! confines all of the crate's pointer arithmetic; the containers above it work with slices.

mod buf;
mod iter;
mod tests;

pub(crate) use buf::*;
pub use iter::*;
