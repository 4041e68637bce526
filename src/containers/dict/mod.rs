//! A module containing [`Dictionary`] and associated types.
//!
//! The iterators here walk entries bucket by bucket, so their order follows each key's hash
//! rather than insertion. Mutable iteration goes through [`Entry`], which only ever hands out
//! its value mutably, because mutating a key in place would cause a logic error.

mod dictionary;
mod entry;
mod iter;
mod tests;

pub use dictionary::*;
pub use entry::*;
pub use iter::*;
