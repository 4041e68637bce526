mod arena;
mod iter;
mod length;
mod linked_list;
mod tests;

pub(crate) use arena::*;
pub use iter::*;
pub(crate) use length::*;
pub use linked_list::*;
