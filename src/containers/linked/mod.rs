//! Linked collection types, revolving around [`LinkedList`].

pub mod list;

#[doc(inline)]
pub use list::LinkedList;
