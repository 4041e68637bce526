//! Capability traits describing what the containers can do, for code which depends on a set of
//! operations rather than a concrete container type.

mod data;
mod tests;

pub use data::*;
