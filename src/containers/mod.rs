//! General-purpose container types.
//!
//! # Purpose
//! Each container here solves one storage problem: [`array::DynArray`] keeps items contiguous
//! and grows on demand, [`linked::LinkedList`] trades locality for constant-time work at both
//! ends, and [`dict::Dictionary`] maps hashed keys onto chained buckets. The [`traits`] module
//! holds the capability traits the first two share.
//!
//! # Method
//! Every positional method across the containers takes a signed index, resolving negative
//! values from the end. Contiguous types implement [`Deref<Target = [T]>`](std::ops::Deref)
//! (and DerefMut), which saves me from writing some of the more repetitive functionality.

#[cfg(feature = "array")]
pub mod array;
#[cfg(feature = "dict")]
pub mod dict;
#[cfg(feature = "linked")]
pub mod linked;
#[cfg(feature = "array")]
pub(crate) mod store;
#[cfg(feature = "traits")]
pub mod traits;
