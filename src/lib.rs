//! This crate is my take on a small family of general-purpose containers: a growable array, a
//! doubly linked list and a hash dictionary, tied together by a pair of capability traits.
//!
//! # Purpose
//! This repo / crate is a project that I'm working on as a learning experience, with no
//! expectation for it to be used in production. Each of these containers exists in [`std`] in a
//! more polished form; writing my own forces me to understand the resizing, splicing and
//! bucketing machinery that those types normally hide, as well as concepts such as pointers,
//! allocations, iterators and hashing.
//!
//! # Method
//! The containers agree on a few conventions so that switching between them is painless:
//! - Positional methods take signed indices, with negative values resolving from the end (`-1`
//!   is the last element).
//! - Every panicking positional method has a `try_` counterpart returning a strongly typed
//!   error, so callers choose whether an out-of-range index is a bug or an input.
//! - Capacity is managed automatically and hangs onto allocations across `clear`, since a
//!   cleared container is usually about to be refilled.
//!
//! The [`Data`](containers::traits::Data) and [`OrderedData`](containers::traits::OrderedData)
//! traits capture the overlap, so generic code can work against the contract instead of a
//! concrete container.
//!
//! # Error Handling
//! Out-of-range indices are programming errors, so the plain accessors panic; the `try_`
//! variants exist for when the index comes from outside the program. Probing for an absent item
//! or key is an expected outcome rather than an error, so value-based removal and dictionary
//! lookups return [`Option`] instead. Errors that do surface are strongly typed structs
//! implementing [`Error`](std::error::Error), not strings.
//!
//! # Dependencies
//! This crate doesn't use [`Vec`] or the standard collections to back its own containers. The
//! growable array manages its allocation by hand, the linked list stores its nodes inside one,
//! and the dictionary's buckets chain through the list, so everything bottoms out in one
//! buffer type.
//!
//! This crate also depends on some derive macros because they're helpful and remove the need
//! for some very repetitive programming.

// #![warn(missing_docs)]
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "containers")]
pub mod containers;

pub(crate) mod util;
