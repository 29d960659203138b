//! A small set of hand-written containers, and a heterogeneous container which combines them.
//!
//! # Purpose
//! Each of [`Stack`](collections::linked::Stack), [`Queue`](collections::linked::Queue),
//! [`LinkedList`](collections::linked::LinkedList) and
//! [`BinarySearchTree`](collections::binary_tree::BinarySearchTree) can be used on its own, but they
//! all share the [`Container`](collections::traits::Container) capability. A
//! [`HeteroContainer`](collections::hetero::HeteroContainer) holds any mix of them, spreads elements
//! evenly across them and merges them back into one ordered sequence when iterated.
//!
//! # Method
//! The linked types are built on raw, non-null node pointers rather than [`Box`]es, while the tree
//! owns its nodes directly. Every walk over either structure is a loop or an explicit stack, so
//! arbitrarily long lists and degenerate trees never exhaust the call stack.
//!
//! # Error Handling
//! Operations that can fail on an empty or unconfigured container come in pairs: a `try_` method
//! returning a [`Result`], and a panicking method for callers who have already checked. Error
//! types are small structs, usually ZSTs, that implement [`Error`](std::error::Error), grouped
//! into enums where one operation can fail in several ways.
//!
//! # Logging
//! Structural changes to a heterogeneous container, as well as reading and writing its text form,
//! are reported through the [`log`] facade. No logger is installed by this crate.
//!
//! # Dependencies
//! This crate depends on some derive macros because they're helpful and remove the need for some
//! very repetitive programming. The `hetero-dump` binary additionally uses `clap`.

// #![warn(missing_docs)]
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;

pub(crate) mod util;
