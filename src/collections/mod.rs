//! The container types, along with the heterogeneous container that combines them.
//!
//! # Purpose
//! Every backend here is written from scratch to show how each structure keeps its invariants:
//! links that always agree in both directions, and a tree whose ordering survives removal.
//!
//! # Method
//! Shared behaviour lives in the [`Container`](traits::Container) trait, which is implemented by
//! each backend and dispatched statically through the closed
//! [`Backend`](hetero::Backend) enum.

#[cfg(feature = "binary-tree")]
pub mod binary_tree;
#[cfg(feature = "hetero")]
pub mod hetero;
#[cfg(feature = "linked")]
pub mod linked;
#[cfg(feature = "traits")]
pub mod traits;
