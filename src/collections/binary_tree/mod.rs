//! An unbalanced [`BinarySearchTree`], which only restores a balanced shape when explicitly
//! sorted.

mod binary_search_tree;
mod iter;
mod node;

pub use binary_search_tree::*;
pub use iter::*;
pub(crate) use node::*;
