//! Linked collection types. [`LinkedList`] does the work, while [`Stack`] and [`Queue`] restrict
//! it to one end each for removal.

pub mod list;
mod queue;
mod stack;
mod tests;

#[doc(inline)]
pub use list::LinkedList;
pub use queue::*;
pub use stack::*;
