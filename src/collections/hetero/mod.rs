//! A [`HeteroContainer`] holds any mix of backends and treats them as one logical collection.
//!
//! Elements are routed to whichever backend currently holds the fewest, membership tests and bulk
//! removal fan out to every backend, and [`SortIter`] merges the backends back into a single
//! ordered sequence. The container can also be written to and read from a simple line-based text
//! format, see [`HeteroContainer::write_to`] and [`HeteroContainer::read_from`].

mod backend;
mod error;
mod hetero_container;
mod iter;
mod serial;
mod tests;

pub use backend::*;
pub use error::*;
pub use hetero_container::*;
pub use iter::*;
pub use serial::*;
