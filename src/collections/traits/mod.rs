//! The capability shared by every backend, along with the [`Kind`] tag used to name backends
//! when they are stored or serialized.

mod container;
mod kind;

pub use container::*;
pub use kind::*;
