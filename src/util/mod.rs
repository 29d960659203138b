#![warn(missing_docs)]

pub mod error;
pub mod panic;
pub mod result;
#[cfg(test)]
pub mod tracked;
