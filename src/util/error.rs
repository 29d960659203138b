use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error};

/// An operation needed at least one element, but the container was empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyContainer;

impl Display for EmptyContainer {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Attempted to take an element from an empty container!")
    }
}

impl Error for EmptyContainer {}

/// An element was added to a heterogeneous container that holds no backends yet.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Unable to add an element to a heterogeneous container with no backends!")]
pub struct NoContainers;

/// A kind tag didn't name any of the known backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownKind {
    pub tag: u8,
}

impl Display for UnknownKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown container kind {}, expected a tag from 0 to 3!", self.tag)
    }
}

impl Error for UnknownKind {}

/// A container grew past the number of elements it is able to count.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Capacity overflow!")]
pub struct CapacityOverflow;
