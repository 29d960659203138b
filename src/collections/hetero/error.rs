use std::io;

use derive_more::{Display, Error, From, IsVariant};

#[doc(inline)]
pub use crate::util::error::{NoContainers, UnknownKind};

/// Reading a [`HeteroContainer`](super::HeteroContainer) from its text form failed.
#[derive(Debug, Display, Error, From, IsVariant)]
pub enum ReadError {
    Io(io::Error),
    UnexpectedEnd(UnexpectedEnd),
    InvalidToken(InvalidToken),
    UnknownKind(UnknownKind),
}

/// The input ran out before every declared backend and element was read.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Input ended while expecting {expected}!")]
pub struct UnexpectedEnd {
    pub expected: &'static str,
}

/// A token couldn't be parsed as the value expected at its position.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("Invalid token {token:?} at position {position}, expected {expected}!")]
pub struct InvalidToken {
    pub token: String,
    pub position: usize,
    pub expected: &'static str,
}
