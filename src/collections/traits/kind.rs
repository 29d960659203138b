use derive_more::{Display, IsVariant};

#[doc(inline)]
pub use crate::util::error::UnknownKind;

/// Identifies one of the concrete backends. The discriminant is the tag written by the text
/// format.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, IsVariant)]
#[repr(u8)]
pub enum Kind {
    #[display("STACK")]
    Stack = 0,
    #[display("QUEUE")]
    Queue = 1,
    #[display("LINKED_LIST")]
    LinkedList = 2,
    #[display("BIN_SEARCH_TREE")]
    BinarySearchTree = 3,
}

impl Kind {
    /// Every kind, ordered by tag.
    pub const ALL: [Kind; 4] = [Kind::Stack, Kind::Queue, Kind::LinkedList, Kind::BinarySearchTree];

    /// Returns the numeric tag of this kind.
    pub const fn tag(self) -> u8 {
        self as u8
    }

    /// Looks up the kind with the provided tag.
    pub const fn from_tag(tag: u8) -> Result<Kind, UnknownKind> {
        match tag {
            0 => Ok(Kind::Stack),
            1 => Ok(Kind::Queue),
            2 => Ok(Kind::LinkedList),
            3 => Ok(Kind::BinarySearchTree),
            _ => Err(UnknownKind { tag }),
        }
    }
}

impl TryFrom<u8> for Kind {
    type Error = UnknownKind;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Kind::from_tag(value)
    }
}

impl From<Kind> for u8 {
    fn from(value: Kind) -> Self {
        value.tag()
    }
}
