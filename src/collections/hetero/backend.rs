use std::fmt::{self, Debug, Formatter};
use std::iter::FusedIterator;

use derive_more::{From, IsVariant};

use crate::collections::binary_tree::{self, BinarySearchTree, PreOrderIter};
use crate::collections::linked::{LinkedList, Queue, Stack, list};
use crate::collections::traits::{Container, Kind};
use crate::util::error::EmptyContainer;

/// One of the concrete containers a [`HeteroContainer`](super::HeteroContainer) is built from.
/// The [`Kind`] of a Backend always follows from its variant.
#[derive(Clone, From, IsVariant)]
pub enum Backend<T> {
    Stack(Stack<T>),
    Queue(Queue<T>),
    LinkedList(LinkedList<T>),
    BinarySearchTree(BinarySearchTree<T>),
}

macro_rules! dispatch {
    ($backend:expr, $inner:ident => $body:expr) => {
        match $backend {
            Backend::Stack($inner) => $body,
            Backend::Queue($inner) => $body,
            Backend::LinkedList($inner) => $body,
            Backend::BinarySearchTree($inner) => $body,
        }
    };
}

impl<T> Backend<T> {
    /// Creates an empty backend of the requested kind.
    pub const fn new(kind: Kind) -> Backend<T> {
        match kind {
            Kind::Stack => Backend::Stack(Stack::new()),
            Kind::Queue => Backend::Queue(Queue::new()),
            Kind::LinkedList => Backend::LinkedList(LinkedList::new()),
            Kind::BinarySearchTree => Backend::BinarySearchTree(BinarySearchTree::new()),
        }
    }

    pub const fn kind(&self) -> Kind {
        match self {
            Backend::Stack(_) => Kind::Stack,
            Backend::Queue(_) => Kind::Queue,
            Backend::LinkedList(_) => Kind::LinkedList,
            Backend::BinarySearchTree(_) => Kind::BinarySearchTree,
        }
    }

    pub const fn len(&self) -> usize {
        dispatch!(self, inner => inner.len())
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator in the backend's own order: front to back for the linked kinds and
    /// ascending for the tree.
    pub fn iter(&self) -> BackendIter<'_, T> {
        match self {
            Backend::Stack(inner) => BackendIter::Linked(inner.iter()),
            Backend::Queue(inner) => BackendIter::Linked(inner.iter()),
            Backend::LinkedList(inner) => BackendIter::Linked(inner.iter()),
            Backend::BinarySearchTree(inner) => BackendIter::InOrder(inner.iter()),
        }
    }

    /// Returns an iterator in the order elements are written out, which is pre-order for the tree
    /// so that reading them back rebuilds the same shape.
    pub fn serial_iter(&self) -> BackendIter<'_, T> {
        match self {
            Backend::BinarySearchTree(inner) => BackendIter::PreOrder(inner.pre_order_iter()),
            other => other.iter(),
        }
    }
}

impl<T: Ord> Container<T> for Backend<T> {
    type Iter<'a> = BackendIter<'a, T> where T: 'a;

    type SerialIter<'a> = BackendIter<'a, T> where T: 'a;

    fn kind(&self) -> Kind {
        Backend::kind(self)
    }

    fn len(&self) -> usize {
        Backend::len(self)
    }

    fn contains(&self, value: &T) -> bool {
        dispatch!(self, inner => Container::contains(inner, value))
    }

    fn contains_where<P: FnMut(&T) -> bool>(&self, predicate: P) -> bool {
        dispatch!(self, inner => Container::contains_where(inner, predicate))
    }

    fn filter<P: FnMut(&T) -> bool>(&mut self, predicate: P) {
        dispatch!(self, inner => Container::filter(inner, predicate))
    }

    fn sort(&mut self) {
        dispatch!(self, inner => Container::sort(inner))
    }

    fn push(&mut self, value: T) {
        dispatch!(self, inner => Container::push(inner, value))
    }

    fn try_pop(&mut self) -> Result<T, EmptyContainer> {
        dispatch!(self, inner => Container::try_pop(inner))
    }

    fn iter<'a>(&'a self) -> Self::Iter<'a> {
        Backend::iter(self)
    }

    fn serial_iter<'a>(&'a self) -> Self::SerialIter<'a> {
        Backend::serial_iter(self)
    }
}

impl<T: Debug> Debug for Backend<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        dispatch!(self, inner => Debug::fmt(inner, f))
    }
}

/// Iterates over any backend, in either its regular or its serialization order.
pub enum BackendIter<'a, T> {
    Linked(list::Iter<'a, T>),
    InOrder(binary_tree::Iter<'a, T>),
    PreOrder(PreOrderIter<'a, T>),
}

impl<'a, T> Iterator for BackendIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            BackendIter::Linked(iter) => iter.next(),
            BackendIter::InOrder(iter) => iter.next(),
            BackendIter::PreOrder(iter) => iter.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            BackendIter::Linked(iter) => iter.size_hint(),
            BackendIter::InOrder(iter) => iter.size_hint(),
            BackendIter::PreOrder(iter) => iter.size_hint(),
        }
    }
}

impl<'a, T> FusedIterator for BackendIter<'a, T> {}

impl<'a, T> ExactSizeIterator for BackendIter<'a, T> {}

impl<'a, T> Clone for BackendIter<'a, T> {
    fn clone(&self) -> Self {
        match self {
            BackendIter::Linked(iter) => BackendIter::Linked(iter.clone()),
            BackendIter::InOrder(iter) => BackendIter::InOrder(iter.clone()),
            BackendIter::PreOrder(iter) => BackendIter::PreOrder(iter.clone()),
        }
    }
}
