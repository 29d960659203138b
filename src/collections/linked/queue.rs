use std::fmt::{self, Debug, Formatter};

use super::list::{self, LinkedList};
use crate::collections::traits::{Container, Kind};
use crate::util::error::EmptyContainer;
use crate::util::result::ResultExtension;

/// A first in, first out collection, pushing to the back of a [`LinkedList`] and popping from the
/// front.
#[derive(Clone)]
pub struct Queue<T> {
    pub(crate) elements: LinkedList<T>,
}

impl<T> Queue<T> {
    pub const fn new() -> Queue<T> {
        Queue {
            elements: LinkedList::new(),
        }
    }

    pub const fn len(&self) -> usize {
        self.elements.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Adds `value` to the back of the Queue.
    pub fn push(&mut self, value: T) {
        self.elements.push_back(value);
    }

    /// Removes the element at the front of the Queue, returning an [`Err`] if it is empty.
    pub fn try_pop(&mut self) -> Result<T, EmptyContainer> {
        self.elements.pop_front().ok_or(EmptyContainer)
    }

    /// Removes the element at the front of the Queue.
    ///
    /// # Panics
    /// Panics if the Queue is empty.
    pub fn pop(&mut self) -> T {
        self.try_pop().throw()
    }

    pub fn try_peek_front(&self) -> Result<&T, EmptyContainer> {
        self.elements.try_peek_front()
    }

    /// Returns the element that would be popped next.
    ///
    /// # Panics
    /// Panics if the Queue is empty.
    pub fn peek_front(&self) -> &T {
        self.try_peek_front().throw()
    }

    pub fn contains_where<P: FnMut(&T) -> bool>(&self, predicate: P) -> bool {
        self.elements.contains_where(predicate)
    }

    pub fn filter<P: FnMut(&T) -> bool>(&mut self, predicate: P) -> usize {
        self.elements.filter(predicate)
    }

    /// Iterates in the order elements would be popped.
    pub fn iter(&self) -> list::Iter<'_, T> {
        self.elements.iter()
    }
}

impl<T: PartialEq> Queue<T> {
    pub fn contains(&self, value: &T) -> bool {
        self.elements.contains(value)
    }
}

impl<T: Ord> Queue<T> {
    /// Sorts the Queue so that the smallest element is popped first.
    pub fn sort(&mut self) {
        self.elements.sort();
    }
}

impl<T: Ord> Container<T> for Queue<T> {
    type Iter<'a> = list::Iter<'a, T> where T: 'a;

    type SerialIter<'a> = list::Iter<'a, T> where T: 'a;

    fn kind(&self) -> Kind {
        Kind::Queue
    }

    fn len(&self) -> usize {
        Queue::len(self)
    }

    fn contains(&self, value: &T) -> bool {
        Queue::contains(self, value)
    }

    fn contains_where<P: FnMut(&T) -> bool>(&self, predicate: P) -> bool {
        Queue::contains_where(self, predicate)
    }

    fn filter<P: FnMut(&T) -> bool>(&mut self, predicate: P) {
        Queue::filter(self, predicate);
    }

    fn sort(&mut self) {
        Queue::sort(self)
    }

    fn push(&mut self, value: T) {
        Queue::push(self, value)
    }

    fn try_pop(&mut self) -> Result<T, EmptyContainer> {
        Queue::try_pop(self)
    }

    fn iter<'a>(&'a self) -> Self::Iter<'a> {
        Queue::iter(self)
    }

    fn serial_iter<'a>(&'a self) -> Self::SerialIter<'a> {
        Queue::iter(self)
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Queue {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<T: PartialEq> PartialEq for Queue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl<T: Eq> Eq for Queue<T> {}

impl<T: Debug> Debug for Queue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Queue")
            .field("front", &self.elements.front())
            .field("elements", &self.elements)
            .finish()
    }
}
