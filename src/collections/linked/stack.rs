use std::fmt::{self, Debug, Formatter};

use super::list::{self, LinkedList};
use crate::collections::traits::{Container, Kind};
use crate::util::error::EmptyContainer;
use crate::util::result::ResultExtension;

/// A last in, first out collection, pushing and popping at the front of a [`LinkedList`].
///
/// Sorting a Stack reorders the underlying list, so after [`sort`](Stack::sort) elements are
/// popped in ascending order rather than in reverse insertion order.
#[derive(Clone, PartialEq, Eq)]
pub struct Stack<T> {
    pub(crate) elements: LinkedList<T>,
}

impl<T> Stack<T> {
    /// Creates a new, empty Stack.
    pub const fn new() -> Stack<T> {
        Stack {
            elements: LinkedList::new(),
        }
    }

    pub const fn len(&self) -> usize {
        self.elements.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Places `value` on top of the Stack.
    pub fn push(&mut self, value: T) {
        self.elements.push_front(value);
    }

    /// Removes the top element, returning an [`Err`] if the Stack is empty.
    pub fn try_pop(&mut self) -> Result<T, EmptyContainer> {
        self.elements.pop_front().ok_or(EmptyContainer)
    }

    /// Removes the top element.
    ///
    /// # Panics
    /// Panics if the Stack is empty.
    pub fn pop(&mut self) -> T {
        self.try_pop().throw()
    }

    /// Returns the top element, or an [`Err`] if the Stack is empty.
    pub fn try_top(&self) -> Result<&T, EmptyContainer> {
        self.elements.try_peek_front()
    }

    /// Returns the top element.
    ///
    /// # Panics
    /// Panics if the Stack is empty.
    pub fn top(&self) -> &T {
        self.try_top().throw()
    }

    pub fn contains_where<P: FnMut(&T) -> bool>(&self, predicate: P) -> bool {
        self.elements.contains_where(predicate)
    }

    /// Removes every element satisfying `predicate`, returning how many were removed.
    pub fn filter<P: FnMut(&T) -> bool>(&mut self, predicate: P) -> usize {
        self.elements.filter(predicate)
    }

    /// Iterates from the top of the Stack to the bottom.
    pub fn iter(&self) -> list::Iter<'_, T> {
        self.elements.iter()
    }
}

impl<T: PartialEq> Stack<T> {
    pub fn contains(&self, value: &T) -> bool {
        self.elements.contains(value)
    }
}

impl<T: Ord> Stack<T> {
    /// Sorts the Stack so that the smallest element is on top.
    pub fn sort(&mut self) {
        self.elements.sort();
    }
}

impl<T: Ord> Container<T> for Stack<T> {
    type Iter<'a> = list::Iter<'a, T> where T: 'a;

    type SerialIter<'a> = list::Iter<'a, T> where T: 'a;

    fn kind(&self) -> Kind {
        Kind::Stack
    }

    fn len(&self) -> usize {
        Stack::len(self)
    }

    fn contains(&self, value: &T) -> bool {
        Stack::contains(self, value)
    }

    fn contains_where<P: FnMut(&T) -> bool>(&self, predicate: P) -> bool {
        Stack::contains_where(self, predicate)
    }

    fn filter<P: FnMut(&T) -> bool>(&mut self, predicate: P) {
        Stack::filter(self, predicate);
    }

    fn sort(&mut self) {
        Stack::sort(self)
    }

    fn push(&mut self, value: T) {
        Stack::push(self, value)
    }

    fn try_pop(&mut self) -> Result<T, EmptyContainer> {
        Stack::try_pop(self)
    }

    fn iter<'a>(&'a self) -> Self::Iter<'a> {
        Stack::iter(self)
    }

    fn serial_iter<'a>(&'a self) -> Self::SerialIter<'a> {
        Stack::iter(self)
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Stack::new();
        for item in iter {
            stack.push(item);
        }
        stack
    }
}

impl<T: Debug> Debug for Stack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack")
            .field("top", &self.elements.front())
            .field("elements", &self.elements)
            .finish()
    }
}
