use std::fmt::{self, Debug, Display, Formatter};
use std::marker::PhantomData;
use std::mem;
use std::num::NonZero;

use super::{Iter, Node, NodePtr};
use crate::collections::traits::{Container, Kind};
#[doc(inline)]
pub use crate::util::error::{CapacityOverflow, EmptyContainer};
use crate::util::result::ResultExtension;

/// A list with links in both directions. Both ends can be pushed to or popped from in constant
/// time, which is what [`Stack`](crate::collections::linked::Stack) and
/// [`Queue`](crate::collections::linked::Queue) are built on.
///
/// As a [`Container`], the list pushes and pops at the front.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the LinkedList.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front/back` | `O(1)` |
/// | `push_front/back` | `O(1)` |
/// | `pop_front/back` | `O(1)` |
/// | `contains` | `O(n)` |
/// | `filter` | `O(n)` |
/// | `sort` | `O(n^2)`, `O(n)` if already sorted |
pub struct LinkedList<T> {
    pub(crate) state: ListState<T>,
    pub(crate) _phantom: PhantomData<T>,
}

pub(crate) enum ListState<T> {
    Empty,
    Full(ListContents<T>),
}

use ListState::*;

pub(crate) struct ListContents<T> {
    pub len: NonZero<usize>,
    pub head: NodePtr<T>,
    pub tail: NodePtr<T>,
}

impl<T> LinkedList<T> {
    /// Creates a new LinkedList with no elements.
    pub const fn new() -> LinkedList<T> {
        LinkedList {
            state: Empty,
            _phantom: PhantomData,
        }
    }

    /// Returns the length of the LinkedList.
    pub const fn len(&self) -> usize {
        self.state.len()
    }

    /// Returns true if the LinkedList contains no elements.
    pub const fn is_empty(&self) -> bool {
        matches!(self.state, Empty)
    }

    /// Returns a reference to the first element in the list, if it exists.
    pub fn front(&self) -> Option<&T> {
        match &self.state {
            Empty => None,
            Full(ListContents { head, .. }) => Some(head.value()),
        }
    }

    /// Returns a reference to the last element in the list, if it exists.
    pub fn back(&self) -> Option<&T> {
        match &self.state {
            Empty => None,
            Full(ListContents { tail, .. }) => Some(tail.value()),
        }
    }

    /// Returns a reference to the first element, or an [`Err`] if the list is empty.
    pub fn try_peek_front(&self) -> Result<&T, EmptyContainer> {
        self.front().ok_or(EmptyContainer)
    }

    /// Returns a reference to the first element.
    ///
    /// # Panics
    /// Panics if the list is empty.
    pub fn peek_front(&self) -> &T {
        self.try_peek_front().throw()
    }

    /// Returns a reference to the last element, or an [`Err`] if the list is empty.
    pub fn try_peek_back(&self) -> Result<&T, EmptyContainer> {
        self.back().ok_or(EmptyContainer)
    }

    /// Returns a reference to the last element.
    ///
    /// # Panics
    /// Panics if the list is empty.
    pub fn peek_back(&self) -> &T {
        self.try_peek_back().throw()
    }

    /// Add the provided element to the front of the LinkedList.
    pub fn push_front(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = ListState::single(value),
            Full(contents) => contents.push_front(value),
        }
    }

    /// Add the provided element to the back of the LinkedList.
    pub fn push_back(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = ListState::single(value),
            Full(contents) => contents.push_back(value),
        }
    }

    /// Removes the first element from the list and returns it, if the list isn't empty.
    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.state.head()?;
        // SAFETY: The head is a live node of this list.
        Some(unsafe { self.unlink(head) })
    }

    /// Removes the last element from the list and returns it, if the list isn't empty.
    pub fn pop_back(&mut self) -> Option<T> {
        let tail = self.state.tail()?;
        // SAFETY: The tail is a live node of this list.
        Some(unsafe { self.unlink(tail) })
    }

    /// Returns true if any element in the list satisfies `predicate`, scanning from the front.
    pub fn contains_where<P: FnMut(&T) -> bool>(&self, predicate: P) -> bool {
        self.iter().any(predicate)
    }

    /// Removes every element satisfying `predicate` in a single pass from front to back, returning
    /// the number of elements removed. The order of the remaining elements is unchanged.
    pub fn filter<P: FnMut(&T) -> bool>(&mut self, mut predicate: P) -> usize {
        let mut removed = 0;
        let mut curr = self.state.head();

        while let Some(ptr) = curr {
            // Read the successor before the node can be freed.
            curr = ptr.next();
            if predicate(ptr.value()) {
                // SAFETY: ptr was reached by walking this list and hasn't been unlinked yet.
                drop(unsafe { self.unlink(ptr) });
                removed += 1;
            }
        }

        removed
    }

    /// Removes all elements from the list.
    pub fn clear(&mut self) {
        *self = LinkedList::new();
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Detaches a node from its neighbours, fixing up the head, tail and length, and returns its
    /// value.
    ///
    /// # Safety
    /// `ptr` must be a live node belonging to this list.
    pub(crate) unsafe fn unlink(&mut self, ptr: NodePtr<T>) -> T {
        // SAFETY: Guaranteed by the caller. The neighbours are relinked below, so no dangling
        // pointer to this node remains.
        let node = unsafe { ptr.take_node() };

        if let Some(prev) = node.prev {
            prev.set_next(node.next);
        }
        if let Some(next) = node.next {
            next.set_prev(node.prev);
        }

        if let Full(contents) = &mut self.state {
            match NonZero::new(contents.len.get() - 1) {
                Some(new_len) => {
                    contents.len = new_len;
                    match (node.prev, node.next) {
                        (None, Some(next)) => contents.head = next,
                        (Some(prev), None) => contents.tail = prev,
                        _ => {},
                    }
                },
                None => self.state = Empty,
            }
        }

        node.value
    }

    #[allow(dead_code)]
    pub(crate) fn verify_double_links(&self) {
        if let Full(ListContents { head, tail, len }) = &self.state {
            let mut count = 1;
            let mut curr = *head;
            assert!(head.prev().is_none(), "The head should have no previous node.");
            while let Some(next) = curr.next() {
                assert!(next.prev() == Some(curr), "Every next node should link back.");
                curr = next;
                count += 1;
            }
            assert!(*tail == curr, "The tail should be the last reachable node.");
            assert_eq!(count, len.get(), "The length should match the reachable nodes.");
        }
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Returns true if an element equal to `value` is in the list.
    pub fn contains(&self, value: &T) -> bool {
        self.iter().any(|i| i == value)
    }
}

impl<T: Ord> LinkedList<T> {
    /// Sorts the list into non-decreasing order, keeping equal elements in their original order.
    ///
    /// Elements are taken from the back of a pending list and inserted into the sorted result by
    /// comparing against its front. Anything smaller is parked back on the pending list, which
    /// keeps the moves down to one comparison per element when the list is already sorted.
    pub fn sort(&mut self) {
        let mut pending = mem::take(self);

        while let Some(value) = pending.pop_back() {
            while self.front().is_some_and(|front| *front < value) {
                if let Some(smaller) = self.pop_front() {
                    pending.push_back(smaller);
                }
            }
            self.push_front(value);
        }
    }
}

impl<T> ListContents<T> {
    pub fn push_front(&mut self, value: T) {
        self.len = self.len.checked_add(1).ok_or(CapacityOverflow).throw();

        let node = NodePtr::from_node(Node {
            value,
            prev: None,
            next: Some(self.head),
        });

        self.head.set_prev(Some(node));
        self.head = node;
    }

    pub fn push_back(&mut self, value: T) {
        self.len = self.len.checked_add(1).ok_or(CapacityOverflow).throw();

        let node = NodePtr::from_node(Node {
            value,
            prev: Some(self.tail),
            next: None,
        });

        self.tail.set_next(Some(node));
        self.tail = node;
    }

    pub fn wrap_one(value: T) -> ListContents<T> {
        let node = NodePtr::from_node(Node {
            value,
            prev: None,
            next: None,
        });

        ListContents {
            len: NonZero::<usize>::MIN,
            head: node,
            tail: node,
        }
    }
}

impl<T> ListState<T> {
    pub fn single(value: T) -> ListState<T> {
        Full(ListContents::wrap_one(value))
    }

    pub const fn len(&self) -> usize {
        match self {
            Empty => 0,
            Full(ListContents { len, .. }) => len.get(),
        }
    }

    pub fn head(&self) -> Option<NodePtr<T>> {
        match self {
            Empty => None,
            Full(ListContents { head, .. }) => Some(*head),
        }
    }

    pub fn tail(&self) -> Option<NodePtr<T>> {
        match self {
            Empty => None,
            Full(ListContents { tail, .. }) => Some(*tail),
        }
    }
}

// Shallow copies, only used by the borrowing iterators.
impl<T> Clone for ListContents<T> {
    fn clone(&self) -> Self {
        ListContents {
            len: self.len,
            head: self.head,
            tail: self.tail,
        }
    }
}

impl<T> Clone for ListState<T> {
    fn clone(&self) -> Self {
        match self {
            Empty => Empty,
            Full(contents) => Full(contents.clone()),
        }
    }
}

impl<T: Ord> Container<T> for LinkedList<T> {
    type Iter<'a> = Iter<'a, T> where T: 'a;

    type SerialIter<'a> = Iter<'a, T> where T: 'a;

    fn kind(&self) -> Kind {
        Kind::LinkedList
    }

    fn len(&self) -> usize {
        LinkedList::len(self)
    }

    fn contains(&self, value: &T) -> bool {
        LinkedList::contains(self, value)
    }

    fn contains_where<P: FnMut(&T) -> bool>(&self, predicate: P) -> bool {
        LinkedList::contains_where(self, predicate)
    }

    fn filter<P: FnMut(&T) -> bool>(&mut self, predicate: P) {
        LinkedList::filter(self, predicate);
    }

    fn sort(&mut self) {
        LinkedList::sort(self)
    }

    fn push(&mut self, value: T) {
        self.push_front(value)
    }

    fn try_pop(&mut self) -> Result<T, EmptyContainer> {
        self.pop_front().ok_or(EmptyContainer)
    }

    fn iter<'a>(&'a self) -> Self::Iter<'a> {
        LinkedList::iter(self)
    }

    fn serial_iter<'a>(&'a self) -> Self::SerialIter<'a> {
        LinkedList::iter(self)
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        let mut curr = self.state.head();
        while let Some(ptr) = curr {
            curr = ptr.next();
            // SAFETY: Each node is visited exactly once and the list is never used again.
            drop(unsafe { ptr.take_node() });
        }
        self.state = Empty;
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Debug> Display for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({})",
            self.iter()
                .map(|i| format!("{i:?}"))
                .collect::<Vec<String>>()
                .join(") <-> (")
        )
    }
}
