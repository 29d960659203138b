use std::fmt::{self, Debug, Formatter};
use std::iter::FusedIterator;
use std::ptr;

use derive_more::IsVariant;

use super::{Backend, BackendIter, HeteroContainer};

/// One backend's contribution to a [`SortIter`]: the element currently on offer, and whatever
/// follows it.
struct Lane<'a, T> {
    head: Option<&'a T>,
    rest: BackendIter<'a, T>,
}

impl<'a, T> Lane<'a, T> {
    fn new(mut rest: BackendIter<'a, T>) -> Lane<'a, T> {
        Lane {
            head: rest.next(),
            rest,
        }
    }
}

impl<'a, T> Clone for Lane<'a, T> {
    fn clone(&self) -> Self {
        Lane {
            head: self.head,
            rest: self.rest.clone(),
        }
    }
}

/// A k-way merge over every backend of a [`HeteroContainer`].
///
/// Each step yields the smallest of the backends' current elements, preferring the earliest
/// backend on ties. The output is only sorted if every backend's own iteration is, which holds
/// after [`HeteroContainer::sort`].
///
/// Two iterators compare equal when they come from the same container, sit on the same backend
/// and have consumed the same number of elements. An exhausted iterator is therefore equal to
/// [`HeteroContainer::sorted_end`].
pub struct SortIter<'a, T> {
    source: &'a HeteroContainer<T>,
    lanes: Vec<Lane<'a, T>>,
    current: Option<usize>,
    processed: usize,
}

impl<'a, T: Ord> SortIter<'a, T> {
    pub(crate) fn new(source: &'a HeteroContainer<T>) -> SortIter<'a, T> {
        let mut iter = SortIter {
            source,
            lanes: source
                .backends
                .iter()
                .map(|backend| Lane::new(backend.iter()))
                .collect(),
            current: None,
            processed: 0,
        };
        iter.select();
        iter
    }

    pub(crate) fn end(source: &'a HeteroContainer<T>) -> SortIter<'a, T> {
        SortIter {
            source,
            lanes: Vec::new(),
            current: None,
            processed: source.len(),
        }
    }

    /// Picks the lane offering the strictly smallest head, so the earliest lane wins ties.
    fn select(&mut self) {
        let mut min: Option<&'a T> = None;
        self.current = None;

        for (index, lane) in self.lanes.iter().enumerate() {
            let Some(head) = lane.head else {
                continue;
            };

            if min.is_none_or(|min| head < min) {
                min = Some(head);
                self.current = Some(index);
            }
        }

        if self.current.is_some() {
            self.processed += 1;
        }
    }

    /// Returns the element the iterator is positioned on, without advancing.
    pub fn current(&self) -> Option<&'a T> {
        self.lanes.get(self.current?)?.head
    }

    /// Returns the index of the backend the current element belongs to.
    pub fn current_backend(&self) -> Option<usize> {
        self.current
    }

    /// Returns the number of elements reached so far, counting the current one.
    pub fn processed(&self) -> usize {
        self.processed
    }

    pub fn is_end(&self) -> bool {
        self.current.is_none()
    }

    /// Moves past the current element. Does nothing once the iterator is exhausted.
    pub fn advance(&mut self) {
        let Some(lane) = self.current.and_then(|index| self.lanes.get_mut(index)) else {
            return;
        };

        lane.head = lane.rest.next();
        self.select();
    }
}

impl<'a, T: Ord> Iterator for SortIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.current()?;
        self.advance();
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match self.current {
            Some(_) => (self.source.len() + 1).saturating_sub(self.processed),
            None => 0,
        };
        (remaining, Some(remaining))
    }
}

impl<'a, T: Ord> FusedIterator for SortIter<'a, T> {}

impl<'a, T: Ord> ExactSizeIterator for SortIter<'a, T> {}

impl<'a, T> PartialEq for SortIter<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.source, other.source)
            && self.current == other.current
            && self.processed == other.processed
    }
}

impl<'a, T> Eq for SortIter<'a, T> {}

impl<'a, T> Clone for SortIter<'a, T> {
    fn clone(&self) -> Self {
        SortIter {
            source: self.source,
            lanes: self.lanes.clone(),
            current: self.current,
            processed: self.processed,
        }
    }
}

impl<'a, T: Debug> Debug for SortIter<'a, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortIter")
            .field("current", &self.current.and_then(|index| self.lanes.get(index)?.head))
            .field("backend", &self.current)
            .field("processed", &self.processed)
            .finish()
    }
}

/// The order in which a [`SpecificIter`] moves between backends.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum Traversal {
    /// Exhaust each backend before moving on to the next.
    #[default]
    Depth,
    /// Take one element from each non-exhausted backend in turn.
    Breadth,
}

/// Visits every element of a [`HeteroContainer`] backend by backend, without merging. Each
/// backend is walked in the order it would be written out, so the tree yields pre-order.
pub struct SpecificIter<'a, T> {
    lanes: Vec<BackendIter<'a, T>>,
    traversal: Traversal,
    next_lane: usize,
}

impl<'a, T> SpecificIter<'a, T> {
    pub(crate) fn new(source: &'a HeteroContainer<T>, traversal: Traversal) -> SpecificIter<'a, T> {
        SpecificIter {
            lanes: source
                .backends
                .iter()
                .map(Backend::serial_iter)
                .collect(),
            traversal,
            next_lane: 0,
        }
    }

    pub fn traversal(&self) -> Traversal {
        self.traversal
    }
}

impl<'a, T> Iterator for SpecificIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        match self.traversal {
            Traversal::Depth => {
                while let Some(lane) = self.lanes.get_mut(self.next_lane) {
                    if let Some(value) = lane.next() {
                        return Some(value);
                    }
                    self.next_lane += 1;
                }
                None
            },
            Traversal::Breadth => {
                let count = self.lanes.len();

                for step in 0..count {
                    let index = (self.next_lane + step) % count;
                    if let Some(value) = self.lanes[index].next() {
                        self.next_lane = (index + 1) % count;
                        return Some(value);
                    }
                }
                None
            },
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.lanes.iter().map(|lane| lane.len()).sum();
        (remaining, Some(remaining))
    }
}

impl<'a, T> FusedIterator for SpecificIter<'a, T> {}

impl<'a, T> ExactSizeIterator for SpecificIter<'a, T> {}

impl<'a, T> Clone for SpecificIter<'a, T> {
    fn clone(&self) -> Self {
        SpecificIter {
            lanes: self.lanes.clone(),
            traversal: self.traversal,
            next_lane: self.next_lane,
        }
    }
}
