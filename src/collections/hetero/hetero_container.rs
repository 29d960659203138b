use std::fmt::{self, Debug, Formatter};

use super::{Backend, NoContainers, SortIter, SpecificIter, Traversal};
use crate::collections::traits::{Container, Kind};
use crate::util::result::ResultExtension;

/// A collection made up of any number of backends of any [`Kind`], presented as a single
/// multiset.
///
/// Backends are added explicitly with [`add_container`](HeteroContainer::add_container) and are
/// never removed, so their order and kinds stay fixed. Elements are always routed to the backend
/// holding the fewest elements, with ties going to the earliest one.
///
/// Ordered iteration via [`iter`](HeteroContainer::iter) merges the backends and is only ordered
/// once [`sort`](HeteroContainer::sort) has been called since the last insertion.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The total number of elements.
/// - `k`: The number of backends.
///
/// | Method | Complexity |
/// |-|-|
/// | `add_container` | `O(1)`* |
/// | `add_element` | `O(k)` plus the backend's insertion |
/// | `len` | `O(k)` |
/// | `contains` | `O(n)` |
/// | `filter` | `O(n)` plus each backend's removal cost |
/// | `sort` | the sum of each backend's sort |
/// | `iter` (full pass) | `O(n * k)` |
pub struct HeteroContainer<T> {
    pub(crate) backends: Vec<Backend<T>>,
}

impl<T> HeteroContainer<T> {
    /// Creates a new container with no backends.
    pub const fn new() -> HeteroContainer<T> {
        HeteroContainer {
            backends: Vec::new(),
        }
    }

    /// Appends a new, empty backend of the given kind.
    pub fn add_container(&mut self, kind: Kind) {
        log::debug!("adding {kind} backend at index {}", self.backends.len());
        self.backends.push(Backend::new(kind));
    }

    /// Returns the number of backends, regardless of how many elements they hold.
    pub fn container_count(&self) -> usize {
        self.backends.len()
    }

    /// Returns the total number of elements across all backends.
    pub fn len(&self) -> usize {
        self.backends.iter().map(Backend::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.backends.iter().all(Backend::is_empty)
    }

    /// Returns the kind of each backend, in the order they were added.
    pub fn kinds(&self) -> impl Iterator<Item = Kind> + '_ {
        self.backends.iter().map(Backend::kind)
    }

    pub fn get(&self, index: usize) -> Option<&Backend<T>> {
        self.backends.get(index)
    }

    pub fn backends(&self) -> &[Backend<T>] {
        &self.backends
    }

    /// Returns an iterator which visits every backend in turn without merging, see
    /// [`Traversal`] for the available orders.
    pub fn specific_iter(&self, traversal: Traversal) -> SpecificIter<'_, T> {
        SpecificIter::new(self, traversal)
    }
}

impl<T: Ord> HeteroContainer<T> {
    /// Adds `value` to the backend holding the fewest elements, or returns an [`Err`] if there
    /// are no backends to add it to.
    pub fn try_add_element(&mut self, value: T) -> Result<(), NoContainers> {
        let (index, backend) = self
            .backends
            .iter_mut()
            .enumerate()
            .min_by_key(|(_, backend)| backend.len())
            .ok_or(NoContainers)?;

        log::trace!("routing element to {} backend at index {index}", backend.kind());
        backend.push(value);
        Ok(())
    }

    /// Adds `value` to the backend holding the fewest elements.
    ///
    /// # Panics
    /// Panics if no backends have been added.
    pub fn add_element(&mut self, value: T) {
        self.try_add_element(value).throw()
    }

    /// Returns true if any backend holds an element equal to `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.backends.iter().any(|backend| backend.contains(value))
    }

    /// Returns true if any element in any backend satisfies `predicate`.
    pub fn contains_where<P: FnMut(&T) -> bool>(&self, mut predicate: P) -> bool {
        self.backends
            .iter()
            .any(|backend| backend.contains_where(&mut predicate))
    }

    /// Removes every element satisfying `predicate` from every backend.
    pub fn filter<P: FnMut(&T) -> bool>(&mut self, mut predicate: P) {
        let before = self.len();

        for backend in &mut self.backends {
            backend.filter(&mut predicate);
        }

        log::debug!("filter removed {} elements", before - self.len());
    }

    /// Sorts every backend according to its own notion of sorted, after which
    /// [`iter`](HeteroContainer::iter) yields every element in non-decreasing order.
    pub fn sort(&mut self) {
        log::debug!("sorting {} backends", self.backends.len());

        for backend in &mut self.backends {
            backend.sort();
        }
    }

    /// Returns an iterator which merges the backends, repeatedly yielding the smallest of their
    /// current elements.
    pub fn iter(&self) -> SortIter<'_, T> {
        SortIter::new(self)
    }

    /// Returns the exhausted position of [`iter`](HeteroContainer::iter), which any iterator over
    /// this container compares equal to once it has yielded everything.
    pub fn sorted_end(&self) -> SortIter<'_, T> {
        SortIter::end(self)
    }

    /// Returns an iterator positioned at the first element equal to `value` in merged order.
    ///
    /// The search stops early at the first element greater than `value`, in which case the
    /// result equals [`sorted_end`](HeteroContainer::sorted_end), as it does when no match exists.
    pub fn seek(&self, value: &T) -> SortIter<'_, T> {
        let mut iter = self.iter();

        while let Some(current) = iter.current() {
            if current == value {
                return iter;
            } else if current > value {
                break;
            }
            iter.advance();
        }

        self.sorted_end()
    }
}

impl<'a, T: Ord> IntoIterator for &'a HeteroContainer<T> {
    type Item = &'a T;

    type IntoIter = SortIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Default for HeteroContainer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for HeteroContainer<T> {
    fn clone(&self) -> Self {
        HeteroContainer {
            backends: self.backends.clone(),
        }
    }
}

impl<T: Debug> Debug for HeteroContainer<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.backends).finish()
    }
}
