use super::Kind;
#[doc(inline)]
pub use crate::util::error::EmptyContainer;
use crate::util::result::ResultExtension;

/// The operations shared by every backend: membership tests, bulk removal, sorting and a pair of
/// push / pop methods whose exact position depends on the implementor.
///
/// Iteration comes in two flavours:
/// - [`iter`](Container::iter) is the regular order. For a tree this is sorted, for everything
///   else it is front to back.
/// - [`serial_iter`](Container::serial_iter) is the order used when writing a backend out, chosen
///   so that pushing the yielded elements into an empty backend of the same kind reproduces an
///   equivalent structure.
///
/// Both iterators are [`Clone`], so a position can be saved and resumed independently.
pub trait Container<T: Ord> {
    type Iter<'a>: Iterator<Item = &'a T> + Clone where Self: 'a, T: 'a;

    type SerialIter<'a>: Iterator<Item = &'a T> + Clone where Self: 'a, T: 'a;

    /// The kind tag identifying this backend.
    fn kind(&self) -> Kind;

    /// Returns the number of elements held.
    fn len(&self) -> usize;

    /// Returns true if no elements are held.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if an element equal to `value` is held.
    fn contains(&self, value: &T) -> bool;

    /// Returns true if any element satisfies `predicate`.
    fn contains_where<P: FnMut(&T) -> bool>(&self, predicate: P) -> bool;

    /// Removes every element which satisfies `predicate`, keeping the relative order of the
    /// remaining elements.
    fn filter<P: FnMut(&T) -> bool>(&mut self, predicate: P);

    /// Reorders the elements so that the regular iterator yields them in non-decreasing order.
    fn sort(&mut self);

    /// Adds an element.
    fn push(&mut self, value: T);

    /// Removes an element, returning an [`Err`] if the container is empty.
    fn try_pop(&mut self) -> Result<T, EmptyContainer>;

    /// Removes an element.
    ///
    /// # Panics
    /// Panics if the container is empty.
    fn pop(&mut self) -> T {
        self.try_pop().throw()
    }

    /// Returns an iterator over all elements in regular order.
    fn iter<'a>(&'a self) -> Self::Iter<'a>;

    /// Returns an iterator over all elements in serialization order.
    fn serial_iter<'a>(&'a self) -> Self::SerialIter<'a>;
}
