use std::fmt::{self, Debug, Formatter};
use std::mem;

use super::{Branch, Iter, PreOrderIter};
use crate::collections::traits::{Container, Kind};
#[doc(inline)]
pub use crate::util::error::EmptyContainer;
use crate::util::result::ResultExtension;

/// An ordered collection stored as a plain binary search tree. Values smaller than a node are kept
/// to its left, while values greater than or equal to it are kept to its right.
///
/// No balancing happens as elements are inserted or removed, so the depth can degrade to `n` for
/// sorted input. Every traversal walks the tree with a loop or an explicit stack, so a degenerate
/// tree costs time but never overflows the call stack. [`sort`](BinarySearchTree::sort) is the only operation which restores a balanced
/// shape, by rebuilding the whole tree.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the tree.
/// - `d`: The current depth of the tree, between `log2 n` and `n`.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(d)` |
/// | `remove` | `O(d)` per occurrence |
/// | `contains` | `O(d)` |
/// | `contains_where` | `O(n)` |
/// | `filter` | `O(n * d)` |
/// | `clone` | `O(n)` |
/// | `sort` | `O(n)` |
/// | `pop` | `O(d)` |
pub struct BinarySearchTree<T> {
    pub(crate) root: Branch<T>,
    pub(crate) len: usize,
}

impl<T> BinarySearchTree<T> {
    /// Creates a new, empty tree.
    pub const fn new() -> BinarySearchTree<T> {
        BinarySearchTree {
            root: Branch::empty(),
            len: 0,
        }
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the value stored at the root, which is the element [`pop`](BinarySearchTree::pop)
    /// would remove.
    pub fn root(&self) -> Option<&T> {
        self.root.as_ref().map(|node| &node.value)
    }

    /// Returns the number of nodes on the longest path from the root to a leaf.
    pub fn height(&self) -> usize {
        self.root.height()
    }

    /// Removes the root and returns its value, or returns an [`Err`] if the tree is empty.
    ///
    /// Note that the root is an arbitrary element rather than the minimum: after a
    /// [`sort`](BinarySearchTree::sort) it is the median.
    pub fn try_pop(&mut self) -> Result<T, EmptyContainer> {
        let value = self.root.take_here().ok_or(EmptyContainer)?;
        self.len -= 1;
        Ok(value)
    }

    /// Removes the root and returns its value.
    ///
    /// # Panics
    /// Panics if the tree is empty.
    pub fn pop(&mut self) -> T {
        self.try_pop().throw()
    }

    /// Returns true if any element satisfies `predicate`, stopping at the first match.
    pub fn contains_where<P: FnMut(&T) -> bool>(&self, predicate: P) -> bool {
        self.pre_order_iter().any(predicate)
    }

    /// Removes every element satisfying `predicate`, returning how many were removed.
    pub fn filter<P: FnMut(&T) -> bool>(&mut self, mut predicate: P) -> usize {
        self.root.filter(&mut predicate, &mut self.len)
    }

    /// Removes all elements from the tree.
    pub fn clear(&mut self) {
        *self = BinarySearchTree::new();
    }

    /// Returns an iterator over all elements in sorted order.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Returns an iterator over all elements in pre-order: each node, then its left subtree, then
    /// its right subtree.
    pub fn pre_order_iter(&self) -> PreOrderIter<'_, T> {
        PreOrderIter::new(&self.root, self.len)
    }
}

impl<T: Ord> BinarySearchTree<T> {
    /// Inserts `value`, descending left for smaller nodes and right otherwise.
    pub fn insert(&mut self, value: T) {
        self.root.insert(value);
        self.len += 1;
    }

    /// Returns true if an element equal to `value` is stored, following a single path from the
    /// root.
    pub fn contains(&self, value: &T) -> bool {
        self.root.contains(value)
    }

    /// Removes every element equal to `value`, returning the number of elements removed.
    pub fn remove(&mut self, value: &T) -> usize {
        self.root.remove(value, true, &mut self.len)
    }

    /// Removes a single element equal to `value`, returning true if one was found.
    pub fn remove_one(&mut self, value: &T) -> bool {
        self.root.remove(value, false, &mut self.len) != 0
    }

    /// Rebuilds the tree into a balanced shape.
    ///
    /// The elements are drained in sorted order and the tree is rebuilt by repeatedly splitting
    /// the sorted sequence at its midpoint, giving a height of `floor(log2 n) + 1`.
    pub fn sort(&mut self) {
        let len = self.len;
        let mut sorted = mem::take(self).into_iter();
        self.root = Branch::from_sorted(&mut sorted, len);
        self.len = len;
    }
}

impl<T: Ord> Container<T> for BinarySearchTree<T> {
    type Iter<'a> = Iter<'a, T> where T: 'a;

    type SerialIter<'a> = PreOrderIter<'a, T> where T: 'a;

    fn kind(&self) -> Kind {
        Kind::BinarySearchTree
    }

    fn len(&self) -> usize {
        BinarySearchTree::len(self)
    }

    fn contains(&self, value: &T) -> bool {
        BinarySearchTree::contains(self, value)
    }

    fn contains_where<P: FnMut(&T) -> bool>(&self, predicate: P) -> bool {
        BinarySearchTree::contains_where(self, predicate)
    }

    fn filter<P: FnMut(&T) -> bool>(&mut self, predicate: P) {
        BinarySearchTree::filter(self, predicate);
    }

    fn sort(&mut self) {
        BinarySearchTree::sort(self)
    }

    fn push(&mut self, value: T) {
        self.insert(value)
    }

    fn try_pop(&mut self) -> Result<T, EmptyContainer> {
        BinarySearchTree::try_pop(self)
    }

    fn iter<'a>(&'a self) -> Self::Iter<'a> {
        BinarySearchTree::iter(self)
    }

    fn serial_iter<'a>(&'a self) -> Self::SerialIter<'a> {
        self.pre_order_iter()
    }
}

impl<T: Ord> FromIterator<T> for BinarySearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = BinarySearchTree::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for BinarySearchTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for BinarySearchTree<T> {
    fn clone(&self) -> Self {
        BinarySearchTree {
            root: self.root.clone(),
            len: self.len,
        }
    }
}

impl<T: Debug> Debug for BinarySearchTree<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinarySearchTree")
            .field("nodes", &format_args!("\n{:?}\n", &self.root))
            .field("len", &self.len)
            .finish()
    }
}
