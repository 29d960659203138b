use std::iter::FusedIterator;

use super::{BinarySearchTree, Branch, Node};

/// Whether a frame on the traversal stack still needs its children expanded, or is ready to be
/// yielded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Visit {
    Descend,
    Ready,
}

/// A borrowed in-order iterator, yielding elements in sorted order.
///
/// The traversal is driven by an explicit stack of frames rather than recursion, so it can be
/// paused after any element and cloned to resume independently.
pub struct Iter<'a, T> {
    pub(crate) stack: Vec<(&'a Node<T>, Visit)>,
    pub(crate) remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(root: &'a Branch<T>, len: usize) -> Iter<'a, T> {
        Iter {
            stack: root.as_deref().map(|node| (node, Visit::Descend)).into_iter().collect(),
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, visit)) = self.stack.pop() {
            match visit {
                Visit::Ready => {
                    self.remaining = self.remaining.saturating_sub(1);
                    return Some(&node.value);
                },
                Visit::Descend => {
                    if let Some(right) = node.right.as_deref() {
                        self.stack.push((right, Visit::Descend));
                    }
                    self.stack.push((node, Visit::Ready));
                    if let Some(left) = node.left.as_deref() {
                        self.stack.push((left, Visit::Descend));
                    }
                },
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> FusedIterator for Iter<'a, T> {}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Iter {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, T> IntoIterator for &'a BinarySearchTree<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter::new(&self.root, self.len)
    }
}

/// A borrowed pre-order iterator, yielding each node before its left and then right subtree.
/// Inserting the yielded elements into an empty tree in order rebuilds the same shape.
pub struct PreOrderIter<'a, T> {
    pub(crate) stack: Vec<&'a Node<T>>,
    pub(crate) remaining: usize,
}

impl<'a, T> PreOrderIter<'a, T> {
    pub(crate) fn new(root: &'a Branch<T>, len: usize) -> PreOrderIter<'a, T> {
        PreOrderIter {
            stack: root.as_deref().into_iter().collect(),
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for PreOrderIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if let Some(right) = node.right.as_deref() {
            self.stack.push(right);
        }
        if let Some(left) = node.left.as_deref() {
            self.stack.push(left);
        }
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> FusedIterator for PreOrderIter<'a, T> {}

impl<'a, T> ExactSizeIterator for PreOrderIter<'a, T> {}

impl<'a, T> Clone for PreOrderIter<'a, T> {
    fn clone(&self) -> Self {
        PreOrderIter {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<T> IntoIterator for BinarySearchTree<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let mut iter = IntoIter {
            stack: Vec::new(),
            remaining: self.len,
        };
        iter.push_left_spine(self.root);
        iter
    }
}

/// An owned in-order iterator. Nodes are detached from the tree as they are reached, so the
/// remaining elements are still released without recursion if the iterator is dropped early.
pub struct IntoIter<T> {
    pub(crate) stack: Vec<Box<Node<T>>>,
    pub(crate) remaining: usize,
}

impl<T> IntoIter<T> {
    fn push_left_spine(&mut self, mut branch: Branch<T>) {
        while let Some(mut node) = branch.0.take() {
            branch = node.left.take();
            self.stack.push(node);
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let mut node = self.stack.pop()?;
        let right = node.right.take();
        self.push_left_spine(right);
        self.remaining = self.remaining.saturating_sub(1);
        Some(node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {}
