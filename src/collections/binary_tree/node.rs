use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};
use std::mem;
use std::ops::{Deref, DerefMut};

use super::iter::Visit;

/// A single owned edge of the tree. Every node is owned by exactly one Branch, either the root or
/// one of its parent's children.
pub(crate) struct Branch<T>(pub Option<Box<Node<T>>>);

pub(crate) struct Node<T> {
    pub left: Branch<T>,
    pub right: Branch<T>,
    pub value: T,
}

impl<T> Node<T> {
    pub const fn leaf(value: T) -> Node<T> {
        Node {
            left: Branch(None),
            right: Branch(None),
            value,
        }
    }
}

impl<T> Branch<T> {
    pub const fn empty() -> Branch<T> {
        Branch(None)
    }

    pub fn take(&mut self) -> Branch<T> {
        Branch(self.0.take())
    }

    /// Removes the node at this position, returning its value. The node is replaced by its only
    /// child, or when both children exist, by the value of its in-order successor.
    pub fn take_here(&mut self) -> Option<T> {
        let mut node = self.0.take()?;

        match (node.left.0.take(), node.right.0.take()) {
            (None, right) => {
                self.0 = right;
                Some(node.value)
            },
            (left, None) => {
                self.0 = left;
                Some(node.value)
            },
            (left, right) => {
                node.left.0 = left;
                node.right.0 = right;
                // The right subtree isn't empty, so it always has a first value.
                let successor = node.right.take_first()?;
                let value = mem::replace(&mut node.value, successor);
                self.0 = Some(node);
                Some(value)
            },
        }
    }

    /// Removes the leftmost node below this position, returning its value.
    pub fn take_first(&mut self) -> Option<T> {
        let mut cursor = self;

        loop {
            let current = cursor;
            if current.0.as_ref().is_none_or(|node| node.left.is_none()) {
                return current.take_here();
            }

            let Some(node) = &mut current.0 else {
                return None;
            };
            cursor = &mut node.left;
        }
    }

    /// Builds a balanced subtree from the next `len` values of an ascending iterator, splitting at
    /// the midpoint so that the left side receives `(len - 1) / 2` values.
    pub fn from_sorted<I: Iterator<Item = T>>(values: &mut I, len: usize) -> Branch<T> {
        if len == 0 {
            return Branch(None);
        }

        let left_len = (len - 1) / 2;
        let left = Branch::from_sorted(values, left_len);
        match values.next() {
            Some(value) => {
                let right = Branch::from_sorted(values, len - 1 - left_len);
                Branch(Some(Box::new(Node { left, right, value })))
            },
            None => left,
        }
    }

    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(&Node<T>, usize)> =
            self.0.as_deref().map(|node| (node, 1)).into_iter().collect();

        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left.0.as_deref().map(|left| (left, depth + 1)));
            stack.extend(node.right.0.as_deref().map(|right| (right, depth + 1)));
        }
        height
    }

    /// Removes every node with a value satisfying `predicate`, returning the number removed. A
    /// position is tested again after each removal, because a different value moves into it.
    ///
    /// `len` is decremented as each node is detached, so it stays accurate if `predicate` panics.
    pub fn filter<P: FnMut(&T) -> bool>(&mut self, predicate: &mut P, len: &mut usize) -> usize {
        let mut removed = 0;
        let mut stack: Vec<&mut Branch<T>> = vec![self];

        while let Some(current) = stack.pop() {
            while current.0.as_ref().is_some_and(|node| predicate(&node.value)) {
                let value = current.take_here();
                *len -= 1;
                removed += 1;
                drop(value);
            }

            if let Some(node) = &mut current.0 {
                stack.push(&mut node.right);
                stack.push(&mut node.left);
            }
        }
        removed
    }
}

impl<T: Ord> Branch<T> {
    /// Inserts below this position. Values equal to a node go to its right.
    pub fn insert(&mut self, value: T) {
        let mut cursor = self;

        loop {
            match &mut cursor.0 {
                Some(node) => {
                    cursor = if value < node.value {
                        &mut node.left
                    } else {
                        &mut node.right
                    };
                },
                empty => {
                    *empty = Some(Box::new(Node::leaf(value)));
                    return;
                },
            }
        }
    }

    pub fn contains(&self, value: &T) -> bool {
        let mut cursor = self;

        while let Some(node) = &cursor.0 {
            cursor = match value.cmp(&node.value) {
                Ordering::Less => &node.left,
                Ordering::Greater => &node.right,
                Ordering::Equal => return true,
            };
        }
        false
    }

    /// Removes the first node equal to `value` found by descending from this position. With
    /// `all`, the search then continues from the same position until no equal value is reached,
    /// since duplicates are stored below the node they were first compared against. Returns the
    /// number of nodes removed, decrementing `len` for each one as it is detached.
    pub fn remove(&mut self, value: &T, all: bool, len: &mut usize) -> usize {
        let mut removed = 0;
        let mut cursor = self;

        loop {
            let current = cursor;
            let ordering = match &current.0 {
                Some(node) => value.cmp(&node.value),
                None => return removed,
            };

            match ordering {
                Ordering::Equal => {
                    let taken = current.take_here();
                    *len -= 1;
                    removed += 1;
                    drop(taken);

                    if !all {
                        return removed;
                    }
                    cursor = current;
                },
                Ordering::Less | Ordering::Greater => {
                    let Some(node) = &mut current.0 else {
                        return removed;
                    };
                    cursor = if ordering.is_lt() {
                        &mut node.left
                    } else {
                        &mut node.right
                    };
                },
            }
        }
    }
}

// Children are cloned before their parent, with finished subtrees waiting on a second stack, so a
// degenerate tree doesn't recurse once per level.
impl<T: Clone> Clone for Branch<T> {
    fn clone(&self) -> Self {
        let mut stack: Vec<(&Branch<T>, Visit)> = vec![(self, Visit::Descend)];
        let mut built: Vec<Branch<T>> = Vec::new();

        while let Some((branch, visit)) = stack.pop() {
            match (&branch.0, visit) {
                (None, _) => built.push(Branch(None)),
                (Some(node), Visit::Descend) => {
                    stack.push((branch, Visit::Ready));
                    stack.push((&node.right, Visit::Descend));
                    stack.push((&node.left, Visit::Descend));
                },
                (Some(node), Visit::Ready) => {
                    let right = built.pop().unwrap_or_default();
                    let left = built.pop().unwrap_or_default();
                    built.push(Branch(Some(Box::new(Node {
                        left,
                        right,
                        value: node.value.clone(),
                    }))));
                },
            }
        }
        built.pop().unwrap_or_default()
    }
}

// Subtrees are torn down with an explicit stack, so dropping a degenerate tree doesn't recurse once
// per level.
impl<T> Drop for Branch<T> {
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = Vec::new();
        stack.extend(self.0.take());

        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.0.take());
            stack.extend(node.right.0.take());
        }
    }
}

impl<T> Default for Branch<T> {
    fn default() -> Self {
        Branch::empty()
    }
}

impl<T> Deref for Branch<T> {
    type Target = Option<Box<Node<T>>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for Branch<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

enum Line<'a, T> {
    Branch(&'a Branch<T>, String),
    Value(&'a T, String),
}

// Drawn sideways: the left subtree above its parent and the right subtree below it.
impl<T: Debug> Debug for Branch<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut stack = vec![Line::Branch(self, String::new())];
        let mut separator = "";

        while let Some(line) = stack.pop() {
            match line {
                Line::Branch(Branch(Some(node)), prefix) => {
                    stack.push(Line::Branch(&node.right, format!("{prefix}└    ")));
                    stack.push(Line::Value(&node.value, prefix.clone()));
                    stack.push(Line::Branch(&node.left, format!("{prefix}┌    ")));
                    continue;
                },
                Line::Branch(Branch(None), prefix) => write!(f, "{separator}{prefix}-")?,
                Line::Value(value, prefix) => write!(f, "{separator}{prefix}({value:?})")?,
            }
            separator = "\n";
        }
        Ok(())
    }
}
