use std::ptr::NonNull;

pub(crate) type Link<T> = Option<NodePtr<T>>;

// Nodes are allocated through Box so that taking a node moves the value back out of the heap.
// Every NodePtr handed out by a list points to a live node owned by exactly that list.

#[derive(Debug)]
pub(crate) struct NodePtr<T>(pub NonNull<Node<T>>);

impl<T> NodePtr<T> {
    pub fn from_node(node: Node<T>) -> NodePtr<T> {
        NodePtr(NonNull::from(Box::leak(Box::new(node))))
    }

    /// Frees the node, returning its contents.
    ///
    /// # Safety
    /// The node must still be allocated and no other copy of this pointer may be used afterwards.
    pub unsafe fn take_node(self) -> Node<T> {
        // SAFETY: The pointer came from Box::leak in from_node and the caller guarantees that it
        // hasn't been freed.
        unsafe { *Box::from_raw(self.0.as_ptr()) }
    }

    pub fn value<'a>(&self) -> &'a T {
        // SAFETY: The owning list outlives every reference handed out through its iterators.
        unsafe { &(*self.0.as_ptr()).value }
    }

    pub fn prev(&self) -> Link<T> {
        // SAFETY: The node is live while the owning list holds it.
        unsafe { (*self.0.as_ptr()).prev }
    }

    pub fn set_prev(&self, link: Link<T>) {
        // SAFETY: The node is live while the owning list holds it, and lists are single threaded.
        unsafe { (*self.0.as_ptr()).prev = link }
    }

    pub fn next(&self) -> Link<T> {
        // SAFETY: The node is live while the owning list holds it.
        unsafe { (*self.0.as_ptr()).next }
    }

    pub fn set_next(&self, link: Link<T>) {
        // SAFETY: The node is live while the owning list holds it, and lists are single threaded.
        unsafe { (*self.0.as_ptr()).next = link }
    }
}

impl<T> Clone for NodePtr<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodePtr<T> {}

impl<T> PartialEq for NodePtr<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

pub(crate) struct Node<T> {
    pub value: T,
    pub prev: Link<T>,
    pub next: Link<T>,
}
