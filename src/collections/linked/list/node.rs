use std::ptr::NonNull;

pub(crate) type Link<T> = Option<NodePtr<T>>;

// NOTE: Nodes are allocated through Box<T> rather than raw alloc, because moving out of a
// dereferenced Box is the cleanest way to take a value back off the heap when unlinking.

/// A copyable pointer to a heap-allocated list node. The list owns every node it points to;
/// aliasing copies of a NodePtr (head/tail plus neighbors' links) are reconciled by the list's
/// operations, which never hand out two live mutable borrows.
#[derive(Debug)]
pub(crate) struct NodePtr<T>(pub NonNull<Node<T>>);

impl<T> NodePtr<T> {
    pub fn value<'a>(&self) -> &'a T {
        // SAFETY: The pointee is a live node owned by the list for as long as the caller's
        // chosen lifetime.
        unsafe { &self.0.as_ref().value }
    }

    pub fn value_mut<'a>(&mut self) -> &'a mut T {
        // SAFETY: As for value, with exclusivity inherited from the list handing out the borrow.
        unsafe { &mut self.0.as_mut().value }
    }

    pub fn prev<'a>(&self) -> &'a Link<T> {
        // SAFETY: The pointee is a live node owned by the list.
        unsafe { &(*self.0.as_ptr()).prev }
    }

    #[allow(clippy::mut_from_ref)]
    pub fn prev_mut<'a>(&self) -> &'a mut Link<T> {
        // SAFETY: The pointee is a live node owned by the list.
        unsafe { &mut (*self.0.as_ptr()).prev }
    }

    pub fn next<'a>(&self) -> &'a Link<T> {
        // SAFETY: The pointee is a live node owned by the list.
        unsafe { &(*self.0.as_ptr()).next }
    }

    #[allow(clippy::mut_from_ref)]
    pub fn next_mut<'a>(&self) -> &'a mut Link<T> {
        // SAFETY: The pointee is a live node owned by the list.
        unsafe { &mut (*self.0.as_ptr()).next }
    }

    pub fn from_node(node: Node<T>) -> NodePtr<T> {
        NodePtr(NonNull::from(Box::leak(Box::new(node))))
    }

    /// Moves the node back off the heap, deallocating its storage. All other copies of this
    /// pointer are dangling afterwards.
    pub fn take_node(self) -> Node<T> {
        // SAFETY: The pointer came from Box::leak in from_node and is consumed here by value.
        unsafe { *Box::from_raw(self.0.as_ptr()) }
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
