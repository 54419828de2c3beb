use std::fmt::{self, Debug, Display, Formatter};
use std::marker::PhantomData;

use super::{Length, Node, NodePtr, ONE};
use crate::util::fmt::DebugRaw;

/// A list with links in both directions. Values enter and leave only at the ends; the list
/// allocates one node per value and owns every node it links.
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front` | `O(1)` |
/// | `back` | `O(1)` |
/// | `push_front` | `O(1)` |
/// | `push_back` | `O(1)` |
/// | `pop_front` | `O(1)` |
/// | `pop_back` | `O(1)` |
///
/// As a general note, modern computer architecture isn't kind to linked lists (or more
/// importantly, favours contiguous collections), so a
/// [`Vector`](crate::collections::contiguous::Vector) should be preferred unless the `O(1)`
/// end operations at both ends are being heavily utilized.
pub struct DoublyLinkedList<T> {
    pub(crate) state: ListState<T>,
    pub(crate) _phantom: PhantomData<T>,
}

#[derive(Default)]
pub(crate) enum ListState<T> {
    #[default]
    Empty,
    Full(ListContents<T>),
}

use ListState::*;

pub(crate) struct ListContents<T> {
    pub len: Length,
    pub head: NodePtr<T>,
    pub tail: NodePtr<T>,
}

impl<T> DoublyLinkedList<T> {
    /// Creates a new empty list. No allocation occurs until the first push.
    pub const fn new() -> DoublyLinkedList<T> {
        DoublyLinkedList {
            state: Empty,
            _phantom: PhantomData,
        }
    }

    /// Returns the number of values in the list.
    pub const fn len(&self) -> usize {
        match self.state {
            Empty => 0,
            Full(ListContents { len, .. }) => len.get(),
        }
    }

    /// Returns true if the list contains no values.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a reference to the first value, or [`None`] if the list is empty.
    pub fn front(&self) -> Option<&T> {
        match self.state {
            Empty => None,
            Full(ListContents { head, .. }) => Some(head.value()),
        }
    }

    /// Returns a mutable reference to the first value, or [`None`] if the list is empty.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        match self.state {
            Empty => None,
            Full(ListContents { mut head, .. }) => Some(head.value_mut()),
        }
    }

    /// Returns a reference to the last value, or [`None`] if the list is empty.
    pub fn back(&self) -> Option<&T> {
        match self.state {
            Empty => None,
            Full(ListContents { tail, .. }) => Some(tail.value()),
        }
    }

    /// Returns a mutable reference to the last value, or [`None`] if the list is empty.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        match self.state {
            Empty => None,
            Full(ListContents { mut tail, .. }) => Some(tail.value_mut()),
        }
    }

    /// Links a new node holding `value` at the front of the list.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::collections::linked::DoublyLinkedList;
    /// let mut list = DoublyLinkedList::new();
    /// list.push_front(1);
    /// list.push_front(2);
    /// assert_eq!(list.front(), Some(&2));
    /// assert_eq!(list.back(), Some(&1));
    /// ```
    pub fn push_front(&mut self, value: T) {
        let new_node = NodePtr::from_node(
            Node {
                value,
                prev: None,
                next: None
            }
        );

        match &mut self.state {
            Empty => {
                self.state = Full(ListContents {
                    len: ONE,
                    head: new_node,
                    tail: new_node,
                });
            },
            Full(ListContents { len, head, .. }) => {
                *head.prev_mut() = Some(new_node);
                *new_node.next_mut() = Some(*head);
                *head = new_node;
                *len = len.checked_add(1).expect("list length overflow");
            },
        }
    }

    /// Links a new node holding `value` at the back of the list.
    pub fn push_back(&mut self, value: T) {
        let new_node = NodePtr::from_node(
            Node {
                value,
                prev: None,
                next: None
            }
        );

        match &mut self.state {
            Empty => {
                self.state = Full(ListContents {
                    len: ONE,
                    head: new_node,
                    tail: new_node,
                });
            },
            Full(ListContents { len, tail, .. }) => {
                *tail.next_mut() = Some(new_node);
                *new_node.prev_mut() = Some(*tail);
                *tail = new_node;
                *len = len.checked_add(1).expect("list length overflow");
            },
        }
    }

    /// Unlinks the first node and returns its value, or [`None`] if the list is empty.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::collections::linked::DoublyLinkedList;
    /// let mut list: DoublyLinkedList<_> = (0..3).collect();
    /// assert_eq!(list.pop_front(), Some(0));
    /// assert_eq!(list.pop_front(), Some(1));
    /// assert_eq!(list.pop_front(), Some(2));
    /// assert_eq!(list.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        match &mut self.state {
            Empty => None,
            Full(ListContents { len, head, .. }) => {
                let node = head.take_node();

                match len.checked_sub(1) {
                    Some(new_len) => {
                        // SAFETY: Previous length is greater than 1, so the first node is
                        // followed by at least one more.
                        let new_head = unsafe { node.next.unwrap_unchecked() };
                        *head = new_head;
                        *new_head.prev_mut() = None;
                        *len = new_len;
                    },
                    None => {
                        self.state = Empty;
                    },
                }

                Some(node.value)
            },
        }
    }

    /// Unlinks the last node and returns its value, or [`None`] if the list is empty.
    pub fn pop_back(&mut self) -> Option<T> {
        match &mut self.state {
            Empty => None,
            Full(ListContents { len, tail, .. }) => {
                let node = tail.take_node();

                match len.checked_sub(1) {
                    Some(new_len) => {
                        // SAFETY: Previous length is greater than 1, so the last node is
                        // preceded by at least one more.
                        let new_tail = unsafe { node.prev.unwrap_unchecked() };
                        *tail = new_tail;
                        *new_tail.next_mut() = None;
                        *len = new_len;
                    },
                    None => {
                        self.state = Empty;
                    },
                }

                Some(node.value)
            },
        }
    }
}

#[cfg(test)]
impl<T> DoublyLinkedList<T> {
    /// Asserts the structural invariants: head is reached from no predecessor, every adjacent
    /// pair mirrors its prev/next links, and following next from head reaches tail in exactly
    /// len steps.
    pub(crate) fn verify_links(&self) {
        match &self.state {
            Empty => {},
            Full(ListContents { len, head, tail }) => {
                assert!(head.prev().is_none(), "head must have no predecessor");

                let mut steps = 1;
                let mut curr = *head;
                while let Some(next) = *curr.next() {
                    assert!(
                        *next.prev() == Some(curr),
                        "every next link must be mirrored by a prev link"
                    );
                    curr = next;
                    steps += 1;
                }

                assert!(curr == *tail, "following next from head must end at tail");
                assert_eq!(steps, len.get(), "head must reach tail in exactly len steps");
            },
        }
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for DoublyLinkedList<T> {
    fn drop(&mut self) {
        match self.state {
            Empty => {},
            Full(ListContents { head, .. }) => {
                // Each take_node moves the node off the heap, dropping its value and releasing
                // its storage before stepping to the next.
                let mut curr = Some(head);
                while let Some(ptr) = curr {
                    let node = ptr.take_node();
                    curr = node.next;
                }
            },
        }
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = DoublyLinkedList::new();
        for item in iter.into_iter() {
            list.push_back(item);
        }
        list
    }
}

// SAFETY: The list is the sole owner of its nodes; its safe API never shares a node across
// instances, so sending the whole list between threads is safe when T: Send.
unsafe impl<T: Send> Send for DoublyLinkedList<T> {}
// SAFETY: The safe API obeys all rules of the borrow checker and no interior mutability occurs,
// so shared references are safe when T: Sync.
unsafe impl<T: Sync> Sync for DoublyLinkedList<T> {}

impl<T: Debug> Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DoublyLinkedList")
            .field("contents", &DebugRaw(format!("{self}")))
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Debug> Display for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.state {
            Empty => write!(f, "()"),
            Full(ListContents { head, .. }) => {
                let mut curr = Some(*head);
                let mut first = true;

                while let Some(ptr) = curr {
                    if !first {
                        write!(f, " -> ")?;
                    }
                    write!(f, "({:?})", ptr.value())?;

                    first = false;
                    curr = *ptr.next();
                }

                Ok(())
            },
        }
    }
}
