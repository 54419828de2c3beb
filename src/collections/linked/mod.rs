//! Linked collection types. [`DoublyLinkedList`] links heap-allocated nodes in both directions
//! for `O(1)` insertion and removal at either end.

pub mod list;

#[doc(inline)]
pub use list::DoublyLinkedList;
