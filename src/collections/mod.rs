//! The container types themselves, grouped by storage discipline.
//!
//! # Ownership
//! Every container here exclusively owns the elements inserted into it: [`Vector`] and [`TreeSet`]
//! take values by move, and [`DoublyLinkedList`] allocates a node per value. Elements leave a
//! container either by being returned to the caller (`pop`, `remove`, `take`) or by being dropped
//! in place (`clear`, container drop) - exactly one of the two, exactly once.
//!
//! # Method
//! Applicable types implement [`Deref<Target = [T]>`](std::ops::Deref) (and DerefMut), which
//! saves some of the more repetitive functionality and doubles as the bounds-checked replacement
//! for raw element-pointer access.
//!
//! [`Vector`]: contiguous::Vector
//! [`TreeSet`]: tree::TreeSet
//! [`DoublyLinkedList`]: linked::DoublyLinkedList

#[cfg(feature = "contiguous")]
pub mod contiguous;
#[cfg(feature = "linked")]
pub mod linked;
#[cfg(feature = "tree")]
pub mod tree;
