//! A minimal generic-container library: a resizable array, a doubly linked list and an ordered
//! set, written from scratch without reaching for [`Vec`] or the rest of [`std::collections`].
//!
//! # Purpose
//! This crate grew out of an older C ADT library where every container stored untyped byte blocks
//! with an externally supplied element size, and ownership transfer was handled by threading a
//! destructor callback through every operation. Rust lets all of that fall away: elements are
//! typed, the containers own their values directly and [`Drop`] does the cleanup exactly once.
//!
//! # Containers
//! - [`Vector`](collections::contiguous::Vector): contiguous, resizable storage with a doubling
//!   growth policy, comparator-driven search and an in-place quicksort.
//! - [`DoublyLinkedList`](collections::linked::DoublyLinkedList): `O(1)` insertion and removal at
//!   both ends; the list allocates and owns its nodes.
//! - [`TreeSet`](collections::tree::TreeSet): an ordered set over a plain binary search tree. No
//!   balancing is performed, which keeps the implementation a classic recursion at the cost of
//!   `O(n)` worst-case height for adversarial insertion orders.
//!
//! # Error Handling
//! Operations with well-defined negative outcomes (a search miss, popping an empty list, removing
//! an absent key) return [`Option`]s or [`bool`]s. Precondition violations, such as an
//! out-of-bounds index, panic with a strongly typed error message rather than returning an error
//! the caller would have to unwrap on every call. Where a caller wants to handle the failure
//! instead, the `try_` variants on [`Vector`](collections::contiguous::Vector) return the same
//! error types through [`Result`].
//!
//! # Concurrency
//! None of the containers lock internally. Distinct instances are fully independent; sharing one
//! instance across threads requires external synchronization (a single exclusive lock per
//! instance is sufficient). `Send` and `Sync` are implemented where the element type allows.
//!
//! # Dependencies
//! Allocation goes through [`std::alloc`] directly; this library doesn't use [`Vec`] at all. The
//! only third-party dependency is a derive macro crate for the repetitive parts of the error
//! types.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;

pub(crate) mod util;
