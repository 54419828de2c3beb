//! Contiguous collection types. [`Vector`] is a resizable, heap-backed array with a doubling
//! growth policy.
#![warn(missing_docs)]

pub mod vector;

#[doc(inline)]
pub use vector::Vector;
