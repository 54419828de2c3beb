//! Tree-backed collection types. [`TreeSet`] keeps its elements in binary-search-tree order for
//! `O(height)` membership queries without hashing.

pub mod set;

#[doc(inline)]
pub use set::TreeSet;
