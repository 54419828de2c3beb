//! A module containing [`Vector`] and its supporting types.
//!
//! The raw allocation handling and the sorting routine live in private submodules; only the
//! container itself is public. [`Vector`] is also re-exported under the parent module.

mod sort;
mod store;
mod tests;
mod vector;

pub use vector::*;
