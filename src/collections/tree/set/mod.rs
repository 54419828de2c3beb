mod node;
mod tree_set;

pub(crate) use node::*;
pub use tree_set::*;
