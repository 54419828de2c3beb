use std::fmt::{self, Debug, Formatter};

/// Wraps a pre-rendered string so it can be passed to the `debug_struct` builders without being
/// re-escaped as a string literal.
pub struct DebugRaw(pub String);

impl Debug for DebugRaw {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
