use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// An index outside the live range of a container. Carries both halves so the panic message can
/// say exactly what was attempted.
#[derive(Debug, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for collection with {} elements!", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}

/// A capacity whose memory layout would exceed [`isize::MAX`] bytes.
#[derive(Debug, PartialEq, Eq)]
pub struct CapacityOverflow;

impl Display for CapacityOverflow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Capacity overflow!")
    }
}

impl Error for CapacityOverflow {}

/// Combined error for operations which validate an index and may also need to grow.
#[derive(Debug, Display, Error, From, TryInto, IsVariant)]
pub enum IndexOrCapOverflow {
    IndexOutOfBounds(IndexOutOfBounds),
    CapacityOverflow(CapacityOverflow),
}
