use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};

use super::Branch;
use crate::util::fmt::DebugRaw;

/// An ordered set over a plain binary search tree. Elements are kept in ascending [`Ord`] order
/// and no element ever appears twice.
///
/// The tree is not self-balancing: its height, and with it the cost of every lookup, depends on
/// insertion order. Randomly ordered insertions keep the height around `O(log n)`, while sorted
/// insertions degrade it to `O(n)`. The public contract only promises ordering and membership, so
/// a balancing scheme could be added later without changing any signatures.
///
/// # Time Complexity
/// `h` is the height of the tree: between `O(log n)` and `O(n)` as described above.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `contains` | `O(h)` |
/// | `insert` | `O(h)` |
/// | `remove` | `O(h)` |
/// | `first` | `O(h)` |
/// | `last` | `O(h)` |
pub struct TreeSet<T: Ord> {
    pub(crate) root: Branch<T>,
    pub(crate) len: usize,
}

impl<T: Ord> TreeSet<T> {
    /// Creates a new empty set. No allocation occurs until the first insertion.
    pub const fn new() -> TreeSet<T> {
        TreeSet {
            root: Branch(None),
            len: 0,
        }
    }

    /// Returns the number of elements in the set.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the set contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if an element comparing equal to `key` is present.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::collections::tree::TreeSet;
    /// let set: TreeSet<_> = [5, 2, 8].into_iter().collect();
    /// assert!(set.contains(&2));
    /// assert!(!set.contains(&3));
    /// ```
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.root.contains(key)
    }

    /// Adds `value` to the set. Returns true if it was added, or false if an equal element was
    /// already present, in which case the set is unchanged and `value` is discarded.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::collections::tree::TreeSet;
    /// let mut set = TreeSet::new();
    /// assert!(set.insert(5));
    /// assert!(!set.insert(5));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        let inserted = self.root.insert(value);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Removes the element comparing equal to `key`, returning whether a removal occurred.
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.take(key).is_some()
    }

    /// Removes and returns the element comparing equal to `key`, or [`None`] if it is absent.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::collections::tree::TreeSet;
    /// let mut set: TreeSet<_> = [5, 2, 8].into_iter().collect();
    /// assert_eq!(set.take(&5), Some(5));
    /// assert_eq!(set.take(&5), None);
    /// assert_eq!(set.len(), 2);
    /// ```
    pub fn take<Q>(&mut self, key: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let taken = self.root.take(key);
        if taken.is_some() {
            self.len -= 1;
        }
        taken
    }

    /// Returns the smallest element, or [`None`] if the set is empty.
    pub fn first(&self) -> Option<&T> {
        self.root.first()
    }

    /// Returns the largest element, or [`None`] if the set is empty.
    pub fn last(&self) -> Option<&T> {
        self.root.last()
    }
}

impl<T: Ord> Default for TreeSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for TreeSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = TreeSet::new();
        for item in iter {
            set.insert(item);
        }
        set
    }
}

impl<T: Ord + Debug> Debug for TreeSet<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeSet")
            .field("nodes", &DebugRaw(format!("\n{:?}\n", &self.root)))
            .field("len", &self.len)
            .finish()
    }
}

impl<T: Ord + Debug> Display for TreeSet<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        self.root.fmt_in_order(f, &mut true)?;
        write!(f, "}}")
    }
}
