use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};
use std::mem;

use crate::collections::contiguous::Vector;
use crate::util::option::OptionExtension;

/// One subtree: either empty or a boxed node. All of the recursive tree logic lives here; the
/// [`TreeSet`](super::TreeSet) header only keeps the root and the length.
pub(crate) struct Branch<T: Ord>(pub Option<Box<Node<T>>>);

pub(crate) struct Node<T: Ord> {
    pub left: Branch<T>,
    pub right: Branch<T>,
    pub value: T,
}

impl<T: Ord> Branch<T> {
    /// Inserts into this subtree, keeping the search order. Returns false without modifying
    /// anything if an equal value is already present; the incoming value is discarded.
    pub fn insert(&mut self, value: T) -> bool {
        match &mut self.0 {
            Some(node) => match value.cmp(&node.value) {
                Ordering::Less => node.left.insert(value),
                Ordering::Greater => node.right.insert(value),
                Ordering::Equal => false,
            },
            None => {
                self.0 = Some(Box::new(Node {
                    left: Branch(None),
                    right: Branch(None),
                    value,
                }));
                true
            },
        }
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match &self.0 {
            Some(node) => match key.cmp(node.value.borrow()) {
                Ordering::Less => node.left.contains(key),
                Ordering::Greater => node.right.contains(key),
                Ordering::Equal => true,
            },
            None => false,
        }
    }

    /// Unlinks the value comparing equal to `key` from this subtree and returns it.
    pub fn take<Q>(&mut self, key: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match &mut self.0 {
            Some(node) => match key.cmp(node.value.borrow()) {
                Ordering::Less => node.left.take(key),
                Ordering::Greater => node.right.take(key),
                Ordering::Equal => Some(self.take_root()),
            },
            None => None,
        }
    }

    /// Removes this branch's own node, relinking by shape: a leaf just unlinks, a single child is
    /// spliced into the node's place, and a node with two children keeps its place but has its
    /// value replaced with the in-order successor (the leftmost value of the right subtree).
    fn take_root(&mut self) -> T {
        // SAFETY: Only ever called after self.0 has been matched as Some; the take re-acquires
        // the mutable reference.
        let mut node = unsafe { mem::take(&mut self.0).unreachable() };

        match (node.left.0.take(), node.right.0.take()) {
            (None, None) => node.value,
            (Some(child), None) | (None, Some(child)) => {
                self.0 = Some(child);
                node.value
            },
            (Some(left), Some(right)) => {
                node.left = Branch(Some(left));
                node.right = Branch(Some(right));

                // SAFETY: The right subtree was just matched as non-empty, so it has a leftmost
                // value to take.
                let successor = unsafe { node.right.take_first().unreachable() };
                let value = mem::replace(&mut node.value, successor);

                self.0 = Some(node);
                value
            },
        }
    }

    /// Unlinks and returns the smallest value in this subtree, splicing the leftmost node's right
    /// child into its place.
    pub fn take_first(&mut self) -> Option<T> {
        match &mut self.0 {
            Some(node) => match node.left.take_first() {
                Some(value) => Some(value),
                None => {
                    // SAFETY: Matched as Some above; the take re-acquires the mutable reference.
                    let node = unsafe { mem::take(&mut self.0).unreachable() };
                    self.0 = node.right.0;
                    Some(node.value)
                },
            },
            None => None,
        }
    }

    pub fn first(&self) -> Option<&T> {
        match &self.0 {
            Some(node) => match node.left.first() {
                Some(value) => Some(value),
                None => Some(&node.value),
            },
            None => None,
        }
    }

    pub fn last(&self) -> Option<&T> {
        match &self.0 {
            Some(node) => match node.right.last() {
                Some(value) => Some(value),
                None => Some(&node.value),
            },
            None => None,
        }
    }
}

impl<T: Ord + Debug> Branch<T> {
    /// Writes the subtree's values in ascending order, comma separated.
    pub fn fmt_in_order(&self, f: &mut Formatter<'_>, first: &mut bool) -> fmt::Result {
        if let Some(node) = &self.0 {
            node.left.fmt_in_order(f, first)?;

            if !*first {
                write!(f, ", ")?;
            }
            write!(f, "{:?}", node.value)?;
            *first = false;

            node.right.fmt_in_order(f, first)?;
        }

        Ok(())
    }
}

impl<T: Ord + Debug> Debug for Branch<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(node) => write!(
                f,
                "{}\n({:?})\n{}",
                format!("{:?}", node.left)
                    .lines()
                    .map(|l| String::from("┌    ") + l)
                    .collect::<Vector<_>>()
                    .join("\n"),
                node.value,
                format!("{:?}", node.right)
                    .lines()
                    .map(|l| String::from("└    ") + l)
                    .collect::<Vector<_>>()
                    .join("\n")
            ),
            None => write!(f, "-"),
        }
    }
}
