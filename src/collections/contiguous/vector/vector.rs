use std::borrow::{Borrow, BorrowMut};
use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};
use std::mem::{self, MaybeUninit};
use std::ops::{Deref, DerefMut};
use std::slice;

use super::sort::quicksort;
use super::store::RawStore;
use crate::util::error::{CapacityOverflow, IndexOrCapOverflow, IndexOutOfBounds};
use crate::util::fmt::DebugRaw;
use crate::util::result::ResultExtension;

/// The capacity selected when the caller doesn't provide a meaningful hint.
pub(crate) const DEFAULT_CAP: usize = 16;

const GROWTH_FACTOR: usize = 2;

/// A variable size contiguous collection. Elements are stored by value in one heap allocation;
/// capacity grows by doubling and never shrinks automatically.
///
/// Element access goes through `Deref<Target = [T]>`, so `vec[i]` is bounds checked and panics on
/// an out-of-range index rather than touching invalid memory.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Vector.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `pop` | `O(1)` |
/// | `insert` | `O(n-i)` |
/// | `remove` | `O(n-i)` |
/// | `replace` | `O(1)` |
/// | `clear` | `O(n)` |
/// | `reserve` | `O(n)`**, `O(1)` |
/// | `search` (sorted) | `O(log n)` |
/// | `search` (unsorted) | `O(n)` |
/// | `sort` | `O(n log n)` average |
///
/// \* If the Vector doesn't have enough capacity for the new element, `push` will take `O(n)`.
///
/// \** If the Vector has enough capacity for the additional items already, `reserve` is `O(1)`.
pub struct Vector<T> {
    pub(crate) store: RawStore<T>,
    pub(crate) len: usize,
}

impl<T> Vector<T> {
    /// Creates a new Vector with length 0 and the default capacity (16 elements).
    ///
    /// # Examples
    /// ```
    /// # use container_lib::collections::contiguous::Vector;
    /// let vec: Vector<u8> = Vector::new();
    /// assert_eq!(vec.len(), 0);
    /// assert_eq!(vec.cap(), 16);
    /// ```
    pub fn new() -> Vector<T> {
        Self::with_cap(0)
    }

    /// Creates a new Vector with capacity equal to the provided hint, allowing that many values to
    /// be added without reallocation. A hint of 0 selects the default capacity.
    ///
    /// # Panics
    /// Panics if the memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use container_lib::collections::contiguous::Vector;
    /// let mut vec: Vector<u8> = Vector::with_cap(5);
    /// assert_eq!(vec.cap(), 5);
    /// vec.extend([1_u8, 2, 3, 4, 5]);
    /// assert_eq!(vec.cap(), 5);
    /// ```
    pub fn with_cap(cap_hint: usize) -> Vector<T> {
        let cap = if cap_hint == 0 { DEFAULT_CAP } else { cap_hint };

        Vector {
            store: RawStore::new(cap),
            len: 0,
        }
    }

    /// Returns the length of the Vector.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the Vector contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current capacity of the Vector. The capacity is exactly the value selected at
    /// construction until a growth doubles it.
    pub const fn cap(&self) -> usize {
        self.store.cap
    }

    /// Push the provided value onto the end of the Vector, doubling the capacity if required.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use container_lib::collections::contiguous::Vector;
    /// let mut vec = Vector::<u8>::new();
    /// for i in 0..=5 {
    ///     vec.push(i);
    /// }
    /// assert_eq!(&*vec, &[0, 1, 2, 3, 4, 5]);
    /// ```
    pub fn push(&mut self, value: T) {
        self.try_push(value).throw()
    }

    /// Fallible form of [`push`](Vector::push): reports a failed capacity growth instead of
    /// panicking.
    pub fn try_push(&mut self, value: T) -> Result<(), CapacityOverflow> {
        if self.len == self.cap() {
            self.try_grow()?;
        }
        // SAFETY: The capacity has just been adjusted to support the addition of the new item.
        unsafe { self.push_unchecked(value) }
        Ok(())
    }

    /// Push the provided value onto the end of the Vector, assuming that there is enough capacity
    /// to do so.
    ///
    /// # Safety
    /// It is up to the caller to ensure that the Vector has enough capacity to add the provided
    /// value, using methods like [`reserve`](Vector::reserve) or [`with_cap`](Vector::with_cap) to
    /// do so. Using this method on a Vector without enough capacity is undefined behavior.
    pub unsafe fn push_unchecked(&mut self, value: T) {
        // SAFETY: It is up to the caller to ensure that the Vector has enough capacity for this
        // push, leading to the pointer write being in bounds of the allocation.
        unsafe { self.store.ptr.add(self.len).write(MaybeUninit::new(value)); }
        self.len += 1;
    }

    /// Pops the last value off the end of the Vector, returning an owned value if the Vector has
    /// length greater than 0.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = (0..5).collect();
    /// for i in (0..vec.len()).rev() {
    ///     assert_eq!(vec.pop(), Some(i));
    /// }
    /// assert_eq!(vec.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            // Decrement len before getting.
            self.len -= 1;

            // SAFETY: len has just been decremented and is within the capacity of the Vector, and
            // all values < len are initialized. The slot is read by bitwise copy and never touched
            // again, which is as close as we can get to actually moving the value off of the heap.
            let value = unsafe {
                self.store.ptr.add(self.len).read().assume_init()
            };
            Some(value)
        }
    }

    /// Inserts the provided value at the given index, growing and moving items as necessary.
    /// `index == len` appends.
    ///
    /// # Panics
    /// Panics if `index > len`, or if the memory layout of the Vector would have a size that
    /// exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use container_lib::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = (0..3).collect();
    /// vec.insert(1, 100);
    /// vec.insert(1, 200);
    /// vec.insert(5, 300);
    /// assert_eq!(&*vec, &[0, 200, 100, 1, 2, 300]);
    /// ```
    pub fn insert(&mut self, index: usize, value: T) {
        self.try_insert(index, value).throw()
    }

    /// Fallible form of [`insert`](Vector::insert): reports an out-of-bounds index or a failed
    /// capacity growth instead of panicking.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOrCapOverflow> {
        // index == len is valid here: it appends without displacing anything.
        if index > self.len {
            return Err(IndexOutOfBounds { index, len: self.len }.into());
        }

        if self.len == self.cap() {
            self.try_grow()?;
        }

        // Carry each displaced value forward one slot, last write landing in slot len.
        let mut prev = MaybeUninit::new(value);
        for slot in &mut self.store.slots_mut()[index..=self.len] {
            prev = mem::replace(slot, prev);
        }

        self.len += 1;
        Ok(())
    }

    /// Removes the element at the provided index, moving all following values to fill in the gap.
    /// The capacity is unchanged.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = "Hello world!".chars().collect();
    /// assert_eq!(vec.remove(1), 'e');
    /// assert_eq!(vec.remove(4), ' ');
    /// assert_eq!(vec, "Hlloworld!".chars().collect());
    /// ```
    pub fn remove(&mut self, index: usize) -> T {
        self.check_index(index);

        // Carry each value backward one slot, ending with the removed value in next.
        let mut next = MaybeUninit::uninit();
        for slot in self.store.slots_mut()[index..self.len].iter_mut().rev() {
            next = mem::replace(slot, next);
        }

        self.len -= 1;
        // SAFETY: next contains the value which was previously located at index, which we've
        // already checked to be less than len and therefore initialized.
        unsafe { next.assume_init() }
    }

    /// Replaces the element at the provided index with `new_value`, returning the old value.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    pub fn replace(&mut self, index: usize, new_value: T) -> T {
        self.check_index(index);

        // SAFETY: index is < len and all values < len are initialized.
        unsafe {
            mem::replace(
                &mut self.store.slots_mut()[index],
                MaybeUninit::new(new_value)
            ).assume_init()
        }
    }

    /// Drops every live element in place, leaving the Vector with length 0. The capacity is
    /// unchanged.
    pub fn clear(&mut self) {
        for i in 0..self.len {
            // SAFETY: All values less than len are initialized, and len is reset immediately after
            // so nothing is dropped twice.
            unsafe { self.store.ptr.add(i).as_mut().assume_init_drop(); }
        }

        self.len = 0;
    }

    /// Searches for an element comparing equal to `key` under the provided three-way comparator.
    ///
    /// With `sorted` set, a binary search is used, assuming the Vector is in ascending order under
    /// `cmp`; among equal duplicates, any match may be returned, and the result is unspecified if
    /// the Vector is not actually sorted. Otherwise a linear scan in index order finds the first
    /// match.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::collections::contiguous::Vector;
    /// let vec: Vector<_> = [4_u8, 8, 15, 16, 23, 42].into_iter().collect();
    /// assert_eq!(vec.search(&15, u8::cmp, true), Some(&15));
    /// assert_eq!(vec.search(&13, u8::cmp, true), None);
    /// assert_eq!(vec.search(&42, u8::cmp, false), Some(&42));
    /// ```
    pub fn search<F>(&self, key: &T, cmp: F, sorted: bool) -> Option<&T>
    where
        F: Fn(&T, &T) -> Ordering,
    {
        if sorted {
            self.binary_search(key, &cmp)
        } else {
            self.iter().find(|elem| cmp(elem, key) == Ordering::Equal)
        }
    }

    /// Sorts the Vector in place into ascending order under the provided three-way comparator.
    /// The sort is not stable: equal elements may not retain their relative order.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = [23_u8, 4, 42, 15, 8, 16].into_iter().collect();
    /// vec.sort(u8::cmp);
    /// assert_eq!(&*vec, &[4, 8, 15, 16, 23, 42]);
    /// ```
    pub fn sort<F>(&mut self, cmp: F)
    where
        F: Fn(&T, &T) -> Ordering,
    {
        quicksort(self, &cmp);
    }

    /// Ensures that the Vector has capacity to hold an additional `extra` elements. After invoking
    /// this method, the capacity will be >= len + extra.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    pub fn reserve(&mut self, extra: usize) {
        self.try_reserve(extra).throw()
    }

    /// Fallible form of [`reserve`](Vector::reserve).
    pub fn try_reserve(&mut self, extra: usize) -> Result<(), CapacityOverflow> {
        let new_cap = self.len.checked_add(extra).ok_or(CapacityOverflow)?;

        if new_cap <= self.cap() {
            return Ok(());
        }

        self.store.realloc(new_cap)
    }

    fn binary_search<F>(&self, key: &T, cmp: &F) -> Option<&T>
    where
        F: Fn(&T, &T) -> Ordering,
    {
        let mut low = 0;
        let mut high = self.len;

        while low < high {
            let mid = low + (high - low) / 2;
            match cmp(&self[mid], key) {
                Ordering::Less => low = mid + 1,
                Ordering::Greater => high = mid,
                Ordering::Equal => return Some(&self[mid]),
            }
        }

        None
    }

    /// Doubles the capacity. After calling this, the Vector can take at least one more element.
    pub(crate) fn try_grow(&mut self) -> Result<(), CapacityOverflow> {
        let new_cap = match self.cap() {
            // Unreachable through the public constructors, which always pick a non-zero capacity.
            0 => DEFAULT_CAP,
            cap => cap.checked_mul(GROWTH_FACTOR).ok_or(CapacityOverflow)?,
        };

        self.store.realloc(new_cap)
    }

    /// Checks that the provided index is within the bounds of self.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    pub(crate) fn check_index(&self, index: usize) {
        if index >= self.len {
            Err(IndexOutOfBounds {
                index,
                len: self.len
            }).throw()
        }
    }
}

impl<T> Extend<T> for Vector<T> {
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let iter = value.into_iter();
        let mut vec = Vector::with_cap(iter.size_hint().0);

        for item in iter {
            vec.push(item);
        }

        vec
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Vector<T> {
    fn drop(&mut self) {
        // Drop all initialized values in place. Implicitly dropping self.store afterwards releases
        // the allocation without touching element contents again.
        self.clear();
    }
}

impl<T> Deref for Vector<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: Vector is valid as a slice for len values, which are all initialized. The pointer
        // is nonnull, properly aligned and the range entirely contained within this Vector.
        // The borrow checker enforces that self isn't mutated due to this function taking a &self.
        // The total size is < isize::MAX as the result of being a valid Vector.
        unsafe {
            slice::from_raw_parts(
                // Reinterpret *mut MaybeUninit<T> as *mut T for all values < len.
                self.store.ptr.as_ptr().cast(),
                self.len,
            )
        }
    }
}

impl<T> DerefMut for Vector<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: Vector is valid as a slice for len values, which are all initialized. The pointer
        // is nonnull, properly aligned and the range entirely contained within this Vector.
        // The borrow checker enforces exclusive access due to this function taking a &mut self.
        // The total size is < isize::MAX as the result of being a valid Vector.
        unsafe {
            slice::from_raw_parts_mut(
                // Reinterpret *mut MaybeUninit<T> as *mut T for all values < len.
                self.store.ptr.as_ptr().cast(),
                self.len,
            )
        }
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    fn as_ref(&self) -> &[T] {
        self.deref()
    }
}

impl<T> AsMut<[T]> for Vector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.deref_mut()
    }
}

impl<T> Borrow<[T]> for Vector<T> {
    fn borrow(&self) -> &[T] {
        self.as_ref()
    }
}

impl<T> BorrowMut<[T]> for Vector<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut()
    }
}

// SAFETY: Vectors, when used safely, rely on unique pointers and are therefore safe for Send when
// T: Send.
unsafe impl<T: Send> Send for Vector<T> {}
// SAFETY: Vector's safe API obeys all rules of the borrow checker, so no interior mutability
// occurs. This means that Vector<T> can safely implement Sync when T: Sync.
unsafe impl<T: Sync> Sync for Vector<T> {}

impl<T: Clone> Clone for Vector<T> {
    fn clone(&self) -> Self {
        let mut vec = Self::with_cap(self.cap());

        for value in self.iter() {
            vec.push(value.clone());
        }

        vec
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T: Debug> Debug for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field("contents", &DebugRaw(format!("{self}")))
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Debug> Display for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
