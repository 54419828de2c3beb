use std::alloc::{self, Layout};
use std::marker::PhantomData;
use std::mem::MaybeUninit;
use std::ptr::NonNull;
use std::slice;

use crate::util::error::CapacityOverflow;
use crate::util::result::ResultExtension;

/// The raw backing store of a [`Vector`](super::Vector): one contiguous allocation of `cap`
/// element slots, none of which are assumed to be initialized.
///
/// Element lifecycle is entirely the owner's responsibility; this type only manages the
/// allocation itself. Dropping a RawStore releases the memory without running any element
/// destructors.
pub(crate) struct RawStore<T> {
    pub(crate) ptr: NonNull<MaybeUninit<T>>,
    pub(crate) cap: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> RawStore<T> {
    /// Allocates a store with exactly `cap` slots. Zero-sized element types never allocate; the
    /// pointer stays dangling no matter the capacity.
    ///
    /// # Panics
    /// Panics if the memory layout would have a size that exceeds [`isize::MAX`].
    pub(crate) fn new(cap: usize) -> RawStore<T> {
        let layout = Self::make_layout(cap).throw();

        RawStore {
            ptr: Self::make_ptr(layout),
            cap,
            _phantom: PhantomData,
        }
    }

    /// The full capacity as a slice of uninitialized slots. Which slots actually hold values is
    /// tracked by the owner.
    pub(crate) fn slots_mut(&mut self) -> &mut [MaybeUninit<T>] {
        // SAFETY: The store is allocated (or dangling-but-aligned for zero sizes) for exactly cap
        // slots, and MaybeUninit slots require no initialization to be viewed.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.cap) }
    }

    /// Reallocates to exactly `new_cap` slots, preserving slot contents up to the smaller of the
    /// two capacities.
    pub(crate) fn realloc(&mut self, new_cap: usize) -> Result<(), CapacityOverflow> {
        let new_ptr = match (self.cap, new_cap) {
            // Zero-sized types are never allocated, so only the capacity needs updating.
            (_, _) if size_of::<T>() == 0 => self.ptr,
            (old, new) if old == new => return Ok(()),
            (0, _) => Self::make_ptr(Self::make_layout(new_cap)?),
            (_, 0) => {
                // SAFETY: cap > 0 and T is not zero-sized, so ptr is a live allocation made with
                // this exact layout in the global allocator.
                unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), Self::make_layout(self.cap)?) };
                NonNull::dangling()
            },
            (_, _) => {
                let new_layout = Self::make_layout(new_cap)?;

                // SAFETY: ptr was allocated in the global allocator with the old layout, which has
                // non-zero size, and the new size has been checked against isize::MAX.
                let raw_ptr: *mut MaybeUninit<T> = unsafe {
                    alloc::realloc(
                        self.ptr.as_ptr().cast(),
                        Self::make_layout(self.cap)?,
                        new_layout.size(),
                    ).cast()
                };

                NonNull::new(raw_ptr).unwrap_or_else(|| alloc::handle_alloc_error(new_layout))
            },
        };

        self.ptr = new_ptr;
        self.cap = new_cap;
        Ok(())
    }

    /// A helper function to create a [`Layout`] for `cap` slots of `T`.
    pub(crate) fn make_layout(cap: usize) -> Result<Layout, CapacityOverflow> {
        Layout::array::<MaybeUninit<T>>(cap).map_err(|_| CapacityOverflow)
    }

    /// A helper function to create a [`NonNull`] for the provided [`Layout`]. Returns a dangling
    /// pointer for a zero-sized layout.
    ///
    /// # Errors
    /// In the event of an allocation error, this method calls [`alloc::handle_alloc_error`] as
    /// recommended, to avoid new allocations rather than panicking.
    pub(crate) fn make_ptr(layout: Layout) -> NonNull<MaybeUninit<T>> {
        if layout.size() == 0 {
            NonNull::dangling()
        } else {
            NonNull::new(
                // SAFETY: Zero-sized layouts have been guarded against.
                unsafe { alloc::alloc(layout).cast() }
            ).unwrap_or_else(|| alloc::handle_alloc_error(layout))
        }
    }
}

impl<T> Drop for RawStore<T> {
    fn drop(&mut self) {
        // The layout of an existing store has already been validated, so the error arm is
        // unreachable in practice.
        let Ok(layout) = Self::make_layout(self.cap) else { return };

        if layout.size() != 0 {
            // SAFETY: ptr is always allocated in the global allocator and layout is the same as
            // when allocated. Zero-sized layouts aren't allocated and are guarded against
            // deallocation.
            unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), layout) }
        }
    }
}
