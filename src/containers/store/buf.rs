use std::alloc::{self, Layout};
use std::marker::PhantomData;
use std::mem::{self, MaybeUninit};
use std::ops::{Deref, DerefMut};
use std::ptr::{self, NonNull};
use std::slice;

use crate::util::error::CapacityOverflow;
use crate::util::result::ResultExtension;

/// An owned heap buffer holding exactly `size` elements of `T`. Similar to a `Box<[T]>`, except
/// that it can be reallocated in place.
///
/// A `Buf<T>` considers every slot initialized (and drops each one); containers tracking a live
/// prefix hold a `Buf<MaybeUninit<T>>` instead and take on the initialization bookkeeping
/// themselves.
pub(crate) struct Buf<T> {
    pub(crate) ptr: NonNull<T>,
    pub(crate) size: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> Buf<T> {
    /// Returns the number of elements the buffer holds.
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Creates a new Buf with size 0. No memory is allocated until the buffer is reallocated to
    /// a non-zero size.
    pub fn new() -> Buf<T> {
        // SAFETY: There are no values, so they are all initialized.
        unsafe { Self::new_uninit(0).assume_init() }
    }

    /// Creates a new Buf of [`MaybeUninit<T>`] with the provided `size`. All slots are
    /// uninitialized.
    ///
    /// # Panics
    /// Panics if the memory layout size would exceed [`isize::MAX`].
    pub fn new_uninit(size: usize) -> Buf<MaybeUninit<T>> {
        let layout = Buf::<MaybeUninit<T>>::make_layout(size);
        let ptr = Buf::<MaybeUninit<T>>::make_ptr(layout);

        Buf {
            ptr,
            size,
            _phantom: PhantomData,
        }
    }

    /// Interprets self as a `Buf<MaybeUninit<T>>`, transferring responsibility for dropping the
    /// values to the caller. Counterpart to [`Buf::assume_init`].
    pub fn forget_init(self) -> Buf<MaybeUninit<T>> {
        // SAFETY: Buf<T> has the same layout as Buf<MaybeUninit<T>>.
        unsafe { mem::transmute::<Buf<T>, Buf<MaybeUninit<T>>>(self) }
    }

    /// A helper to create a [`Layout`] for `size` elements of type `T`.
    ///
    /// # Panics
    /// Panics if the memory layout size would exceed [`isize::MAX`].
    pub(crate) fn make_layout(size: usize) -> Layout {
        Layout::array::<T>(size).map_err(|_| CapacityOverflow).throw()
    }

    /// A helper to allocate a [`NonNull`] for the provided [`Layout`]. Returns a dangling
    /// pointer for a zero-sized layout.
    ///
    /// # Errors
    /// In the event of an allocation error, this method calls [`alloc::handle_alloc_error`] as
    /// recommended, to avoid new allocations rather than panicking.
    pub(crate) fn make_ptr(layout: Layout) -> NonNull<T> {
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

impl<T: Default> Buf<T> {
    /// Creates a new `Buf<T>` by repeating the default value of `T` `count` times.
    ///
    /// # Panics
    /// Panics if the memory layout size would exceed [`isize::MAX`].
    pub fn repeat_default(count: usize) -> Buf<T> {
        let buf = Self::new_uninit(count);

        for i in 0..count {
            // SAFETY: The layout guards count * size_of::<T>() against exceeding isize::MAX, so
            // every offset below count is in bounds of the allocation.
            unsafe {
                buf.ptr.add(i).write(MaybeUninit::new(T::default()))
            }
        }

        // SAFETY: All values are initialized with the default value for T.
        unsafe { buf.assume_init() }
    }
}

impl<T> Buf<MaybeUninit<T>> {
    /// Assume that all slots of a `Buf<MaybeUninit<T>>` are initialized.
    ///
    /// # Safety
    /// It is up to the caller to guarantee that every slot holds an initialized value. Failing
    /// to do so is undefined behavior.
    pub unsafe fn assume_init(self) -> Buf<T> {
        // SAFETY: Buf<MaybeUninit<T>> has the same layout as Buf<T>; the initialization
        // guarantee is the caller's.
        unsafe { mem::transmute::<Buf<MaybeUninit<T>>, Buf<T>>(self) }
    }

    /// Reallocates the buffer to hold exactly `new_size` slots, with any extra slots
    /// uninitialized. Checks first whether an allocator call is needed at all.
    ///
    /// Slots beyond `new_size` are discarded without being dropped; the caller is responsible
    /// for dropping any live values in them beforehand.
    ///
    /// # Panics
    /// Panics if the memory layout size of the new allocation would exceed [`isize::MAX`].
    pub fn realloc(&mut self, new_size: usize) {
        let new_ptr = match (self.size, new_size) {
            (_, _) if size_of::<T>() == 0 => {
                // Zero-sized types never allocate, so only the recorded size needs updating. The
                // existing pointer stays dangling.
                self.ptr
            },
            (old, new) if old == new => {
                return;
            },
            (0, _) => {
                // Growing from zero capacity requires a fresh allocation.
                let layout = Buf::<MaybeUninit<T>>::make_layout(new_size);

                // SAFETY: The layout has non-zero size because zero capacity and zero-sized
                // types are both guarded against above.
                let raw_ptr: *mut MaybeUninit<T> = unsafe {
                    alloc::alloc(layout).cast()
                };

                NonNull::new(raw_ptr).unwrap_or_else(
                    || alloc::handle_alloc_error(layout)
                )
            },
            (_, 0) => {
                // Shrinking to zero deallocates entirely and leaves a dangling pointer.
                let layout = Buf::<MaybeUninit<T>>::make_layout(self.size);

                // SAFETY: The buffer was allocated in the global allocator with this layout;
                // zero-sized layouts can't reach this arm.
                unsafe {
                    alloc::dealloc(self.ptr.as_ptr().cast(), layout);
                }

                NonNull::dangling()
            },
            (_, _) => {
                let old_layout = Buf::<MaybeUninit<T>>::make_layout(self.size);
                // Computing the new layout also validates new_size against isize::MAX.
                let new_layout = Buf::<MaybeUninit<T>>::make_layout(new_size);

                // SAFETY: The same layout and allocator are used as for the original
                // allocation, and the new layout size is > 0 and <= isize::MAX.
                let raw_ptr: *mut MaybeUninit<T> = unsafe {
                    alloc::realloc(
                        self.ptr.as_ptr().cast(),
                        old_layout,
                        new_layout.size()
                    ).cast()
                };

                NonNull::new(raw_ptr).unwrap_or_else(
                    || alloc::handle_alloc_error(new_layout)
                )
            },
        };

        self.ptr = new_ptr;
        self.size = new_size;
    }
}

impl<T> Default for Buf<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Buf<T> {
    fn drop(&mut self) {
        let layout = Buf::<T>::make_layout(self.size);

        for i in 0..self.size {
            // SAFETY: Every slot below size holds an initialized value, lies in bounds of the
            // allocation and is dropped exactly once.
            unsafe {
                ptr::drop_in_place(self.ptr.add(i).as_ptr());
            }
        }

        if layout.size() != 0 {
            // SAFETY: ptr was allocated in the global allocator with this same layout.
            // Zero-sized layouts aren't allocated and are guarded against deallocation.
            unsafe {
                alloc::dealloc(self.ptr.as_ptr().cast(), layout)
            }
        }
    }
}

impl<T> Deref for Buf<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: The held data uses Layout::array(size) and is therefore valid and properly
        // aligned for size elements, all of which are initialized. The safe API hands out no raw
        // pointers, so the borrow checker prevents mutation for the slice's lifetime.
        unsafe {
            slice::from_raw_parts(self.ptr.as_ptr(), self.size)
        }
    }
}

impl<T> DerefMut for Buf<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: The held data uses Layout::array(size) and is therefore valid and properly
        // aligned for size elements, all of which are initialized. The safe API hands out no raw
        // pointers, so the borrow checker prevents aliasing for the slice's lifetime.
        unsafe {
            slice::from_raw_parts_mut(self.ptr.as_ptr(), self.size)
        }
    }
}

// SAFETY: A Buf uniquely owns its allocation, so moving it between threads is safe whenever its
// elements are Send.
unsafe impl<T: Send> Send for Buf<T> {}
// SAFETY: Buf's safe API obeys the borrow checker and has no interior mutability, so shared
// references can be shared across threads when T is Sync.
unsafe impl<T: Sync> Sync for Buf<T> {}

impl<T: Clone> Clone for Buf<T> {
    fn clone(&self) -> Self {
        let new = Self::new_uninit(self.size);

        for (index, value) in self.iter().enumerate() {
            // SAFETY: index < size, so the offset is in bounds of the new allocation.
            unsafe {
                new.ptr.add(index).write(MaybeUninit::new(value.clone()));
            }
        }

        // SAFETY: All size slots have just been initialized with clones.
        unsafe { new.assume_init() }
    }
}
