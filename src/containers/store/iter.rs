use std::iter::FusedIterator;
use std::mem::MaybeUninit;

use super::Buf;

impl<T> IntoIterator for Buf<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let len = self.size();
        IntoIter {
            buf: self.forget_init(),
            index: 0,
            len,
        }
    }
}

/// An iterator moving values out of a buffer-backed container, which
/// [`DynArray`](crate::containers::array::DynArray) re-exports as its owned iterator.
pub struct IntoIter<T> {
    pub(crate) buf: Buf<MaybeUninit<T>>,
    pub(crate) index: usize,
    pub(crate) len: usize,
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        for i in self.index..self.len {
            // SAFETY: Slots between index and len hold values which haven't been yielded yet,
            // so each is initialized and dropped exactly once. The buffer itself deallocates
            // when it drops afterwards.
            unsafe { self.buf[i].assume_init_drop() }
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index < self.len {
            // SAFETY: The slot at index is initialized and won't be read again because index is
            // incremented immediately, effectively moving the value out of the buffer.
            let value = unsafe { self.buf[self.index].assume_init_read() };
            self.index += 1;
            Some(value)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.index;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.index < self.len {
            self.len -= 1;
            // SAFETY: The slot at the newly decremented len is initialized and won't be read
            // again, effectively moving the value out of the buffer.
            let value = unsafe { self.buf[self.len].assume_init_read() };
            Some(value)
        } else {
            None
        }
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.len - self.index
    }
}

// Shared and mutable iteration comes from Deref<Target=[T]> on the containers themselves.
