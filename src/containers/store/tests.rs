#![cfg(test)]

use std::iter;
use std::mem::MaybeUninit;

use super::*;
use crate::util::alloc::{DropTally, ZeroSizedType};
use crate::util::panic::assert_panics;

/// Builds a fully initialized Buf from the provided values.
fn collect<T, I: ExactSizeIterator<Item = T>>(values: I) -> Buf<T> {
    let mut buf = Buf::<T>::new_uninit(values.len());

    for (index, value) in values.enumerate() {
        buf[index] = MaybeUninit::new(value);
    }

    // SAFETY: Every slot was just initialized from the iterator.
    unsafe { buf.assume_init() }
}

#[test]
fn test_zst_support() {
    let buf = Buf::<ZeroSizedType>::repeat_default(5);
    assert_eq!(
        buf[0], ZeroSizedType,
        "Indexing with no offset should work."
    );
    assert_eq!(
        buf[4], ZeroSizedType,
        "Indexing with an in-bounds offset should work."
    );
    assert_eq!(
        buf.iter().count(),
        5,
        "Should iterate over the right number of ZST instances."
    );

    let old_ptr = buf.ptr.cast::<u8>();
    let mut raw = buf.forget_init();

    raw.realloc(30);
    assert_eq!(
        raw.ptr.cast::<u8>(), old_ptr,
        "Pointer shouldn't change when reallocated for a ZST."
    );
    assert_eq!(raw.size(), 30, "Size should still be tracked for a ZST.");
}

#[test]
fn test_realloc() {
    let buf = collect(0..5usize);
    assert_eq!(buf.size(), 5);

    let old_ptr = buf.ptr.cast::<u8>();
    let mut raw = buf.forget_init();

    raw.realloc(5);
    assert_eq!(
        raw.ptr.cast::<u8>(), old_ptr,
        "When reallocating to the same size, the pointer shouldn't change."
    );

    raw.realloc(0);
    assert_ne!(
        raw.ptr.cast::<u8>(), old_ptr,
        "Pointer should be replaced with a dangling one for 0 size."
    );

    let old_ptr = raw.ptr;
    raw.realloc(10);
    assert_ne!(
        raw.ptr, old_ptr,
        "Pointer should be replaced with an allocated one."
    );

    for i in 0..10 {
        raw[i] = MaybeUninit::new(i);
    }

    raw.realloc(15);
    for i in 0..10 {
        assert_eq!(
            // SAFETY: Slots below 10 were initialized before the reallocation.
            unsafe { raw[i].assume_init_read() },
            i,
            "When growing, all elements should remain in the buffer."
        );
    }

    assert_panics!({
        let mut raw = Buf::<u32>::new_uninit(5);
        raw.realloc(isize::MAX as usize + 1)
    });
}

#[test]
fn test_drop() {
    let counter = DropTally::new();
    let buf = collect(iter::repeat_with(|| counter.clone()).take(10));

    drop(buf);

    assert_eq!(counter.take(), 10, "10 elements should have been dropped.");
}

#[test]
fn test_into_iter() {
    let mut iter = collect(0..5).into_iter();
    assert_eq!(iter.len(), 5);
    assert_eq!(iter.next(), Some(0));
    assert_eq!(iter.next_back(), Some(4));
    assert_eq!(iter.next_back(), Some(3));
    assert_eq!(iter.next(), Some(1));
    assert_eq!(iter.next_back(), Some(2));
    assert_eq!(iter.next(), None, "An exhausted iterator should yield None.");

    let counter = DropTally::new();
    let mut iter = collect(iter::repeat_with(|| counter.clone()).take(10)).into_iter();
    drop(iter.next());
    drop(iter.next_back());
    drop(iter);

    assert_eq!(
        counter.take(),
        10,
        "Dropping a partially consumed owned iterator should drop all elements."
    );
}

#[test]
fn test_clone() {
    let buf = collect(0..5);
    let copy = buf.clone();

    assert_ne!(
        buf.ptr, copy.ptr,
        "A clone should have its own allocation."
    );
    assert_eq!(&*buf, &*copy, "A clone should hold equal elements.");
}

#[test]
fn test_repeat_default() {
    let buf = Buf::<usize>::repeat_default(4);
    assert_eq!(
        &*buf,
        &[0, 0, 0, 0],
        "Every slot should hold the default value."
    );

    let empty = Buf::<usize>::repeat_default(0);
    assert_eq!(empty.size(), 0, "A zero-count buffer should be empty.");
}
