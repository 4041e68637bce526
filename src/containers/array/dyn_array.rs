use std::borrow::{Borrow, BorrowMut};
use std::cmp;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem::{self, MaybeUninit};
use std::ops::{Deref, DerefMut, Index, IndexMut};
use std::slice;

use crate::containers::store::Buf;
#[cfg(feature = "traits")]
use crate::containers::traits::{Data, OrderedData};
#[doc(inline)]
pub use crate::util::error::IndexOutOfBounds;
use crate::util::fmt::Unquoted;
use crate::util::index::{resolve, resolve_insert};
use crate::util::result::ResultExtension;

const DEFAULT_CAP: usize = 5;
const MIN_CAP: usize = 2;

const SCALE_FACTOR: usize = 2;
const SHRINK_RATIO: usize = 4;

/// A growable contiguous container with automatic capacity management: a fresh DynArray holds
/// room for 5 elements, doubles whenever it fills, and halves after a removal leaves three
/// quarters or more of it unused.
///
/// Positional methods take signed indices, where negative values count back from the end: `-1`
/// is the last element and `-len` the first. For [`insert`](DynArray::insert), `-1` names the
/// slot *after* the last element, so inserting at `-1` appends.
///
/// DynArray also implements [`Deref<Target = [T]>`](Deref), so the full slice API (`iter`,
/// `contains`, `sort`, ...) is available on top of the methods below.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the DynArray.
/// - `i`: The resolved index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `get` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `pop` | `O(1)`*, `O(n)` |
/// | `insert` | `O(n-i)` |
/// | `remove` | `O(n-i)` |
/// | `replace` | `O(1)` |
/// | `index_of` | `O(n)` |
///
/// \* `O(n)` when the operation triggers a reallocation.
pub struct DynArray<T> {
    pub(crate) buf: Buf<MaybeUninit<T>>,
    pub(crate) len: usize,
}

impl<T> DynArray<T> {
    /// Returns the number of elements in the DynArray.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::containers::array::DynArray;
    /// let arr = DynArray::from([1, 2, 3]);
    /// assert_eq!(arr.len(), 3);
    /// ```
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns the current capacity of the DynArray: the number of elements it can hold before
    /// the next reallocation.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::containers::array::DynArray;
    /// let arr: DynArray<u8> = DynArray::new();
    /// assert_eq!(arr.cap(), 5);
    /// ```
    pub const fn cap(&self) -> usize {
        self.buf.size()
    }

    /// Returns true if the DynArray contains no elements.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::containers::array::DynArray;
    /// let mut arr: DynArray<u8> = DynArray::new();
    /// assert!(arr.is_empty());
    /// arr.push(1);
    /// assert!(!arr.is_empty());
    /// ```
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Creates a new DynArray with length 0 and the default capacity of 5.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::containers::array::DynArray;
    /// let arr: DynArray<u8> = DynArray::new();
    /// assert_eq!(arr.len(), 0);
    /// assert_eq!(arr.cap(), 5);
    /// ```
    pub fn new() -> DynArray<T> {
        Self::with_cap(DEFAULT_CAP)
    }

    /// Creates a new DynArray with capacity exactly equal to the provided value. The capacity
    /// still doubles from there once the array fills.
    ///
    /// # Panics
    /// Panics if the memory layout size would exceed [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use container_lib::containers::array::DynArray;
    /// let arr: DynArray<u8> = DynArray::with_cap(12);
    /// assert_eq!(arr.cap(), 12);
    /// ```
    pub fn with_cap(cap: usize) -> DynArray<T> {
        DynArray {
            buf: Buf::new_uninit(cap),
            len: 0,
        }
    }

    /// Appends the provided item to the end of the DynArray, doubling the capacity first if the
    /// array is full.
    ///
    /// # Panics
    /// Panics if the memory layout size would exceed [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use container_lib::containers::array::DynArray;
    /// let mut arr = DynArray::new();
    /// for i in 0..7 {
    ///     arr.push(i);
    /// }
    /// assert_eq!(&*arr, &[0, 1, 2, 3, 4, 5, 6]);
    /// assert_eq!(arr.cap(), 10);
    /// ```
    pub fn push(&mut self, item: T) {
        if self.len == self.cap() {
            self.grow();
        }

        self.buf[self.len] = MaybeUninit::new(item);
        self.len += 1;
    }

    /// Removes the last element and returns it, if the DynArray isn't empty. Equivalent to
    /// `remove(-1)` apart from the absence handling, including the shrink check.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::containers::array::DynArray;
    /// let mut arr = DynArray::from([1, 2]);
    /// assert_eq!(arr.pop(), Some(2));
    /// assert_eq!(arr.pop(), Some(1));
    /// assert_eq!(arr.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            self.len -= 1;
            // SAFETY: len was just decremented onto the last live slot, which is initialized
            // and won't be read again.
            let value = unsafe { self.buf[self.len].assume_init_read() };
            self.shrink_if_sparse();
            Some(value)
        }
    }

    /// Returns a reference to the element at the provided `index`, resolving negative indices
    /// from the end.
    ///
    /// The same functionality can be achieved using the [`Index`] operator.
    ///
    /// # Panics
    /// Panics if the resolved index is out of bounds of the DynArray.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::containers::array::DynArray;
    /// let arr = DynArray::from(["a", "b", "c"]);
    /// assert_eq!(*arr.get(0), "a");
    /// assert_eq!(*arr.get(-1), "c");
    /// ```
    pub fn get(&self, index: isize) -> &T {
        self.try_get(index).throw()
    }

    /// Returns a reference to the element at the provided `index`, returning an [`Err`] on a
    /// failure rather than panicking.
    pub fn try_get(&self, index: isize) -> Result<&T, IndexOutOfBounds> {
        let index = resolve(index, self.len)?;
        Ok(&(**self)[index])
    }

    /// Returns a mutable reference to the element at the provided `index`, resolving negative
    /// indices from the end.
    ///
    /// The same functionality can be achieved using the [`IndexMut`] operator.
    ///
    /// # Panics
    /// Panics if the resolved index is out of bounds of the DynArray.
    pub fn get_mut(&mut self, index: isize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    /// Returns a mutable reference to the element at the provided `index`, returning an [`Err`]
    /// on a failure rather than panicking.
    pub fn try_get_mut(&mut self, index: isize) -> Result<&mut T, IndexOutOfBounds> {
        let index = resolve(index, self.len)?;
        Ok(&mut (**self)[index])
    }

    /// Inserts the provided item at the given `index`, growing and shifting elements as
    /// necessary. Negative indices resolve to `len + index + 1`, so `insert(-1, item)` appends
    /// and `insert(-2, item)` places the item just before the current last element.
    ///
    /// # Panics
    /// Panics if the resolved index is outside `[0, len]`.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::containers::array::DynArray;
    /// let mut arr = DynArray::from(["Foo", "Bar"]);
    /// arr.insert(-2, "Hi");
    /// assert_eq!(&*arr, &["Foo", "Hi", "Bar"]);
    /// ```
    pub fn insert(&mut self, index: isize, item: T) {
        self.try_insert(index, item).throw()
    }

    /// Inserts the provided item at the given `index`, returning an [`Err`] on a failure rather
    /// than panicking.
    pub fn try_insert(&mut self, index: isize, item: T) -> Result<(), IndexOutOfBounds> {
        let index = resolve_insert(index, self.len)?;

        if self.len == self.cap() {
            self.grow();
        }

        let mut prev = MaybeUninit::new(item);
        for i in index..=self.len {
            prev = mem::replace(&mut self.buf[i], prev);
        }

        self.len += 1;
        Ok(())
    }

    /// Removes the element at the provided `index` and returns it, shifting all following
    /// elements down to fill the gap. Shrinks the capacity afterwards if the removal left the
    /// array sufficiently sparse.
    ///
    /// # Panics
    /// Panics if the resolved index is out of bounds of the DynArray.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::containers::array::DynArray;
    /// let mut arr = DynArray::from([1, 2, 3]);
    /// assert_eq!(arr.remove(-2), 2);
    /// assert_eq!(&*arr, &[1, 3]);
    /// ```
    pub fn remove(&mut self, index: isize) -> T {
        self.try_remove(index).throw()
    }

    /// Removes the element at the provided `index`, returning an [`Err`] on a failure rather
    /// than panicking.
    pub fn try_remove(&mut self, index: isize) -> Result<T, IndexOutOfBounds> {
        let index = resolve(index, self.len)?;

        let mut next = MaybeUninit::uninit();
        // Walk backwards so that each element shifts down one slot.
        for i in (index..self.len).rev() {
            next = mem::replace(&mut self.buf[i], next);
        }

        self.len -= 1;
        self.shrink_if_sparse();

        // SAFETY: next holds the value previously at index, which was inside the live prefix
        // and therefore initialized.
        Ok(unsafe { next.assume_init() })
    }

    /// Replaces the element at the provided `index` with `new_item`, returning the old element.
    ///
    /// # Panics
    /// Panics if the resolved index is out of bounds of the DynArray.
    pub fn replace(&mut self, index: isize, new_item: T) -> T {
        self.try_replace(index, new_item).throw()
    }

    /// Replaces the element at the provided `index`, returning an [`Err`] on a failure rather
    /// than panicking.
    pub fn try_replace(&mut self, index: isize, new_item: T) -> Result<T, IndexOutOfBounds> {
        let index = resolve(index, self.len)?;

        // SAFETY: The slot lies inside the live prefix and is therefore initialized; the
        // replacement leaves it initialized.
        Ok(unsafe {
            mem::replace(&mut self.buf[index], MaybeUninit::new(new_item)).assume_init()
        })
    }

    /// Removes and drops every element. The capacity is left unchanged.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::containers::array::DynArray;
    /// let mut arr = DynArray::from([1, 2, 3]);
    /// arr.clear();
    /// assert!(arr.is_empty());
    /// assert_eq!(arr.cap(), 5);
    /// ```
    pub fn clear(&mut self) {
        for i in 0..self.len {
            // SAFETY: Every slot below len is initialized and dropped exactly once, because len
            // is zeroed immediately afterwards.
            unsafe { self.buf[i].assume_init_drop(); }
        }
        self.len = 0;
    }
}

impl<T: PartialEq> DynArray<T> {
    /// Returns the index of the first element equal to `item`, scanning from the front, or None
    /// if no element matches.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::containers::array::DynArray;
    /// let arr = DynArray::from([10, 20, 10]);
    /// assert_eq!(arr.index_of(&10), Some(0));
    /// assert_eq!(arr.index_of(&30), None);
    /// ```
    pub fn index_of(&self, item: &T) -> Option<usize> {
        for (index, element) in (**self).iter().enumerate() {
            if element == item { return Some(index); }
        }
        None
    }

    /// Removes the first element equal to `item` and returns it. Returns None and leaves the
    /// array untouched if no element matches.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::containers::array::DynArray;
    /// let mut arr = DynArray::from([1, 2, 3]);
    /// assert_eq!(arr.remove_item(&2), Some(2));
    /// assert_eq!(arr.remove_item(&2), None);
    /// assert_eq!(&*arr, &[1, 3]);
    /// ```
    pub fn remove_item(&mut self, item: &T) -> Option<T> {
        let index = self.index_of(item)?;
        // The index came from a scan of the live prefix, so the removal can't fail.
        Some(self.remove(index as isize))
    }
}

impl<T> DynArray<T> {
    pub(crate) fn grow(&mut self) {
        let new_cap = cmp::max(self.cap() * SCALE_FACTOR, MIN_CAP);

        self.buf.realloc(new_cap);
    }

    /// Halves the capacity once the live prefix occupies a quarter of it or less. An empty
    /// array skips the check entirely, which also keeps the ratio's division well defined.
    pub(crate) fn shrink_if_sparse(&mut self) {
        if self.len == 0 {
            return;
        }

        if self.cap() / self.len >= SHRINK_RATIO {
            let new_cap = self.cap() / SCALE_FACTOR;

            self.buf.realloc(new_cap);
        }
    }
}

#[cfg(feature = "traits")]
impl<T: PartialEq> Data<T> for DynArray<T> {
    type Iter<'a> = slice::Iter<'a, T> where Self: 'a, T: 'a;

    fn len(&self) -> usize {
        self.len
    }

    fn add(&mut self, item: T) {
        self.push(item);
    }

    fn remove_item(&mut self, item: &T) -> Option<T> {
        self.remove_item(item)
    }

    fn clear(&mut self) {
        self.clear();
    }

    fn iter<'a>(&'a self) -> Self::Iter<'a> {
        (**self).iter()
    }
}

#[cfg(feature = "traits")]
impl<T: PartialEq> OrderedData<T> for DynArray<T> {
    fn insert(&mut self, index: isize, item: T) {
        self.insert(index, item);
    }

    fn remove(&mut self, index: isize) -> T {
        self.remove(index)
    }

    fn get(&self, index: isize) -> &T {
        self.get(index)
    }

    fn index_of(&self, item: &T) -> Option<usize> {
        self.index_of(item)
    }
}

impl<T, const N: usize> From<[T; N]> for DynArray<T> {
    /// Builds a DynArray by appending the items in order. The capacity follows the growth
    /// policy rather than `N`, exactly as if each item had been pushed by hand.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::containers::array::DynArray;
    /// let arr = DynArray::from([1, 2, 3, 4, 5, 6, 7]);
    /// assert_eq!(arr.len(), 7);
    /// assert_eq!(arr.cap(), 10);
    /// ```
    fn from(value: [T; N]) -> Self {
        let mut arr = DynArray::new();

        for item in value {
            arr.push(item);
        }

        arr
    }
}

impl<T> FromIterator<T> for DynArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let mut arr = DynArray::new();

        for item in value {
            arr.push(item);
        }

        arr
    }
}

impl<T> Extend<T> for DynArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> Default for DynArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for DynArray<T> {
    fn drop(&mut self) {
        // Drop the live prefix in place; the Buf deallocates itself and its MaybeUninit slots
        // drop as no-ops.
        for i in 0..self.len {
            // SAFETY: Every slot below len is initialized and dropped exactly once.
            unsafe { self.buf[i].assume_init_drop(); }
        }
    }
}

impl<T> Deref for DynArray<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: The first len slots of the buffer hold initialized values, and
        // MaybeUninit<T> has the same layout as T.
        unsafe {
            slice::from_raw_parts(self.buf.ptr.as_ptr().cast(), self.len)
        }
    }
}

impl<T> DerefMut for DynArray<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: The first len slots of the buffer hold initialized values, and
        // MaybeUninit<T> has the same layout as T.
        unsafe {
            slice::from_raw_parts_mut(self.buf.ptr.as_ptr().cast(), self.len)
        }
    }
}

impl<T> AsRef<[T]> for DynArray<T> {
    fn as_ref(&self) -> &[T] {
        self.deref()
    }
}

impl<T> AsMut<[T]> for DynArray<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.deref_mut()
    }
}

impl<T> Borrow<[T]> for DynArray<T> {
    fn borrow(&self) -> &[T] {
        self.as_ref()
    }
}

impl<T> BorrowMut<[T]> for DynArray<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut()
    }
}

impl<T> Index<isize> for DynArray<T> {
    type Output = T;

    fn index(&self, index: isize) -> &Self::Output {
        self.get(index)
    }
}

impl<T> IndexMut<isize> for DynArray<T> {
    fn index_mut(&mut self, index: isize) -> &mut Self::Output {
        self.get_mut(index)
    }
}

impl<T: Clone> Clone for DynArray<T> {
    fn clone(&self) -> Self {
        let mut arr = Self::with_cap(self.cap());

        for value in (**self).iter() {
            arr.push(value.clone());
        }

        arr
    }
}

impl<T: PartialEq> PartialEq for DynArray<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for DynArray<T> {}

impl<T: Hash> Hash for DynArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug> Debug for DynArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynArray")
            .field("contents", &Unquoted(format!("{self}")))
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Debug> Display for DynArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries((**self).iter()).finish()
    }
}
