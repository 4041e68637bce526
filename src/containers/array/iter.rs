use std::mem;

use super::DynArray;

#[doc(inline)]
pub use crate::containers::store::IntoIter;

impl<T> IntoIterator for DynArray<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        let len = self.len;
        self.len = 0;
        IntoIter {
            // Swapping an empty buffer in leaves self trivially droppable.
            buf: mem::take(&mut self.buf),
            index: 0,
            len,
        }
    }
}
