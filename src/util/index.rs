use crate::util::error::IndexOutOfBounds;

/// Resolves a possibly-negative `index` against `len`, where `-1` refers to the last element and
/// `-len` to the first. The resolved index must land in `[0, len)`.
pub(crate) const fn resolve(index: isize, len: usize) -> Result<usize, IndexOutOfBounds> {
    // Allocations are capped at isize::MAX bytes, so len always fits in an isize.
    let offset = if index < 0 { len as isize + index } else { index };

    if 0 <= offset && (offset as usize) < len {
        Ok(offset as usize)
    } else {
        Err(IndexOutOfBounds { index, len })
    }
}

/// Resolves a possibly-negative insertion `index` against `len`. Negative indices resolve to
/// `len + index + 1`, so `-1` means "insert as the new last element". The resolved index must
/// land in `[0, len]`, with `len` itself meaning append.
pub(crate) const fn resolve_insert(index: isize, len: usize) -> Result<usize, IndexOutOfBounds> {
    let offset = if index < 0 { len as isize + index + 1 } else { index };

    if 0 <= offset && (offset as usize) <= len {
        Ok(offset as usize)
    } else {
        Err(IndexOutOfBounds { index, len })
    }
}
