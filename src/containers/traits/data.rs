/// A container holding a flat collection of items.
///
/// The trait doesn't prescribe where [`add`](Data::add) places an item, only that added items
/// show up in iteration and count towards [`len`](Data::len). Containers with a meaningful
/// ordering extend this with [`OrderedData`].
pub trait Data<T>: IntoIterator<Item = T> + Sized {
    type Iter<'a>: Iterator<Item = &'a T> where Self: 'a, T: 'a;

    /// Returns the number of items held.
    fn len(&self) -> usize;

    /// Returns true if no items are held.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Adds the provided item to the container, wherever it naturally lands.
    fn add(&mut self, item: T);

    /// Removes the first item equal to `item`, returning it if one was found. Absence is an
    /// expected outcome, not an error.
    fn remove_item(&mut self, item: &T) -> Option<T>;

    /// Removes and drops every item.
    fn clear(&mut self);

    /// Returns an iterator over all items, as references.
    fn iter<'a>(&'a self) -> Self::Iter<'a>;
}

/// A [`Data`] container whose items sit in a stable order, addressable by signed index.
///
/// Indexing follows the containers' shared convention: negative indices count back from the end,
/// with `-1` naming the last item, and every method panics when the resolved index falls out of
/// bounds.
pub trait OrderedData<T>: Data<T> {
    /// Inserts `item` at the provided `index`, shifting later items along. Inserting at `-1`
    /// appends.
    fn insert(&mut self, index: isize, item: T);

    /// Removes and returns the item at the provided `index`.
    fn remove(&mut self, index: isize) -> T;

    /// Returns a reference to the item at the provided `index`.
    fn get(&self, index: isize) -> &T;

    /// Returns the position of the first item equal to `item`, if any.
    fn index_of(&self, item: &T) -> Option<usize>;
}
