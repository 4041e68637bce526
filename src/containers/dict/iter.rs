use std::hash::{BuildHasher, Hash};
use std::iter::FusedIterator;
use std::slice::Iter as BucketIter;
use std::slice::IterMut as BucketIterMut;

use super::{Dictionary, Entry};
use crate::containers::linked::LinkedList;
use crate::containers::linked::list::IntoIter as ChainIntoIter;
use crate::containers::linked::list::Iter as ChainIter;
use crate::containers::linked::list::IterMut as ChainIterMut;
use crate::containers::store::IntoIter as BucketIntoIter;

impl<K: Hash + Eq, V, B: BuildHasher> IntoIterator for Dictionary<K, V, B> {
    type Item = Entry<K, V>;

    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            len: self.len,
            buckets: self.buckets.into_iter(),
            chain: None,
        }
    }
}

/// An owning iterator over a [`Dictionary`], yielding entries bucket by bucket in ascending
/// bucket order and in chain order within each bucket.
pub struct IntoIter<K, V> {
    pub(crate) buckets: BucketIntoIter<LinkedList<Entry<K, V>>>,
    pub(crate) chain: Option<ChainIntoIter<Entry<K, V>>>,
    pub(crate) len: usize,
}

impl<K: Hash + Eq, V> Iterator for IntoIter<K, V> {
    type Item = Entry<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.chain.as_mut().and_then(Iterator::next) {
                self.len -= 1;
                return Some(entry);
            }
            // Exhausting the bucket iterator ends the whole iteration.
            self.chain = Some(self.buckets.next()?.into_iter());
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<K: Hash + Eq, V> FusedIterator for IntoIter<K, V> {}

impl<K: Hash + Eq, V> ExactSizeIterator for IntoIter<K, V> {
    fn len(&self) -> usize {
        self.len
    }
}

impl<'a, K: Hash + Eq, V, B: BuildHasher> IntoIterator for &'a Dictionary<K, V, B> {
    type Item = &'a Entry<K, V>;

    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            len: self.len,
            buckets: self.buckets.iter(),
            chain: None,
        }
    }
}

/// A borrowing iterator over a [`Dictionary`], in the same bucket-then-chain order as
/// [`IntoIter`].
pub struct Iter<'a, K, V> {
    pub(crate) buckets: BucketIter<'a, LinkedList<Entry<K, V>>>,
    pub(crate) chain: Option<ChainIter<'a, Entry<K, V>>>,
    pub(crate) len: usize,
}

impl<'a, K: Hash + Eq, V> Iterator for Iter<'a, K, V> {
    type Item = &'a Entry<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.chain.as_mut().and_then(Iterator::next) {
                self.len -= 1;
                return Some(entry);
            }
            // Exhausting the bucket iterator ends the whole iteration.
            self.chain = Some(self.buckets.next()?.iter());
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, K: Hash + Eq, V> FusedIterator for Iter<'a, K, V> {}

impl<'a, K: Hash + Eq, V> ExactSizeIterator for Iter<'a, K, V> {
    fn len(&self) -> usize {
        self.len
    }
}

impl<'a, K: Hash + Eq, V, B: BuildHasher> IntoIterator for &'a mut Dictionary<K, V, B> {
    type Item = &'a mut Entry<K, V>;

    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IterMut {
            len: self.len,
            buckets: self.buckets.iter_mut(),
            chain: None,
        }
    }
}

/// A mutably borrowing iterator over a [`Dictionary`]. The yielded [`Entry`] references only
/// expose their values mutably, so no key can change under its bucket.
pub struct IterMut<'a, K, V> {
    pub(crate) buckets: BucketIterMut<'a, LinkedList<Entry<K, V>>>,
    pub(crate) chain: Option<ChainIterMut<'a, Entry<K, V>>>,
    pub(crate) len: usize,
}

impl<'a, K: Hash + Eq, V> Iterator for IterMut<'a, K, V> {
    type Item = &'a mut Entry<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.chain.as_mut().and_then(Iterator::next) {
                self.len -= 1;
                return Some(entry);
            }
            // Exhausting the bucket iterator ends the whole iteration.
            self.chain = Some(self.buckets.next()?.iter_mut());
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, K: Hash + Eq, V> FusedIterator for IterMut<'a, K, V> {}

impl<'a, K: Hash + Eq, V> ExactSizeIterator for IterMut<'a, K, V> {
    fn len(&self) -> usize {
        self.len
    }
}

pub struct IntoKeys<K, V>(
    pub(crate) IntoIter<K, V>
);

impl<K: Hash + Eq, V> Iterator for IntoKeys<K, V> {
    type Item = K;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|entry| entry.into_pair().0)
    }
}

pub struct Keys<'a, K, V>(
    pub(crate) Iter<'a, K, V>
);

impl<'a, K: Hash + Eq, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(Entry::key)
    }
}

pub struct IntoValues<K, V>(
    pub(crate) IntoIter<K, V>
);

impl<K: Hash + Eq, V> Iterator for IntoValues<K, V> {
    type Item = V;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|entry| entry.into_pair().1)
    }
}

pub struct Values<'a, K, V>(
    pub(crate) Iter<'a, K, V>
);

impl<'a, K: Hash + Eq, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(Entry::value)
    }
}

pub struct ValuesMut<'a, K, V>(
    pub(crate) IterMut<'a, K, V>
);

impl<'a, K: Hash + Eq, V> Iterator for ValuesMut<'a, K, V> {
    type Item = &'a mut V;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(Entry::value_mut)
    }
}
