use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};

use derive_more::From;

/// A key-value pair stored in a [`Dictionary`](super::Dictionary).
///
/// The key can't be accessed mutably, as manipulating it in a way that changes its hash or
/// equality would corrupt the bucket it lives in.
#[derive(Debug, Clone, PartialEq, Eq, From)]
pub struct Entry<K, V> {
    key: K,
    value: V,
}

impl<K, V> Entry<K, V> {
    /// Creates a new Entry associating `key` with `value`.
    pub const fn new(key: K, value: V) -> Entry<K, V> {
        Entry {
            key,
            value,
        }
    }

    /// Returns a reference to the Entry's key.
    pub const fn key(&self) -> &K {
        &self.key
    }

    /// Returns true if the Entry's key equals the provided `key`, where equality carries over
    /// the borrow.
    pub(crate) fn key_matches<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.key.borrow() == key
    }

    /// Returns a reference to the Entry's value.
    pub const fn value(&self) -> &V {
        &self.value
    }

    /// Returns a mutable reference to the Entry's value.
    pub fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    /// Consumes the Entry, returning the key and value it held.
    pub fn into_pair(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K: Debug, V: Debug> Display for Entry<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {:?}", self.key, self.value)
    }
}
