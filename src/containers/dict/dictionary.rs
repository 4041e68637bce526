use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash, RandomState};
use std::mem;

use super::{Entry, IntoKeys, IntoValues, Iter, IterMut, Keys, Values, ValuesMut};
use crate::containers::linked::LinkedList;
use crate::containers::store::Buf;
use crate::util::fmt::Unquoted;

const BUCKET_COUNT: usize = 16;

/// A map of keys to values which relies on the keys implementing [`Hash`], storing entries in a
/// fixed set of 16 buckets with one chain per bucket.
///
/// The bucket count never changes, which is a deliberate limitation: chains simply grow as
/// entries accumulate, so lookups degrade linearly once a Dictionary holds many times more
/// entries than buckets. In exchange, insertion never rehashes and entries never move between
/// buckets. An empty bucket is just an empty [`LinkedList`], which allocates nothing until its
/// first entry arrives.
///
/// It is a logic error for keys in a Dictionary to be manipulated in a way that changes their
/// hash. Because of this, Dictionary's API prevents mutable access to its keys.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of entries in the Dictionary.
/// - `c`: The length of the chain in the target bucket (`n / 16` on average when hashes
///   distribute evenly, but `n` in the worst case).
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `add` | `O(c)` |
/// | `set` | `O(c)` |
/// | `get` | `O(c)` |
/// | `remove` | `O(c)` |
/// | `contains` | `O(c)` |
/// | `clear` | `O(n)` |
pub struct Dictionary<K: Hash + Eq, V, B: BuildHasher = RandomState> {
    pub(crate) buckets: Buf<LinkedList<Entry<K, V>>>,
    pub(crate) len: usize,
    pub(crate) hasher: B,
}

impl<K: Hash + Eq, V, B: BuildHasher + Default> Dictionary<K, V, B> {
    /// Creates a new Dictionary with the default value for `B`. The bucket array is allocated
    /// immediately, but the buckets themselves hold nothing.
    pub fn new() -> Dictionary<K, V, B> {
        Dictionary::with_hasher(B::default())
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> Dictionary<K, V, B> {
    /// Creates a new Dictionary which hashes keys with the provided `hasher`.
    pub fn with_hasher(hasher: B) -> Dictionary<K, V, B> {
        Dictionary {
            buckets: Buf::repeat_default(BUCKET_COUNT),
            len: 0,
            hasher,
        }
    }

    /// Returns the number of entries in the Dictionary.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the Dictionary contains no entries.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inserts the provided `entry` into the Dictionary. If the key was already associated with
    /// a value, the previous value is returned.
    ///
    /// As with the standard library, an existing entry keeps its key and its position in the
    /// chain; only its value is swapped.
    pub fn add(&mut self, entry: Entry<K, V>) -> Option<V> {
        let index = self.bucket_index(entry.key());
        let bucket = &mut self.buckets[index];

        for existing in bucket.iter_mut() {
            if existing.key() == entry.key() {
                let (_key, value) = entry.into_pair();
                return Some(mem::replace(existing.value_mut(), value));
            }
        }

        bucket.push_back(entry);
        self.len += 1;
        None
    }

    /// Inserts the provided `key`-`value` pair into the Dictionary. If the key was already
    /// associated with a value, the previous value is returned.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::containers::dict::Dictionary;
    /// let mut dict = Dictionary::from([("a", 1)]);
    /// assert_eq!(dict.set("a", 2), Some(1));
    /// assert_eq!(dict.set("b", 3), None);
    /// assert_eq!(dict.get("a"), Some(&2));
    /// ```
    pub fn set(&mut self, key: K, value: V) -> Option<V> {
        self.add(Entry::new(key, value))
    }

    /// Returns a reference to the [`Entry`] for the provided `key` or None if there is no entry.
    pub fn get_entry<Q>(&self, key: &Q) -> Option<&Entry<K, V>>
    where
        // We're introducing a new type parameter here, Q, which represents a borrowed version of
        // K where equality and hashing carry over the borrow.
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let bucket = &self.buckets[self.bucket_index(key)];

        for entry in bucket.iter() {
            if entry.key_matches(key) {
                return Some(entry);
            }
        }
        None
    }

    /// Returns a reference to the value associated with the provided `key` or None if the
    /// Dictionary contains no value for `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        Some(self.get_entry(key)?.value())
    }

    /// Returns a mutable reference to the value associated with the provided `key` or None if
    /// the Dictionary contains no value for `key`.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.bucket_index(key);
        let bucket = &mut self.buckets[index];

        for entry in bucket.iter_mut() {
            if entry.key_matches(key) {
                return Some(entry.value_mut());
            }
        }
        None
    }

    /// Removes the [`Entry`] associated with `key`, returning it if it exists. The rest of the
    /// bucket's chain keeps its order.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<Entry<K, V>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.bucket_index(key);
        let bucket = &mut self.buckets[index];

        let position = bucket.iter().position(|entry| entry.key_matches(key))?;

        let removed = bucket.remove(position as isize);
        self.len -= 1;
        Some(removed)
    }

    /// Removes the entry associated with `key`, returning the value if it exists.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.remove_entry(key).map(|entry| entry.into_pair().1)
    }

    /// Returns true if there is a value associated with the provided `key`.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get_entry(key).is_some()
    }

    /// Removes and drops every entry. The bucket array and each bucket's chain allocation are
    /// kept.
    pub fn clear(&mut self) {
        for bucket in self.buckets.iter_mut() {
            bucket.clear();
        }
        self.len = 0;
    }

    /// Returns an iterator over all entries in the Dictionary, as references.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.into_iter()
    }

    /// Returns an iterator over all entries in the Dictionary, as mutable references. Only each
    /// entry's value can be mutated through it.
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        self.into_iter()
    }

    /// Consumes self and returns an iterator over all contained keys.
    pub fn into_keys(self) -> IntoKeys<K, V> {
        IntoKeys(self.into_iter())
    }

    /// Returns an iterator over all keys in the Dictionary, as references.
    pub fn keys<'a>(&'a self) -> Keys<'a, K, V> {
        Keys(self.iter())
    }

    /// Consumes self and returns an iterator over all contained values.
    pub fn into_values(self) -> IntoValues<K, V> {
        IntoValues(self.into_iter())
    }

    /// Returns an iterator over all values in the Dictionary, as references.
    pub fn values<'a>(&'a self) -> Values<'a, K, V> {
        Values(self.iter())
    }

    /// Returns an iterator over all values in the Dictionary, as mutable references.
    pub fn values_mut<'a>(&'a mut self) -> ValuesMut<'a, K, V> {
        ValuesMut(self.iter_mut())
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> Dictionary<K, V, B> {
    /// Calculates the bucket housing entries for the provided `hashable`. The bucket count is
    /// fixed and non-zero, so every hash maps to a valid bucket.
    pub(crate) fn bucket_index<Q: Hash + ?Sized>(&self, hashable: &Q) -> usize {
        (self.hasher.hash_one(hashable) % BUCKET_COUNT as u64) as usize
    }
}

impl<K: Hash + Eq, V> Default for Dictionary<K, V> {
    fn default() -> Self {
        Dictionary::new()
    }
}

impl<K: Hash + Eq, V, const N: usize> From<[(K, V); N]> for Dictionary<K, V> {
    fn from(value: [(K, V); N]) -> Self {
        value.into_iter().map(Entry::from).collect()
    }
}

impl<K: Hash + Eq, V, const N: usize> From<[Entry<K, V>; N]> for Dictionary<K, V> {
    fn from(value: [Entry<K, V>; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<K: Hash + Eq, V, B: BuildHasher + Default> FromIterator<(K, V)> for Dictionary<K, V, B> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut dict = Dictionary::with_hasher(B::default());
        for (key, value) in iter {
            dict.set(key, value);
        }
        dict
    }
}

impl<K: Hash + Eq, V, B: BuildHasher + Default> FromIterator<Entry<K, V>> for Dictionary<K, V, B> {
    fn from_iter<I: IntoIterator<Item = Entry<K, V>>>(iter: I) -> Self {
        let mut dict = Dictionary::with_hasher(B::default());
        for entry in iter {
            dict.add(entry);
        }
        dict
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> Extend<(K, V)> for Dictionary<K, V, B> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

impl<K: Hash + Eq + Debug, V: Debug, B: BuildHasher> Debug for Dictionary<K, V, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dictionary")
            .field("contents", &Unquoted(format!("{self}")))
            .field("len", &self.len)
            .field("buckets", &BUCKET_COUNT)
            .finish()
    }
}

impl<K: Hash + Eq + Debug, V: Debug, B: BuildHasher> Display for Dictionary<K, V, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#")?;
        f.debug_map().entries(self.iter().map(|entry| (entry.key(), entry.value()))).finish()
    }
}
