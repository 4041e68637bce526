use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem;
use std::ops::{Index, IndexMut};

use derive_more::IsVariant;

use super::{Arena, Iter, IterMut, Length, Node, NodeRef, ONE};
use crate::containers::array::DynArray;
#[cfg(feature = "traits")]
use crate::containers::traits::{Data, OrderedData};
#[doc(inline)]
pub use crate::util::error::{CapacityOverflow, IndexOutOfBounds};
use crate::util::fmt::Unquoted;
use crate::util::index::{resolve, resolve_insert};
use crate::util::result::ResultExtension;

/// A list with links in both directions, backed by an arena: every node lives in one growable
/// slot array owned by the list, and links between nodes are slot indices rather than pointers.
/// Vacated slots chain together for reuse, so a long-lived list recycles its own storage instead
/// of hitting the allocator once per node.
///
/// Positional methods take signed indices, where negative values count back from the end: `-1`
/// is the last element and `-len` the first. Traversal follows the sign, so a negative index
/// walks from the tail and a non-negative one from the head. For
/// [`insert`](LinkedList::insert), `-1` names the slot *after* the last element, so inserting at
/// `-1` appends.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the LinkedList.
/// - `d`: The distance between the resolved position and the end the index counts from.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front/back` | `O(1)` |
/// | `push_front/back` | `O(1)`* |
/// | `pop_front/back` | `O(1)` |
/// | `get` | `O(d)` |
/// | `insert` | `O(d)` |
/// | `remove` | `O(d)` |
/// | `replace` | `O(d)` |
/// | `index_of` | `O(n)` |
///
/// \* `O(n)` when the push grows the slot array.
///
/// As a general note, modern computer architecture favours contiguous collections, because all
/// `O(d)` and `O(n)` operations here chase links instead of scanning memory in order. The arena
/// keeps the nodes close together, which softens the cost but doesn't remove it.
/// [`DynArray`] should be preferred unless the `O(1)` end operations are being heavily utilized.
pub struct LinkedList<T> {
    pub(crate) arena: Arena<T>,
    pub(crate) state: ListState,
}

#[derive(Debug, Default, Clone, Copy, IsVariant)]
pub(crate) enum ListState {
    #[default]
    Empty,
    Full(Links),
}

use ListState::*;

/// The ends and length of a non-empty list. Copied around freely; the nodes themselves stay in
/// the arena.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Links {
    pub len: Length,
    pub head: NodeRef,
    pub tail: NodeRef,
}

impl<T> LinkedList<T> {
    /// Creates a new LinkedList with no elements. No memory is allocated until the first push.
    pub fn new() -> LinkedList<T> {
        LinkedList {
            arena: Arena::new(),
            state: Empty,
        }
    }

    /// Returns the length of the LinkedList.
    pub const fn len(&self) -> usize {
        self.state.len()
    }

    /// Returns true if the LinkedList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Returns a reference to the first element in the list, if it exists.
    pub fn front(&self) -> Option<&T> {
        match self.state {
            Empty => None,
            Full(Links { head, .. }) => Some(&self.arena.node(head).value),
        }
    }

    /// Returns a mutable reference to the first element in the list, if it exists.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        match self.state {
            Empty => None,
            Full(Links { head, .. }) => Some(&mut self.arena.node_mut(head).value),
        }
    }

    /// Returns a reference to the last element in the list, if it exists.
    pub fn back(&self) -> Option<&T> {
        match self.state {
            Empty => None,
            Full(Links { tail, .. }) => Some(&self.arena.node(tail).value),
        }
    }

    /// Returns a mutable reference to the last element in the list, if it exists.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        match self.state {
            Empty => None,
            Full(Links { tail, .. }) => Some(&mut self.arena.node_mut(tail).value),
        }
    }

    /// Adds the provided element to the front of the LinkedList.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::containers::linked::LinkedList;
    /// let mut list = LinkedList::from([2, 3]);
    /// list.push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    pub fn push_front(&mut self, value: T) {
        self.state = match self.state {
            Empty => self.adopt_first(value),
            Full(links) => Full(self.link_front(links, value)),
        };
    }

    /// Adds the provided element to the back of the LinkedList.
    pub fn push_back(&mut self, value: T) {
        self.state = match self.state {
            Empty => self.adopt_first(value),
            Full(links) => Full(self.link_back(links, value)),
        };
    }

    /// Removes the first element from the list and returns it, if the list isn't empty.
    pub fn pop_front(&mut self) -> Option<T> {
        match self.state {
            Empty => None,
            Full(links) => {
                let node = self.arena.release(links.head);

                self.state = match links.len.checked_sub(1) {
                    Some(new_len) => {
                        // UNREACHABLE: The previous length was at least 2, so the head had a
                        // successor.
                        let new_head = match node.next {
                            Some(next) => next,
                            None => unreachable!(),
                        };
                        self.arena.node_mut(new_head).prev = None;

                        Full(Links {
                            len: new_len,
                            head: new_head,
                            tail: links.tail,
                        })
                    },
                    None => Empty,
                };

                Some(node.value)
            },
        }
    }

    /// Removes the last element from the list and returns it, if the list isn't empty.
    pub fn pop_back(&mut self) -> Option<T> {
        match self.state {
            Empty => None,
            Full(links) => {
                let node = self.arena.release(links.tail);

                self.state = match links.len.checked_sub(1) {
                    Some(new_len) => {
                        // UNREACHABLE: The previous length was at least 2, so the tail had a
                        // predecessor.
                        let new_tail = match node.prev {
                            Some(prev) => prev,
                            None => unreachable!(),
                        };
                        self.arena.node_mut(new_tail).next = None;

                        Full(Links {
                            len: new_len,
                            head: links.head,
                            tail: new_tail,
                        })
                    },
                    None => Empty,
                };

                Some(node.value)
            },
        }
    }

    /// Returns a reference to the element at the provided `index`, resolving negative indices
    /// from the end.
    ///
    /// The same functionality can be achieved using the [`Index`] operator.
    ///
    /// # Panics
    /// Panics if the resolved index is out of bounds of the LinkedList.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::containers::linked::LinkedList;
    /// let list = LinkedList::from(["a", "b", "c"]);
    /// assert_eq!(*list.get(0), "a");
    /// assert_eq!(*list.get(-1), "c");
    /// ```
    pub fn get(&self, index: isize) -> &T {
        self.try_get(index).throw()
    }

    /// Returns a reference to the element at the provided `index`, returning an [`Err`] on a
    /// failure rather than panicking.
    pub fn try_get(&self, index: isize) -> Result<&T, IndexOutOfBounds> {
        Ok(&self.arena.node(self.checked_seek(index)?).value)
    }

    /// Returns a mutable reference to the element at the provided `index`, resolving negative
    /// indices from the end.
    ///
    /// The same functionality can be achieved using the [`IndexMut`] operator.
    ///
    /// # Panics
    /// Panics if the resolved index is out of bounds of the LinkedList.
    pub fn get_mut(&mut self, index: isize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    /// Returns a mutable reference to the element at the provided `index`, returning an [`Err`]
    /// on a failure rather than panicking.
    pub fn try_get_mut(&mut self, index: isize) -> Result<&mut T, IndexOutOfBounds> {
        let node = self.checked_seek(index)?;
        Ok(&mut self.arena.node_mut(node).value)
    }

    /// Inserts the provided element at the given `index`. Negative indices resolve to
    /// `len + index + 1`, so `insert(-1, value)` appends and `insert(-2, value)` places the
    /// element just before the current last one.
    ///
    /// # Panics
    /// Panics if the resolved index is outside `[0, len]`.
    pub fn insert(&mut self, index: isize, value: T) {
        self.try_insert(index, value).throw()
    }

    /// Inserts the provided element at the given `index`, returning an [`Err`] on a failure
    /// rather than panicking.
    pub fn try_insert(&mut self, index: isize, value: T) -> Result<(), IndexOutOfBounds> {
        let len = self.len();
        let resolved = resolve_insert(index, len)?;

        if resolved == 0 {
            self.push_front(value);
        } else if resolved == len {
            self.push_back(value);
        } else {
            // UNREACHABLE: Interior insertion means the list is non-empty.
            let links = match self.state {
                Full(links) => links,
                Empty => unreachable!(),
            };

            let prev = if index < 0 {
                self.seek_bwd(links.tail, len - resolved)
            } else {
                self.seek_fwd(links.head, resolved - 1)
            };
            // UNREACHABLE: Interior insertion means prev isn't the tail.
            let next = match self.arena.node(prev).next {
                Some(next) => next,
                None => unreachable!(),
            };

            let node = self.arena.adopt(Node {
                value,
                prev: Some(prev),
                next: Some(next),
            });

            self.arena.node_mut(prev).next = Some(node);
            self.arena.node_mut(next).prev = Some(node);

            self.state = Full(Links {
                len: links.len.checked_add(1).ok_or(CapacityOverflow).throw(),
                ..links
            });
        }
        Ok(())
    }

    /// Removes the element at the provided `index` and returns it, relinking its neighbours.
    ///
    /// # Panics
    /// Panics if the resolved index is out of bounds of the LinkedList.
    pub fn remove(&mut self, index: isize) -> T {
        self.try_remove(index).throw()
    }

    /// Removes the element at the provided `index`, returning an [`Err`] on a failure rather
    /// than panicking.
    pub fn try_remove(&mut self, index: isize) -> Result<T, IndexOutOfBounds> {
        let len = self.len();
        let resolved = resolve(index, len)?;

        match resolved {
            0 => match self.pop_front() {
                Some(value) => Ok(value),
                // UNREACHABLE: resolve already proved the list non-empty.
                None => unreachable!(),
            },
            val if val == len - 1 => match self.pop_back() {
                Some(value) => Ok(value),
                // UNREACHABLE: resolve already proved the list non-empty.
                None => unreachable!(),
            },
            val => {
                // UNREACHABLE: Interior removal means the list is non-empty.
                let links = match self.state {
                    Full(links) => links,
                    Empty => unreachable!(),
                };

                let target = if index < 0 {
                    self.seek_bwd(links.tail, len - 1 - val)
                } else {
                    self.seek_fwd(links.head, val)
                };
                let node = self.arena.release(target);

                // UNREACHABLE: Interior nodes link in both directions.
                let (prev, next) = match (node.prev, node.next) {
                    (Some(prev), Some(next)) => (prev, next),
                    _ => unreachable!(),
                };
                self.arena.node_mut(prev).next = Some(next);
                self.arena.node_mut(next).prev = Some(prev);

                self.state = Full(Links {
                    // UNREACHABLE: An interior removal leaves at least two nodes.
                    len: match links.len.checked_sub(1) {
                        Some(new_len) => new_len,
                        None => unreachable!(),
                    },
                    ..links
                });

                Ok(node.value)
            },
        }
    }

    /// Replaces the element at the provided `index` with `new_value`, returning the old element.
    ///
    /// # Panics
    /// Panics if the resolved index is out of bounds of the LinkedList.
    pub fn replace(&mut self, index: isize, new_value: T) -> T {
        self.try_replace(index, new_value).throw()
    }

    /// Replaces the element at the provided `index`, returning an [`Err`] on a failure rather
    /// than panicking.
    pub fn try_replace(&mut self, index: isize, new_value: T) -> Result<T, IndexOutOfBounds> {
        let node = self.checked_seek(index)?;
        Ok(mem::replace(&mut self.arena.node_mut(node).value, new_value))
    }

    /// Removes and drops every element. The arena keeps its slot capacity.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.state = Empty;
    }

    /// Returns a borrowing iterator over the elements of the list, from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Returns a mutably borrowing iterator over the elements of the list, from front to back.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Returns the index of the first element equal to `item`, scanning from the front, or None
    /// if no element matches.
    pub fn index_of(&self, item: &T) -> Option<usize> {
        for (index, element) in self.iter().enumerate() {
            if element == item { return Some(index); }
        }
        None
    }

    /// Returns true if any element of the list equals `item`.
    pub fn contains(&self, item: &T) -> bool {
        self.index_of(item).is_some()
    }

    /// Removes the first element equal to `item` and returns it. Returns None and leaves the
    /// list untouched if no element matches.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::containers::linked::LinkedList;
    /// let mut list = LinkedList::from([1, 2, 3]);
    /// assert_eq!(list.remove_item(&2), Some(2));
    /// assert_eq!(list.remove_item(&2), None);
    /// ```
    pub fn remove_item(&mut self, item: &T) -> Option<T> {
        let index = self.index_of(item)?;
        Some(self.remove(index as isize))
    }
}

impl<T> LinkedList<T> {
    fn adopt_first(&mut self, value: T) -> ListState {
        let node = self.arena.adopt(Node {
            value,
            prev: None,
            next: None,
        });

        Full(Links {
            len: ONE,
            head: node,
            tail: node,
        })
    }

    fn link_front(&mut self, mut links: Links, value: T) -> Links {
        links.len = links.len.checked_add(1).ok_or(CapacityOverflow).throw();

        let node = self.arena.adopt(Node {
            value,
            prev: None,
            next: Some(links.head),
        });

        self.arena.node_mut(links.head).prev = Some(node);
        links.head = node;
        links
    }

    fn link_back(&mut self, mut links: Links, value: T) -> Links {
        links.len = links.len.checked_add(1).ok_or(CapacityOverflow).throw();

        let node = self.arena.adopt(Node {
            value,
            prev: Some(links.tail),
            next: None,
        });

        self.arena.node_mut(links.tail).next = Some(node);
        links.tail = node;
        links
    }

    pub(crate) fn checked_seek(&self, index: isize) -> Result<NodeRef, IndexOutOfBounds> {
        let links = match self.state {
            Empty => return Err(IndexOutOfBounds { index, len: 0 }),
            Full(links) => links,
        };
        let resolved = resolve(index, links.len.get())?;

        Ok(if index < 0 {
            self.seek_bwd(links.tail, links.len.get() - 1 - resolved)
        } else {
            self.seek_fwd(links.head, resolved)
        })
    }

    #[allow(clippy::unwrap_used)]
    fn seek_fwd(&self, mut node: NodeRef, count: usize) -> NodeRef {
        for _ in 0..count {
            // UNWRAP: The caller has already bounds checked the distance.
            node = self.arena.node(node).next.unwrap();
        }
        node
    }

    #[allow(clippy::unwrap_used)]
    fn seek_bwd(&self, mut node: NodeRef, count: usize) -> NodeRef {
        for _ in 0..count {
            // UNWRAP: The caller has already bounds checked the distance.
            node = self.arena.node(node).prev.unwrap();
        }
        node
    }

    #[allow(clippy::unwrap_used)]
    pub(crate) fn verify_double_links(&self) {
        match self.state {
            Empty => {},
            Full(Links { len, head, tail }) => {
                assert!(self.arena.node(head).prev.is_none());

                let mut curr = head;
                let mut count = 1;
                while let Some(next) = self.arena.node(curr).next {
                    // UNWRAP: This needs to panic if prev is None.
                    assert!(self.arena.node(next).prev.unwrap() == curr);
                    curr = next;
                    count += 1;
                }

                assert!(tail == curr);
                assert!(len.get() == count);
            },
        }
    }
}

impl ListState {
    pub const fn len(&self) -> usize {
        match self {
            Empty => 0,
            Full(Links { len, .. }) => len.get(),
        }
    }
}

#[cfg(feature = "traits")]
impl<T: PartialEq> Data<T> for LinkedList<T> {
    type Iter<'a> = Iter<'a, T> where Self: 'a, T: 'a;

    fn len(&self) -> usize {
        self.len()
    }

    fn add(&mut self, item: T) {
        self.push_back(item);
    }

    fn remove_item(&mut self, item: &T) -> Option<T> {
        self.remove_item(item)
    }

    fn clear(&mut self) {
        self.clear();
    }

    fn iter<'a>(&'a self) -> Self::Iter<'a> {
        self.iter()
    }
}

#[cfg(feature = "traits")]
impl<T: PartialEq> OrderedData<T> for LinkedList<T> {
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

impl<T> Index<isize> for LinkedList<T> {
    type Output = T;

    fn index(&self, index: isize) -> &Self::Output {
        self.get(index)
    }
}

impl<T> IndexMut<isize> for LinkedList<T> {
    fn index_mut(&mut self, index: isize) -> &mut Self::Output {
        self.get_mut(index)
    }
}

impl<T, const N: usize> From<[T; N]> for LinkedList<T> {
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        for item in iter {
            list.push_back(item);
        }
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        for (a, b) in self.iter().zip(other.iter()) {
            if a != b {
                return false;
            }
        }
        true
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: Hash> Hash for LinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for value in self.iter() {
            value.hash(state);
        }
        // Terminate variable length hashing sequence.
        0xFF.hash(state);
    }
}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedList")
            .field("contents", &Unquoted(format!("{self}")))
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Debug> Display for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({})",
            self.iter()
                .map(|i| format!("{i:?}"))
                .collect::<DynArray<String>>()
                .join(") -> (")
        )
    }
}
