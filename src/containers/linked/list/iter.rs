use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ptr::NonNull;

use super::linked_list::ListState::{self, *};
use super::{Arena, LinkedList, Slot};

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            list: self,
        }
    }
}

/// An owning iterator over a [`LinkedList`]. Popping from the held list covers ownership
/// transfer, drop handling and both directions of iteration.
pub struct IntoIter<T> {
    pub(crate) list: LinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.pop_back()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.list.len()
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            arena: &self.arena,
            state: self.state,
        }
    }
}

/// A borrowing iterator over a [`LinkedList`]. Holds its own copy of the list's state, narrowing
/// it from both ends as elements are yielded.
pub struct Iter<'a, T> {
    pub(crate) arena: &'a Arena<T>,
    pub(crate) state: ListState,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.state {
            Empty => None,
            Full(links) => {
                let node = self.arena.node(links.head);

                match links.len.checked_sub(1) {
                    Some(new_len) => {
                        // UNREACHABLE: At least one element remains, so head has a successor.
                        links.head = match node.next {
                            Some(next) => next,
                            None => unreachable!(),
                        };
                        links.len = new_len;
                    },
                    None => self.state = Empty,
                }

                Some(&node.value)
            },
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.state.len(), Some(self.state.len()))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        match &mut self.state {
            Empty => None,
            Full(links) => {
                let node = self.arena.node(links.tail);

                match links.len.checked_sub(1) {
                    Some(new_len) => {
                        // UNREACHABLE: At least one element remains, so tail has a predecessor.
                        links.tail = match node.prev {
                            Some(prev) => prev,
                            None => unreachable!(),
                        };
                        links.len = new_len;
                    },
                    None => self.state = Empty,
                }

                Some(&node.value)
            },
        }
    }
}

impl<'a, T> FusedIterator for Iter<'a, T> {}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {
    fn len(&self) -> usize {
        self.state.len()
    }
}

impl<'a, T> IntoIterator for &'a mut LinkedList<T> {
    type Item = &'a mut T;

    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        IterMut {
            slots: self.arena.base(),
            state: self.state,
            _phantom: PhantomData,
        }
    }
}

/// A mutably borrowing iterator over a [`LinkedList`]. Walks the links through a pointer to the
/// arena's slots, so each yielded reference is independent of the iterator itself.
pub struct IterMut<'a, T> {
    pub(crate) slots: NonNull<Slot<T>>,
    pub(crate) state: ListState,
    pub(crate) _phantom: PhantomData<&'a mut T>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.state {
            Empty => None,
            Full(links) => {
                // SAFETY: The iterator was created from a unique borrow of the list and yields
                // each slot at most once, so no reference aliases another. Links only point at
                // occupied slots within the allocation.
                let slot = unsafe { &mut *self.slots.as_ptr().add(links.head.0) };

                // UNREACHABLE: Lists only follow refs to live nodes.
                let node = match slot {
                    Slot::Occupied(node) => node,
                    Slot::Vacant(_) => unreachable!(),
                };

                match links.len.checked_sub(1) {
                    Some(new_len) => {
                        // UNREACHABLE: At least one element remains, so head has a successor.
                        links.head = match node.next {
                            Some(next) => next,
                            None => unreachable!(),
                        };
                        links.len = new_len;
                    },
                    None => self.state = Empty,
                }

                Some(&mut node.value)
            },
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.state.len(), Some(self.state.len()))
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        match &mut self.state {
            Empty => None,
            Full(links) => {
                // SAFETY: The iterator was created from a unique borrow of the list and yields
                // each slot at most once, so no reference aliases another. Links only point at
                // occupied slots within the allocation.
                let slot = unsafe { &mut *self.slots.as_ptr().add(links.tail.0) };

                // UNREACHABLE: Lists only follow refs to live nodes.
                let node = match slot {
                    Slot::Occupied(node) => node,
                    Slot::Vacant(_) => unreachable!(),
                };

                match links.len.checked_sub(1) {
                    Some(new_len) => {
                        // UNREACHABLE: At least one element remains, so tail has a predecessor.
                        links.tail = match node.prev {
                            Some(prev) => prev,
                            None => unreachable!(),
                        };
                        links.len = new_len;
                    },
                    None => self.state = Empty,
                }

                Some(&mut node.value)
            },
        }
    }
}

impl<'a, T> FusedIterator for IterMut<'a, T> {}

impl<'a, T> ExactSizeIterator for IterMut<'a, T> {
    fn len(&self) -> usize {
        self.state.len()
    }
}
