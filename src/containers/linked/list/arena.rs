use std::mem;
use std::ptr::NonNull;

use crate::containers::array::DynArray;

/// The position of a node within its list's arena. Refs stay valid across unrelated insertions
/// and removals because slots are reused in place rather than shifted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeRef(pub usize);

pub(crate) type Link = Option<NodeRef>;

pub(crate) struct Node<T> {
    pub value: T,
    pub prev: Link,
    pub next: Link,
}

/// A slot either holds a live node or remembers the next vacancy in the free chain.
pub(crate) enum Slot<T> {
    Occupied(Node<T>),
    Vacant(Link),
}

/// Backing storage for a list's nodes. Nodes live in one growable array with vacated slots
/// chained for reuse, so the list allocates in bulk rather than once per node and every link is
/// an index instead of a pointer.
pub(crate) struct Arena<T> {
    pub(crate) slots: DynArray<Slot<T>>,
    pub(crate) next_free: Link,
}

impl<T> Arena<T> {
    /// Creates a new Arena. No memory is allocated until the first node is adopted.
    pub fn new() -> Arena<T> {
        Arena {
            slots: DynArray::with_cap(0),
            next_free: None,
        }
    }

    /// Stores the node, reusing the most recently vacated slot when one exists.
    pub fn adopt(&mut self, node: Node<T>) -> NodeRef {
        match self.next_free {
            Some(index) => {
                match mem::replace(&mut (*self.slots)[index.0], Slot::Occupied(node)) {
                    Slot::Vacant(next) => self.next_free = next,
                    // UNREACHABLE: The free chain only ever holds vacant slots.
                    Slot::Occupied(_) => unreachable!(),
                }
                index
            },
            None => {
                self.slots.push(Slot::Occupied(node));
                NodeRef(self.slots.len() - 1)
            },
        }
    }

    /// Removes the node at `index` and chains its slot for reuse.
    pub fn release(&mut self, index: NodeRef) -> Node<T> {
        match mem::replace(&mut (*self.slots)[index.0], Slot::Vacant(self.next_free)) {
            Slot::Occupied(node) => {
                self.next_free = Some(index);
                node
            },
            // UNREACHABLE: Lists only release refs they handed out, and never twice.
            Slot::Vacant(_) => unreachable!(),
        }
    }

    pub fn node(&self, index: NodeRef) -> &Node<T> {
        match &(*self.slots)[index.0] {
            Slot::Occupied(node) => node,
            // UNREACHABLE: Lists only follow refs to live nodes.
            Slot::Vacant(_) => unreachable!(),
        }
    }

    pub fn node_mut(&mut self, index: NodeRef) -> &mut Node<T> {
        match &mut (*self.slots)[index.0] {
            Slot::Occupied(node) => node,
            // UNREACHABLE: Lists only follow refs to live nodes.
            Slot::Vacant(_) => unreachable!(),
        }
    }

    /// The base pointer of the slot array, for iterators which need to walk nodes without
    /// holding a borrow of the whole arena.
    pub fn base(&mut self) -> NonNull<Slot<T>> {
        self.slots.buf.ptr.cast()
    }

    /// Drops every node and resets the free chain. The slot array keeps its capacity.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.next_free = None;
    }
}
