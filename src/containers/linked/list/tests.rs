#![cfg(test)]

use std::hash::{BuildHasher, RandomState};
use std::iter;

use super::*;
use crate::containers::array::DynArray;
use crate::util::alloc::DropTally;
use crate::util::panic::assert_panics;

#[test]
fn test_empty() {
    let mut list: LinkedList<u8> = LinkedList::new();
    assert_eq!(list.len(), 0);
    assert!(list.is_empty());
    assert_eq!(list.front(), None);
    assert_eq!(list.back(), None);

    assert_eq!(list.pop_front(), None, "Popping an empty LinkedList should return nothing.");
    assert_eq!(list.pop_back(), None);
    assert_eq!(list.arena.slots.cap(), 0, "An empty LinkedList shouldn't allocate.");

    assert_eq!(
        list,
        LinkedList::default(),
        "Empty LinkedLists should be equal regardless of construction."
    );
}

#[test]
fn test_push_pop() {
    let mut list = LinkedList::new();
    list.push_back(2);
    list.push_front(1);
    list.push_back(3);
    list.verify_double_links();

    assert_eq!(list.len(), 3);
    assert_eq!(list.front(), Some(&1));
    assert_eq!(list.back(), Some(&3));

    if let Some(front) = list.front_mut() {
        *front = 10;
    }
    assert_eq!(list.front(), Some(&10));
    if let Some(back) = list.back_mut() {
        *back = 30;
    }
    assert_eq!(list.back(), Some(&30));

    assert_eq!(list.pop_front(), Some(10));
    assert_eq!(list.pop_back(), Some(30));
    list.verify_double_links();
    assert_eq!(list.pop_back(), Some(2));
    assert_eq!(list.pop_front(), None, "All elements should have been popped.");
    assert!(list.is_empty());

    list.push_back(4);
    assert_eq!(list.len(), 1, "An emptied LinkedList should accept new elements.");
    assert_eq!(
        list.front(),
        list.back(),
        "A single element should be both the front and the back."
    );
    list.verify_double_links();
}

#[test]
fn test_slot_reuse() {
    let mut list = LinkedList::from([1, 2, 3]);
    assert_eq!(list.arena.slots.len(), 3);

    assert_eq!(list.pop_front(), Some(1));
    assert_eq!(list.pop_back(), Some(3));
    assert_eq!(
        list.arena.slots.len(),
        3,
        "Released slots should stay behind in the arena."
    );

    list.push_back(4);
    list.push_front(0);
    assert_eq!(
        list.arena.slots.len(),
        3,
        "Pushes should reuse released slots before growing the arena."
    );

    list.push_back(5);
    assert_eq!(list.arena.slots.len(), 4);
    assert_eq!(list, LinkedList::from([0, 2, 4, 5]));
    list.verify_double_links();
}

#[test]
fn test_get() {
    let list = LinkedList::from(["a", "b", "c"]);
    assert_eq!(*list.get(0), "a");
    assert_eq!(*list.get(2), "c");
    assert_eq!(*list.get(-1), "c", "Index -1 should resolve to the last element.");
    assert_eq!(*list.get(-3), "a");
    assert_eq!(list[1], "b");

    assert_eq!(list.try_get(3), Err(IndexOutOfBounds { index: 3, len: 3 }));
    assert_eq!(
        list.try_get(-4),
        Err(IndexOutOfBounds { index: -4, len: 3 }),
        "Errors should carry the index as provided, not its resolved form."
    );

    let mut list = list;
    *list.get_mut(1) = "B";
    list[-3] = "A";
    assert_eq!(list, LinkedList::from(["A", "B", "c"]));
    assert_eq!(list.try_get_mut(5), Err(IndexOutOfBounds { index: 5, len: 3 }));

    let empty: LinkedList<u8> = LinkedList::new();
    assert_eq!(empty.try_get(0), Err(IndexOutOfBounds { index: 0, len: 0 }));

    assert_panics!(
        {
            let list = LinkedList::from([10, 20, 30]);
            list.get(3)
        },
        "Index 3 out of bounds for container with 3 elements!"
    );
}

#[test]
fn test_insert() {
    let mut list = LinkedList::from([1, 2, 3, 4]);

    list.insert(2, 99);
    assert_eq!(list, LinkedList::from([1, 2, 99, 3, 4]));
    list.verify_double_links();
    assert_eq!(list.remove(2), 99, "Removal should undo an insertion at the same index.");
    assert_eq!(list, LinkedList::from([1, 2, 3, 4]));

    list.insert(0, 0);
    assert_eq!(list.front(), Some(&0));
    list.insert(-1, 5);
    assert_eq!(list.back(), Some(&5), "Inserting at -1 should append.");
    list.insert(-2, 45);
    assert_eq!(list, LinkedList::from([0, 1, 2, 3, 4, 45, 5]));
    list.insert(-8, -1);
    assert_eq!(
        list.front(),
        Some(&-1),
        "Inserting at -(len + 1) should prepend."
    );
    list.verify_double_links();

    assert_eq!(
        list.try_insert(9, 0),
        Err(IndexOutOfBounds { index: 9, len: 8 })
    );
    assert_eq!(
        list.try_insert(-10, 0),
        Err(IndexOutOfBounds { index: -10, len: 8 })
    );

    let mut empty = LinkedList::new();
    empty.insert(0, 1);
    assert_eq!(empty.len(), 1, "Inserting at 0 should work on an empty LinkedList.");

    assert_panics!(
        {
            let mut list = LinkedList::from([1, 2]);
            list.insert(5, 0)
        },
        "Index 5 out of bounds for container with 2 elements!"
    );
}

#[test]
fn test_remove() {
    let mut list = LinkedList::from([1, 2, 3, 4, 5]);

    assert_eq!(list.remove(2), 3, "Removal should relink around an interior node.");
    list.verify_double_links();
    assert_eq!(list, LinkedList::from([1, 2, 4, 5]));

    assert_eq!(list.remove(-3), 2, "Negative indices should resolve from the end.");
    assert_eq!(list, LinkedList::from([1, 4, 5]));

    assert_eq!(list.remove(0), 1);
    assert_eq!(list.remove(-1), 5);
    list.verify_double_links();
    assert_eq!(list.remove(0), 4, "Removing the only element should empty the list.");
    assert!(list.is_empty());

    assert_eq!(list.try_remove(0), Err(IndexOutOfBounds { index: 0, len: 0 }));

    assert_panics!(
        {
            let mut list = LinkedList::from([1, 2]);
            list.remove(-3)
        },
        "Index -3 out of bounds for container with 2 elements!"
    );
}

#[test]
fn test_replace() {
    let mut list = LinkedList::from([1, 2, 3]);

    assert_eq!(list.replace(1, 20), 2, "Replacement should return the old element.");
    assert_eq!(list.replace(-1, 30), 3);
    assert_eq!(list, LinkedList::from([1, 20, 30]));
    assert_eq!(list.len(), 3, "Replacement shouldn't change the length.");
    list.verify_double_links();

    assert_eq!(
        list.try_replace(3, 0),
        Err(IndexOutOfBounds { index: 3, len: 3 })
    );
}

#[test]
fn test_search() {
    let mut list = LinkedList::from([1, 2, 3, 2]);

    assert_eq!(list.index_of(&2), Some(1), "Search should find the first match.");
    assert_eq!(list.index_of(&4), None);
    assert!(list.contains(&3));
    assert!(!list.contains(&4));

    assert_eq!(list.remove_item(&2), Some(2), "Only the first match should be removed.");
    assert_eq!(list, LinkedList::from([1, 3, 2]));
    list.verify_double_links();

    assert_eq!(list.remove_item(&4), None, "Removing an absent item should do nothing.");
    assert_eq!(list.len(), 3);

    let mut single = LinkedList::from([7]);
    assert_eq!(single.remove_item(&7), Some(7));
    assert!(single.is_empty());
    single.push_back(8);
    assert_eq!(single.front(), Some(&8), "An emptied list should accept new elements.");
}

#[test]
fn test_clear() {
    let counter = DropTally::new();
    let mut list: LinkedList<_> = iter::repeat_with(|| counter.clone()).take(5).collect();
    let slot_cap = list.arena.slots.cap();

    list.clear();
    assert!(list.is_empty());
    assert_eq!(counter.take(), 5, "Clearing should drop every element.");
    assert_eq!(
        list.arena.slots.cap(),
        slot_cap,
        "Clearing shouldn't release the arena's allocation."
    );

    list.push_back(counter.clone());
    assert_eq!(list.len(), 1, "A cleared LinkedList should accept new elements.");
    list.verify_double_links();
}

#[test]
fn test_drop() {
    let counter = DropTally::new();
    let list: LinkedList<_> = iter::repeat_with(|| counter.clone()).take(10).collect();

    drop(list);

    assert_eq!(counter.take(), 10, "10 elements should have been dropped.");
}

#[test]
fn test_equality_and_hash() {
    let list = LinkedList::from([1, 2, 3]);
    let same = LinkedList::from([1, 2, 3]);
    let shorter = LinkedList::from([1, 2]);
    let different = LinkedList::from([1, 2, 4]);

    assert_eq!(list, same);
    assert_ne!(list, shorter);
    assert_ne!(list, different);

    let hasher = RandomState::new();
    assert_eq!(
        hasher.hash_one(&list),
        hasher.hash_one(&same),
        "Equal LinkedLists should hash identically."
    );
    assert_ne!(
        hasher.hash_one(&list),
        hasher.hash_one(&shorter),
        "A prefix shouldn't collide with the full list."
    );
}

#[test]
fn test_clone() {
    let original = LinkedList::from([1, 2, 3]);
    let mut cloned = original.clone();

    assert_eq!(original, cloned);

    cloned.push_back(4);
    cloned.verify_double_links();
    assert_eq!(original.len(), 3, "Mutating a clone shouldn't affect the original.");
    assert_eq!(cloned.len(), 4);
}

#[test]
fn test_iterators() {
    let mut list = LinkedList::from([1, 2, 3, 4]);

    let collected: DynArray<i32> = list.iter().copied().collect();
    assert_eq!(&*collected, &[1, 2, 3, 4]);

    for value in &mut list {
        *value *= 10;
    }
    assert_eq!(list, LinkedList::from([10, 20, 30, 40]));

    let reversed: DynArray<i32> = list.iter_mut().rev().map(|value| *value / 10).collect();
    assert_eq!(&*reversed, &[4, 3, 2, 1]);

    let mut iter = list.into_iter();
    assert_eq!(iter.len(), 4);
    assert_eq!(iter.next(), Some(10));
    assert_eq!(iter.next_back(), Some(40), "Iteration should work from both ends at once.");
    assert_eq!(iter.next(), Some(20));
    assert_eq!(iter.len(), 1);
    assert_eq!(iter.next_back(), Some(30));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next_back(), None, "An exhausted iterator should stay exhausted.");

    let counter = DropTally::new();
    let list: LinkedList<_> = iter::repeat_with(|| counter.clone()).take(10).collect();

    let mut iter = list.into_iter();
    drop(iter.next());
    drop(iter.next_back());
    drop(iter);
    assert_eq!(
        counter.take(),
        10,
        "Dropping a partially consumed iterator should drop the remaining elements."
    );
}

#[test]
fn test_format() {
    let list = LinkedList::from([1, 2, 3]);
    assert_eq!(format!("{list}"), "(1) -> (2) -> (3)");
    assert_eq!(
        format!("{list:?}"),
        "LinkedList { contents: (1) -> (2) -> (3), len: 3 }"
    );

    let strings = LinkedList::from(["a", "b"]);
    assert_eq!(
        format!("{strings}"),
        "(\"a\") -> (\"b\")",
        "Display should format elements with Debug."
    );
}
