#![cfg(all(test, feature = "array", feature = "linked"))]

use super::*;
use crate::containers::array::DynArray;
use crate::containers::linked::LinkedList;

#[test]
fn test_data_contract() {
    verify_data(DynArray::new());
    verify_data(LinkedList::new());
}

fn verify_data<D: Data<i32>>(mut data: D) {
    assert_eq!(data.len(), 0);
    assert!(data.is_empty());

    for i in 1..=5 {
        data.add(i);
    }
    assert_eq!(data.len(), 5);
    assert!(!data.is_empty());

    let collected: DynArray<i32> = data.iter().copied().collect();
    assert_eq!(&*collected, &[1, 2, 3, 4, 5], "Added items should appear in order.");

    assert_eq!(data.remove_item(&3), Some(3));
    assert_eq!(data.remove_item(&3), None, "A removed item should stay gone.");
    assert_eq!(data.len(), 4);

    data.clear();
    assert_eq!(data.len(), 0);
    assert!(data.is_empty());

    data.add(6);
    assert_eq!(data.len(), 1, "A cleared container should accept new items.");

    let total: i32 = data.into_iter().sum();
    assert_eq!(total, 6);
}

#[test]
fn test_ordered_data_contract() {
    verify_ordered(DynArray::new());
    verify_ordered(LinkedList::new());
}

fn verify_ordered<D: OrderedData<i32>>(mut data: D) {
    for i in [1, 2, 4] {
        data.add(i);
    }

    data.insert(2, 3);
    assert_eq!(data.len(), 4);
    assert_eq!(*data.get(2), 3, "Insertion should place the item at the resolved index.");
    assert_eq!(*data.get(-1), 4, "Negative indices should resolve from the end.");

    assert_eq!(data.index_of(&4), Some(3));
    assert_eq!(data.index_of(&9), None);

    assert_eq!(data.remove(2), 3, "Removal should undo an insertion at the same index.");
    assert_eq!(data.index_of(&4), Some(2));

    data.insert(-1, 5);
    assert_eq!(*data.get(-1), 5, "Inserting at -1 should append.");
    assert_eq!(data.len(), 5);
}
