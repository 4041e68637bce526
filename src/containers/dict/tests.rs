#![cfg(test)]

use super::*;
use crate::containers::array::DynArray;
use crate::util::alloc::DropTally;
use crate::util::hash::{EchoHasherBuilder, FixedHash};

#[test]
fn test_empty() {
    let mut dict: Dictionary<&str, i32> = Dictionary::new();
    assert_eq!(dict.len(), 0);
    assert!(dict.is_empty());
    assert_eq!(dict.buckets.size(), 16, "The bucket array should be allocated up front.");

    assert_eq!(dict.get("missing"), None);
    assert!(!dict.contains("missing"));
    assert_eq!(dict.remove("missing"), None, "Removing an absent key should do nothing.");
    assert_eq!(dict.iter().count(), 0, "Iterating an empty Dictionary should yield nothing.");

    assert_eq!(Dictionary::<&str, i32>::default().len(), 0);
}

#[test]
fn test_set_get() {
    let mut dict: Dictionary<&str, i32> = Dictionary::new();
    assert_eq!(dict.set("a", 1), None);
    assert_eq!(dict.set("b", 2), None);
    assert_eq!(dict.len(), 2);

    assert_eq!(dict.get("a"), Some(&1));
    assert_eq!(dict.get_entry("b"), Some(&Entry::new("b", 2)));
    assert!(dict.contains("a"));
    assert!(!dict.contains("c"));

    assert_eq!(dict.set("a", 10), Some(1), "Setting an existing key should return the old value.");
    assert_eq!(dict.len(), 2, "An upsert shouldn't change the length.");
    assert_eq!(dict.get("a"), Some(&10));

    if let Some(value) = dict.get_mut("b") {
        *value = 20;
    }
    assert_eq!(dict.get("b"), Some(&20));
}

#[test]
fn test_add_entry() {
    let mut dict = Dictionary::with_hasher(EchoHasherBuilder);
    assert_eq!(dict.add(Entry::new(FixedHash::new(4, "a"), 1)), None);
    assert_eq!(dict.add(Entry::new(FixedHash::new(20, "b"), 2)), None);
    assert_eq!(dict.len(), 2);

    assert_eq!(
        dict.add(Entry::new(FixedHash::new(4, "a"), 9)),
        Some(1),
        "Adding an existing key should swap the value out."
    );
    assert_eq!(dict.len(), 2);

    let values: DynArray<i32> = dict.values().copied().collect();
    assert_eq!(&*values, &[9, 2], "An upserted entry should keep its chain position.");
}

#[test]
fn test_collision() {
    let mut dict = Dictionary::with_hasher(EchoHasherBuilder);
    dict.set(FixedHash::new(4, "apple"), 1);
    dict.set(FixedHash::new(20, "pear"), 2);

    assert_eq!(dict.buckets[4].len(), 2, "Hashes 4 and 20 should share a bucket.");
    assert_eq!(dict.get(&FixedHash::new(4, "apple")), Some(&1));
    assert_eq!(dict.get(&FixedHash::new(20, "pear")), Some(&2));

    assert_eq!(dict.remove(&FixedHash::new(4, "apple")), Some(1));
    assert_eq!(
        dict.get(&FixedHash::new(20, "pear")),
        Some(&2),
        "Removing one colliding key shouldn't disturb the other."
    );
    assert_eq!(dict.len(), 1);
    assert_eq!(dict.buckets[4].len(), 1);
}

#[test]
fn test_remove() {
    let mut dict = Dictionary::from([("a", 1), ("b", 2)]);

    assert_eq!(dict.remove("a"), Some(1));
    assert_eq!(dict.len(), 1);
    assert_eq!(dict.get("a"), None, "A removed key should read as absent.");

    assert_eq!(dict.remove("a"), None, "Removing an absent key should do nothing.");
    assert_eq!(dict.len(), 1);

    assert_eq!(dict.remove_entry("b"), Some(Entry::new("b", 2)));
    assert!(dict.is_empty());
}

#[test]
fn test_borrowed_lookup() {
    let mut dict: Dictionary<String, i32> = Dictionary::new();
    dict.set("alpha".to_string(), 1);
    dict.set("beta".to_string(), 2);

    assert_eq!(dict.get("alpha"), Some(&1), "String keys should be queryable as str.");
    assert!(dict.contains("beta"));

    if let Some(value) = dict.get_mut("beta") {
        *value = 20;
    }
    assert_eq!(dict.get("beta"), Some(&20));

    assert_eq!(dict.remove("alpha"), Some(1));
    assert_eq!(dict.len(), 1);
}

#[test]
fn test_clear() {
    let counter = DropTally::new();
    let mut dict: Dictionary<i32, DropTally> =
        (0..5).map(|i| (i, counter.clone())).collect();
    assert_eq!(dict.len(), 5);

    dict.clear();
    assert!(dict.is_empty());
    assert_eq!(counter.take(), 5, "Clearing should drop every entry.");
    assert!(dict.get(&3).is_none(), "Cleared keys should read as absent.");

    dict.set(3, counter.clone());
    assert_eq!(dict.len(), 1, "A cleared Dictionary should accept new entries.");
}

#[test]
fn test_iteration() {
    let mut dict = Dictionary::with_hasher(EchoHasherBuilder);
    dict.set(FixedHash::new(5, "e"), 50);
    dict.set(FixedHash::new(1, "b"), 10);
    dict.set(FixedHash::new(20, "t"), 20);
    dict.set(FixedHash::new(4, "f"), 40);

    let values: DynArray<i32> = dict.values().copied().collect();
    assert_eq!(
        &*values,
        &[10, 20, 40, 50],
        "Iteration should visit buckets in ascending order and chains in insertion order."
    );

    let mut iter = dict.iter();
    assert_eq!(iter.len(), 4);
    iter.next();
    assert_eq!(iter.len(), 3, "The iterator should know how many entries remain.");

    assert_eq!(dict.keys().count(), 4);

    for value in dict.values_mut() {
        *value += 1;
    }
    assert_eq!(dict.get(&FixedHash::new(1, "b")), Some(&11));

    for entry in dict.iter_mut() {
        *entry.value_mut() *= 10;
    }
    assert_eq!(dict.get(&FixedHash::new(4, "f")), Some(&410));

    let values: DynArray<i32> = dict.into_values().collect();
    assert_eq!(&*values, &[110, 210, 410, 510]);
}

#[test]
fn test_factories() {
    let dict = Dictionary::from([("a", 1), ("b", 2), ("a", 3)]);
    assert_eq!(dict.len(), 2, "Factory construction should upsert duplicate keys.");
    assert_eq!(dict.get("a"), Some(&3), "The later duplicate should win.");

    let entries = Dictionary::from([Entry::new("k", 10), Entry::new("l", 20)]);
    assert_eq!(entries.len(), 2);
    assert_eq!(entries.get("k"), Some(&10));

    let mut dict: Dictionary<&str, i32> = Dictionary::new();
    dict.extend([("c", 30), ("d", 40)]);
    assert_eq!(dict.len(), 2);
    assert_eq!(dict.get("d"), Some(&40));

    let keys: DynArray<&str> = Dictionary::from([("x", 1), ("y", 2)]).into_keys().collect();
    assert_eq!(keys.len(), 2);
}

#[test]
fn test_format() {
    let mut dict: Dictionary<&str, i32> = Dictionary::new();
    assert_eq!(format!("{dict}"), "#{}");

    dict.set("a", 1);
    assert_eq!(format!("{dict}"), "#{\"a\": 1}");
    assert_eq!(
        format!("{dict:?}"),
        "Dictionary { contents: #{\"a\": 1}, len: 1, buckets: 16 }"
    );

    let entry = Entry::new("a", 1);
    assert_eq!(format!("{entry}"), "\"a\": 1", "Entries should display as key: value.");
}
