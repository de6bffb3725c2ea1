//! Category and Ordered Index Tests
//!
//! Tests verify:
//! - Bucket insert/remove
//! - Empty buckets are dropped
//! - Ordered range scans

use std::collections::BTreeSet;

use rosterdb::index::{CategoryIndex, OrderedIndex, OrderedValue};
use rosterdb::Key;

fn set(keys: Vec<Key>) -> BTreeSet<Key> {
    keys.into_iter().collect()
}

// =============================================================================
// CategoryIndex
// =============================================================================

#[test]
fn test_category_insert_and_lookup() {
    let mut index = CategoryIndex::new();

    index.insert("Engineering", 1);
    index.insert("Engineering", 3);
    index.insert("HR", 4);

    assert_eq!(set(index.lookup("Engineering")), BTreeSet::from([1, 3]));
    assert_eq!(set(index.lookup("HR")), BTreeSet::from([4]));
    assert_eq!(index.len(), 3);
    assert_eq!(index.bucket_count(), 2);
}

#[test]
fn test_category_lookup_missing_is_empty() {
    let index = CategoryIndex::new();

    assert!(index.lookup("Nobody").is_empty());
    assert!(!index.contains("Nobody"));
    assert!(index.is_empty());
}

#[test]
fn test_category_duplicate_insert_counts_once() {
    let mut index = CategoryIndex::new();

    index.insert("Ops", 9);
    index.insert("Ops", 9);

    assert_eq!(index.len(), 1);
    assert_eq!(index.lookup("Ops"), vec![9]);
}

#[test]
fn test_category_remove_drops_empty_bucket() {
    let mut index = CategoryIndex::new();
    index.insert("HR", 4);
    index.insert("HR", 5);

    assert!(index.remove("HR", 4));
    assert!(index.contains("HR"));

    assert!(index.remove("HR", 5));
    assert!(!index.contains("HR"));
    assert_eq!(index.bucket_count(), 0);
    assert!(index.is_empty());
}

#[test]
fn test_category_remove_missing() {
    let mut index = CategoryIndex::new();
    index.insert("HR", 4);

    assert!(!index.remove("HR", 5));
    assert!(!index.remove("Sales", 4));
    assert_eq!(index.len(), 1);
}

// =============================================================================
// OrderedValue
// =============================================================================

#[test]
fn test_ordered_value_total_order() {
    let mut values = vec![
        OrderedValue(3.5),
        OrderedValue(f64::NAN),
        OrderedValue(-1.0),
        OrderedValue(0.0),
        OrderedValue(-0.0),
    ];
    values.sort();

    assert_eq!(values[0].0, -1.0);
    assert!(values[1].0.is_sign_negative() && values[1].0 == 0.0);
    assert!(values[2].0.is_sign_positive() && values[2].0 == 0.0);
    assert_eq!(values[3].0, 3.5);
    assert!(values[4].0.is_nan());
}

// =============================================================================
// OrderedIndex
// =============================================================================

fn setup_salaries() -> OrderedIndex {
    let mut index = OrderedIndex::new();
    index.insert(120000.0, 1);
    index.insert(95000.0, 2);
    index.insert(90000.0, 3);
    index.insert(110000.0, 4);
    index
}

#[test]
fn test_ordered_range_inclusive_and_sorted() {
    let index = setup_salaries();

    assert_eq!(index.range(90000.0, 110000.0), vec![3, 2, 4]);
    assert_eq!(index.range(100000.0, 130000.0), vec![4, 1]);
}

#[test]
fn test_ordered_range_single_point() {
    let index = setup_salaries();

    assert_eq!(index.range(95000.0, 95000.0), vec![2]);
    assert!(index.range(95000.5, 95000.5).is_empty());
}

#[test]
fn test_ordered_range_inverted_is_empty() {
    let index = setup_salaries();

    assert!(index.range(110000.0, 90000.0).is_empty());
}

#[test]
fn test_ordered_range_outside_values() {
    let index = setup_salaries();

    assert!(index.range(0.0, 1000.0).is_empty());
    assert_eq!(index.range(f64::NEG_INFINITY, f64::INFINITY).len(), 4);
}

#[test]
fn test_ordered_shared_bucket() {
    let mut index = setup_salaries();
    index.insert(95000.0, 7);

    assert_eq!(set(index.lookup(95000.0)), BTreeSet::from([2, 7]));
    assert_eq!(index.bucket_count(), 4);
    assert_eq!(index.len(), 5);
}

#[test]
fn test_ordered_remove_drops_empty_bucket() {
    let mut index = setup_salaries();

    assert!(index.remove(95000.0, 2));
    assert!(index.lookup(95000.0).is_empty());
    assert_eq!(index.bucket_count(), 3);
    assert!(!index.remove(95000.0, 2));
    assert_eq!(index.len(), 3);
}
