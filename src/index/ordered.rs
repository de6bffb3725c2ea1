//! Ordered value index
//!
//! Sorted buckets from a numeric value to the keys that carry it,
//! supporting inclusive range scans in ascending value order.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use crate::record::Key;

/// `f64` under IEEE 754 total ordering, usable as a `BTreeMap` key.
///
/// `-0.0` sorts before `0.0` and NaN sorts after every number.
#[derive(Debug, Clone, Copy)]
pub struct OrderedValue(pub f64);

impl PartialEq for OrderedValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OrderedValue {}

impl PartialOrd for OrderedValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OrderedValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// BTree-based index for range queries over a numeric attribute.
///
/// Invariant: a bucket exists only while it holds at least one key.
#[derive(Debug, Default)]
pub struct OrderedIndex {
    /// Value to keys mapping, sorted by value
    buckets: BTreeMap<OrderedValue, BTreeSet<Key>>,

    /// Total number of (value, key) entries
    count: usize,
}

impl OrderedIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `key` to the bucket for `value`
    pub fn insert(&mut self, value: f64, key: Key) {
        let bucket = self.buckets.entry(OrderedValue(value)).or_default();
        if bucket.insert(key) {
            self.count += 1;
        }
    }

    /// Remove `key` from the bucket for `value`, dropping the bucket once empty.
    ///
    /// Returns false if the key was not indexed under that value.
    pub fn remove(&mut self, value: f64, key: Key) -> bool {
        let value = OrderedValue(value);
        let Some(bucket) = self.buckets.get_mut(&value) else {
            return false;
        };
        if !bucket.remove(&key) {
            return false;
        }
        self.count -= 1;
        if bucket.is_empty() {
            self.buckets.remove(&value);
        }
        true
    }

    /// Keys whose value lies in `[min, max]`, in ascending value order.
    ///
    /// An inverted range (`min > max`) matches nothing.
    pub fn range(&self, min: f64, max: f64) -> Vec<Key> {
        let (min, max) = (OrderedValue(min), OrderedValue(max));
        // BTreeMap::range panics on an inverted range
        if min > max {
            return Vec::new();
        }

        self.buckets
            .range(min..=max)
            .flat_map(|(_, bucket)| bucket.iter().copied())
            .collect()
    }

    /// Keys with exactly `value`
    pub fn lookup(&self, value: f64) -> Vec<Key> {
        match self.buckets.get(&OrderedValue(value)) {
            Some(bucket) => bucket.iter().copied().collect(),
            None => Vec::new(),
        }
    }

    /// Number of distinct values
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Total number of indexed keys
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}
