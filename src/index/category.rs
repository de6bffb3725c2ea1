//! Category index
//!
//! Hash buckets from a category string to the keys that carry it.

use std::collections::{HashMap, HashSet};

use crate::record::Key;

/// Hash-based index for exact category lookups.
///
/// Invariant: a bucket exists only while it holds at least one key.
#[derive(Debug, Default)]
pub struct CategoryIndex {
    /// Category to keys mapping
    buckets: HashMap<String, HashSet<Key>>,

    /// Total number of (category, key) entries
    count: usize,
}

impl CategoryIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `key` to the bucket for `category`
    pub fn insert(&mut self, category: &str, key: Key) {
        let bucket = self.buckets.entry(category.to_string()).or_default();
        if bucket.insert(key) {
            self.count += 1;
        }
    }

    /// Remove `key` from the bucket for `category`, dropping the bucket once empty.
    ///
    /// Returns false if the key was not indexed under that category.
    pub fn remove(&mut self, category: &str, key: Key) -> bool {
        let Some(bucket) = self.buckets.get_mut(category) else {
            return false;
        };
        if !bucket.remove(&key) {
            return false;
        }
        self.count -= 1;
        if bucket.is_empty() {
            self.buckets.remove(category);
        }
        true
    }

    /// Keys indexed under `category`; empty when the category is unknown
    pub fn lookup(&self, category: &str) -> Vec<Key> {
        match self.buckets.get(category) {
            Some(bucket) => bucket.iter().copied().collect(),
            None => Vec::new(),
        }
    }

    /// Whether a (non-empty) bucket exists for `category`
    pub fn contains(&self, category: &str) -> bool {
        self.buckets.contains_key(category)
    }

    /// Number of distinct categories
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
