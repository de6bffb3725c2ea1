//! Prefix index
//!
//! A character trie mapping strings to the keys stored under them.
//! Callers normalise case before inserting or searching.

use std::collections::{HashMap, HashSet};

use crate::record::Key;

#[derive(Debug, Default)]
struct TrieNode {
    children: HashMap<char, TrieNode>,

    /// Keys whose full string ends at this node
    keys: HashSet<Key>,
}

/// Trie-based index for prefix search.
///
/// Removal only clears the key from its terminal node. Nodes are never
/// pruned, so an emptied path stays reachable but contributes no keys.
#[derive(Debug, Default)]
pub struct PrefixIndex {
    root: TrieNode,
}

impl PrefixIndex {
    /// Create an empty trie
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `key` at the node reached by `text`, creating nodes on the way
    pub fn insert(&mut self, text: &str, key: Key) {
        let mut node = &mut self.root;
        for ch in text.chars() {
            node = node.children.entry(ch).or_default();
        }
        node.keys.insert(key);
    }

    /// Remove `key` from the node reached by `text`.
    ///
    /// A broken path is a no-op. Returns whether the key was present.
    pub fn remove(&mut self, text: &str, key: Key) -> bool {
        let mut node = &mut self.root;
        for ch in text.chars() {
            match node.children.get_mut(&ch) {
                Some(next) => node = next,
                None => return false,
            }
        }
        node.keys.remove(&key)
    }

    /// Whether `key` is stored under exactly `text`
    pub fn contains(&self, text: &str, key: Key) -> bool {
        self.descend(text)
            .is_some_and(|node| node.keys.contains(&key))
    }

    /// Every key stored under `prefix` or any extension of it
    pub fn find_all_with_prefix(&self, prefix: &str) -> HashSet<Key> {
        let mut results = HashSet::new();
        let Some(start) = self.descend(prefix) else {
            return results;
        };

        // Explicit worklist: name length must not bound stack depth
        let mut pending = vec![start];
        while let Some(node) = pending.pop() {
            results.extend(node.keys.iter().copied());
            pending.extend(node.children.values());
        }
        results
    }

    fn descend(&self, text: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for ch in text.chars() {
            node = node.children.get(&ch)?;
        }
        Some(node)
    }
}
