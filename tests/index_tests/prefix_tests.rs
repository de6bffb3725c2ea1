//! Prefix Index Tests
//!
//! Tests verify:
//! - Insert and prefix enumeration
//! - Removal touches only the terminal node
//! - Broken paths are no-ops

use std::collections::HashSet;

use rosterdb::index::PrefixIndex;
use rosterdb::Key;

fn keys(items: &[Key]) -> HashSet<Key> {
    items.iter().copied().collect()
}

fn setup_names() -> PrefixIndex {
    let mut trie = PrefixIndex::new();
    trie.insert("alice", 1);
    trie.insert("bob", 2);
    trie.insert("charlie", 3);
    trie.insert("alicia", 6);
    trie.insert("allison", 7);
    trie
}

#[test]
fn test_find_all_with_prefix() {
    let trie = setup_names();

    assert_eq!(trie.find_all_with_prefix("ali"), keys(&[1, 6]));
    assert_eq!(trie.find_all_with_prefix("al"), keys(&[1, 6, 7]));
    assert_eq!(trie.find_all_with_prefix("bob"), keys(&[2]));
}

#[test]
fn test_empty_prefix_returns_all() {
    let trie = setup_names();

    assert_eq!(trie.find_all_with_prefix(""), keys(&[1, 2, 3, 6, 7]));
}

#[test]
fn test_broken_path_is_empty() {
    let trie = setup_names();

    assert!(trie.find_all_with_prefix("x").is_empty());
    assert!(trie.find_all_with_prefix("bobby").is_empty());
}

#[test]
fn test_same_name_multiple_keys() {
    let mut trie = setup_names();
    trie.insert("bob", 12);

    assert_eq!(trie.find_all_with_prefix("b"), keys(&[2, 12]));
    assert!(trie.contains("bob", 12));
}

#[test]
fn test_remove_only_terminal_key() {
    let mut trie = setup_names();

    assert!(trie.remove("alice", 1));

    assert!(!trie.contains("alice", 1));
    assert_eq!(trie.find_all_with_prefix("ali"), keys(&[6]));
    // The path "alic" still leads to "alicia"
    assert_eq!(trie.find_all_with_prefix("alic"), keys(&[6]));
}

#[test]
fn test_removed_path_stays_reachable_but_empty() {
    let mut trie = PrefixIndex::new();
    trie.insert("zed", 9);

    assert!(trie.remove("zed", 9));

    assert!(trie.find_all_with_prefix("zed").is_empty());
    assert!(trie.find_all_with_prefix("").is_empty());
}

#[test]
fn test_remove_broken_path_is_noop() {
    let mut trie = setup_names();

    assert!(!trie.remove("alex", 1));
    assert!(!trie.remove("al", 1));
    assert!(!trie.remove("bob", 99));

    assert_eq!(trie.find_all_with_prefix(""), keys(&[1, 2, 3, 6, 7]));
}

#[test]
fn test_non_ascii_names() {
    let mut trie = PrefixIndex::new();
    trie.insert("zoë", 1);
    trie.insert("zoe", 2);
    trie.insert("łukasz", 3);

    assert_eq!(trie.find_all_with_prefix("zo"), keys(&[1, 2]));
    assert_eq!(trie.find_all_with_prefix("zoë"), keys(&[1]));
    assert_eq!(trie.find_all_with_prefix("ł"), keys(&[3]));
}

#[test]
fn test_long_name_collection() {
    let mut trie = PrefixIndex::new();
    let long: String = "a".repeat(2_000);
    trie.insert(&long, 1);
    trie.insert("a", 2);

    assert_eq!(trie.find_all_with_prefix("a"), keys(&[1, 2]));
}
