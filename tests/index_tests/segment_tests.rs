//! Segment Tree Tests
//!
//! Tests verify:
//! - Range sums against a brute-force reference after updates
//! - Merges other than addition (max, order-sensitive concatenation)
//! - Bounds handling

use rosterdb::index::SegmentTree;

type SumTree = SegmentTree<f64, fn(&f64, &f64) -> f64>;

fn add(a: &f64, b: &f64) -> f64 {
    a + b
}

fn sum_tree(values: &[f64]) -> SumTree {
    SegmentTree::new(values, add as fn(&f64, &f64) -> f64)
}

// =============================================================================
// Sum Tests
// =============================================================================

#[test]
fn test_zeroed_tree_sums_to_zero() {
    let tree = sum_tree(&vec![0.0; 100]);

    assert_eq!(tree.len(), 100);
    assert_eq!(tree.query(0, 99), Some(0.0));
}

#[test]
fn test_update_then_query() {
    let mut tree = sum_tree(&vec![0.0; 100]);

    tree.update(1, 120000.0);
    tree.update(2, 95000.0);
    tree.update(3, 90000.0);
    tree.update(4, 110000.0);

    assert_eq!(tree.query(2, 4), Some(295000.0));

    let previous = tree.update(2, 105000.0);
    assert_eq!(previous, Some(95000.0));
    assert_eq!(tree.query(2, 4), Some(305000.0));
    assert_eq!(tree.get(2), Some(&105000.0));
}

#[test]
fn test_updates_match_brute_force() {
    let mut reference = vec![0.0; 37];
    let mut tree = sum_tree(&reference);

    for step in 0..200usize {
        let index = (step * 13) % reference.len();
        let value = ((step * 7) % 11) as f64;
        reference[index] = value;
        tree.update(index, value);

        let left = (step * 5) % reference.len();
        let right = left + (step % (reference.len() - left));
        let expected: f64 = reference[left..=right].iter().sum();
        assert_eq!(tree.query(left, right), Some(expected), "[{}, {}]", left, right);
    }
}

#[test]
fn test_one_element_ranges_at_split_boundaries() {
    // 100 leaves: root splits at 49 | 50, next level at 24 | 25 and 74 | 75
    let values: Vec<f64> = (0..100).map(|i| i as f64).collect();
    let tree = sum_tree(&values);

    for i in [0, 24, 25, 49, 50, 74, 75, 99] {
        assert_eq!(tree.query(i, i), Some(i as f64), "leaf {}", i);
    }
    assert_eq!(tree.query(49, 50), Some(99.0));
    assert_eq!(tree.query(24, 25), Some(49.0));
}

#[test]
fn test_update_out_of_bounds_is_ignored() {
    let mut tree = sum_tree(&[1.0, 2.0, 3.0]);

    assert_eq!(tree.update(3, 100.0), None);
    assert_eq!(tree.query(0, 2), Some(6.0));
}

#[test]
fn test_query_out_of_bounds_has_no_contribution() {
    let tree = sum_tree(&[1.0, 2.0, 3.0]);

    assert_eq!(tree.query(1, 3), None);
    assert_eq!(tree.query(2, 0), None);
}

#[test]
fn test_single_leaf_tree() {
    let mut tree = sum_tree(&[4.0]);

    assert_eq!(tree.query(0, 0), Some(4.0));
    tree.update(0, -1.5);
    assert_eq!(tree.query(0, 0), Some(-1.5));
}

// =============================================================================
// Other Merges
// =============================================================================

#[test]
fn test_max_merge() {
    let values = [3, 9, 1, 7, 4, 8, 2];
    let mut tree = SegmentTree::new(&values, |a: &i32, b: &i32| *a.max(b));

    assert_eq!(tree.query(0, 6), Some(9));
    assert_eq!(tree.query(2, 4), Some(7));
    assert_eq!(tree.query(5, 6), Some(8));

    tree.update(1, 0);
    assert_eq!(tree.query(0, 3), Some(7));
}

#[test]
fn test_concatenation_preserves_order() {
    // Associative but not commutative: a misordered combine would show up here
    let letters: Vec<String> = "abcdefghij".chars().map(String::from).collect();
    let mut tree = SegmentTree::new(&letters, |a: &String, b: &String| format!("{}{}", a, b));

    assert_eq!(tree.query(0, 9).as_deref(), Some("abcdefghij"));
    assert_eq!(tree.query(3, 7).as_deref(), Some("defgh"));
    assert_eq!(tree.query(4, 5).as_deref(), Some("ef"));

    tree.update(4, "E".to_string());
    assert_eq!(tree.query(2, 6).as_deref(), Some("cdEfg"));
}
