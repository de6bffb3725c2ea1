//! Segment tree
//!
//! Fixed-size combine tree over an array, generic over any associative
//! merge function. Point updates and inclusive range queries both run in
//! O(log n).
//!
//! ## Layout
//! ```text
//!                 node 0: [0, n-1]
//!                /                \
//!   node 1: [0, mid]        node 2: [mid+1, n-1]
//!     /        \              /          \
//!   ...        ...          ...          ...
//! ```
//! Children of node `i` live at `2i + 1` and `2i + 2`; `4n` slots are
//! enough for any `n`. Slots not used by the layout hold `None`.
//!
//! A query that overlaps no node yields `None` ("no contribution"), which
//! is distinct from any real value. Combining `None` with a real partial
//! result returns that result unchanged, so the merge function never has to
//! supply an identity element.

/// Range-combine tree with a caller-supplied merge function
pub struct SegmentTree<T, F> {
    /// Leaf values, indexed by position
    data: Vec<T>,

    /// Cached combine of each node's range
    tree: Vec<Option<T>>,

    /// Associative merge
    merge: F,
}

impl<T, F> SegmentTree<T, F>
where
    T: Clone,
    F: Fn(&T, &T) -> T,
{
    /// Build a tree over `values`, bottom-up, in O(n)
    pub fn new(values: &[T], merge: F) -> Self {
        let mut tree = Self {
            data: values.to_vec(),
            tree: vec![None; 4 * values.len()],
            merge,
        };
        if !tree.data.is_empty() {
            tree.build(0, 0, tree.data.len() - 1);
        }
        tree
    }

    /// Number of leaves
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Current leaf value at `index`
    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    /// Combine of the leaves in `[left, right]`.
    ///
    /// Returns `None` for an inverted or out-of-bounds range.
    pub fn query(&self, left: usize, right: usize) -> Option<T> {
        if left > right || right >= self.data.len() {
            return None;
        }
        self.query_node(0, 0, self.data.len() - 1, left, right)
    }

    /// Overwrite the leaf at `index` and refresh every ancestor on its path.
    ///
    /// Returns the replaced value, or `None` (and changes nothing) when
    /// `index` is out of bounds.
    pub fn update(&mut self, index: usize, value: T) -> Option<T> {
        if index >= self.data.len() {
            return None;
        }
        let previous = std::mem::replace(&mut self.data[index], value.clone());
        let last = self.data.len() - 1;
        self.update_node(0, 0, last, index, value);
        Some(previous)
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    fn build(&mut self, node: usize, left: usize, right: usize) {
        if left == right {
            self.tree[node] = Some(self.data[left].clone());
            return;
        }
        let mid = left + (right - left) / 2;
        let (left_child, right_child) = children(node);

        self.build(left_child, left, mid);
        self.build(right_child, mid + 1, right);

        let merged = self.combine(
            self.tree[left_child].as_ref(),
            self.tree[right_child].as_ref(),
        );
        self.tree[node] = merged;
    }

    fn query_node(
        &self,
        node: usize,
        left: usize,
        right: usize,
        query_left: usize,
        query_right: usize,
    ) -> Option<T> {
        // No overlap
        if query_left > right || query_right < left {
            return None;
        }

        // Node range fully covered: use the cached value
        if query_left <= left && right <= query_right {
            return self.tree[node].clone();
        }

        let mid = left + (right - left) / 2;
        let (left_child, right_child) = children(node);

        // Query entirely on one side of the split
        if query_right <= mid {
            return self.query_node(left_child, left, mid, query_left, query_right);
        }
        if query_left > mid {
            return self.query_node(right_child, mid + 1, right, query_left, query_right);
        }

        // Straddles the split: clamp each half at the boundary
        let left_part = self.query_node(left_child, left, mid, query_left, mid);
        let right_part = self.query_node(right_child, mid + 1, right, mid + 1, query_right);
        self.combine(left_part.as_ref(), right_part.as_ref())
    }

    fn update_node(&mut self, node: usize, left: usize, right: usize, index: usize, value: T) {
        if left == right {
            self.tree[node] = Some(value);
            return;
        }
        let mid = left + (right - left) / 2;
        let (left_child, right_child) = children(node);

        if index <= mid {
            self.update_node(left_child, left, mid, index, value);
        } else {
            self.update_node(right_child, mid + 1, right, index, value);
        }

        let merged = self.combine(
            self.tree[left_child].as_ref(),
            self.tree[right_child].as_ref(),
        );
        self.tree[node] = merged;
    }

    /// Merge two partial results, treating `None` as "no contribution"
    fn combine(&self, a: Option<&T>, b: Option<&T>) -> Option<T> {
        match (a, b) {
            (Some(a), Some(b)) => Some((self.merge)(a, b)),
            (Some(only), None) | (None, Some(only)) => Some(only.clone()),
            (None, None) => None,
        }
    }
}

fn children(node: usize) -> (usize, usize) {
    (2 * node + 1, 2 * node + 2)
}
