//! Index Module
//!
//! Secondary structures derived from the primary store.
//!
//! ## Responsibilities
//! - Exact-match lookup by category (hash buckets)
//! - Inclusive range scans by numeric value (ordered buckets)
//! - Prefix search by name (trie)
//! - Range-sum aggregation by key (segment tree)
//!
//! None of these structures know about records. They map attribute values
//! to keys; the store resolves keys back into records and keeps every
//! structure in step with the primary map.
//!
//! ## Structure Choice
//! ```text
//! ┌──────────────────┬──────────────────────────────┬───────────────┐
//! │ Index            │ Backing structure            │ Query         │
//! ├──────────────────┼──────────────────────────────┼───────────────┤
//! │ CategoryIndex    │ HashMap<String, HashSet<Key>>│ exact         │
//! │ OrderedIndex     │ BTreeMap<f64*, BTreeSet<Key>>│ [min, max]    │
//! │ PrefixIndex      │ char trie, keys per node     │ prefix        │
//! │ SegmentTree      │ implicit binary tree (4n)    │ sum [l, r]    │
//! └──────────────────┴──────────────────────────────┴───────────────┘
//!   * f64 under a total order, see `OrderedValue`
//! ```

mod category;
mod ordered;
mod prefix;
mod segment;

pub use category::CategoryIndex;
pub use ordered::{OrderedIndex, OrderedValue};
pub use prefix::PrefixIndex;
pub use segment::SegmentTree;
