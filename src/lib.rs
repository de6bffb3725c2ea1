//! # RosterDB
//!
//! An in-memory record store with synchronized secondary indexes:
//! - Exact lookup by key (primary map)
//! - Enumeration by category (hash index)
//! - Inclusive range lookup by value (ordered index)
//! - Case-insensitive prefix search by name (trie)
//! - Range-sum over the key space (segment tree)
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 CLI / Line Protocol                          │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                   SharedStore                                │
//! │            (Single Writer / Multi Reader)                    │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                  IndexedStore                                │
//! │   primary map: HashMap<Key, Record>  (source of truth)       │
//! └──────┬──────────────┬──────────────┬──────────────┬─────────┘
//!        │              │              │              │
//!        ▼              ▼              ▼              ▼
//!  ┌──────────┐  ┌────────────┐  ┌───────────┐  ┌─────────────┐
//!  │ Category │  │  Ordered   │  │  Prefix   │  │  Segment    │
//!  │  (hash)  │  │  (btree)   │  │  (trie)   │  │  (sum tree) │
//!  └──────────┘  └────────────┘  └───────────┘  └─────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use rosterdb::{IndexedStore, Record};
//!
//! let mut store = IndexedStore::new();
//! store.put(1, Record::new(1, "Alice", "Engineering", 120000.0));
//! store.put(3, Record::new(3, "Charlie", "Engineering", 90000.0));
//!
//! assert_eq!(store.find_by_category("Engineering").len(), 2);
//! assert_eq!(store.value_sum_for_range(0, 5), 210000.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod index;
pub mod protocol;
pub mod store;
pub mod shared;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{StoreError, Result};
pub use config::Config;
pub use record::{Key, Record};
pub use store::IndexedStore;
pub use shared::SharedStore;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of RosterDB
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
