//! Shared store handle
//!
//! Thread-safe wrapper around [`IndexedStore`].
//!
//! ## Concurrency Model: Single-Writer / Multiple-Reader (SWMR)
//!
//! - **Writes** (put/delete): hold the write lock for the whole
//!   retract → replace → install sequence, so no reader ever sees some
//!   indexes reflecting the new record while others still reflect the old.
//! - **Reads**: concurrent under the read lock. Results are cloned out so
//!   the lock is released before the caller looks at them.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::Config;
use crate::error::Result;
use crate::protocol::{Command, Response};
use crate::record::{Key, Record};
use crate::store::IndexedStore;

/// Cloneable, thread-safe handle to an [`IndexedStore`]
#[derive(Clone, Default)]
pub struct SharedStore {
    inner: Arc<RwLock<IndexedStore>>,
}

impl SharedStore {
    /// Wrap an existing store
    pub fn new(store: IndexedStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    /// Create a shared store with the given config
    pub fn open(config: Config) -> Result<Self> {
        Ok(Self::new(IndexedStore::open(config)?))
    }

    // =========================================================================
    // Writes (exclusive)
    // =========================================================================

    pub fn put(&self, key: Key, record: Record) {
        self.inner.write().put(key, record);
    }

    pub fn try_put(&self, key: Key, record: Record) -> Result<Option<Record>> {
        self.inner.write().try_put(key, record)
    }

    pub fn delete(&self, key: Key) -> Option<Record> {
        self.inner.write().delete(key)
    }

    pub fn execute(&self, command: Command) -> Response {
        self.inner.write().execute(command)
    }

    // =========================================================================
    // Reads (shared)
    // =========================================================================

    pub fn get(&self, key: Key) -> Option<Record> {
        self.inner.read().get(key).cloned()
    }

    pub fn get_all(&self) -> Vec<Record> {
        cloned(self.inner.read().get_all())
    }

    pub fn find_by_category(&self, category: &str) -> Vec<Record> {
        cloned(self.inner.read().find_by_category(category))
    }

    pub fn find_by_value_range(&self, min: f64, max: f64) -> Vec<Record> {
        cloned(self.inner.read().find_by_value_range(min, max))
    }

    pub fn find_by_name_prefix(&self, prefix: &str) -> Vec<Record> {
        cloned(self.inner.read().find_by_name_prefix(prefix))
    }

    pub fn value_sum_for_range(&self, start: Key, end: Key) -> f64 {
        self.inner.read().value_sum_for_range(start, end)
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Run `f` against a consistent snapshot of the store under the read lock
    pub fn with_read<R>(&self, f: impl FnOnce(&IndexedStore) -> R) -> R {
        f(&self.inner.read())
    }
}

fn cloned(records: Vec<&Record>) -> Vec<Record> {
    records.into_iter().cloned().collect()
}
