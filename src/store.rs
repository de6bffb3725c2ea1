//! Store Module
//!
//! The indexed store that coordinates the primary map and every secondary
//! structure.
//!
//! ## Responsibilities
//! - Own the primary map and all four indexes
//! - Retract stale index entries and install fresh ones on every write
//! - Resolve index hits back into records
//! - Route protocol commands

use std::collections::HashMap;

use tracing::{debug, trace, warn};

use crate::config::Config;
use crate::error::{Result, StoreError};
use crate::index::{CategoryIndex, OrderedIndex, PrefixIndex, SegmentTree};
use crate::protocol::{Command, Response};
use crate::record::{Key, Record};

type SumTree = SegmentTree<f64, fn(&f64, &f64) -> f64>;

fn add(a: &f64, b: &f64) -> f64 {
    a + b
}

/// In-memory record store with synchronized secondary indexes
///
/// ## Write Path
///
/// ```text
/// put/delete ──► bounds check ──► retract old record from
///                                 category / value / name indexes
///                              ──► replace entry in primary map
///                              ──► install new record in indexes
///                              ──► overwrite range-sum slot
/// ```
///
/// Every check happens before the first mutation, and no step after it can
/// fail, so a write is either applied to all five structures or to none.
///
/// ## Concurrency
///
/// Writes take `&mut self`. For shared access across threads wrap the store
/// in [`SharedStore`](crate::SharedStore), which runs each write as a single
/// critical section.
pub struct IndexedStore {
    /// Store configuration
    config: Config,

    /// Primary map: the source of truth
    records: HashMap<Key, Record>,

    /// category -> keys
    by_category: CategoryIndex,

    /// value -> keys, ordered by value
    by_value: OrderedIndex,

    /// (case-folded) name -> keys
    by_name: PrefixIndex,

    /// One slot per key, holding the record's value or 0
    value_sums: SumTree,
}

impl IndexedStore {
    /// Create a store with the default config
    pub fn new() -> Self {
        let config = Config::default();
        let value_sums = Self::empty_sums(config.capacity);
        Self::with_parts(config, value_sums)
    }

    /// Create a store with the given config
    pub fn open(config: Config) -> Result<Self> {
        config.validate()?;
        let value_sums = Self::empty_sums(config.capacity);
        debug!(capacity = config.capacity, "opened indexed store");
        Ok(Self::with_parts(config, value_sums))
    }

    fn with_parts(config: Config, value_sums: SumTree) -> Self {
        Self {
            config,
            records: HashMap::new(),
            by_category: CategoryIndex::new(),
            by_value: OrderedIndex::new(),
            by_name: PrefixIndex::new(),
            value_sums,
        }
    }

    fn empty_sums(capacity: usize) -> SumTree {
        SegmentTree::new(&vec![0.0; capacity], add as fn(&f64, &f64) -> f64)
    }

    // =========================================================================
    // Writes
    // =========================================================================

    /// Insert or replace the record at `key`.
    ///
    /// An out-of-bounds key is logged and the write is dropped.
    pub fn put(&mut self, key: Key, record: Record) {
        if let Err(e) = self.try_put(key, record) {
            warn!("Dropped write: {}", e);
        }
    }

    /// Insert or replace the record at `key`, returning the record it replaced
    pub fn try_put(&mut self, key: Key, record: Record) -> Result<Option<Record>> {
        // Stage: the only fallible step, done before anything is touched
        let slot = self.slot(key)?;
        if record.id != key {
            warn!(key, record_id = record.id, "record id differs from key; indexing under key");
        }

        // Apply
        let previous = self.records.remove(&key);
        if let Some(old) = &previous {
            self.retract(key, old);
        }
        self.install(key, &record);
        self.value_sums.update(slot, record.value);
        self.records.insert(key, record);

        debug!(key, replaced = previous.is_some(), "put");
        Ok(previous)
    }

    /// Remove the record at `key` from every structure.
    ///
    /// Absent keys (including out-of-bounds ones) are a no-op.
    pub fn delete(&mut self, key: Key) -> Option<Record> {
        let old = self.records.remove(&key)?;
        self.retract(key, &old);
        if let Ok(slot) = self.slot(key) {
            self.value_sums.update(slot, 0.0);
        }

        debug!(key, "delete");
        Some(old)
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Point lookup by key; never touches an index
    pub fn get(&self, key: Key) -> Option<&Record> {
        self.records.get(&key)
    }

    /// Every stored record, in unspecified order
    pub fn get_all(&self) -> Vec<&Record> {
        self.records.values().collect()
    }

    /// Records whose category equals `category`
    pub fn find_by_category(&self, category: &str) -> Vec<&Record> {
        self.resolve(self.by_category.lookup(category))
    }

    /// Records whose value lies in `[min, max]`, in ascending value order
    pub fn find_by_value_range(&self, min: f64, max: f64) -> Vec<&Record> {
        self.resolve(self.by_value.range(min, max))
    }

    /// Records whose name starts with `prefix` (case-insensitive by default)
    pub fn find_by_name_prefix(&self, prefix: &str) -> Vec<&Record> {
        let prefix = self.fold(prefix);
        self.resolve(self.by_name.find_all_with_prefix(&prefix))
    }

    /// Sum of values over keys in `[start, end]`.
    ///
    /// Malformed bounds yield `0.0`; absent keys contribute nothing.
    pub fn value_sum_for_range(&self, start: Key, end: Key) -> f64 {
        match self.try_value_sum_for_range(start, end) {
            Ok(sum) => sum,
            Err(e) => {
                warn!("Range sum rejected: {}", e);
                0.0
            }
        }
    }

    /// Sum of values over keys in `[start, end]`, rejecting malformed bounds
    pub fn try_value_sum_for_range(&self, start: Key, end: Key) -> Result<f64> {
        let invalid = || StoreError::InvalidRange {
            start,
            end,
            capacity: self.config.capacity,
        };
        if start > end {
            return Err(invalid());
        }
        let left = self.slot(start).map_err(|_| invalid())?;
        let right = self.slot(end).map_err(|_| invalid())?;

        Ok(self.value_sums.query(left, right).unwrap_or(0.0))
    }

    // =========================================================================
    // Command Routing
    // =========================================================================

    /// Execute a protocol command
    pub fn execute(&mut self, command: Command) -> Response {
        match command {
            Command::Put { record } => match self.try_put(record.id, record) {
                Ok(_) => Response::Ok,
                Err(e) => {
                    warn!("Dropped write: {}", e);
                    Response::Error(e.to_string())
                }
            },
            Command::Get { key } => match self.get(key) {
                Some(record) => Response::Record(record.clone()),
                None => Response::NotFound,
            },
            Command::Delete { key } => match self.delete(key) {
                Some(_) => Response::Ok,
                None => Response::NotFound,
            },
            Command::All => Response::Records(owned(self.get_all())),
            Command::Category { category } => {
                Response::Records(owned(self.find_by_category(&category)))
            }
            Command::Range { min, max } => {
                Response::Records(owned(self.find_by_value_range(min, max)))
            }
            Command::Prefix { prefix } => {
                Response::Records(owned(self.find_by_name_prefix(&prefix)))
            }
            Command::Sum { start, end } => Response::Sum(self.value_sum_for_range(start, end)),
            Command::Len => Response::Count(self.len()),
            Command::Ping => Response::Pong,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains_key(&self, key: Key) -> bool {
        self.records.contains_key(&key)
    }

    /// Number of key slots; valid keys are `0..capacity`
    pub fn capacity(&self) -> usize {
        self.config.capacity
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    /// Map a key to its range-sum slot, rejecting keys outside `0..capacity`
    fn slot(&self, key: Key) -> Result<usize> {
        usize::try_from(key)
            .ok()
            .filter(|&slot| slot < self.config.capacity)
            .ok_or(StoreError::OutOfRangeKey {
                key,
                capacity: self.config.capacity,
            })
    }

    fn fold(&self, text: &str) -> String {
        if self.config.fold_name_case {
            text.to_lowercase()
        } else {
            text.to_string()
        }
    }

    /// Remove `old`'s attribute values from the three keyed indexes
    fn retract(&mut self, key: Key, old: &Record) {
        let name = self.fold(&old.name);
        let category = self.by_category.remove(&old.category, key);
        let value = self.by_value.remove(old.value, key);
        let named = self.by_name.remove(&name, key);
        trace!(key, category, value, named, "retracted index entries");
    }

    /// Add `record`'s attribute values to the three keyed indexes
    fn install(&mut self, key: Key, record: &Record) {
        let name = self.fold(&record.name);
        self.by_category.insert(&record.category, key);
        self.by_value.insert(record.value, key);
        self.by_name.insert(&name, key);
    }

    /// Resolve index hits into records, skipping keys no longer stored
    fn resolve<I>(&self, keys: I) -> Vec<&Record>
    where
        I: IntoIterator<Item = Key>,
    {
        keys.into_iter()
            .filter_map(|key| self.records.get(&key))
            .collect()
    }
}

impl Default for IndexedStore {
    fn default() -> Self {
        Self::new()
    }
}

fn owned(records: Vec<&Record>) -> Vec<Record> {
    records.into_iter().cloned().collect()
}
