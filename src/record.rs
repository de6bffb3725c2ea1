//! Record definitions
//!
//! The value type stored in the primary store. Records are immutable once
//! built; an update replaces the whole record.

use std::cmp::Ordering;
use std::fmt;

/// Primary key type. Signed so that negative keys can be expressed and rejected.
pub type Key = i64;

/// A single stored record
#[derive(Debug, Clone)]
pub struct Record {
    /// Primary key, must lie in `0..capacity` to be stored
    pub id: Key,

    /// Free-form name, indexed by prefix
    pub name: String,

    /// Categorical attribute (e.g. a department), indexed by exact match
    pub category: String,

    /// Numeric attribute (e.g. a salary), indexed by range and summed by key range
    pub value: f64,
}

impl Record {
    /// Create a new record
    pub fn new(id: Key, name: impl Into<String>, category: impl Into<String>, value: f64) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
            value,
        }
    }

    pub fn id(&self) -> Key {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Natural ordering: by primary key
    pub fn cmp_by_id(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

/// Two records are equal iff all four attributes match.
/// The numeric attribute is compared bitwise-totally, so `NaN == NaN`.
impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.value.total_cmp(&other.value) == Ordering::Equal
            && self.name == other.name
            && self.category == other.category
    }
}

impl Eq for Record {}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Record {{ id: {}, name: {:?}, category: {:?}, value: {} }}",
            self.id, self.name, self.category, self.value
        )
    }
}
