//! Error types for RosterDB
//!
//! Provides a unified error type for all operations.
//!
//! Most store operations are "fail soft": the public `put` and
//! `value_sum_for_range` log these errors and carry on. The `try_*`
//! variants hand them back to callers that want to branch on them.

use thiserror::Error;

use crate::record::Key;

/// Result type alias using StoreError
pub type Result<T> = std::result::Result<T, StoreError>;

/// Unified error type for RosterDB operations
#[derive(Debug, Error)]
pub enum StoreError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Write Errors
    // -------------------------------------------------------------------------
    #[error("Key {key} out of bounds (capacity {capacity})")]
    OutOfRangeKey { key: Key, capacity: usize },

    // -------------------------------------------------------------------------
    // Query Errors
    // -------------------------------------------------------------------------
    #[error("Invalid range [{start}, {end}] (capacity {capacity})")]
    InvalidRange { start: Key, end: Key, capacity: usize },

    // -------------------------------------------------------------------------
    // Protocol Errors
    // -------------------------------------------------------------------------
    #[error("Protocol error: {0}")]
    Protocol(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}
