//! Configuration for RosterDB
//!
//! Centralized configuration with sensible defaults.

use crate::error::{Result, StoreError};

/// Main configuration for a RosterDB store
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Capacity
    // -------------------------------------------------------------------------
    /// Number of key slots. Valid keys are `0..capacity`.
    /// Fixed for the lifetime of the store (the range-sum tree is never resized).
    pub capacity: usize,

    // -------------------------------------------------------------------------
    // Name Index
    // -------------------------------------------------------------------------
    /// Lower-case names and prefixes before they reach the trie
    pub fold_name_case: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: 100,
            fold_name_case: true,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check the config before a store is built from it
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(StoreError::Config(
                "capacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the number of key slots
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.config.capacity = capacity;
        self
    }

    /// Enable or disable case folding for the name index
    pub fn fold_name_case(mut self, fold: bool) -> Self {
        self.config.fold_name_case = fold;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
