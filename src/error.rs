//! Error type shared by the table and its capability contracts

use thiserror::Error;

/// Errors reported by [`ProbingTable`](crate::ProbingTable) and its contracts
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TableError {
    /// The key passed to `insert`, `get` or `remove` was the null sentinel
    #[error("key is null")]
    IllegalNullKey,
    /// `get` scanned every slot without finding the key
    #[error("key not found in table")]
    KeyNotFound,
    /// A table needs at least one slot
    #[error("invalid initial capacity {0}, expected at least 1")]
    InvalidCapacity(usize),
    /// The growth threshold must lie in `(0, 1]`
    #[error("invalid load factor threshold {0}, expected a value in (0, 1]")]
    InvalidLoadFactorThreshold(f64),
}

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, TableError>;
