//! # Probe Table
//!
//! A Rust implementation of an open-addressing hash table that resolves
//! collisions by linear probing.
//!
//! `ProbingTable` stores every entry directly in a slot array. A key lives in
//! the first free slot at or after its home index, the table grows to
//! `capacity * 2 + 1` slots once its load factor reaches a configurable
//! threshold, and removals shift later entries of a cluster back so that no
//! key is ever cut off from its home index.
//!
//! ## Basic Usage
//!
//! ```rust
//! use probetable::{ProbingTable, TableError};
//!
//! // Create a new table with 11 slots that grows at a load factor of 0.9
//! let mut table = ProbingTable::new();
//!
//! // Insert values
//! table.insert("apple".to_string(), 1);
//! table.insert("banana".to_string(), 2);
//!
//! // Retrieve values
//! assert_eq!(table.get("apple"), Ok(&1));
//!
//! // Update values
//! table.insert("apple".to_string(), 10);
//! assert_eq!(table.get("apple"), Ok(&10));
//! assert_eq!(table.len(), 2);
//!
//! // Remove values
//! table.remove("apple");
//! assert_eq!(table.get("apple"), Err(TableError::KeyNotFound));
//! ```
//!
//! ## Contracts
//!
//! ```rust
//! use probetable::{DataStructure, HashTable, ProbingTable, TableError};
//!
//! let mut table = ProbingTable::<i32, i32>::with_capacity_and_threshold(5, 0.7)?;
//! let contract: &mut dyn HashTable<i32, i32> = &mut table;
//!
//! // A missing key is rejected
//! assert_eq!(contract.insert(None, 1), Err(TableError::IllegalNullKey));
//!
//! for key in [7, 13, 20, 12, 1, 2] {
//!     contract.insert(Some(key), key)?;
//! }
//! assert_eq!(contract.capacity(), 11);
//! assert_eq!(contract.collision_resolution().code(), 1);
//! # Ok::<(), TableError>(())
//! ```

/// Construction parameters and their validation
mod config;
/// Key/value container contracts implemented by the table
mod contract;
/// Error type shared by the crate
mod error;
/// `env_logger` setup for binaries and tests
mod logger;
/// Module implementing the linear probing hash table
mod probing_table;
/// Utility traits for the table
mod utils;

pub use config::{DEFAULT_CAPACITY, DEFAULT_LOAD_FACTOR_THRESHOLD, TableConfig};
pub use contract::{CollisionResolution, DataStructure, HashTable};
pub use error::{Result, TableError};
pub use logger::init_logger;
pub use probing_table::{Iter, ProbingTable};
pub use utils::TableExtensions;
