//! Capability contracts for key/value containers.
//!
//! [`DataStructure`] is the general "container of key/value pairs" contract
//! and [`HashTable`] adds the queries specific to hash tables. Both model the
//! absent key as `None` so callers holding optional keys get an
//! [`TableError::IllegalNullKey`] instead of a silent no-op.

use std::{fmt, hash::Hash};

use crate::{
    ProbingTable,
    error::{Result, TableError},
};

/// Strategy a hash table uses to resolve collisions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollisionResolution {
    /// Open addressing, probing the next slot on collision
    LinearProbing,
}

impl CollisionResolution {
    /// Numeric identifier shared by every implementation of [`HashTable`]
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::LinearProbing => 1,
        }
    }
}

impl fmt::Display for CollisionResolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LinearProbing => write!(f, "linear probing"),
        }
    }
}

/// A container of unique keys mapped to values
pub trait DataStructure<K, V> {
    /// Adds the pair, replacing the value if the key is already present
    ///
    /// # Errors
    ///
    /// [`TableError::IllegalNullKey`] if `key` is `None`.
    fn insert(&mut self, key: Option<K>, value: V) -> Result<()>;

    /// Removes the key, returning whether it was present
    ///
    /// # Errors
    ///
    /// [`TableError::IllegalNullKey`] if `key` is `None`.
    fn remove(&mut self, key: Option<&K>) -> Result<bool>;

    /// Returns the value stored for the key
    ///
    /// # Errors
    ///
    /// [`TableError::IllegalNullKey`] if `key` is `None`,
    /// [`TableError::KeyNotFound`] if it is not stored.
    fn get(&self, key: Option<&K>) -> Result<&V>;

    /// Number of keys stored
    fn num_keys(&self) -> usize;
}

/// Hash-table specific queries on top of [`DataStructure`]
pub trait HashTable<K, V>: DataStructure<K, V> {
    /// Load factor at which the table grows
    fn load_factor_threshold(&self) -> f64;

    /// Current ratio of keys to slots
    fn load_factor(&self) -> f64;

    /// Current number of slots
    fn capacity(&self) -> usize;

    /// How collisions are resolved
    fn collision_resolution(&self) -> CollisionResolution;
}

impl<K, V> DataStructure<K, V> for ProbingTable<K, V>
where
    K: Eq + Hash,
{
    fn insert(&mut self, key: Option<K>, value: V) -> Result<()> {
        let key = key.ok_or(TableError::IllegalNullKey)?;
        Self::insert(self, key, value);
        Ok(())
    }

    fn remove(&mut self, key: Option<&K>) -> Result<bool> {
        let key = key.ok_or(TableError::IllegalNullKey)?;
        Ok(Self::remove(self, key).is_some())
    }

    fn get(&self, key: Option<&K>) -> Result<&V> {
        let key = key.ok_or(TableError::IllegalNullKey)?;
        Self::get(self, key)
    }

    fn num_keys(&self) -> usize {
        self.len()
    }
}

impl<K, V> HashTable<K, V> for ProbingTable<K, V>
where
    K: Eq + Hash,
{
    fn load_factor_threshold(&self) -> f64 {
        Self::load_factor_threshold(self)
    }

    fn load_factor(&self) -> f64 {
        Self::load_factor(self)
    }

    fn capacity(&self) -> usize {
        Self::capacity(self)
    }

    fn collision_resolution(&self) -> CollisionResolution {
        Self::collision_resolution(self)
    }
}
