//! Utility traits for `ProbingTable`

use crate::ProbingTable;

/// Extension trait for tables that provides owned snapshots of their contents
pub trait TableExtensions<K, V> {
    /// Returns the keys of the table as a Vec, in slot order
    fn keys(&self) -> Vec<K>;

    /// Returns the values of the table as a Vec, in slot order
    fn values(&self) -> Vec<V>;
}

impl<K, V> TableExtensions<K, V> for ProbingTable<K, V>
where
    K: Clone,
    V: Clone,
{
    fn keys(&self) -> Vec<K> {
        self.iter().map(|(k, _)| k.clone()).collect()
    }

    fn values(&self) -> Vec<V> {
        self.iter().map(|(_, v)| v.clone()).collect()
    }
}
