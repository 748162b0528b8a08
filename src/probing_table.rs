use std::{
    borrow::Borrow,
    collections::hash_map::DefaultHasher,
    hash::{Hash, Hasher},
    iter, mem,
};

use log::{debug, trace, warn};

use crate::{
    config::{self, TableConfig},
    contract::CollisionResolution,
    error::{Result, TableError},
};

/// A single position in the table's storage
#[derive(Debug, Clone)]
enum Slot<K, V> {
    /// Nothing stored here; terminates an insertion probe
    Empty,
    /// A live entry
    Occupied {
        /// The stored key
        key: K,
        /// The value associated with the key
        value: V,
        /// Hash of `key`, computed once on first insertion
        hash_code: u64,
    },
}

/// Where an insertion probe ended
enum Probe {
    /// The key is already stored at this index
    Match(usize),
    /// The first empty slot of the key's probe chain
    Vacant(usize),
}

/// Computes the hash code for a key.
///
/// `DefaultHasher::new()` is seeded with fixed keys, so the result is stable
/// for the lifetime of a key and across tables.
pub(crate) fn hash_key<Q: ?Sized + Hash>(key: &Q) -> u64 {
    let mut hasher = DefaultHasher::new();
    key.hash(&mut hasher);
    hasher.finish()
}

/// The first slot probed for a hash code in a table of `capacity` slots
#[allow(clippy::cast_possible_truncation, clippy::arithmetic_side_effects)]
fn home_index(hash_code: u64, capacity: usize) -> usize {
    // capacity is never zero, and the remainder is below capacity so it fits
    // back into usize
    (hash_code % capacity as u64) as usize
}

/// The slot after `index`, wrapping to 0 past the last slot
fn next_index(index: usize, capacity: usize) -> usize {
    let next = index.saturating_add(1);
    if next >= capacity { 0 } else { next }
}

/// Allocates `capacity` empty slots
fn empty_slots<K, V>(capacity: usize) -> Box<[Slot<K, V>]> {
    iter::repeat_with(|| Slot::Empty).take(capacity).collect()
}

/// An open-addressing hash table that resolves collisions by linear probing.
///
/// Every entry lives directly in a fixed-length slot array. A key is stored
/// in the first free slot at or after its home index (`hash % capacity`),
/// wrapping around the end of the array. Before an insert, if the occupied
/// fraction has reached the configured threshold, the table grows to
/// `capacity * 2 + 1` slots and every entry is placed again.
///
/// Removal uses backward-shift deletion: after a slot is cleared, later
/// entries of the same cluster that would no longer be reachable from their
/// home index are moved into the gap. Probe chains therefore never contain
/// holes and no tombstones are needed.
///
/// Note: This implementation is not thread-safe.
#[derive(Debug, Clone)]
pub struct ProbingTable<K, V> {
    /// The slots; its length is the table's capacity
    slots: Box<[Slot<K, V>]>,
    /// Number of occupied slots
    size: usize,
    /// Load factor at which the next insert grows the table
    load_factor_threshold: f64,
}

impl<K, V> Default for ProbingTable<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Extend<(K, V)> for ProbingTable<K, V>
where
    K: Eq + Hash,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for ProbingTable<K, V>
where
    K: Eq + Hash,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

impl<K, V> ProbingTable<K, V>
where
    K: Eq + Hash,
{
    /// Creates an empty table with 11 slots that grows at a load factor of 0.9
    #[must_use]
    pub fn new() -> Self {
        Self::from_valid_config(TableConfig::default())
    }

    /// Creates an empty table with the given slot count and growth threshold
    ///
    /// # Errors
    ///
    /// Returns [`TableError::InvalidCapacity`] if `initial_capacity` is zero and
    /// [`TableError::InvalidLoadFactorThreshold`] unless `0 < threshold <= 1`.
    pub fn with_capacity_and_threshold(
        initial_capacity: usize,
        load_factor_threshold: f64,
    ) -> Result<Self> {
        Self::with_config(TableConfig::new(initial_capacity, load_factor_threshold))
    }

    /// Creates an empty table from a [`TableConfig`]
    ///
    /// # Errors
    ///
    /// Returns the error reported by [`TableConfig::validate`].
    pub fn with_config(config: TableConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    /// Builds the table without re-checking the config
    fn from_valid_config(config: TableConfig) -> Self {
        Self {
            slots: empty_slots(config.initial_capacity),
            size: 0,
            load_factor_threshold: config.load_factor_threshold,
        }
    }

    /// Inserts a key-value pair.
    ///
    /// If the key is already present its value is replaced in place and the
    /// previous value is returned; the number of keys does not change.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if self.load_factor() >= self.load_factor_threshold {
            self.resize();
        }

        let hash_code = hash_key(&key);
        let probe = loop {
            if let Some(probe) = self.probe_for_insert(&key, hash_code) {
                break probe;
            }
            warn!("no free slot among {} slots, growing before insert", self.capacity());
            self.resize();
        };

        match probe {
            Probe::Match(index) => match self.slots.get_mut(index) {
                Some(Slot::Occupied { value: stored, .. }) => Some(mem::replace(stored, value)),
                _ => None,
            },
            Probe::Vacant(index) => {
                if let Some(slot) = self.slots.get_mut(index) {
                    *slot = Slot::Occupied { key, value, hash_code };
                    self.size = self.size.saturating_add(1);
                }
                None
            }
        }
    }

    /// Walks the key's probe chain up to its first empty slot.
    ///
    /// Returns `None` only when every slot is occupied by other keys.
    fn probe_for_insert(&self, key: &K, hash_code: u64) -> Option<Probe> {
        let capacity = self.capacity();
        let mut index = home_index(hash_code, capacity);

        for _ in 0..capacity {
            match self.slots.get(index) {
                Some(Slot::Empty) => return Some(Probe::Vacant(index)),
                Some(Slot::Occupied { key: stored, hash_code: stored_hash, .. })
                    if *stored_hash == hash_code && stored == key =>
                {
                    return Some(Probe::Match(index));
                }
                _ => {}
            }
            index = next_index(index, capacity);
        }

        None
    }

    /// Finds the slot holding `key` and the number of slots inspected to
    /// reach it.
    ///
    /// The scan keeps going past empty slots and gives up after `capacity`
    /// steps.
    fn find<Q>(&self, key: &Q) -> Option<(usize, usize)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let capacity = self.capacity();
        let hash_code = hash_key(key);
        let mut index = home_index(hash_code, capacity);

        for probes in 1..=capacity {
            if let Some(Slot::Occupied { key: stored, hash_code: stored_hash, .. }) =
                self.slots.get(index)
            {
                if *stored_hash == hash_code && stored.borrow() == key {
                    return Some((index, probes));
                }
            }
            index = next_index(index, capacity);
        }

        None
    }

    /// Retrieves the value stored for `key`
    ///
    /// # Errors
    ///
    /// Returns [`TableError::KeyNotFound`] if no slot holds the key.
    pub fn get<Q>(&self, key: &Q) -> Result<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.find(key).and_then(|(index, _)| self.slots.get(index)) {
            Some(Slot::Occupied { value, .. }) => Ok(value),
            _ => Err(TableError::KeyNotFound),
        }
    }

    /// Retrieves a mutable reference to the value stored for `key`
    ///
    /// # Errors
    ///
    /// Returns [`TableError::KeyNotFound`] if no slot holds the key.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Result<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.find(key).map(|(index, _)| index);
        match index.and_then(|index| self.slots.get_mut(index)) {
            Some(Slot::Occupied { value, .. }) => Ok(value),
            _ => Err(TableError::KeyNotFound),
        }
    }

    /// Returns true if the table holds `key`
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.find(key).is_some()
    }

    /// Number of slots a lookup of `key` inspects, counting the slot that
    /// holds it. `Some(1)` means the key sits at its home index.
    pub fn probe_length<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.find(key).map(|(_, probes)| probes)
    }

    /// Removes `key`, returning its value if it was present
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let (index, _) = self.find(key)?;
        let slot = mem::replace(self.slots.get_mut(index)?, Slot::Empty);
        let Slot::Occupied { value, .. } = slot else {
            return None;
        };
        self.size = self.size.saturating_sub(1);
        self.close_gap(index);
        Some(value)
    }

    /// Backward-shift deletion.
    ///
    /// Walks the cluster following the freshly emptied `gap`. An entry at `j`
    /// whose home index does not lie cyclically in `(gap, j]` would be cut off
    /// from its home by the gap, so it moves into the gap and its old slot
    /// becomes the new gap. Stops at the first empty slot.
    fn close_gap(&mut self, mut gap: usize) {
        let capacity = self.capacity();
        let mut j = next_index(gap, capacity);

        for _ in 1..capacity {
            let home = match self.slots.get(j) {
                Some(Slot::Occupied { hash_code, .. }) => home_index(*hash_code, capacity),
                _ => break,
            };
            let reachable = if gap < j {
                gap < home && home <= j
            } else {
                gap < home || home <= j
            };
            if !reachable {
                trace!("shifting entry from slot {j} back to slot {gap}");
                self.slots.swap(gap, j);
                gap = j;
            }
            j = next_index(j, capacity);
        }
    }

    /// Grows the table to `capacity * 2 + 1` slots and places every entry
    /// again, in the old physical slot order.
    fn resize(&mut self) {
        let old_capacity = self.capacity();
        let new_capacity = old_capacity.saturating_mul(2).saturating_add(1);
        let old_slots = mem::replace(&mut self.slots, empty_slots(new_capacity));
        let old_size = mem::replace(&mut self.size, 0);

        for slot in old_slots {
            if let Slot::Occupied { key, value, hash_code } = slot {
                self.place(key, value, hash_code);
            }
        }

        debug_assert_eq!(self.size, old_size);
        debug!(
            "resized table from {old_capacity} to {new_capacity} slots ({} entries)",
            self.size
        );
    }

    /// Stores an entry known to be absent in the first empty slot of its
    /// probe chain, reusing the stored hash code.
    fn place(&mut self, key: K, value: V, hash_code: u64) {
        let capacity = self.capacity();
        let mut index = home_index(hash_code, capacity);

        for _ in 0..capacity {
            if let Some(slot) = self.slots.get_mut(index) {
                if matches!(slot, Slot::Empty) {
                    *slot = Slot::Occupied { key, value, hash_code };
                    self.size = self.size.saturating_add(1);
                    return;
                }
            }
            index = next_index(index, capacity);
        }
    }

    /// Sets the load factor at which the table grows. Takes effect on the
    /// next insert.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::InvalidLoadFactorThreshold`] unless
    /// `0 < threshold <= 1`; the current threshold is kept.
    pub fn set_load_factor_threshold(&mut self, threshold: f64) -> Result<()> {
        config::validate_threshold(threshold)?;
        self.load_factor_threshold = threshold;
        Ok(())
    }
}

impl<K, V> ProbingTable<K, V> {
    /// Returns the number of keys in the table
    #[must_use]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if the table holds no keys
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the number of slots
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the current load factor, `len / capacity`
    #[must_use]
    #[allow(clippy::arithmetic_side_effects, clippy::cast_precision_loss)]
    pub fn load_factor(&self) -> f64 {
        self.size as f64 / self.slots.len() as f64
    }

    /// Returns the load factor at which the table grows
    #[must_use]
    pub fn load_factor_threshold(&self) -> f64 {
        self.load_factor_threshold
    }

    /// Returns the collision resolution strategy, always linear probing
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn collision_resolution(&self) -> CollisionResolution {
        CollisionResolution::LinearProbing
    }

    /// Removes every entry, keeping the current capacity
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = Slot::Empty;
        }
        self.size = 0;
    }

    /// Returns an iterator over the key-value pairs in slot order
    #[must_use]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter { slots: self.slots.iter() }
    }
}

impl<'a, K, V> IntoIterator for &'a ProbingTable<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the key-value pairs of a [`ProbingTable`]
#[derive(Debug, Clone)]
pub struct Iter<'a, K, V> {
    /// Remaining slots
    slots: std::slice::Iter<'a, Slot<K, V>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.slots.find_map(|slot| match slot {
            Slot::Occupied { key, value, .. } => Some((key, value)),
            Slot::Empty => None,
        })
    }
}
