//! Construction parameters for [`ProbingTable`](crate::ProbingTable)

use crate::error::{Result, TableError};

/// Slot count used by [`TableConfig::default`]. Prime, to spread keys with
/// regular hash codes.
pub const DEFAULT_CAPACITY: usize = 11;

/// Load factor at which [`TableConfig::default`] tables grow
pub const DEFAULT_LOAD_FACTOR_THRESHOLD: f64 = 0.9;

/// Initial shape and growth policy of a table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableConfig {
    /// Number of slots allocated up front
    pub initial_capacity: usize,
    /// Fraction of occupied slots that triggers a resize on the next insert
    pub load_factor_threshold: f64,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_CAPACITY,
            load_factor_threshold: DEFAULT_LOAD_FACTOR_THRESHOLD,
        }
    }
}

impl TableConfig {
    /// Creates a config from explicit values. Call [`validate`](Self::validate)
    /// or hand it to [`ProbingTable::with_config`](crate::ProbingTable::with_config)
    /// to check them.
    #[must_use]
    pub const fn new(initial_capacity: usize, load_factor_threshold: f64) -> Self {
        Self { initial_capacity, load_factor_threshold }
    }

    /// Sets the initial slot count
    #[must_use]
    pub const fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// Sets the growth threshold
    #[must_use]
    pub const fn with_load_factor_threshold(mut self, load_factor_threshold: f64) -> Self {
        self.load_factor_threshold = load_factor_threshold;
        self
    }

    /// Checks that the capacity is positive and the threshold lies in `(0, 1]`
    ///
    /// # Errors
    ///
    /// Returns [`TableError::InvalidCapacity`] or
    /// [`TableError::InvalidLoadFactorThreshold`].
    pub fn validate(&self) -> Result<()> {
        if self.initial_capacity == 0 {
            return Err(TableError::InvalidCapacity(self.initial_capacity));
        }
        validate_threshold(self.load_factor_threshold)
    }
}

/// Rejects NaN, non-positive and above-one thresholds
pub(crate) fn validate_threshold(threshold: f64) -> Result<()> {
    if threshold > 0.0 && threshold <= 1.0 {
        Ok(())
    } else {
        Err(TableError::InvalidLoadFactorThreshold(threshold))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TableConfig::default();
        assert_eq!(config.initial_capacity, 11);
        assert!((config.load_factor_threshold - 0.9).abs() < f64::EPSILON);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_builder_setters() {
        let config = TableConfig::default().with_initial_capacity(5).with_load_factor_threshold(0.7);
        assert_eq!(config, TableConfig::new(5, 0.7));
    }

    #[test]
    fn test_rejects_zero_capacity() {
        assert_eq!(TableConfig::new(0, 0.5).validate(), Err(TableError::InvalidCapacity(0)));
    }

    #[test]
    fn test_rejects_bad_thresholds() {
        for threshold in [0.0, -0.25, 1.5] {
            assert_eq!(
                TableConfig::new(5, threshold).validate(),
                Err(TableError::InvalidLoadFactorThreshold(threshold))
            );
        }
        assert!(TableConfig::new(5, f64::NAN).validate().is_err());
        assert_eq!(TableConfig::new(5, 1.0).validate(), Ok(()));
    }
}
