//! Sizing and growth parameters of [`crate::Dictionary`].
use odict_core::DictError;

/// Growth and compaction policy of a dictionary.
///
/// The index table starts at `table_initial_size` slots and grows by `table_small_growth`
/// while it is smaller than `table_growth_threshold`, by `table_large_growth` afterwards.
/// The record store starts with `data_initial_size` records (the first one is the reserved
/// sentinel) and grows geometrically by `data_growth`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DictConfig {
    pub table_initial_size: usize,
    /// Maximum ratio of occupied-or-tombstoned slots to table slots.
    pub table_load_factor: f64,
    pub table_small_growth: usize,
    pub table_large_growth: usize,
    pub table_growth_threshold: usize,
    pub data_initial_size: usize,
    pub data_growth: f64,
    /// Minimum ratio of live records to appended records, restored by compaction.
    pub data_density: f64,
}

impl DictConfig {
    pub const DEFAULT: Self = Self {
        table_initial_size: 8,
        table_load_factor: 0.67,
        table_small_growth: 4,
        table_large_growth: 2,
        table_growth_threshold: 50_000,
        data_initial_size: 1,
        data_growth: 1.5,
        data_density: 0.8,
    };

    /// Checks that the configuration keeps the engine invariants satisfiable.
    pub fn validate(&self) -> Result<(), DictError> {
        fn power_of_two(name: &str, value: usize) -> Result<(), DictError> {
            if value < 2 || !value.is_power_of_two() {
                return Err(DictError::InvalidConfig(format!(
                    "{name} must be a power of two >= 2, got {value}"
                )));
            }
            Ok(())
        }

        power_of_two("table_initial_size", self.table_initial_size)?;
        power_of_two("table_small_growth", self.table_small_growth)?;
        power_of_two("table_large_growth", self.table_large_growth)?;

        if !(self.table_load_factor > 0.0 && self.table_load_factor < 1.0) {
            return Err(DictError::InvalidConfig(format!(
                "table_load_factor must be in (0, 1), got {}",
                self.table_load_factor
            )));
        }
        if self.data_initial_size == 0 {
            return Err(DictError::InvalidConfig(
                "data_initial_size must hold at least the sentinel record".to_string(),
            ));
        }
        if !(self.data_growth > 1.0 && self.data_growth.is_finite()) {
            return Err(DictError::InvalidConfig(format!(
                "data_growth must be a finite number > 1, got {}",
                self.data_growth
            )));
        }
        if !(self.data_density > 0.0 && self.data_density <= 1.0) {
            return Err(DictError::InvalidConfig(format!(
                "data_density must be in (0, 1], got {}",
                self.data_density
            )));
        }
        Ok(())
    }

    /// Table size following `table_size`.
    pub(crate) fn next_table_size(&self, table_size: usize) -> Result<usize, DictError> {
        let factor = if table_size < self.table_growth_threshold {
            self.table_small_growth
        } else {
            self.table_large_growth
        };
        table_size
            .checked_mul(factor)
            .ok_or(DictError::CapacityOverflow)
    }

    /// Store capacity following `capacity`; always at least one record larger.
    pub(crate) fn next_data_size(&self, capacity: usize) -> Result<usize, DictError> {
        let grown = (capacity as f64 * self.data_growth).ceil();
        if grown >= usize::MAX as f64 {
            return Err(DictError::CapacityOverflow);
        }
        Ok((grown as usize).max(capacity + 1))
    }
}

impl Default for DictConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
