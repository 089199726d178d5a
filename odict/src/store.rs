//! Dense, insertion-ordered record store.
//!
//! Records are appended at the end and never reordered. Removal leaves a tombstone in place, so
//! the positions stored in the index table stay valid until the store is compacted.
use crate::config::DictConfig;
use odict_core::DictError;
use std::mem;
use std::ops::{Index, IndexMut};

/// A live key-value pair together with the cached hash code of its key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<V> {
    pub key: Box<[u8]>,
    pub value: V,
    pub code: u64,
}

/// State of a single position in the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record<V> {
    /// Position 0, never a user entry.
    Sentinel,
    Live(Entry<V>),
    /// A removed entry waiting for compaction.
    Tombstone,
}

impl<V> Record<V> {
    #[inline]
    pub fn as_live(&self) -> Option<&Entry<V>> {
        match self {
            Record::Live(entry) => Some(entry),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct DataStore<V> {
    records: Vec<Record<V>>,
    /// Logical capacity; appending at this position grows the store first.
    capacity: usize,
    live: usize,
    deleted: usize,
}

impl<V> DataStore<V> {
    /// Creates a store holding only the sentinel record.
    pub fn with_capacity(capacity: usize) -> Result<Self, DictError> {
        let capacity = capacity.max(1);
        let mut records = Vec::new();
        records.try_reserve_exact(capacity)?;
        records.push(Record::Sentinel);
        Ok(Self {
            records,
            capacity,
            live: 0,
            deleted: 0,
        })
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Position the next record is appended at.
    #[inline]
    pub fn next(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn live(&self) -> usize {
        self.live
    }

    #[inline]
    pub fn deleted(&self) -> usize {
        self.deleted
    }

    /// Ratio of live records to appended (live or tombstoned) records.
    pub fn density(&self) -> f64 {
        Self::ratio(self.live, self.live + self.deleted)
    }

    /// The density right after one more live record is tombstoned.
    pub fn density_after_removal(&self) -> f64 {
        Self::ratio(self.live.saturating_sub(1), self.live + self.deleted)
    }

    fn ratio(live: usize, appended: usize) -> f64 {
        if appended == 0 {
            1.0
        } else {
            live as f64 / appended as f64
        }
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Entry<V>> {
        self.records.get(index).and_then(Record::as_live)
    }

    #[inline]
    pub fn records(&self) -> &[Record<V>] {
        &self.records
    }

    /// Live entries with their positions, in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (usize, &Entry<V>)> {
        self.records
            .iter()
            .enumerate()
            .filter_map(|(index, record)| record.as_live().map(|entry| (index, entry)))
    }

    pub fn into_records(self) -> Vec<Record<V>> {
        self.records
    }

    /// Appends `entry` and returns its position.
    ///
    /// On error the store is left unchanged.
    pub fn append(&mut self, entry: Entry<V>, config: &DictConfig) -> Result<usize, DictError> {
        if self.records.len() == self.capacity {
            self.expand(config)?;
        }
        let index = self.records.len();
        self.records.push(Record::Live(entry));
        self.live += 1;
        Ok(index)
    }

    /// Grows the capacity geometrically. Positions are left untouched.
    fn expand(&mut self, config: &DictConfig) -> Result<(), DictError> {
        let capacity = config.next_data_size(self.capacity)?;
        self.records
            .try_reserve_exact(capacity - self.records.len())?;
        tracing::trace!(
            old_capacity = self.capacity,
            new_capacity = capacity,
            "Expanded record store"
        );
        self.capacity = capacity;
        Ok(())
    }

    /// Replaces the live record at `index` with a tombstone and returns it.
    ///
    /// # Panics
    ///
    /// - If the record at `index` is not live.
    pub fn mark_deleted(&mut self, index: usize) -> Entry<V> {
        match mem::replace(&mut self.records[index], Record::Tombstone) {
            Record::Live(entry) => {
                self.live -= 1;
                self.deleted += 1;
                entry
            }
            record => {
                self.records[index] = record;
                panic!("Record {index} is not live");
            }
        }
    }

    /// Drops all tombstones, moving live records down while keeping their relative order.
    ///
    /// Every position handed out before is invalidated. Excess capacity beyond one growth step
    /// is released.
    pub fn compact(&mut self, config: &DictConfig) {
        self.records
            .retain(|record| !matches!(record, Record::Tombstone));
        self.deleted = 0;

        if let Ok(target) = config.next_data_size(self.records.len()) {
            if self.capacity > target {
                self.records.shrink_to(target);
                self.capacity = target;
            }
        }
    }
}

impl<V> Index<usize> for DataStore<V> {
    type Output = Entry<V>;

    /// # Panics
    ///
    /// - If the record at `index` is not live.
    #[inline]
    fn index(&self, index: usize) -> &Entry<V> {
        match &self.records[index] {
            Record::Live(entry) => entry,
            _ => panic!("Record {index} is not live"),
        }
    }
}

impl<V> IndexMut<usize> for DataStore<V> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Entry<V> {
        match &mut self.records[index] {
            Record::Live(entry) => entry,
            _ => panic!("Record {index} is not live"),
        }
    }
}
