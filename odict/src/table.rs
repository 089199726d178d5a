//! Sparse open-addressing index over the record store.
//!
//! Each slot either has never been used since the last rebuild, was vacated by a removal, or
//! holds the position of a live record. Rebuilding re-derives every slot from the cached hash
//! codes of the live records, so vacated markers do not survive it.
use crate::hashing::ProbeSequence;
use crate::store::DataStore;
use odict_core::DictError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Empty,
    /// Vacated by a removal; probing continues through it.
    Deleted,
    /// Position of a live record in the store.
    Occupied(usize),
}

/// Outcome of [`IndexTable::find_slot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    /// The key is present at `index` in the store and `slot` points to it.
    Found { slot: usize, index: usize },
    /// The key is absent and `slot` is where it should be inserted.
    Vacant { slot: usize },
    /// The key is absent and the probe sequence has no reusable slot.
    Exhausted,
}

#[derive(Debug, Clone)]
pub struct IndexTable {
    slots: Vec<Slot>,
}

impl IndexTable {
    /// Creates a table of `size` empty slots. `size` must be a power of two >= 2.
    pub fn with_size(size: usize) -> Result<Self, DictError> {
        debug_assert!(
            size >= 2 && size.is_power_of_two(),
            r#""size" must be a power of two >= 2"#
        );
        let mut slots = Vec::new();
        slots.try_reserve_exact(size)?;
        slots.resize(size, Slot::Empty);
        Ok(Self { slots })
    }

    /// Creates a table of `size` slots indexing every live record of `store`.
    pub fn rebuild<V>(size: usize, store: &DataStore<V>) -> Result<Self, DictError> {
        let mut table = Self::with_size(size)?;
        table.fill_from(store);
        Ok(table)
    }

    /// Indexes every live record of `store`. Expects the table to be freshly created.
    pub fn fill_from<V>(&mut self, store: &DataStore<V>) {
        for (index, entry) in store.entries() {
            self.insert_index(entry.code, index);
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Walks the probe sequence of `code` looking for `key`.
    ///
    /// An empty slot ends the search. The first vacated slot seen on the way is remembered and
    /// preferred as the insertion point.
    pub fn find_slot<V>(&self, key: &[u8], code: u64, store: &DataStore<V>) -> Lookup {
        let mut first_deleted = None;
        for slot in ProbeSequence::new(code, self.size()) {
            match self.slots[slot] {
                Slot::Empty => {
                    return Lookup::Vacant {
                        slot: first_deleted.unwrap_or(slot),
                    }
                }
                Slot::Deleted => {
                    first_deleted.get_or_insert(slot);
                }
                Slot::Occupied(index) => {
                    if let Some(entry) = store.get(index) {
                        if entry.code == code && *entry.key == *key {
                            return Lookup::Found { slot, index };
                        }
                    }
                }
            }
        }
        match first_deleted {
            Some(slot) => Lookup::Vacant { slot },
            None => Lookup::Exhausted,
        }
    }

    /// Writes `index` into the first empty or vacated slot of the probe sequence of `code`.
    ///
    /// The caller guarantees the key is not indexed yet.
    ///
    /// # Panics
    ///
    /// - If every slot is occupied.
    pub fn insert_index(&mut self, code: u64, index: usize) {
        let free = ProbeSequence::new(code, self.size())
            .find(|&slot| !matches!(self.slots[slot], Slot::Occupied(_)));
        match free {
            Some(slot) => self.slots[slot] = Slot::Occupied(index),
            None => panic!("Index table of size {} has no free slot", self.size()),
        }
    }

    /// Points `slot` at the record `index`.
    #[inline]
    pub fn set(&mut self, slot: usize, index: usize) {
        debug_assert!(!matches!(self.slots[slot], Slot::Occupied(_)));
        self.slots[slot] = Slot::Occupied(index);
    }

    #[inline]
    pub fn mark_deleted(&mut self, slot: usize) {
        debug_assert!(matches!(self.slots[slot], Slot::Occupied(_)));
        self.slots[slot] = Slot::Deleted;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DictConfig;
    use crate::store::Entry;

    /// Every key gets the same code, so all of them share one probe sequence.
    const CODE: u64 = 0x12db_73a9_a879_25e4;

    fn store_with(keys: &[&str]) -> DataStore<usize> {
        let mut store = DataStore::with_capacity(1).unwrap();
        for (value, key) in keys.iter().enumerate() {
            let entry = Entry {
                key: key.as_bytes().into(),
                value,
                code: CODE,
            };
            store.append(entry, &DictConfig::DEFAULT).unwrap();
        }
        store
    }

    #[test]
    fn test_new_table_is_empty() {
        let table = IndexTable::with_size(8).unwrap();
        assert_eq!(table.size(), 8);
        assert!(table.slots().iter().all(|&s| s == Slot::Empty));
    }

    #[test]
    fn test_find_in_empty_table() {
        let store = store_with(&[]);
        let table = IndexTable::with_size(8).unwrap();
        // Probe sequence for CODE in a table of 8 starts at slot 4.
        assert_eq!(
            table.find_slot(b"a", CODE, &store),
            Lookup::Vacant { slot: 4 }
        );
    }

    #[test]
    fn test_collisions_follow_probe_sequence() {
        let store = store_with(&["a", "b", "c"]);
        let table = IndexTable::rebuild(8, &store).unwrap();
        assert_eq!(table.slots()[4], Slot::Occupied(1));
        assert_eq!(table.slots()[5], Slot::Occupied(2));
        assert_eq!(table.slots()[6], Slot::Occupied(3));

        assert_eq!(
            table.find_slot(b"c", CODE, &store),
            Lookup::Found { slot: 6, index: 3 }
        );
        assert_eq!(
            table.find_slot(b"d", CODE, &store),
            Lookup::Vacant { slot: 7 }
        );
    }

    #[test]
    fn test_deleted_slot_is_probed_through_and_reused() {
        let mut store = store_with(&["a", "b", "c"]);
        let mut table = IndexTable::rebuild(8, &store).unwrap();

        table.mark_deleted(5);
        store.mark_deleted(2);

        assert_eq!(
            table.find_slot(b"c", CODE, &store),
            Lookup::Found { slot: 6, index: 3 }
        );
        assert_eq!(
            table.find_slot(b"b", CODE, &store),
            Lookup::Vacant { slot: 5 }
        );
    }

    #[test]
    fn test_exhausted_table() {
        let keys: Vec<String> = (0..8).map(|i| i.to_string()).collect();
        let keys: Vec<&str> = keys.iter().map(String::as_str).collect();
        let store = store_with(&keys);
        let table = IndexTable::rebuild(8, &store).unwrap();
        assert_eq!(table.find_slot(b"x", CODE, &store), Lookup::Exhausted);
        assert_eq!(
            table.find_slot(b"7", CODE, &store),
            Lookup::Found { slot: 3, index: 8 }
        );
    }

    #[test]
    fn test_insert_index_skips_occupied() {
        let mut table = IndexTable::with_size(8).unwrap();
        table.insert_index(CODE, 1);
        table.insert_index(CODE, 2);
        table.mark_deleted(4);
        table.insert_index(CODE, 3);
        assert_eq!(table.slots()[4], Slot::Occupied(3));
        assert_eq!(table.slots()[5], Slot::Occupied(2));
    }

    #[test]
    #[should_panic(expected = "has no free slot")]
    fn test_insert_index_into_full_table() {
        let mut table = IndexTable::with_size(2).unwrap();
        for index in 1..=3 {
            table.insert_index(CODE, index);
        }
    }

    #[test]
    fn test_rebuild_drops_deleted_markers() {
        let mut store = store_with(&["a", "b", "c"]);
        let mut table = IndexTable::rebuild(8, &store).unwrap();
        table.mark_deleted(4);
        store.mark_deleted(1);

        let rebuilt = IndexTable::rebuild(8, &store).unwrap();
        assert!(!rebuilt.slots().contains(&Slot::Deleted));
        assert_eq!(rebuilt.slots()[4], Slot::Occupied(2));
        assert_eq!(rebuilt.slots()[5], Slot::Occupied(3));
    }
}
