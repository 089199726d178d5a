//! Mutating operations of [`Dictionary`], including the growth and compaction policies.
use crate::dict::core::or_abort;
use crate::dict::Dictionary;
use crate::store::Entry;
use crate::table::{IndexTable, Lookup};
use odict_core::{DictError, KeyHasher};
use std::mem;

impl<V, H: KeyHasher> Dictionary<V, H> {
    /// Associates `value` with `key`, returning the previous value if the key was present.
    ///
    /// Overwriting keeps the position of the pair in iteration order, a new key is appended at
    /// the end.
    ///
    /// # Panics
    ///
    /// - If growing the table or the store fails.
    #[track_caller]
    pub fn insert<Q: AsRef<[u8]> + ?Sized>(&mut self, key: &Q, value: V) -> Option<V> {
        or_abort(self.try_insert(key, value))
    }

    /// Same as [`Dictionary::insert`], but reports growth failures instead of panicking.
    ///
    /// On error the dictionary is left unchanged.
    pub fn try_insert<Q: AsRef<[u8]> + ?Sized>(
        &mut self,
        key: &Q,
        value: V,
    ) -> Result<Option<V>, DictError> {
        let key = key.as_ref();
        let code = self.hasher.hash(key);
        let slot = match self.table.find_slot(key, code, &self.store) {
            Lookup::Found { index, .. } => {
                let old = mem::replace(&mut self.store[index].value, value);
                return Ok(Some(old));
            }
            Lookup::Vacant { slot } => Some(slot),
            Lookup::Exhausted => None,
        };

        let slot = match slot {
            Some(slot) if !self.overloaded_with_one_more() => Some(slot),
            _ => {
                self.expand_table()?;
                None
            }
        };

        let entry = Entry {
            key: key.into(),
            value,
            code,
        };
        let index = self.store.append(entry, &self.config)?;
        match slot {
            Some(slot) => self.table.set(slot, index),
            None => self.table.insert_index(code, index),
        }
        Ok(None)
    }

    /// Removes `key`, returning its value if it was present.
    ///
    /// # Panics
    ///
    /// - If allocating the table for compaction fails.
    #[track_caller]
    pub fn remove<Q: AsRef<[u8]> + ?Sized>(&mut self, key: &Q) -> Option<V> {
        match self.try_remove_key(key) {
            Ok(value) => Some(value),
            Err(DictError::KeyNotFound { .. }) => None,
            Err(err) => panic!("{err}"),
        }
    }

    /// Removes `key` and returns its value.
    ///
    /// # Panics
    ///
    /// - If the dictionary does not contain `key`.
    /// - If allocating the table for compaction fails.
    #[track_caller]
    pub fn remove_key<Q: AsRef<[u8]> + ?Sized>(&mut self, key: &Q) -> V {
        or_abort(self.try_remove_key(key))
    }

    /// Removes `key` and returns its value, failing with [`DictError::KeyNotFound`] if absent.
    ///
    /// On error the dictionary is left unchanged.
    pub fn try_remove_key<Q: AsRef<[u8]> + ?Sized>(&mut self, key: &Q) -> Result<V, DictError> {
        let key = key.as_ref();
        let Lookup::Found { slot, index } = self.lookup(key) else {
            return Err(DictError::key_not_found(key));
        };

        // Allocated upfront so that compaction itself cannot fail halfway.
        let compacted_table = if self.store.density_after_removal() < self.config.data_density {
            Some(IndexTable::with_size(self.table.size())?)
        } else {
            None
        };

        self.table.mark_deleted(slot);
        let entry = self.store.mark_deleted(index);

        if let Some(table) = compacted_table {
            self.compact_data(table);
        }
        Ok(entry.value)
    }

    /// Whether placing one more record would push the table over its load factor.
    ///
    /// Removed records still count until compaction.
    fn overloaded_with_one_more(&self) -> bool {
        self.overloaded(self.pending_with_one_more(), self.table.size())
    }

    #[inline]
    fn pending_with_one_more(&self) -> usize {
        self.store.live() + self.store.deleted() + 1
    }

    #[inline]
    fn overloaded(&self, pending: usize, table_size: usize) -> bool {
        pending as f64 > self.config.table_load_factor * table_size as f64
    }

    /// Replaces the table with a larger one indexing the same records.
    ///
    /// Grows by as many steps as needed to keep the load factor after one more record, so a
    /// small `table_load_factor` never leaves the table overloaded.
    ///
    /// On error the dictionary is left unchanged.
    fn expand_table(&mut self) -> Result<(), DictError> {
        let pending = self.pending_with_one_more();
        let mut size = self.config.next_table_size(self.table.size())?;
        while self.overloaded(pending, size) {
            size = self.config.next_table_size(size)?;
        }
        let table = IndexTable::rebuild(size, &self.store)?;
        tracing::debug!(
            old_size = self.table.size(),
            new_size = size,
            pairs = self.store.live(),
            deleted = self.store.deleted(),
            "Expanded index table"
        );
        self.table = table;
        Ok(())
    }

    /// Drops the tombstones from the store and re-indexes the moved records into `table`.
    fn compact_data(&mut self, mut table: IndexTable) {
        let before = self.store.next();
        let reclaimed = self.store.deleted();
        self.store.compact(&self.config);
        table.fill_from(&self.store);
        self.table = table;
        tracing::debug!(
            records_before = before,
            records_after = self.store.next(),
            reclaimed,
            capacity = self.store.capacity(),
            "Compacted record store"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DictConfig;
    use crate::table::Slot;

    fn keys(dict: &Dictionary<i32>) -> Vec<String> {
        dict.keys()
            .map(|k| String::from_utf8_lossy(k).into_owned())
            .collect()
    }

    #[test]
    fn test_insert_new_and_overwrite() {
        let mut dict = Dictionary::new();
        assert_eq!(dict.insert("a", 1), None);
        assert_eq!(dict.insert("b", 2), None);
        assert_eq!(dict.insert("a", 10), Some(1));
        assert_eq!(dict.len(), 2);
        assert_eq!(dict["a"], 10);
        assert_eq!(keys(&dict), ["a", "b"]);
    }

    #[test]
    fn test_remove_then_insert_order() {
        let mut dict = Dictionary::new();
        dict.insert("a", 1);
        dict.insert("b", 2);
        dict.remove_key("a");
        dict.insert("c", 3);

        assert_eq!(dict.len(), 2);
        assert!(!dict.contains_key("a"));
        assert_eq!(dict.get("b"), Some(&2));
        assert_eq!(dict.to_string(), "b : 2\nc : 3\n");
    }

    #[test]
    fn test_reinsert_moves_to_end() {
        let mut dict = Dictionary::new();
        for (i, key) in ["a", "b", "c", "d", "e", "f"].into_iter().enumerate() {
            dict.insert(key, i as i32);
        }
        dict.remove("b");
        dict.insert("b", 100);
        dict.insert("d", 300);
        assert_eq!(keys(&dict), ["a", "c", "d", "e", "f", "b"]);
    }

    #[test]
    fn test_remove_absent() {
        let mut dict: Dictionary<i32> = Dictionary::new();
        assert_eq!(dict.remove("a"), None);
        dict.insert("a", 1);
        assert_eq!(dict.remove("a"), Some(1));
        assert_eq!(dict.remove("a"), None);
        assert!(matches!(
            dict.try_remove_key("a"),
            Err(DictError::KeyNotFound { .. })
        ));
    }

    #[test]
    #[should_panic(expected = r#"Key "ghost" is not present"#)]
    fn test_remove_key_absent() {
        let mut dict: Dictionary<i32> = Dictionary::new();
        dict.insert("a", 1);
        dict.remove_key("ghost");
    }

    #[test]
    fn test_nine_keys_expand_once() {
        let mut dict = Dictionary::new();
        let mut sizes = vec![dict.table_size()];
        for i in 0..9 {
            dict.insert(&format!("key-{i}"), i);
            if sizes.last() != Some(&dict.table_size()) {
                sizes.push(dict.table_size());
            }
        }
        assert_eq!(sizes, [8, 32]);
        for i in 0..9 {
            assert_eq!(dict.get(&format!("key-{i}")), Some(&i));
        }
    }

    #[test]
    fn test_expansion_factor_switches() {
        let mut dict = Dictionary::new();
        let mut sizes = vec![dict.table_size()];
        for i in 0..120_000 {
            dict.insert(&i.to_string(), i);
            if sizes.last() != Some(&dict.table_size()) {
                sizes.push(dict.table_size());
            }
        }
        assert_eq!(sizes, [8, 32, 128, 512, 2048, 8192, 32768, 131072, 262144]);
        assert!(dict.load_factor() <= 0.67);
    }

    #[test]
    fn test_compaction_after_removals() {
        let mut dict = Dictionary::new();
        for i in 0..10 {
            dict.insert(&i.to_string(), i);
        }
        assert_eq!(dict.remove("0"), Some(0));
        assert_eq!(dict.remove("1"), Some(1));
        assert_eq!(dict.num_deleted(), 2);
        assert_eq!(dict.density(), 0.8);

        assert_eq!(dict.remove("2"), Some(2));
        assert_eq!(dict.num_deleted(), 0);
        assert_eq!(dict.density(), 1.0);
        assert!(!dict.table.slots().contains(&Slot::Deleted));
        assert_eq!(keys(&dict), ["3", "4", "5", "6", "7", "8", "9"]);
        for i in 3..10 {
            assert_eq!(dict[&i.to_string()], i);
        }
    }

    #[test]
    fn test_remove_all() {
        let mut dict = Dictionary::new();
        for i in 0..50 {
            dict.insert(&i.to_string(), i);
        }
        for i in 0..50 {
            assert_eq!(dict.remove_key(&i.to_string()), i);
        }
        assert!(dict.is_empty());
        assert_eq!(dict.num_deleted(), 0);
        assert_eq!(dict.iter().count(), 0);

        dict.insert("fresh", 1);
        assert_eq!(keys(&dict), ["fresh"]);
    }

    #[test]
    fn test_table_tombstone_reused() {
        let mut dict = Dictionary::new();
        for i in 0..10 {
            dict.insert(&i.to_string(), i);
        }
        assert!(!dict.table.slots().contains(&Slot::Deleted));

        dict.remove("3");
        let deleted: Vec<usize> = (0..dict.table_size())
            .filter(|&slot| dict.table.slots()[slot] == Slot::Deleted)
            .collect();
        assert_eq!(deleted.len(), 1);
        assert_eq!(dict.num_deleted(), 1);

        dict.insert("3", 33);
        assert!(matches!(dict.table.slots()[deleted[0]], Slot::Occupied(_)));
        assert_eq!(dict["3"], 33);
        assert_eq!(dict.num_deleted(), 1);
    }

    #[test]
    fn test_small_load_factor_holds_after_each_insert() {
        let config = DictConfig {
            table_initial_size: 2,
            table_load_factor: 0.1,
            ..DictConfig::DEFAULT
        };
        let mut dict = Dictionary::with_config(config).unwrap();
        dict.insert("a", 1);
        assert_eq!(dict.table_size(), 32);
        assert!(dict.load_factor() <= 0.1, "{}", dict.load_factor());

        for i in 0..500 {
            dict.insert(&i.to_string(), i);
            assert!(dict.load_factor() <= 0.1, "{}", dict.load_factor());
            if i % 4 == 0 {
                dict.remove(&(i / 2).to_string());
                assert!(dict.load_factor() <= 0.1, "{}", dict.load_factor());
            }
        }
        assert_eq!(dict["a"], 1);
        assert_eq!(dict[&"499".to_string()], 499);
    }

    #[test]
    #[cfg_attr(not(feature = "_slow-tests"), ignore)]
    fn test_large_churn() {
        let mut dict = Dictionary::new();
        for i in 0..1_000_000_u32 {
            dict.insert(&i.to_le_bytes(), i);
        }
        for i in (0..1_000_000_u32).filter(|i| i % 5 != 0) {
            assert_eq!(dict.remove_key(&i.to_le_bytes()), i);
        }
        assert_eq!(dict.len(), 200_000);
        assert!(dict.density() >= 0.8);
        for (position, (key, value)) in dict.iter().enumerate() {
            assert_eq!(*value, position as u32 * 5);
            assert_eq!(key, value.to_le_bytes());
        }
    }

    #[test]
    fn test_growth_through_expansions_and_compaction() {
        let mut dict = Dictionary::new();
        let mut expected = Vec::new();
        for round in 0..4 {
            for i in 0..400 {
                let key = format!("r{round}-{i}");
                dict.insert(&key, i);
                expected.push((key, i));
            }
            for (key, value) in expected.iter().step_by(3) {
                if dict.contains_key(key) {
                    assert_eq!(dict.remove_key(key), *value);
                }
            }
            expected.retain(|(key, _)| dict.contains_key(key));
        }

        assert!(dict.table_size() >= 128);
        assert_eq!(dict.len(), expected.len());
        let actual: Vec<(String, i32)> = dict
            .iter()
            .map(|(k, v)| (String::from_utf8_lossy(k).into_owned(), *v))
            .collect();
        assert_eq!(actual, expected);
    }
}
