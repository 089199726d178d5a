//! Read-only operations of [`Dictionary`].
use crate::config::DictConfig;
use crate::dict::Dictionary;
use crate::table::Lookup;
use odict_core::{DictError, KeyHasher};
use std::ops::Index;

impl<V, H: KeyHasher> Dictionary<V, H> {
    /// Hashes `key` and looks it up in the index table.
    #[inline]
    pub(crate) fn lookup(&self, key: &[u8]) -> Lookup {
        let code = self.hasher.hash(key);
        self.table.find_slot(key, code, &self.store)
    }

    /// Get the number of pairs in the dictionary.
    #[inline]
    pub fn len(&self) -> usize {
        self.store.live()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains_key<Q: AsRef<[u8]> + ?Sized>(&self, key: &Q) -> bool {
        matches!(self.lookup(key.as_ref()), Lookup::Found { .. })
    }

    /// Get the value associated with the given `key`.
    pub fn get<Q: AsRef<[u8]> + ?Sized>(&self, key: &Q) -> Option<&V> {
        match self.lookup(key.as_ref()) {
            Lookup::Found { index, .. } => Some(&self.store[index].value),
            _ => None,
        }
    }

    pub fn get_mut<Q: AsRef<[u8]> + ?Sized>(&mut self, key: &Q) -> Option<&mut V> {
        match self.lookup(key.as_ref()) {
            Lookup::Found { index, .. } => Some(&mut self.store[index].value),
            _ => None,
        }
    }

    /// Get the value associated with `key`, failing with [`DictError::KeyNotFound`] if absent.
    pub fn try_value<Q: AsRef<[u8]> + ?Sized>(&self, key: &Q) -> Result<&V, DictError> {
        let key = key.as_ref();
        self.get(key).ok_or_else(|| DictError::key_not_found(key))
    }

    /// Get the value associated with `key`.
    ///
    /// # Panics
    ///
    /// - If the dictionary does not contain `key`.
    #[track_caller]
    pub fn value<Q: AsRef<[u8]> + ?Sized>(&self, key: &Q) -> &V {
        match self.try_value(key) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }

    /// Number of slots in the index table.
    #[inline]
    pub fn table_size(&self) -> usize {
        self.table.size()
    }

    /// Number of records the store holds before it has to grow, including the sentinel.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.store.capacity()
    }

    /// Number of removed records not yet reclaimed by compaction.
    #[inline]
    pub fn num_deleted(&self) -> usize {
        self.store.deleted()
    }

    /// Ratio of live and removed-but-not-compacted records to the table size.
    pub fn load_factor(&self) -> f64 {
        (self.store.live() + self.store.deleted()) as f64 / self.table.size() as f64
    }

    /// Ratio of live records to appended records; 1.0 right after compaction.
    pub fn density(&self) -> f64 {
        self.store.density()
    }

    #[inline]
    pub fn config(&self) -> &DictConfig {
        &self.config
    }

    #[inline]
    pub fn hasher(&self) -> &H {
        &self.hasher
    }
}

/// Panics if the key is absent, same as [`Dictionary::value`].
impl<V, H: KeyHasher, Q: AsRef<[u8]> + ?Sized> Index<&Q> for Dictionary<V, H> {
    type Output = V;

    #[track_caller]
    fn index(&self, key: &Q) -> &V {
        self.value(key)
    }
}
