//! Implements constructors for [`Dictionary`].
use crate::config::DictConfig;
use crate::dict::core::or_abort;
use crate::dict::Dictionary;
use crate::hashing::RotateXorHasher;
use crate::store::DataStore;
use crate::table::IndexTable;
use odict_core::{DictError, KeyHasher};

impl<V> Dictionary<V, RotateXorHasher> {
    /// Creates an empty dictionary with the default configuration.
    ///
    /// # Panics
    ///
    /// - If the initial arrays cannot be allocated.
    pub fn new() -> Self {
        Self::with_hasher(RotateXorHasher)
    }

    /// Creates an empty dictionary with the given configuration.
    pub fn with_config(config: DictConfig) -> Result<Self, DictError> {
        Self::with_config_and_hasher(config, RotateXorHasher)
    }
}

impl<V, H: KeyHasher> Dictionary<V, H> {
    /// Creates an empty dictionary hashing keys with `hasher`.
    ///
    /// # Panics
    ///
    /// - If the initial arrays cannot be allocated.
    pub fn with_hasher(hasher: H) -> Self {
        or_abort(Self::empty(DictConfig::DEFAULT, hasher))
    }

    /// Creates an empty dictionary with the given configuration, hashing keys with `hasher`.
    pub fn with_config_and_hasher(config: DictConfig, hasher: H) -> Result<Self, DictError> {
        config.validate()?;
        Self::empty(config, hasher)
    }

    fn empty(config: DictConfig, hasher: H) -> Result<Self, DictError> {
        Ok(Self {
            table: IndexTable::with_size(config.table_initial_size)?,
            store: DataStore::with_capacity(config.data_initial_size)?,
            config,
            hasher,
        })
    }

    /// Resets the dictionary to the state of a newly created one, releasing both arrays.
    ///
    /// # Panics
    ///
    /// - If the initial arrays cannot be allocated.
    pub fn clear(&mut self) {
        *self = or_abort(Self::empty(self.config, self.hasher.clone()));
    }

    /// Creates an independent dictionary with the same pairs in the same order.
    ///
    /// The copy holds only the live records, so its store is compact.
    pub fn try_clone(&self) -> Result<Self, DictError>
    where
        V: Clone,
    {
        let mut store = DataStore::with_capacity(self.len() + 1)?;
        for (_, entry) in self.store.entries() {
            store.append(entry.clone(), &self.config)?;
        }
        Ok(Self {
            table: IndexTable::rebuild(self.table.size(), &store)?,
            store,
            config: self.config,
            hasher: self.hasher.clone(),
        })
    }
}

impl<V> Default for Dictionary<V, RotateXorHasher> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone, H: KeyHasher> Clone for Dictionary<V, H> {
    fn clone(&self) -> Self {
        or_abort(self.try_clone())
    }
}

impl<K: AsRef<[u8]>, V> FromIterator<(K, V)> for Dictionary<V, RotateXorHasher> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut dict = Self::new();
        dict.extend(iter);
        dict
    }
}

impl<K: AsRef<[u8]>, V, H: KeyHasher> Extend<(K, V)> for Dictionary<V, H> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key.as_ref(), value);
        }
    }
}
