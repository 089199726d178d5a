//! Implements [`Map`] for [`Dictionary`].
use crate::dict::{Dictionary, Iter};
use odict_core::{KeyHasher, Map};

impl<V, H: KeyHasher> Map<V> for Dictionary<V, H> {
    type Iter<'a>
        = Iter<'a, V>
    where
        Self: 'a,
        V: 'a;

    fn get(&self, key: &[u8]) -> Option<&V> {
        Dictionary::get(self, key)
    }

    fn contains_key(&self, key: &[u8]) -> bool {
        Dictionary::contains_key(self, key)
    }

    fn insert(&mut self, key: &[u8], value: V) -> Option<V> {
        Dictionary::insert(self, key, value)
    }

    fn remove(&mut self, key: &[u8]) -> Option<V> {
        Dictionary::remove(self, key)
    }

    fn clear(&mut self) {
        Dictionary::clear(self)
    }

    fn len(&self) -> usize {
        Dictionary::len(self)
    }

    fn is_empty(&self) -> bool {
        Dictionary::is_empty(self)
    }

    fn iter(&self) -> Iter<'_, V> {
        Dictionary::iter(self)
    }

    fn load_factor(&self) -> f64 {
        Dictionary::load_factor(self)
    }

    fn density(&self) -> f64 {
        Dictionary::density(self)
    }
}
