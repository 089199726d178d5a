/// An insertion-ordered associative container with byte-sequence keys.
///
/// Iteration yields live pairs in the order their keys were (most recently) inserted.
pub trait Map<V> {
    /// Iterator over the live pairs in insertion order.
    type Iter<'a>: Iterator<Item = (&'a [u8], &'a V)>
    where
        Self: 'a,
        V: 'a;

    /// Get the value associated with the given `key`.
    fn get(&self, key: &[u8]) -> Option<&V>;

    /// Check if the map contains the given `key`.
    fn contains_key(&self, key: &[u8]) -> bool;

    /// Associate `value` with `key`, returning the previous value if the key was present.
    fn insert(&mut self, key: &[u8], value: V) -> Option<V>;

    /// Remove `key` from the map, returning its value if the key was present.
    fn remove(&mut self, key: &[u8]) -> Option<V>;

    /// Remove all pairs.
    fn clear(&mut self);

    /// Get the number of live pairs in the map.
    fn len(&self) -> usize;

    /// Check if the map is empty.
    fn is_empty(&self) -> bool;

    /// Iterate over the live pairs in insertion order.
    fn iter(&self) -> Self::Iter<'_>;

    /// Get the load factor of the index (occupied-or-tombstoned slots over slots).
    fn load_factor(&self) -> f64;

    /// Get the density of the record store (live records over appended records).
    fn density(&self) -> f64;
}
