//! Reference model of an insertion-ordered map, built on [`std::collections::HashMap`].
use std::collections::HashMap;

/// Keeps pairs in the order their keys were most recently inserted.
///
/// Overwriting a present key keeps its position. Removed pairs leave a hole in `order`, so
/// positions stay stable and removal is O(1).
#[derive(Debug, Clone)]
pub struct OrderedModel<V> {
    order: Vec<Option<(Vec<u8>, V)>>,
    positions: HashMap<Vec<u8>, usize>,
}

impl<V> Default for OrderedModel<V> {
    fn default() -> Self {
        Self {
            order: Vec::new(),
            positions: HashMap::new(),
        }
    }
}

impl<V> OrderedModel<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn get(&self, key: &[u8]) -> Option<&V> {
        let position = *self.positions.get(key)?;
        self.order[position].as_ref().map(|(_, value)| value)
    }

    pub fn insert(&mut self, key: &[u8], value: V) -> Option<V> {
        if let Some(&position) = self.positions.get(key) {
            if let Some((_, old)) = self.order[position].as_mut() {
                return Some(std::mem::replace(old, value));
            }
        }
        self.positions.insert(key.to_vec(), self.order.len());
        self.order.push(Some((key.to_vec(), value)));
        None
    }

    pub fn remove(&mut self, key: &[u8]) -> Option<V> {
        let position = self.positions.remove(key)?;
        self.order[position].take().map(|(_, value)| value)
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.positions.clear();
    }

    /// Pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&[u8], &V)> {
        self.order
            .iter()
            .flatten()
            .map(|(key, value)| (key.as_slice(), value))
    }
}
