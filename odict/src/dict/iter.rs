//! Iterators over [`Dictionary`] in insertion order.
use crate::dict::Dictionary;
use crate::store::Record;
use odict_core::KeyHasher;
use std::iter::FusedIterator;
use std::{slice, vec};

/// An iterator over the pairs of a [`Dictionary`], created by [`Dictionary::iter`].
#[derive(Debug, Clone)]
pub struct Iter<'a, V> {
    records: slice::Iter<'a, Record<V>>,
    remaining: usize,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a [u8], &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        for record in self.records.by_ref() {
            if let Record::Live(entry) = record {
                self.remaining -= 1;
                return Some((&entry.key, &entry.value));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}
impl<V> FusedIterator for Iter<'_, V> {}

/// An owning iterator over the pairs of a [`Dictionary`].
#[derive(Debug)]
pub struct IntoIter<V> {
    records: vec::IntoIter<Record<V>>,
    remaining: usize,
}

impl<V> Iterator for IntoIter<V> {
    type Item = (Box<[u8]>, V);

    fn next(&mut self) -> Option<Self::Item> {
        for record in self.records.by_ref() {
            if let Record::Live(entry) = record {
                self.remaining -= 1;
                return Some((entry.key, entry.value));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for IntoIter<V> {}
impl<V> FusedIterator for IntoIter<V> {}

/// An iterator over the keys of a [`Dictionary`], created by [`Dictionary::keys`].
#[derive(Debug, Clone)]
pub struct Keys<'a, V> {
    inner: Iter<'a, V>,
}

impl<'a, V> Iterator for Keys<'a, V> {
    type Item = &'a [u8];

    #[inline]
    fn next(&mut self) -> Option<&'a [u8]> {
        self.inner.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> ExactSizeIterator for Keys<'_, V> {}
impl<V> FusedIterator for Keys<'_, V> {}

/// An iterator over the values of a [`Dictionary`], created by [`Dictionary::values`].
#[derive(Debug, Clone)]
pub struct Values<'a, V> {
    inner: Iter<'a, V>,
}

impl<'a, V> Iterator for Values<'a, V> {
    type Item = &'a V;

    #[inline]
    fn next(&mut self) -> Option<&'a V> {
        self.inner.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> ExactSizeIterator for Values<'_, V> {}
impl<V> FusedIterator for Values<'_, V> {}

impl<V, H: KeyHasher> Dictionary<V, H> {
    /// Iterates over the pairs in insertion order, skipping removed records.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            records: self.store.records().iter(),
            remaining: self.len(),
        }
    }

    pub fn keys(&self) -> Keys<'_, V> {
        Keys { inner: self.iter() }
    }

    pub fn values(&self) -> Values<'_, V> {
        Values { inner: self.iter() }
    }
}

impl<'a, V, H: KeyHasher> IntoIterator for &'a Dictionary<V, H> {
    type Item = (&'a [u8], &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Iter<'a, V> {
        self.iter()
    }
}

impl<V, H: KeyHasher> IntoIterator for Dictionary<V, H> {
    type Item = (Box<[u8]>, V);
    type IntoIter = IntoIter<V>;

    fn into_iter(self) -> IntoIter<V> {
        let remaining = self.len();
        IntoIter {
            records: self.store.into_records().into_iter(),
            remaining,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_iter() {
        let dict: Dictionary<i32> = Dictionary::new();
        assert_eq!(dict.iter().next(), None);
        assert_eq!(dict.keys().len(), 0);
        assert_eq!(dict.into_iter().next(), None);
    }

    #[test]
    fn test_iter_skips_removed() {
        let mut dict = Dictionary::new();
        let keys = ["one", "two", "three", "four", "five", "six"];
        for (i, key) in keys.into_iter().enumerate() {
            dict.insert(key, i);
        }
        dict.remove("two");

        let mut iter = dict.iter();
        assert_eq!(iter.len(), 5);
        assert_eq!(iter.next(), Some((b"one".as_slice(), &0)));
        assert_eq!(iter.next(), Some((b"three".as_slice(), &2)));
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.count(), 3);

        assert_eq!(dict.values().copied().collect::<Vec<_>>(), [0, 2, 3, 4, 5]);
    }

    #[test]
    fn test_for_loop_over_ref() {
        let dict: Dictionary<u32> = [("x", 1), ("y", 2), ("z", 3)].into_iter().collect();
        let mut total = 0;
        for (_, value) in &dict {
            total += value;
        }
        assert_eq!(total, 6);
    }

    #[test]
    fn test_into_iter() {
        let mut dict = Dictionary::new();
        dict.insert("k1", "v1".to_string());
        dict.insert("k2", "v2".to_string());
        dict.insert("k3", "v3".to_string());
        dict.remove("k1");

        let iter = dict.into_iter();
        assert_eq!(iter.len(), 2);
        let pairs: Vec<(Box<[u8]>, String)> = iter.collect();
        assert_eq!(
            pairs,
            [
                (b"k2".to_vec().into_boxed_slice(), "v2".to_string()),
                (b"k3".to_vec().into_boxed_slice(), "v3".to_string()),
            ]
        );
    }
}
