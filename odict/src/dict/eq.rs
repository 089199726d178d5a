//! Implements order-insensitive equality for [`Dictionary`].
use crate::dict::Dictionary;
use odict_core::KeyHasher;

/// Two dictionaries are equal when they hold the same pairs, regardless of insertion order,
/// hashers or internal layout.
impl<V, H1, H2> PartialEq<Dictionary<V, H2>> for Dictionary<V, H1>
where
    V: PartialEq,
    H1: KeyHasher,
    H2: KeyHasher,
{
    fn eq(&self, other: &Dictionary<V, H2>) -> bool {
        self.len() == other.len() && self.iter().all(|(key, value)| other.get(key) == Some(value))
    }
}

impl<V: Eq, H: KeyHasher> Eq for Dictionary<V, H> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DictConfig;

    #[derive(Debug, Clone, Default)]
    struct LengthHasher;

    impl KeyHasher for LengthHasher {
        fn hash(&self, key: &[u8]) -> u64 {
            key.len() as u64
        }
    }

    #[test]
    fn test_empty_equal() {
        assert_eq!(Dictionary::<i32>::new(), Dictionary::<i32>::new());
    }

    #[test]
    fn test_order_insensitive() {
        let a: Dictionary<i32> = [("x", 1), ("y", 2), ("z", 3)].into_iter().collect();
        let b: Dictionary<i32> = [("z", 3), ("x", 1), ("y", 2)].into_iter().collect();
        assert_eq!(a, b);
        assert_eq!(b, a);
    }

    #[test]
    fn test_layout_insensitive() {
        let mut a = Dictionary::new();
        for i in 0..30 {
            a.insert(&i.to_string(), i);
        }
        for i in 10..30 {
            a.remove(&i.to_string());
        }

        let config = DictConfig {
            table_initial_size: 256,
            data_initial_size: 64,
            ..DictConfig::DEFAULT
        };
        let mut b = Dictionary::with_config_and_hasher(config, LengthHasher).unwrap();
        for i in (0..10).rev() {
            b.insert(&i.to_string(), i);
        }
        assert_ne!(a.table_size(), b.table_size());
        assert!(a == b);
        assert!(b == a);
    }

    #[test]
    fn test_value_or_key_mismatch() {
        let a: Dictionary<i32> = [("x", 1), ("y", 2)].into_iter().collect();
        let b: Dictionary<i32> = [("x", 1), ("y", 3)].into_iter().collect();
        let c: Dictionary<i32> = [("x", 1), ("w", 2)].into_iter().collect();
        let d: Dictionary<i32> = [("x", 1)].into_iter().collect();
        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
        assert_ne!(d, a);
    }
}
