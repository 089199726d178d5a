//! Utilities for testing map implementations.
use crate::generate::{Alphabet, Generate, StringParams};
use crate::model::OrderedModel;
use odict_core::Map;
use rand::Rng;
use std::fmt::Debug;

/// Asserts that `map` holds exactly the pairs of `model`, in the same order.
pub fn assert_same_pairs<V, M>(map: &M, model: &OrderedModel<V>)
where
    V: PartialEq + Debug,
    M: Map<V>,
{
    assert_eq!(map.len(), model.len());
    assert_eq!(map.is_empty(), model.is_empty());
    let actual: Vec<(&[u8], &V)> = map.iter().collect();
    let expected: Vec<(&[u8], &V)> = model.iter().collect();
    assert_eq!(actual, expected);
}

/// Generates unique string keys for map tests.
pub fn generate_keys<R: Rng>(rng: &mut R, size: usize, params: &StringParams) -> Vec<String> {
    String::generate_many(rng, params, size)
}

/// Tests retrieval of inserted keys and absence of the others.
pub fn test_insert_get<R, V, M>(rng: &mut R, mut map: M, size: usize)
where
    R: Rng,
    V: Generate<R> + Clone + PartialEq + Debug,
    M: Map<V>,
{
    let keys = generate_keys(rng, size * 2, &StringParams::default());
    let (present, absent) = keys.split_at(size);
    let mut model = OrderedModel::new();

    for key in present {
        let value = V::generate(rng, &V::GenerateParams::default());
        assert_eq!(map.insert(key.as_bytes(), value.clone()), None, "Key: {:?}", key);
        model.insert(key.as_bytes(), value);
    }

    for key in present {
        assert!(map.contains_key(key.as_bytes()), "Key: {:?}", key);
        assert_eq!(map.get(key.as_bytes()), model.get(key.as_bytes()), "Key: {:?}", key);
    }
    for key in absent {
        assert!(!map.contains_key(key.as_bytes()), "Key: {:?}", key);
        assert_eq!(map.get(key.as_bytes()), None, "Key: {:?}", key);
    }
    assert_same_pairs(&map, &model);
}

/// Runs a random script of inserts, overwrites, removals and lookups against `map` and an
/// [`OrderedModel`], comparing every result.
///
/// Keys are drawn from a pool of `key_space` keys over a two-letter alphabet, so most keys share
/// long prefixes and many operations hit keys that were removed before.
pub fn test_model_script<R, V, M>(rng: &mut R, mut map: M, num_ops: usize, key_space: usize)
where
    R: Rng,
    V: Generate<R> + Clone + PartialEq + Debug,
    M: Map<V>,
{
    let params = StringParams::new(0, 16).with_alphabet(Alphabet::Ascii(b"ab"));
    let keys = generate_keys(rng, key_space, &params);
    let mut model = OrderedModel::new();

    for step in 0..num_ops {
        let key = keys[rng.random_range(0..keys.len())].as_bytes();
        match rng.random_range(0..10) {
            0..=4 => {
                let value = V::generate(rng, &V::GenerateParams::default());
                assert_eq!(
                    map.insert(key, value.clone()),
                    model.insert(key, value),
                    "Step {}: insert {:?}",
                    step,
                    key
                );
            }
            5..=7 => {
                assert_eq!(
                    map.remove(key),
                    model.remove(key),
                    "Step {}: remove {:?}",
                    step,
                    key
                );
            }
            _ => {
                assert_eq!(
                    map.get(key),
                    model.get(key),
                    "Step {}: get {:?}",
                    step,
                    key
                );
            }
        }
        assert!(map.load_factor() < 1.0, "Step {}", step);
        assert!(map.density() > 0.0 && map.density() <= 1.0, "Step {}", step);
        if step % 64 == 0 {
            assert_same_pairs(&map, &model);
        }
    }
    assert_same_pairs(&map, &model);

    map.clear();
    model.clear();
    assert_same_pairs(&map, &model);
}

/// Inserts `size` keys, removes every third one and re-inserts half of the removed ones, checking
/// all keys after each phase.
pub fn test_grow_and_shrink<R, V, M>(rng: &mut R, mut map: M, size: usize)
where
    R: Rng,
    V: Generate<R> + Clone + PartialEq + Debug,
    M: Map<V>,
{
    let keys = generate_keys(rng, size, &StringParams::default());
    let mut model = OrderedModel::new();

    for key in &keys {
        let value = V::generate(rng, &V::GenerateParams::default());
        map.insert(key.as_bytes(), value.clone());
        model.insert(key.as_bytes(), value);
    }
    assert_same_pairs(&map, &model);

    for key in keys.iter().step_by(3) {
        assert_eq!(map.remove(key.as_bytes()), model.remove(key.as_bytes()));
        assert!(!map.contains_key(key.as_bytes()), "Key: {:?}", key);
    }
    assert_same_pairs(&map, &model);

    for key in keys.iter().step_by(6) {
        let value = V::generate(rng, &V::GenerateParams::default());
        assert_eq!(map.insert(key.as_bytes(), value.clone()), None);
        model.insert(key.as_bytes(), value);
    }
    assert_same_pairs(&map, &model);
    for key in &keys {
        assert_eq!(map.get(key.as_bytes()), model.get(key.as_bytes()), "Key: {:?}", key);
    }
}

/// Tests that a copy equals its source and that mutating it leaves the source untouched.
pub fn test_copy<R, V, M>(rng: &mut R, mut map: M, size: usize)
where
    R: Rng,
    V: Generate<R> + Clone + PartialEq + Debug,
    M: Map<V> + Clone + PartialEq,
{
    let keys = generate_keys(rng, size, &StringParams::default());
    let mut model = OrderedModel::new();
    for key in &keys {
        let value = V::generate(rng, &V::GenerateParams::default());
        map.insert(key.as_bytes(), value.clone());
        model.insert(key.as_bytes(), value);
    }
    for key in keys.iter().step_by(4) {
        map.remove(key.as_bytes());
        model.remove(key.as_bytes());
    }

    let mut copy = map.clone();
    assert!(copy == map);
    assert_same_pairs(&copy, &model);

    for key in keys.iter().skip(1).step_by(4) {
        copy.remove(key.as_bytes());
    }
    copy.insert(b"only in the copy", V::generate(rng, &V::GenerateParams::default()));

    assert!(copy != map);
    assert!(!map.contains_key(b"only in the copy"));
    assert_same_pairs(&map, &model);
}

/// Generates the standard test-suite for a map type and a set of value types.
///
/// `$factory` must be a generic function returning an empty map for any value type.
#[macro_export]
macro_rules! generate_map_value_tests {
    ($Map:tt, $factory:expr, $($V:ident),*) => {
        $(
            $crate::compose_idents::compose_idents!(
                test_insert_get_fn = [test_insert_get_, $V],
                test_model_script_fn = [test_model_script_, $V],
                test_grow_and_shrink_fn = [test_grow_and_shrink_, $V],
                test_copy_fn = [test_copy_, $V],
                {
                    #[test]
                    #[allow(non_snake_case)]
                    fn test_insert_get_fn() {
                        use rand::SeedableRng;
                        use rand_chacha::ChaCha20Rng;

                        let mut rng = ChaCha20Rng::from_os_rng();
                        let map: $Map<$V> = $factory();
                        $crate::test_insert_get::<_, $V, _>(&mut rng, map, 999);
                    }

                    #[test]
                    #[allow(non_snake_case)]
                    fn test_model_script_fn() {
                        use rand::SeedableRng;
                        use rand_chacha::ChaCha20Rng;

                        for seed in 0..8 {
                            let mut rng = ChaCha20Rng::seed_from_u64(seed);
                            let map: $Map<$V> = $factory();
                            $crate::test_model_script::<_, $V, _>(&mut rng, map, 3000, 200);
                        }
                    }

                    #[test]
                    #[allow(non_snake_case)]
                    fn test_grow_and_shrink_fn() {
                        use rand::SeedableRng;
                        use rand_chacha::ChaCha20Rng;

                        let mut rng = ChaCha20Rng::from_os_rng();
                        let map: $Map<$V> = $factory();
                        $crate::test_grow_and_shrink::<_, $V, _>(&mut rng, map, 2000);
                    }

                    #[test]
                    #[allow(non_snake_case)]
                    fn test_copy_fn() {
                        use rand::SeedableRng;
                        use rand_chacha::ChaCha20Rng;

                        let mut rng = ChaCha20Rng::from_os_rng();
                        let map: $Map<$V> = $factory();
                        $crate::test_copy::<_, $V, _>(&mut rng, map, 300);
                    }
                }
            );
        )*
    };
}

/// Generates the standard test-suite for a map type over the usual value types.
#[macro_export]
macro_rules! generate_map_tests {
    ($Map:tt, $factory:expr) => {
        $crate::generate_map_value_tests!($Map, $factory, u8, u32, i64, String);
    };
}
