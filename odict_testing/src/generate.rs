//! Data generation utilities useful for testing.
use rand::distr::Alphanumeric;
use rand::Rng;
use std::collections::HashSet;
use std::hash::Hash;

/// Provides capabilities to generate random values of the implementer-type.
pub trait Generate<R: Rng>: Sized {
    /// Parameters for data-generation specific for the type.
    type GenerateParams: Default;

    /// Generates a single random value of the type.
    fn generate(rng: &mut R, params: &Self::GenerateParams) -> Self;

    /// Generates **unique** random values of the type, in generation order.
    ///
    /// The parameters must allow for at least `size` distinct values.
    fn generate_many(rng: &mut R, params: &Self::GenerateParams, size: usize) -> Vec<Self>
    where
        Self: Hash + Eq + Clone,
    {
        let mut seen = HashSet::with_capacity(size);
        let mut values = Vec::with_capacity(size);
        while values.len() < size {
            let value = Self::generate(rng, params);
            if seen.insert(value.clone()) {
                values.push(value);
            }
        }
        values
    }
}

/// Parameters for [`Generate`] implementations that generate numeric values.
pub struct NumParams<T> {
    min: T,
    max: T,
}

impl<T> NumParams<T> {
    /// Creates a new instance of [`NumParams`] with the specified minimum and maximum values.
    pub fn new(min: T, max: T) -> Self {
        Self { min, max }
    }
}

macro_rules! impl_generate_num {
    ($($type:ty),*) => {
        $(
            impl Default for NumParams<$type> {
                fn default() -> Self {
                    Self { min: <$type>::MIN, max: <$type>::MAX }
                }
            }

            impl<R: Rng> Generate<R> for $type {
                type GenerateParams = NumParams<$type>;

                fn generate(rng: &mut R, params: &Self::GenerateParams) -> Self {
                    rng.random_range(params.min..=params.max)
                }
            }
        )*
    };
}

impl_generate_num!(u8, u32, u64, i64);

/// Characters a generated string is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alphabet {
    Alphanumeric,
    /// Only the given ASCII bytes. A short alphabet yields many keys sharing long prefixes.
    Ascii(&'static [u8]),
}

/// Parameters for [`Generate`] implementations that generate strings.
pub struct StringParams {
    min_length: usize,
    max_length: usize,
    alphabet: Alphabet,
}

impl StringParams {
    pub fn new(min_length: usize, max_length: usize) -> Self {
        Self {
            min_length,
            max_length,
            alphabet: Alphabet::Alphanumeric,
        }
    }

    pub fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        debug_assert!(
            !matches!(alphabet, Alphabet::Ascii(chars) if chars.is_empty()),
            r#""alphabet" must not be empty"#
        );
        self.alphabet = alphabet;
        self
    }
}

impl Default for StringParams {
    fn default() -> Self {
        Self::new(1, 32)
    }
}

impl<R: Rng> Generate<R> for String {
    type GenerateParams = StringParams;

    fn generate(rng: &mut R, params: &Self::GenerateParams) -> Self {
        let length = rng.random_range(params.min_length..=params.max_length);
        match params.alphabet {
            Alphabet::Alphanumeric => rng
                .sample_iter(&Alphanumeric)
                .take(length)
                .map(char::from)
                .collect(),
            Alphabet::Ascii(chars) => (0..length)
                .map(|_| char::from(chars[rng.random_range(0..chars.len())]))
                .collect(),
        }
    }
}
