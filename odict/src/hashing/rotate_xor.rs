//! Implements the default [`KeyHasher`]: a rotate-xor hash over the key bytes.
use odict_core::KeyHasher;

/// Hasher that folds every byte into a 64-bit accumulator and rotates it left by 5 bits.
///
/// Not cryptographically secure, only meant to spread keys well enough for double hashing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RotateXorHasher;

impl RotateXorHasher {
    /// Initial accumulator value.
    pub const SEED: u64 = 0x2096_DB9D_4D43_C94E;
    const ROTATION: u32 = 5;

    /// Hash `key` in a const context.
    #[inline]
    pub const fn hash_const(key: &[u8]) -> u64 {
        let mut code = Self::SEED;
        let mut i = 0;
        while i < key.len() {
            code ^= key[i] as u64;
            code = code.rotate_left(Self::ROTATION);
            i += 1;
        }
        code
    }
}

impl KeyHasher for RotateXorHasher {
    #[inline]
    fn hash(&self, key: &[u8]) -> u64 {
        key.iter().fold(Self::SEED, |code, &byte| {
            (code ^ byte as u64).rotate_left(Self::ROTATION)
        })
    }
}
