/// Hasher for byte-sequence keys.
///
/// Differs from [`core::hash::Hasher`] in the way that it is specific to byte-sequence keys
/// and produces the whole 64-bit code in a single call, without the streaming
/// `write`/`finish` protocol.
///
/// The code is cached next to each record, so implementations must be deterministic: the same
/// key must always produce the same code for the lifetime of a dictionary.
pub trait KeyHasher
where
    Self: Clone + Default,
{
    /// Hash the given `key`.
    fn hash(&self, key: &[u8]) -> u64;
}
