//! Error definitions.
use std::collections::TryReserveError;
use thiserror::Error;

/// Project-wise error type.
#[derive(Error, Debug)]
pub enum DictError {
    /// The operation requires the key to be present, but it is not.
    #[error("Key {key:?} is not present in the dictionary.")]
    KeyNotFound { key: String },
    /// Computing the next size of one of the backing arrays overflowed `usize`.
    #[error("Capacity overflow while growing the dictionary.")]
    CapacityOverflow,
    /// Growing one of the backing arrays failed to acquire memory.
    #[error("Unable to allocate memory for the dictionary: {0}")]
    Allocation(#[from] TryReserveError),
    /// Might occur during construction of a dictionary from a user-supplied configuration.
    #[error("Invalid dictionary configuration: {0}")]
    InvalidConfig(String),
}

impl DictError {
    /// Builds [`DictError::KeyNotFound`] rendering the raw key bytes as (lossy) UTF-8.
    pub fn key_not_found(key: &[u8]) -> Self {
        Self::KeyNotFound {
            key: String::from_utf8_lossy(key).into_owned(),
        }
    }
}
