//! Insertion-ordered dictionary with byte-sequence keys.
//!
//! [`Dictionary`] keeps its pairs in a dense record store in insertion order and locates them
//! through a sparse open-addressing index table probed by double hashing. See [`DictConfig`]
//! for the growth and compaction policy.
pub mod config;
pub mod dict;
pub mod hashing;
mod store;
mod table;

pub use config::DictConfig;
pub use dict::{Diagnostic, Dictionary, IntoIter, Iter, Keys, Values};
pub use hashing::RotateXorHasher;
pub use odict_core::{DictError, KeyHasher, Map};
