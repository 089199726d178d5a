//! Declares the core type of the dictionary.
use crate::config::DictConfig;
use crate::hashing::RotateXorHasher;
use crate::store::DataStore;
use crate::table::IndexTable;
use odict_core::{DictError, KeyHasher};

/// Associative container mapping byte-sequence keys to values, iterated in insertion order.
///
/// Entries live in a dense record store in the order they were inserted. A sparse
/// open-addressing table, probed by double hashing, maps each key to its record. Removal
/// tombstones both the table slot and the record, and the store is compacted once too few of its
/// records are live.
///
/// # Guarantees
///
/// - Amortized O(1) insertion, lookup and removal.
/// - Iteration yields live pairs in the order their keys were most recently inserted.
///   Overwriting the value of a present key keeps its position.
///
/// # Examples
///
/// ```rust
/// use odict::Dictionary;
///
/// let mut stock = Dictionary::new();
/// stock.insert("apples", 3);
/// stock.insert("pears", 5);
/// stock.insert("plums", 0);
/// stock.remove("apples");
/// stock.insert("apples", 7);
///
/// assert_eq!(stock.len(), 3);
/// assert_eq!(stock["pears"], 5);
/// assert_eq!(stock.to_string(), "pears : 5\nplums : 0\napples : 7\n");
/// ```
pub struct Dictionary<V, H: KeyHasher = RotateXorHasher> {
    pub(crate) config: DictConfig,
    pub(crate) hasher: H,
    pub(crate) table: IndexTable,
    pub(crate) store: DataStore<V>,
}

/// Unwraps the result of a growth step. The dictionary cannot keep its invariants without the
/// requested capacity, so failures are fatal.
#[track_caller]
#[inline]
pub(crate) fn or_abort<T>(result: Result<T, DictError>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{err}"),
    }
}
