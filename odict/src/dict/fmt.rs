//! Printing of [`Dictionary`] contents and internal state.
use crate::dict::Dictionary;
use crate::store::Record;
use crate::table::Slot;
use odict_core::KeyHasher;
use std::borrow::Cow;
use std::fmt::{self, Debug, Display, Formatter};
use std::io;

#[inline]
fn display_key(key: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(key)
}

/// One `key : value` line per pair, in insertion order.
impl<V: Display, H: KeyHasher> Display for Dictionary<V, H> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (key, value) in self {
            writeln!(f, "{} : {}", display_key(key), value)?;
        }
        Ok(())
    }
}

impl<V: Debug, H: KeyHasher> Debug for Dictionary<V, H> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|(key, value)| (display_key(key), value)))
            .finish()
    }
}

impl<V, H: KeyHasher> Dictionary<V, H> {
    /// Writes one `key : value` line per pair to `out`, in insertion order.
    pub fn print_to<W: io::Write>(&self, out: &mut W) -> io::Result<()>
    where
        V: Display,
    {
        write!(out, "{self}")
    }

    /// Dump of the record store and the index table along with their sizing parameters.
    pub fn diagnostic(&self) -> Diagnostic<'_, V, H> {
        Diagnostic { dict: self }
    }

    /// Writes [`Dictionary::diagnostic`] to `out`.
    pub fn print_diagnostic_to<W: io::Write>(&self, out: &mut W) -> io::Result<()>
    where
        V: Debug,
    {
        write!(out, "{}", self.diagnostic())
    }
}

/// Internal state of a [`Dictionary`], created by [`Dictionary::diagnostic`].
///
/// Lists every record of the store, then every non-empty slot of the table.
pub struct Diagnostic<'a, V, H: KeyHasher> {
    dict: &'a Dictionary<V, H>,
}

impl<V: Debug, H: KeyHasher> Display for Diagnostic<'_, V, H> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let dict = self.dict;
        let config = &dict.config;
        let store = &dict.store;

        writeln!(
            f,
            "data: capacity={} next={} pairs={} deleted={} density={:.3} threshold={}",
            store.capacity(),
            store.next(),
            store.live(),
            store.deleted(),
            store.density(),
            config.data_density,
        )?;
        for (index, record) in store.records().iter().enumerate() {
            match record {
                Record::Sentinel => writeln!(f, "  {index}: <sentinel>")?,
                Record::Tombstone => writeln!(f, "  {index}: <deleted>")?,
                Record::Live(entry) => writeln!(
                    f,
                    "  {index}: {:?} : {:?} (code {:#018x})",
                    display_key(&entry.key),
                    entry.value,
                    entry.code,
                )?,
            }
        }

        let slots = dict.table.slots();
        let empty = slots.iter().filter(|&&slot| slot == Slot::Empty).count();
        writeln!(
            f,
            "table: size={} empty={} load_factor={:.3} threshold={}",
            slots.len(),
            empty,
            dict.load_factor(),
            config.table_load_factor,
        )?;
        for (slot, state) in slots.iter().enumerate() {
            match state {
                Slot::Empty => {}
                Slot::Deleted => writeln!(f, "  {slot}: <deleted>")?,
                Slot::Occupied(index) => writeln!(f, "  {slot}: -> {index}")?,
            }
        }
        Ok(())
    }
}
