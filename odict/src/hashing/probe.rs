//! Double-hashing probe sequence over a power-of-two table.

/// Returns the `i`-th slot of the probe sequence for `code` in a table of `table_size` slots.
///
/// `h1 = code mod table_size` and `h2 = 2 * (code mod table_size / 2) + 1`. Since `h2` is odd
/// it is coprime to the table size, so `i` in `0..table_size` visits every slot exactly once.
///
/// `table_size` must be a power of two and at least 2.
#[inline]
pub const fn probe(code: u64, table_size: usize, i: usize) -> usize {
    debug_assert!(
        table_size >= 2 && table_size.is_power_of_two(),
        r#""table_size" must be a power of two >= 2"#
    );
    let mask = table_size as u64 - 1;
    let h1 = code & mask;
    let h2 = step(code, table_size);
    (h1.wrapping_add((i as u64).wrapping_mul(h2)) & mask) as usize
}

/// The odd stride of the probe sequence.
#[inline]
const fn step(code: u64, table_size: usize) -> u64 {
    2 * (code & (table_size as u64 / 2 - 1)) + 1
}

/// Iterator over the full probe sequence of a hash code.
///
/// Yields exactly `table_size` slots, each one once, in the same order as [`probe`] for
/// `i = 0, 1, ...`.
#[derive(Debug, Clone)]
pub struct ProbeSequence {
    slot: u64,
    step: u64,
    mask: u64,
    remaining: usize,
}

impl ProbeSequence {
    pub fn new(code: u64, table_size: usize) -> Self {
        debug_assert!(
            table_size >= 2 && table_size.is_power_of_two(),
            r#""table_size" must be a power of two >= 2"#
        );
        let mask = table_size as u64 - 1;
        Self {
            slot: code & mask,
            step: step(code, table_size),
            mask,
            remaining: table_size,
        }
    }
}

impl Iterator for ProbeSequence {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let slot = self.slot;
        self.slot = (self.slot + self.step) & self.mask;
        Some(slot as usize)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for ProbeSequence {}
