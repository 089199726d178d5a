//! Key hashing and the probe sequence derived from the hash code.
mod probe;
pub use probe::*;
mod rotate_xor;
pub use rotate_xor::*;
