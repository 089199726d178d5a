//! Insertion-ordered dictionary over a sparse index table and a dense record store.
mod core;
pub use self::core::*;
mod access;
mod ctors;
mod eq;
mod fmt;
pub use fmt::*;
mod iter;
pub use iter::*;
mod map;
mod mutation;
