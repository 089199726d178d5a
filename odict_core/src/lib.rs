//! Core trait and type declarations shared by the dictionary engine and its testing tools.
mod error;
pub use error::*;
mod hasher;
pub use hasher::*;
mod map;
pub use map::*;
