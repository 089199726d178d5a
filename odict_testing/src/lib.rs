//! Testing utilities shared by the dictionary crates.
pub mod generate;
pub use generate::*;

pub mod model;
pub use model::*;

pub mod map;
pub use map::*;

#[doc(hidden)]
pub use compose_idents;
