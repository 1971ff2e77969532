//! Enums, object classes and records of the pool API.

#[macro_use]
mod macros;

mod classes;
mod enums;

pub use classes::*;
pub use enums::*;
