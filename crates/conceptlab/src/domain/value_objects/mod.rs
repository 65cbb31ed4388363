//! Value Objects
//!
//! Immutable value types that represent domain concepts.

mod category;

pub use category::*;
