//! Domain Services
//!
//! Stateless logic over the catalog tables. Randomness is always injected.

pub mod catalog;
mod concept;
mod placeholder;
mod tool_images;

pub use catalog::{Innovation, DEFAULT_BRAND};
pub use concept::*;
pub use placeholder::*;
pub use tool_images::*;
