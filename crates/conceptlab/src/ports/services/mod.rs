//! Service Ports
//!
//! Abstract interfaces for external services.

mod image_generator;
mod random;

pub use image_generator::*;
pub use random::*;
