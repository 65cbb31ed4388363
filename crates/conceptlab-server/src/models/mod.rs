//! ConceptLab Data Models
//!
//! - Generate: concept generation request/response
//! - Health: service status
//! - Error: JSON error body

mod error;
mod generate;
mod health;

pub use error::*;
pub use generate::*;
pub use health::*;
