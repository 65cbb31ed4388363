//! Ports (Interfaces)
//!
//! Abstract interfaces that define how the domain layer
//! interacts with external systems.
//!
//! Network-backed implementations live in the server crate.

pub mod services;

// Re-exports
pub use services::*;
