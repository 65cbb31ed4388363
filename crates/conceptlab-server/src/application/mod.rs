//! Application Layer
//!
//! Use cases that orchestrate domain logic and ports.

mod concept_service;

pub use concept_service::*;
