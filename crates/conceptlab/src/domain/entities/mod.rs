//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - Concept: templated marketing copy for a fictitious product
//! - GeneratedImage: a concept paired with its rendered image

mod concept;
mod generated_image;

pub use concept::*;
pub use generated_image::*;
