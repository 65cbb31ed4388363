//! ConceptLab Domain Library
//!
//! Core domain types and interfaces for generating product innovation concepts.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (Concept, GeneratedImage)
//!   - `value_objects/`: Immutable value types (Category, ProductLine)
//!   - `services/`: Catalog tables, concept templating, placeholder images
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `services/`: Image generation and randomness
//!
//! # Usage
//!
//! ```rust,ignore
//! use conceptlab::{generate_concept, select_brand, Category, ThreadRandom};
//!
//! let random = ThreadRandom;
//! let category = Category::new("laundry")?;
//! let brand = select_brand(&category, None, &random);
//! let concept = generate_concept(&category, &brand, &random);
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    catalog, generate_concept, is_placeholder_url, placeholder_image_url, resolve_tool_image,
    select_brand, tool_image_names, Category, Concept, DomainError, GeneratedImage, ImageVariant,
    Innovation, ProductLine, DEFAULT_BRAND,
};
pub use ports::{
    choose, ImageGenerator, ImageOptions, RandomSource, ScriptedRandom, SeededRandom, ThreadRandom,
};
