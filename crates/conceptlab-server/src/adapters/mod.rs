//! Infrastructure Adapters
//!
//! Concrete implementations of domain ports.

pub mod openai_images;

pub use openai_images::OpenAiImageGenerator;
