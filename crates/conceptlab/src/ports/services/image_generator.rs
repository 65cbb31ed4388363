//! Image Generator Port
//!
//! Abstract interface for text-to-image generation. The server wires an
//! OpenAI-backed implementation; tests substitute in-memory fakes.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Rendering options passed through to the provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageOptions {
    /// Output size, e.g. `1024x1024`
    pub size: String,
    /// Provider quality tier
    pub quality: String,
    /// Provider style hint (`natural` renders faster than `vivid`)
    pub style: String,
}

impl Default for ImageOptions {
    fn default() -> Self {
        Self {
            size: "1024x1024".to_string(),
            quality: "standard".to_string(),
            style: "natural".to_string(),
        }
    }
}

/// Image generation interface
///
/// # Example
///
/// ```rust,ignore
/// use conceptlab::ports::ImageGenerator;
///
/// struct OpenAiImageGenerator { /* ... */ }
///
/// #[async_trait]
/// impl ImageGenerator for OpenAiImageGenerator {
///     async fn generate(&self, prompt: &str, options: &ImageOptions)
///         -> Result<String, DomainError> {
///         // Call the images endpoint and return the hosted URL
///     }
///     // ...
/// }
/// ```
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Render one image for the prompt and return its URL
    async fn generate(&self, prompt: &str, options: &ImageOptions) -> Result<String, DomainError>;

    /// Get the provider name (e.g., "openai")
    fn provider_name(&self) -> &str;

    /// Get the model ID being used
    fn model_id(&self) -> &str;
}
