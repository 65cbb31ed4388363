//! Concept Application Service (Use Case)
//!
//! Turns a generate request into rendered concepts: brand selection,
//! templating, then one image per concept with a placeholder fallback.

use std::sync::Arc;
use std::time::Duration;

use conceptlab::{
    generate_concept, placeholder_image_url, select_brand, Category, Concept, DomainError,
    GeneratedImage, ImageGenerator, ImageOptions, RandomSource,
};

/// Where images come from
#[derive(Clone)]
pub enum ImageBackend {
    /// Remote generator, placeholder on timeout or failure
    Remote(Arc<dyn ImageGenerator>),
    /// Remote generation switched off; placeholders only
    PlaceholderOnly,
    /// Remote generation switched on but no API key was provided
    Unconfigured,
}

impl ImageBackend {
    pub fn label(&self) -> &'static str {
        match self {
            ImageBackend::Remote(_) => "remote",
            ImageBackend::PlaceholderOnly => "placeholder",
            ImageBackend::Unconfigured => "unconfigured",
        }
    }
}

/// Validated input for one generate call
#[derive(Debug, Clone)]
pub struct GenerateCommand {
    pub category: Category,
    pub brand: Option<String>,
    pub count: Option<i64>,
}

/// Application service for concept generation
pub struct ConceptService {
    images: ImageBackend,
    random: Arc<dyn RandomSource>,
    image_timeout: Duration,
    image_options: ImageOptions,
    max_batch_size: usize,
}

impl ConceptService {
    pub fn new(
        images: ImageBackend,
        random: Arc<dyn RandomSource>,
        image_timeout: Duration,
        max_batch_size: usize,
    ) -> Self {
        Self {
            images,
            random,
            image_timeout,
            image_options: ImageOptions::default(),
            max_batch_size: max_batch_size.max(1),
        }
    }

    pub fn backend(&self) -> &ImageBackend {
        &self.images
    }

    /// Number of concepts to produce for a requested count
    pub fn batch_size(&self, requested: Option<i64>) -> usize {
        match requested {
            Some(n) if n > 1 => usize::try_from(n)
                .unwrap_or(usize::MAX)
                .min(self.max_batch_size),
            _ => 1,
        }
    }

    /// Generate concepts with images.
    ///
    /// Upstream failures never escape: the affected item gets a placeholder.
    pub async fn generate(
        &self,
        command: &GenerateCommand,
    ) -> Result<Vec<GeneratedImage>, DomainError> {
        if let ImageBackend::Unconfigured = self.images {
            return Err(DomainError::Configuration(
                "Please ensure OPENAI_API_KEY is set in environment variables".to_string(),
            ));
        }

        let total = self.batch_size(command.count);
        let mut images = Vec::with_capacity(total);

        for index in 0..total {
            let brand = select_brand(
                &command.category,
                command.brand.as_deref(),
                self.random.as_ref(),
            );
            let concept = generate_concept(&command.category, &brand, self.random.as_ref());

            tracing::debug!(
                "Concept {}/{}: {} ({})",
                index + 1,
                total,
                concept.product_name,
                concept.innovation
            );

            images.push(self.render(concept, &brand, &command.category).await);
        }

        Ok(images)
    }

    async fn render(&self, concept: Concept, brand: &str, category: &Category) -> GeneratedImage {
        let generator = match &self.images {
            ImageBackend::Remote(generator) => generator,
            _ => return self.placeholder(concept, brand, category),
        };

        match self.request_image(generator.as_ref(), &concept.image_prompt).await {
            Ok(url) => GeneratedImage::rendered(concept, brand, category, url),
            Err(e) => {
                tracing::warn!(
                    "⚠️  Image generation via {} ({}) failed, using placeholder: {}",
                    generator.provider_name(),
                    generator.model_id(),
                    e
                );
                self.placeholder(concept, brand, category)
            }
        }
    }

    async fn request_image(
        &self,
        generator: &dyn ImageGenerator,
        prompt: &str,
    ) -> Result<String, DomainError> {
        tokio::time::timeout(self.image_timeout, generator.generate(prompt, &self.image_options))
            .await
            .map_err(|_| DomainError::Timeout(self.image_timeout))?
    }

    fn placeholder(&self, concept: Concept, brand: &str, category: &Category) -> GeneratedImage {
        let url = placeholder_image_url(&concept.product_name, &concept.innovation);
        GeneratedImage::placeholder(concept, brand, category, url)
    }
}
