//! OpenAI Image Generator
//!
//! Calls the `/v1/images/generations` endpoint with reqwest.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use conceptlab::{DomainError, ImageGenerator, ImageOptions};

/// OpenAI implementation of ImageGenerator
pub struct OpenAiImageGenerator {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

#[derive(Serialize)]
struct ImageGenerationRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    n: u8,
    size: &'a str,
    quality: &'a str,
    style: &'a str,
}

#[derive(Deserialize)]
struct ImageGenerationResponse {
    #[serde(default)]
    data: Vec<ImageData>,
}

#[derive(Deserialize)]
struct ImageData {
    url: Option<String>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

impl OpenAiImageGenerator {
    /// Build a generator with one pooled HTTP client.
    ///
    /// `request_timeout` bounds the whole HTTP exchange; callers may race a
    /// shorter deadline on top of it.
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
        request_timeout: Duration,
    ) -> Result<Self, DomainError> {
        let client = Client::builder()
            .timeout(request_timeout)
            .user_agent(concat!("conceptlab/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| DomainError::Configuration(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            model: model.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl ImageGenerator for OpenAiImageGenerator {
    async fn generate(&self, prompt: &str, options: &ImageOptions) -> Result<String, DomainError> {
        let request = ImageGenerationRequest {
            model: &self.model,
            prompt,
            n: 1,
            size: &options.size,
            quality: &options.quality,
            style: &options.style,
        };

        let response = self
            .client
            .post(format!("{}/v1/images/generations", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| DomainError::ExternalService(format!("Image request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            let message = serde_json::from_str::<ErrorEnvelope>(&body)
                .map(|envelope| envelope.error.message)
                .unwrap_or(body);
            return Err(DomainError::ExternalService(format!(
                "OpenAI API error ({}): {}",
                status.as_u16(),
                message
            )));
        }

        let payload: ImageGenerationResponse = response
            .json()
            .await
            .map_err(|e| {
                DomainError::ExternalService(format!("Failed to parse image response: {e}"))
            })?;

        payload
            .data
            .into_iter()
            .next()
            .and_then(|d| d.url)
            .ok_or_else(|| DomainError::ExternalService("No image returned".to_string()))
    }

    fn provider_name(&self) -> &str {
        "openai"
    }

    fn model_id(&self) -> &str {
        &self.model
    }
}
