//! ConceptLab API Client

use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use uuid::Uuid;

/// Error text the server uses when its image key is missing
const NOT_CONFIGURED: &str = "OpenAI API not configured";

/// Failures surfaced to the user, one variant per distinguishable cause
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("The OpenAI API key is not configured. Please check server settings.")]
    NotConfigured,

    #[error("{}", server_message(.details))]
    Server { status: u16, details: Option<String> },

    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("The request timed out. Generation may still be running on the server; please try again.")]
    Timeout,

    #[error("Cannot connect to the server. Please check if the API is running. ({0})")]
    Network(String),

    #[error("Unexpected response from server: {0}")]
    Decode(String),
}

fn server_message(details: &Option<String>) -> String {
    match details {
        Some(details) => details.clone(),
        None => "Server error. Please check the server logs for details.".to_string(),
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ClientError::Timeout
        } else if err.is_decode() {
            ClientError::Decode(err.to_string())
        } else {
            ClientError::Network(err.to_string())
        }
    }
}

/// API Client for ConceptLab
pub struct ConceptClient {
    client: Client,
    base_url: String,
}

// ============================================
// API Request/Response Types
// ============================================

#[derive(Debug, Clone, Serialize)]
pub struct GenerateParams {
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteImage {
    pub id: Uuid,
    pub url: String,
    #[serde(default)]
    pub prompt: String,
    pub brand: Option<String>,
    pub product_name: Option<String>,
    pub innovation: Option<String>,
    pub market_disruption: Option<String>,
    pub consumer_insight: Option<String>,
    pub price: Option<String>,
    #[serde(default)]
    pub is_placeholder: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub images: Vec<RemoteImage>,
    pub session_id: String,
    pub total_generated: usize,
}

#[derive(Debug, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
    pub version: Option<String>,
    pub env: Option<HealthEnv>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthEnv {
    #[serde(rename = "hasOpenAIKey")]
    pub has_openai_key: bool,
    pub key_prefix: String,
    pub image_generation: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: Option<String>,
    details: Option<String>,
}

impl ConceptClient {
    /// Create a new API client
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClientError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check the service is up and how it is configured
    pub async fn health(&self) -> Result<HealthResponse, ClientError> {
        let url = format!("{}/api/health", self.base_url);
        let resp = self.client.get(&url).send().await?;
        let resp = check_status(resp).await?;
        Ok(resp.json().await?)
    }

    /// Request concepts for a category
    pub async fn generate(&self, params: &GenerateParams) -> Result<GenerateResponse, ClientError> {
        let url = format!("{}/api/generate", self.base_url);
        tracing::debug!("POST {} {:?}", url, params);

        let resp = self.client.post(&url).json(params).send().await?;
        let resp = check_status(resp).await?;
        let body: GenerateResponse = resp.json().await?;

        tracing::debug!(
            "Received {} image(s) for session {}",
            body.total_generated,
            body.session_id
        );
        Ok(body)
    }
}

/// Translate non-success responses into [`ClientError`]
async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let text = resp.text().await.unwrap_or_default();
    let body: Option<ErrorResponse> = serde_json::from_str(&text).ok();
    let (error, details) = match body {
        Some(b) => (b.error, b.details),
        None => (None, None),
    };

    tracing::debug!("API error ({}): {}", status, text);
    Err(classify(status, error, details, text))
}

fn classify(
    status: StatusCode,
    error: Option<String>,
    details: Option<String>,
    raw: String,
) -> ClientError {
    if status.is_server_error() {
        if error.as_deref() == Some(NOT_CONFIGURED) {
            return ClientError::NotConfigured;
        }
        return ClientError::Server {
            status: status.as_u16(),
            details: details.or(error),
        };
    }

    let message = error
        .or(details)
        .unwrap_or_else(|| if raw.is_empty() { status.to_string() } else { raw });
    ClientError::Rejected {
        status: status.as_u16(),
        message,
    }
}
