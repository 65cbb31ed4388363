//! Health - Service status

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthCheck {
    pub status: String,
    pub message: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
    pub env: HealthEnv,
}

/// Configuration summary; never exposes more than the key prefix
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthEnv {
    #[serde(rename = "hasOpenAIKey")]
    pub has_openai_key: bool,
    pub key_prefix: String,
    /// `remote`, `placeholder` or `unconfigured`
    pub image_generation: String,
}
