//! Generate - Concept generation DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;

use conceptlab::GeneratedImage;

/// Generate request. `category` is optional here so that a missing value can
/// be reported as a validation error rather than a decode failure.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct GenerateRequest {
    #[schema(example = "laundry")]
    pub category: Option<String>,
    #[schema(example = "OXICLEAN")]
    pub brand: Option<String>,
    /// Any JSON value is accepted; only integers are honoured
    #[schema(value_type = Option<i64>, example = 1)]
    pub count: Option<Value>,
}

impl GenerateRequest {
    /// Requested count when it is a JSON integer, `None` for anything else.
    /// Integers beyond `i64` saturate.
    pub fn requested_count(&self) -> Option<i64> {
        match self.count.as_ref()? {
            Value::Number(n) => n.as_i64().or_else(|| n.as_u64().map(|_| i64::MAX)),
            _ => None,
        }
    }
}

/// One generated concept with its image
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedImageResponse {
    pub id: Uuid,
    pub url: String,
    pub prompt: String,
    pub brand: String,
    pub category: String,
    pub product_name: String,
    pub innovation: String,
    pub market_disruption: String,
    pub consumer_insight: String,
    pub features: Vec<String>,
    pub ingredients: String,
    pub usage: String,
    pub price: String,
    pub sustainability: String,
    pub is_placeholder: bool,
    pub created_at: DateTime<Utc>,
}

impl From<GeneratedImage> for GeneratedImageResponse {
    fn from(image: GeneratedImage) -> Self {
        Self {
            id: image.id,
            url: image.url,
            prompt: image.prompt,
            brand: image.brand,
            category: image.category,
            product_name: image.product_name,
            innovation: image.innovation,
            market_disruption: image.market_disruption,
            consumer_insight: image.consumer_insight,
            features: image.features,
            ingredients: image.ingredients,
            usage: image.usage,
            price: image.price,
            sustainability: image.sustainability,
            is_placeholder: image.is_placeholder,
            created_at: image.created_at,
        }
    }
}

/// Generate response
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub images: Vec<GeneratedImageResponse>,
    pub session_id: String,
    pub total_generated: usize,
}
