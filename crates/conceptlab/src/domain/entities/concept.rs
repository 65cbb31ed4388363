//! Concept - Templated product innovation copy

use serde::{Deserialize, Serialize};

/// Marketing-style bundle describing one fictitious product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Concept {
    pub product_name: String,
    pub innovation: String,
    pub market_disruption: String,
    pub consumer_insight: String,
    /// Prompt handed to the image generator
    pub image_prompt: String,
    pub features: Vec<String>,
    pub ingredients: String,
    pub usage: String,
    pub price: String,
    pub sustainability: String,
}
