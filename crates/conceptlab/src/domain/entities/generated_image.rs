//! GeneratedImage - A concept with its rendered image
//!
//! Created once per request item and never mutated afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Concept;
use crate::domain::value_objects::Category;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedImage {
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
    /// True when `url` is a locally synthesized placeholder
    pub is_placeholder: bool,
    pub created_at: DateTime<Utc>,
}

impl GeneratedImage {
    fn from_concept(concept: Concept, brand: &str, category: &Category, url: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            url,
            prompt: concept.image_prompt,
            brand: brand.to_string(),
            category: category.key().to_string(),
            product_name: concept.product_name,
            innovation: concept.innovation,
            market_disruption: concept.market_disruption,
            consumer_insight: concept.consumer_insight,
            features: concept.features,
            ingredients: concept.ingredients,
            usage: concept.usage,
            price: concept.price,
            sustainability: concept.sustainability,
            is_placeholder: false,
            created_at: Utc::now(),
        }
    }

    /// Pair a concept with an image returned by the image generator
    pub fn rendered(concept: Concept, brand: &str, category: &Category, url: String) -> Self {
        Self::from_concept(concept, brand, category, url)
    }

    /// Pair a concept with a locally synthesized placeholder
    pub fn placeholder(concept: Concept, brand: &str, category: &Category, url: String) -> Self {
        Self {
            is_placeholder: true,
            ..Self::from_concept(concept, brand, category, url)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn concept() -> Concept {
        Concept {
            product_name: "XTRA PureWash smart".to_string(),
            innovation: "smart sensor technology".to_string(),
            market_disruption: "First laundry product that tracks usage".to_string(),
            consumer_insight: "Modern consumers want laundry products".to_string(),
            image_prompt: "Professional product photography".to_string(),
            features: vec!["Uses smart sensor technology".to_string()],
            ingredients: "Advanced smart sensor technology complex".to_string(),
            usage: "Use as directed".to_string(),
            price: "$19.99 - 24oz".to_string(),
            sustainability: "Recyclable".to_string(),
        }
    }

    #[test]
    fn test_serializes_camel_case() {
        let category = Category::new("laundry").unwrap();
        let image =
            GeneratedImage::rendered(concept(), "XTRA", &category, "https://x/y.png".into());
        let json = serde_json::to_value(&image).unwrap();

        assert_eq!(json["productName"], "XTRA PureWash smart");
        assert_eq!(json["prompt"], "Professional product photography");
        assert_eq!(json["category"], "laundry");
        assert_eq!(json["isPlaceholder"], false);
        assert!(json.get("createdAt").is_some());
    }

    #[test]
    fn test_ids_are_unique() {
        let category = Category::new("laundry").unwrap();
        let a = GeneratedImage::placeholder(concept(), "XTRA", &category, "data:".into());
        let b = GeneratedImage::placeholder(concept(), "XTRA", &category, "data:".into());
        assert_ne!(a.id, b.id);
        assert!(a.is_placeholder);
    }
}
