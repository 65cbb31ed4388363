//! Client-side product records built from generated images

use std::sync::Arc;

use chrono::{DateTime, Utc};
use conceptlab::{choose, ProductLine, RandomSource};
use serde::Serialize;
use uuid::Uuid;

use crate::api::RemoteImage;

/// Brand shown when neither the server nor the request named one
pub const HOUSE_BRAND: &str = "Church & Dwight";

const MAX_FEATURES: usize = 5;
const LINE_FEATURES_TAKEN: usize = 3;
const FALLBACK_STEM: &str = "Pro";

const PREFIXES: &[&str] = &[
    "Ultra", "Pro", "Max", "Elite", "Pure", "Advanced", "Smart", "Eco", "Bio",
];
const SUFFIXES: &[&str] = &["Plus", "Pro", "X", "360", "Complete", "Total", "Premium", "Elite"];

const BASE_FEATURES: &[&str] = &[
    "Dermatologist tested",
    "100% recyclable packaging",
    "Made with renewable energy",
    "Clinically proven effectiveness",
    "Safe for sensitive skin",
];

/// A concept as the studio presents it
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Uuid,
    pub image_url: String,
    pub name: String,
    pub brand: String,
    pub category: String,
    pub features: Vec<String>,
    pub sustainability_score: u8,
    pub prompt: String,
    pub created_at: DateTime<Utc>,
    pub is_placeholder: bool,
    /// Concept copy from the server, shown in the detail view
    pub concept: ConceptCopy,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConceptCopy {
    pub product_name: Option<String>,
    pub innovation: Option<String>,
    pub market_disruption: Option<String>,
    pub consumer_insight: Option<String>,
    pub price: Option<String>,
}

impl Product {
    /// The server's concept name when it sent one, otherwise the local name
    pub fn display_name(&self) -> &str {
        self.concept.product_name.as_deref().unwrap_or(&self.name)
    }
}

fn name_stems(line: Option<ProductLine>) -> &'static [&'static str] {
    match line {
        Some(ProductLine::Laundry) => &["Clean", "Fresh", "Bright", "Power", "Care"],
        Some(ProductLine::OralCare) => &["White", "Fresh", "Guard", "Pro", "Care"],
        Some(ProductLine::PersonalCare) => &["Smooth", "Glow", "Fresh", "Care", "Pure"],
        Some(ProductLine::Health) => &["Vita", "Health", "Boost", "Daily", "Complete"],
        Some(ProductLine::HomeCare) => &["Clean", "Fresh", "Shine", "Power", "Guard"],
        Some(ProductLine::PetCare) => &["Pet", "Fresh", "Care", "Control", "Guard"],
        Some(ProductLine::SexualWellness) => &["Care", "Plus", "Pro", "Comfort", "Natural"],
        None => &[],
    }
}

fn line_features(line: Option<ProductLine>) -> &'static [&'static str] {
    match line {
        Some(ProductLine::Laundry) => &[
            "Removes 99.9% of stains",
            "Works in cold water",
            "Concentrated formula - 50% less plastic",
            "HE compatible",
            "Fresh scent lasts 30 days",
        ],
        Some(ProductLine::OralCare) => &[
            "Whitens teeth in 7 days",
            "Enamel safe formula",
            "Fights bad breath for 24 hours",
            "Recommended by dentists",
            "Fluoride enhanced protection",
        ],
        Some(ProductLine::PersonalCare) => &[
            "pH balanced formula",
            "48-hour protection",
            "No white residue",
            "Aluminum-free option",
            "Infused with vitamins",
        ],
        Some(ProductLine::Health) => &[
            "Third-party tested",
            "Non-GMO verified",
            "Gluten-free formula",
            "No artificial colors",
            "Enhanced absorption",
        ],
        Some(ProductLine::HomeCare) => &[
            "Kills 99.9% of germs",
            "No harsh chemicals",
            "Safe for all surfaces",
            "Fresh scent technology",
            "Streak-free formula",
        ],
        Some(ProductLine::PetCare) => &[
            "Veterinarian approved",
            "Controls odor for 7 days",
            "Low dust formula",
            "99% dust free",
            "Natural ingredients",
        ],
        Some(ProductLine::SexualWellness) => &[
            "FDA approved",
            "Latex-free options",
            "Hypoallergenic",
            "Precision technology",
            "Discrete packaging",
        ],
        None => &[],
    }
}

/// Line-specific features (at most three) lead, shared features fill the
/// rest. Putting the shared list first would always yield only shared
/// features, since it already holds five.
pub fn product_features(category: &str) -> Vec<String> {
    let line = category.parse::<ProductLine>().ok();
    line_features(line)
        .iter()
        .take(LINE_FEATURES_TAKEN)
        .chain(BASE_FEATURES.iter())
        .take(MAX_FEATURES)
        .map(|f| f.to_string())
        .collect()
}

/// Turns server images into [`Product`]s with locally generated names and scores
#[derive(Clone)]
pub struct ProductShaper {
    random: Arc<dyn RandomSource>,
}

impl ProductShaper {
    pub fn new(random: Arc<dyn RandomSource>) -> Self {
        Self { random }
    }

    /// `{brand} {prefix} {stem}`, with a suffix half the time
    pub fn product_name(&self, category: &str, brand: &str) -> String {
        let random = self.random.as_ref();
        let line = category.parse::<ProductLine>().ok();

        let prefix = choose(random, PREFIXES).copied().unwrap_or(FALLBACK_STEM);
        let stem = choose(random, name_stems(line))
            .copied()
            .unwrap_or(FALLBACK_STEM);

        let mut name = format!("{} {} {}", brand, prefix, stem);
        if random.coin() {
            if let Some(suffix) = choose(random, SUFFIXES) {
                name.push(' ');
                name.push_str(suffix);
            }
        }
        name
    }

    pub fn shape(
        &self,
        image: RemoteImage,
        category: &str,
        requested_brand: Option<&str>,
    ) -> Product {
        let brand = image
            .brand
            .as_deref()
            .filter(|b| !b.trim().is_empty())
            .or(requested_brand.filter(|b| !b.trim().is_empty()))
            .unwrap_or(HOUSE_BRAND)
            .to_string();

        Product {
            id: image.id,
            name: self.product_name(category, &brand),
            image_url: image.url,
            brand,
            category: category.to_string(),
            features: product_features(category),
            sustainability_score: 70 + self.random.index(30) as u8,
            prompt: image.prompt,
            created_at: image.created_at,
            is_placeholder: image.is_placeholder,
            concept: ConceptCopy {
                product_name: non_blank(image.product_name),
                innovation: non_blank(image.innovation),
                market_disruption: non_blank(image.market_disruption),
                consumer_insight: non_blank(image.consumer_insight),
                price: non_blank(image.price),
            },
        }
    }

    pub fn shape_all(
        &self,
        images: Vec<RemoteImage>,
        category: &str,
        requested_brand: Option<&str>,
    ) -> Vec<Product> {
        images
            .into_iter()
            .map(|image| self.shape(image, category, requested_brand))
            .collect()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use conceptlab::ScriptedRandom;

    fn image(brand: Option<&str>) -> RemoteImage {
        RemoteImage {
            id: Uuid::new_v4(),
            url: "https://cdn.example.com/a.png".to_string(),
            prompt: "a bottle".to_string(),
            brand: brand.map(str::to_string),
            product_name: None,
            innovation: None,
            market_disruption: None,
            consumer_insight: None,
            price: None,
            is_placeholder: false,
            created_at: Utc::now(),
        }
    }

    fn shaper(script: Vec<usize>) -> ProductShaper {
        ProductShaper::new(Arc::new(ScriptedRandom::new(script)))
    }

    #[test]
    fn test_features_lead_with_line_features() {
        let features = product_features("laundry");
        assert_eq!(features.len(), 5);
        assert_eq!(features[0], "Removes 99.9% of stains");
        assert_eq!(features[2], "Concentrated formula - 50% less plastic");
        assert_eq!(features[3], "Dermatologist tested");
    }

    #[test]
    fn test_features_for_unknown_category() {
        let features = product_features("all");
        assert_eq!(features, BASE_FEATURES.iter().map(|f| f.to_string()).collect::<Vec<_>>());
    }

    #[test]
    fn test_name_with_suffix() {
        // prefix Smart, stem Guard, coin heads, suffix 360
        let shaper = shaper(vec![6, 2, 1, 3]);
        assert_eq!(shaper.product_name("oral-care", "WATERPIK"), "WATERPIK Smart Guard 360");
    }

    #[test]
    fn test_name_without_suffix() {
        let shaper = shaper(vec![0, 0, 0]);
        assert_eq!(shaper.product_name("laundry", "XTRA"), "XTRA Ultra Clean");
    }

    #[test]
    fn test_unknown_line_uses_fallback_stem() {
        let shaper = shaper(vec![1, 0]);
        assert_eq!(shaper.product_name("all", "OXICLEAN"), "OXICLEAN Pro Pro");
    }

    #[test]
    fn test_brand_fallback_order() {
        let shaper = shaper(vec![0]);

        let from_image = shaper.shape(image(Some("BATISTE")), "personal-care", Some("NAIR"));
        assert_eq!(from_image.brand, "BATISTE");

        let from_request = shaper.shape(image(None), "personal-care", Some("NAIR"));
        assert_eq!(from_request.brand, "NAIR");

        let house = shaper.shape(image(Some("  ")), "personal-care", None);
        assert_eq!(house.brand, HOUSE_BRAND);
        assert!(house.name.starts_with("Church & Dwight "));
    }

    #[test]
    fn test_sustainability_score_range() {
        let low = shaper(vec![0]).shape(image(None), "health", None);
        assert_eq!(low.sustainability_score, 70);

        let high = shaper(vec![29]).shape(image(None), "health", None);
        assert_eq!(high.sustainability_score, 99);
    }

    #[test]
    fn test_shape_keeps_image_fields() {
        let source = image(Some("XTRA"));
        let id = source.id;
        let products = shaper(vec![0]).shape_all(vec![source], "laundry", None);
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, id);
        assert_eq!(products[0].image_url, "https://cdn.example.com/a.png");
        assert_eq!(products[0].category, "laundry");
        assert!(!products[0].is_placeholder);
    }

    #[test]
    fn test_shape_carries_concept_copy() {
        let mut source = image(Some("XTRA"));
        source.product_name = Some("XTRA PureWash AI-powered".to_string());
        source.innovation = Some("AI-powered formulation".to_string());
        source.price = Some("$19.99 - 24oz".to_string());
        source.consumer_insight = Some("  ".to_string());

        let product = shaper(vec![0]).shape(source, "laundry", None);
        assert_eq!(product.display_name(), "XTRA PureWash AI-powered");
        assert_eq!(product.concept.innovation.as_deref(), Some("AI-powered formulation"));
        assert_eq!(product.concept.price.as_deref(), Some("$19.99 - 24oz"));
        assert!(product.concept.consumer_insight.is_none());
        assert!(product.concept.market_disruption.is_none());
    }

    #[test]
    fn test_display_name_falls_back_to_local_name() {
        let product = shaper(vec![0, 0, 0]).shape(image(Some("XTRA")), "laundry", None);
        assert_eq!(product.display_name(), "XTRA Ultra Clean");
    }
}
