//! Concept templating
//!
//! Deterministic shape, random content: every field is a template filled from
//! the catalog tables with picks drawn from the injected [`RandomSource`].

use super::catalog::{self, INNOVATIONS};
use crate::domain::entities::Concept;
use crate::domain::value_objects::Category;
use crate::ports::{choose, RandomSource};

/// Resolve the brand for one concept.
///
/// A non-blank requested brand wins; otherwise a uniform pick from the
/// category's brand table; otherwise [`catalog::DEFAULT_BRAND`].
pub fn select_brand(
    category: &Category,
    requested: Option<&str>,
    random: &dyn RandomSource,
) -> String {
    if let Some(brand) = requested.map(str::trim).filter(|b| !b.is_empty()) {
        return brand.to_string();
    }

    category
        .product_line()
        .and_then(|line| choose(random, catalog::brands(line)))
        .copied()
        .unwrap_or(catalog::DEFAULT_BRAND)
        .to_string()
}

/// Build a concept for the category and brand
pub fn generate_concept(category: &Category, brand: &str, random: &dyn RandomSource) -> Concept {
    let innovation = choose(random, &INNOVATIONS).copied().unwrap_or(INNOVATIONS[0]);
    let display = category.display_name();

    let base_name = category
        .product_line()
        .and_then(|line| choose(random, catalog::base_names(line)))
        .copied()
        .unwrap_or(catalog::FALLBACK_BASE_NAME);
    let tech_lead = innovation.tech.split(' ').next().unwrap_or(innovation.tech);

    let mut features = vec![format!("Uses {}", innovation.tech)];
    features.extend(catalog::STANDARD_FEATURES.iter().map(|f| f.to_string()));

    Concept {
        product_name: format!("{} {} {}", brand, base_name, tech_lead),
        innovation: innovation.tech.to_string(),
        market_disruption: format!("First {} product that {}", display, innovation.benefit),
        consumer_insight: format!(
            "Modern consumers want {} products that are both effective and sustainable",
            display
        ),
        image_prompt: format!(
            "Professional product photography: {} {} product bottle with {}, modern minimalist packaging, white background, studio lighting, photorealistic, commercial photography",
            brand, display, innovation.tech
        ),
        features,
        ingredients: format!("Advanced {} complex", innovation.tech),
        usage: catalog::STANDARD_USAGE.to_string(),
        price: catalog::STANDARD_PRICE.to_string(),
        sustainability: catalog::STANDARD_SUSTAINABILITY.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{ScriptedRandom, ThreadRandom};

    #[test]
    fn test_requested_brand_wins() {
        let category = Category::new("laundry").unwrap();
        let brand = select_brand(&category, Some("  TIDE  "), &ThreadRandom);
        assert_eq!(brand, "TIDE");
    }

    #[test]
    fn test_blank_brand_uses_table() {
        let category = Category::new("laundry").unwrap();
        let brand = select_brand(&category, Some(""), &ScriptedRandom::new(vec![2]));
        assert_eq!(brand, "XTRA");
    }

    #[test]
    fn test_random_brand_from_category_table() {
        let category = Category::new("laundry").unwrap();
        for _ in 0..50 {
            let brand = select_brand(&category, None, &ThreadRandom);
            assert!(["ARM & HAMMER", "OXICLEAN", "XTRA"].contains(&brand.as_str()));
        }
    }

    #[test]
    fn test_unknown_category_falls_back_to_default_brand() {
        let category = Category::new("all").unwrap();
        assert_eq!(select_brand(&category, None, &ThreadRandom), "ARM & HAMMER");
    }

    #[test]
    fn test_concept_follows_scripted_picks() {
        let category = Category::new("oral-care").unwrap();
        // innovation #4 (smart sensor), base name #1 (FreshGuard)
        let random = ScriptedRandom::new(vec![4, 1]);
        let concept = generate_concept(&category, "WATERPIK", &random);

        assert_eq!(concept.product_name, "WATERPIK FreshGuard smart");
        assert_eq!(concept.innovation, "smart sensor technology");
        assert_eq!(
            concept.market_disruption,
            "First oral care product that tracks usage and effectiveness"
        );
        assert_eq!(concept.features.len(), 3);
        assert_eq!(concept.features[0], "Uses smart sensor technology");
        assert!(concept.image_prompt.contains("WATERPIK oral care product bottle"));
    }

    #[test]
    fn test_unknown_category_uses_fallback_name() {
        let category = Category::new("all").unwrap();
        let concept = generate_concept(&category, "ARM & HAMMER", &ScriptedRandom::first());
        assert_eq!(concept.product_name, "ARM & HAMMER Innovation AI-powered");
    }

    #[test]
    fn test_uppercase_category_uses_default_tables() {
        let category = Category::new("LAUNDRY").unwrap();
        assert_eq!(select_brand(&category, None, &ThreadRandom), "ARM & HAMMER");

        let concept = generate_concept(&category, "ARM & HAMMER", &ScriptedRandom::first());
        assert_eq!(concept.product_name, "ARM & HAMMER Innovation AI-powered");
        assert!(concept.image_prompt.contains("LAUNDRY product bottle"));
    }
}
