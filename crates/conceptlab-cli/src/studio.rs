//! Studio session state
//!
//! Holds what the user has picked and generated during one interactive run.
//! Products only ever accumulate; a failed generation leaves them untouched.

use uuid::Uuid;

use crate::api::{ClientError, ConceptClient, GenerateParams};
use crate::products::{Product, ProductShaper};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Generating,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StudioError {
    #[error("Select a category first")]
    NoCategory,

    #[error("A generation is already in progress")]
    Busy,

    #[error("Unknown product: {0}")]
    UnknownProduct(Uuid),
}

#[derive(Debug, Default)]
pub struct Studio {
    selected_category: Option<String>,
    selected_brand: Option<String>,
    products: Vec<Product>,
    selected_product: Option<Uuid>,
    favorites: Vec<Uuid>,
    session_id: Option<String>,
    default_count: Option<u32>,
    phase: Phase,
}

impl Studio {
    pub fn new(default_count: Option<u32>) -> Self {
        Self {
            default_count,
            ..Self::default()
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn favorites(&self) -> &[Uuid] {
        &self.favorites
    }

    pub fn selected_category(&self) -> Option<&str> {
        self.selected_category.as_deref()
    }

    pub fn selected_brand(&self) -> Option<&str> {
        self.selected_brand.as_deref()
    }

    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    pub fn product(&self, id: Uuid) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn selected_product(&self) -> Option<&Product> {
        self.selected_product.and_then(|id| self.product(id))
    }

    pub fn is_favorite(&self, id: Uuid) -> bool {
        self.favorites.contains(&id)
    }

    /// Switching category drops the brand picked for the previous one
    pub fn select_category(&mut self, category: &str) {
        let category = category.trim();
        if self.selected_category.as_deref() != Some(category) {
            self.selected_brand = None;
        }
        self.selected_category = if category.is_empty() {
            None
        } else {
            Some(category.to_string())
        };
    }

    pub fn select_brand(&mut self, brand: Option<&str>) {
        self.selected_brand = brand
            .map(str::trim)
            .filter(|b| !b.is_empty())
            .map(str::to_string);
    }

    pub fn select_product(&mut self, id: Uuid) -> Result<&Product, StudioError> {
        if self.product(id).is_none() {
            return Err(StudioError::UnknownProduct(id));
        }
        self.selected_product = Some(id);
        self.product(id).ok_or(StudioError::UnknownProduct(id))
    }

    /// Returns whether the product is a favorite afterwards
    pub fn toggle_favorite(&mut self, id: Uuid) -> Result<bool, StudioError> {
        if self.product(id).is_none() {
            return Err(StudioError::UnknownProduct(id));
        }
        if let Some(pos) = self.favorites.iter().position(|f| *f == id) {
            self.favorites.remove(pos);
            Ok(false)
        } else {
            self.favorites.push(id);
            Ok(true)
        }
    }

    /// Move to `Generating` and hand back the request to send
    pub fn begin_generation(&mut self) -> Result<GenerateParams, StudioError> {
        if self.phase == Phase::Generating {
            return Err(StudioError::Busy);
        }
        let category = self.selected_category.clone().ok_or(StudioError::NoCategory)?;

        self.phase = Phase::Generating;
        Ok(GenerateParams {
            category,
            brand: self.selected_brand.clone(),
            count: self.default_count,
        })
    }

    pub fn complete_generation(&mut self, outcome: Result<(Vec<Product>, String), ClientError>) {
        match outcome {
            Ok((products, session_id)) => {
                tracing::debug!("Studio received {} product(s)", products.len());
                self.products.extend(products);
                self.session_id = Some(session_id);
                self.phase = Phase::Idle;
            }
            Err(e) => {
                tracing::warn!("Generation failed: {}", e);
                self.phase = Phase::Failed(e.to_string());
            }
        }
    }

    /// Run one generation round trip against the API
    pub async fn generate(
        &mut self,
        client: &ConceptClient,
        shaper: &ProductShaper,
    ) -> Result<usize, StudioError> {
        let params = self.begin_generation()?;

        let outcome = client.generate(&params).await.map(|resp| {
            let products =
                shaper.shape_all(resp.images, &params.category, params.brand.as_deref());
            (products, resp.session_id)
        });
        let added = outcome.as_ref().map(|(p, _)| p.len()).unwrap_or(0);

        self.complete_generation(outcome);
        Ok(added)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::products::ConceptCopy;
    use chrono::Utc;

    fn product(name: &str) -> Product {
        Product {
            id: Uuid::new_v4(),
            image_url: "data:image/svg+xml;charset=utf-8,x".to_string(),
            name: name.to_string(),
            brand: "XTRA".to_string(),
            category: "laundry".to_string(),
            features: vec!["HE compatible".to_string()],
            sustainability_score: 80,
            prompt: String::new(),
            created_at: Utc::now(),
            is_placeholder: true,
            concept: ConceptCopy::default(),
        }
    }

    fn studio_with(products: Vec<Product>) -> Studio {
        let mut studio = Studio::new(Some(2));
        studio.select_category("laundry");
        studio.begin_generation().unwrap();
        studio.complete_generation(Ok((products, "s-1".to_string())));
        studio
    }

    #[test]
    fn test_generation_requires_category() {
        let mut studio = Studio::new(None);
        assert_eq!(studio.begin_generation().unwrap_err(), StudioError::NoCategory);
        assert_eq!(studio.phase(), &Phase::Idle);
    }

    #[test]
    fn test_generation_guards_in_flight() {
        let mut studio = Studio::new(Some(3));
        studio.select_category("oral-care");
        studio.select_brand(Some("WATERPIK"));

        let params = studio.begin_generation().unwrap();
        assert_eq!(params.category, "oral-care");
        assert_eq!(params.brand.as_deref(), Some("WATERPIK"));
        assert_eq!(params.count, Some(3));
        assert_eq!(studio.phase(), &Phase::Generating);

        assert_eq!(studio.begin_generation().unwrap_err(), StudioError::Busy);
    }

    #[test]
    fn test_success_appends_products() {
        let mut studio = studio_with(vec![product("a")]);
        assert_eq!(studio.session_id(), Some("s-1"));

        studio.begin_generation().unwrap();
        studio.complete_generation(Ok((vec![product("b"), product("c")], "s-2".to_string())));

        let names: Vec<_> = studio.products().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
        assert_eq!(studio.session_id(), Some("s-2"));
        assert_eq!(studio.phase(), &Phase::Idle);
    }

    #[test]
    fn test_failure_keeps_products() {
        let mut studio = studio_with(vec![product("a")]);

        studio.begin_generation().unwrap();
        studio.complete_generation(Err(ClientError::NotConfigured));

        assert_eq!(studio.products().len(), 1);
        assert_eq!(
            studio.phase(),
            &Phase::Failed(
                "The OpenAI API key is not configured. Please check server settings.".to_string()
            )
        );
        // Failed is not terminal
        assert!(studio.begin_generation().is_ok());
    }

    #[test]
    fn test_category_change_clears_brand() {
        let mut studio = Studio::new(None);
        studio.select_category("laundry");
        studio.select_brand(Some("OXICLEAN"));

        studio.select_category("laundry");
        assert_eq!(studio.selected_brand(), Some("OXICLEAN"));

        studio.select_category("pet-care");
        assert_eq!(studio.selected_brand(), None);
        assert_eq!(studio.selected_category(), Some("pet-care"));
    }

    #[test]
    fn test_blank_brand_is_none() {
        let mut studio = Studio::new(None);
        studio.select_brand(Some("   "));
        assert_eq!(studio.selected_brand(), None);
    }

    #[test]
    fn test_toggle_favorite() {
        let first = product("a");
        let second = product("b");
        let (a, b) = (first.id, second.id);
        let mut studio = studio_with(vec![first, second]);

        assert!(studio.toggle_favorite(b).unwrap());
        assert!(studio.toggle_favorite(a).unwrap());
        assert_eq!(studio.favorites(), &[b, a]);

        assert!(!studio.toggle_favorite(b).unwrap());
        assert_eq!(studio.favorites(), &[a]);
        assert!(studio.is_favorite(a));
    }

    #[test]
    fn test_unknown_ids_rejected() {
        let mut studio = studio_with(vec![product("a")]);
        let stranger = Uuid::new_v4();

        assert_eq!(
            studio.toggle_favorite(stranger).unwrap_err(),
            StudioError::UnknownProduct(stranger)
        );
        assert!(studio.favorites().is_empty());
        assert!(studio.select_product(stranger).is_err());
        assert!(studio.selected_product().is_none());
    }

    #[test]
    fn test_select_product() {
        let target = product("a");
        let id = target.id;
        let mut studio = studio_with(vec![target]);

        assert_eq!(studio.select_product(id).unwrap().name, "a");
        assert_eq!(studio.selected_product().map(|p| p.id), Some(id));
    }
}
