//! Category - Product category keys

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Product line with its own brand and naming tables
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ProductLine {
    Laundry,
    OralCare,
    PersonalCare,
    Health,
    HomeCare,
    PetCare,
    SexualWellness,
}

impl ProductLine {
    pub const ALL: [ProductLine; 7] = [
        ProductLine::Laundry,
        ProductLine::OralCare,
        ProductLine::PersonalCare,
        ProductLine::Health,
        ProductLine::HomeCare,
        ProductLine::PetCare,
        ProductLine::SexualWellness,
    ];

    /// Wire key, e.g. `oral-care`
    pub fn key(&self) -> &'static str {
        match self {
            ProductLine::Laundry => "laundry",
            ProductLine::OralCare => "oral-care",
            ProductLine::PersonalCare => "personal-care",
            ProductLine::Health => "health",
            ProductLine::HomeCare => "home-care",
            ProductLine::PetCare => "pet-care",
            ProductLine::SexualWellness => "sexual-wellness",
        }
    }

    /// Upper-case label used in menus
    pub fn label(&self) -> &'static str {
        match self {
            ProductLine::Laundry => "LAUNDRY",
            ProductLine::OralCare => "ORAL CARE",
            ProductLine::PersonalCare => "PERSONAL CARE",
            ProductLine::Health => "HEALTH",
            ProductLine::HomeCare => "HOME CARE",
            ProductLine::PetCare => "PET CARE",
            ProductLine::SexualWellness => "SEXUAL WELLNESS",
        }
    }
}

impl std::fmt::Display for ProductLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl std::str::FromStr for ProductLine {
    type Err = String;

    /// Keys match exactly; `LAUNDRY` is not a product line
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ProductLine::ALL
            .iter()
            .copied()
            .find(|line| line.key() == wanted)
            .ok_or_else(|| format!("Unknown product line: {}", s))
    }
}

/// Category requested by a caller.
///
/// Known keys resolve to a [`ProductLine`]; anything else non-empty is passed
/// through and falls back to the default tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Category {
    key: String,
}

impl Category {
    pub fn new(key: impl AsRef<str>) -> Result<Self, DomainError> {
        let key = key.as_ref().trim();
        if key.is_empty() {
            return Err(DomainError::Validation("Category is required".to_string()));
        }
        Ok(Self {
            key: key.to_string(),
        })
    }

    /// Build from an optional request field, treating absent and blank alike
    pub fn from_optional(key: Option<&str>) -> Result<Self, DomainError> {
        Self::new(key.unwrap_or_default())
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn product_line(&self) -> Option<ProductLine> {
        self.key.parse().ok()
    }

    /// Human form used inside copy, e.g. `oral care`
    pub fn display_name(&self) -> String {
        self.key.replace('-', " ")
    }
}

impl From<ProductLine> for Category {
    fn from(line: ProductLine) -> Self {
        Self {
            key: line.key().to_string(),
        }
    }
}

impl TryFrom<String> for Category {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.key
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_category_resolves_line() {
        let category = Category::new("oral-care").unwrap();
        assert_eq!(category.product_line(), Some(ProductLine::OralCare));
        assert_eq!(category.display_name(), "oral care");
    }

    #[test]
    fn test_unknown_category_passes_through() {
        let category = Category::new("all").unwrap();
        assert_eq!(category.key(), "all");
        assert_eq!(category.product_line(), None);
    }

    #[test]
    fn test_blank_category_rejected() {
        for input in [None, Some(""), Some("   ")] {
            let err = Category::from_optional(input).unwrap_err();
            assert_eq!(err.to_string(), "Category is required");
        }
    }

    #[test]
    fn test_line_keys_round_trip() {
        for line in ProductLine::ALL {
            assert_eq!(line.key().parse::<ProductLine>(), Ok(line));
        }
        assert!("garden".parse::<ProductLine>().is_err());
    }

    #[test]
    fn test_line_match_is_case_sensitive() {
        assert!("Oral-Care".parse::<ProductLine>().is_err());

        let category = Category::new("LAUNDRY").unwrap();
        assert_eq!(category.key(), "LAUNDRY");
        assert_eq!(category.product_line(), None);
    }
}
