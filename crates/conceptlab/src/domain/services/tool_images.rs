//! Tool images - Fixed name → external photo table

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Rendering of a tool image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageVariant {
    /// 600x400 darkened banner
    Banner,
    /// 400x400 square
    Thumbnail,
}

const TOOL_PHOTOS: [(&str, &str); 6] = [
    ("innovation-inspiration-tool", "photo-1620712943543-bcc4688e7485"),
    ("formula-generator-tool", "photo-1532187863486-abf9dbad1b69"),
    ("patent-analyzer-tool", "photo-1507003211169-0a1dd7228f2d"),
    ("stability-predictor-tool", "photo-1532094349884-543bc11b234d"),
    ("package-sustainability-tool", "photo-1536147210925-5cb7a7a4f9fe"),
    ("consumer-insights-tool", "photo-1551288049-bebda4e38f71"),
];

const PHOTO_HOST: &str = "https://images.unsplash.com";

/// Names accepted by [`resolve_tool_image`], without extension
pub fn tool_image_names() -> impl Iterator<Item = &'static str> {
    TOOL_PHOTOS.iter().map(|(name, _)| *name)
}

/// Look up a tool image by name. `.png`/`.jpg` suffixes are ignored.
pub fn resolve_tool_image(name: &str, variant: ImageVariant) -> Result<String, DomainError> {
    let stem = name
        .trim()
        .trim_end_matches(".png")
        .trim_end_matches(".jpg");

    let (_, photo) = TOOL_PHOTOS
        .iter()
        .find(|(key, _)| *key == stem)
        .ok_or_else(|| DomainError::not_found_str("Image", name))?;

    let query = match variant {
        ImageVariant::Banner => {
            "w=600&h=400&fit=crop&q=80&blend=0a0a0aCC&blend-mode=multiply&sat=-100&con=20"
        }
        ImageVariant::Thumbnail => "w=400&h=400&fit=crop&q=80",
    };

    Ok(format!("{}/{}?{}", PHOTO_HOST, photo, query))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_strips_extension() {
        let plain = resolve_tool_image("formula-generator-tool", ImageVariant::Thumbnail).unwrap();
        let thumbnail = |name| resolve_tool_image(name, ImageVariant::Thumbnail).unwrap();
        let png = thumbnail("formula-generator-tool.png");
        let jpg = thumbnail("formula-generator-tool.jpg");
        assert_eq!(plain, png);
        assert_eq!(plain, jpg);
        assert!(plain.contains("photo-1532187863486-abf9dbad1b69"));
        assert!(plain.ends_with("w=400&h=400&fit=crop&q=80"));
    }

    #[test]
    fn test_banner_variant() {
        let url = resolve_tool_image("consumer-insights-tool", ImageVariant::Banner).unwrap();
        assert!(url.contains("w=600&h=400"));
        assert!(url.contains("sat=-100"));
    }

    #[test]
    fn test_unknown_name_not_found() {
        let err = resolve_tool_image("missing-tool.png", ImageVariant::Banner).unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[test]
    fn test_names_listed() {
        assert_eq!(tool_image_names().count(), 6);
    }
}
