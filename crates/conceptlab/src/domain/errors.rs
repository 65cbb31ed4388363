//! Domain Errors
//!
//! Error types for domain operations.

use std::time::Duration;

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Not found: {entity_type} '{id}'")]
    NotFound { entity_type: String, id: String },

    #[error("External service error: {0}")]
    ExternalService(String),

    #[error("External service timed out after {0:?}")]
    Timeout(Duration),
}

impl DomainError {
    pub fn not_found_str<T: AsRef<str>>(entity_type: T, id: &str) -> Self {
        Self::NotFound {
            entity_type: entity_type.as_ref().to_string(),
            id: id.to_string(),
        }
    }

    /// True for failures of the outbound image call (as opposed to caller mistakes)
    pub fn is_upstream(&self) -> bool {
        matches!(self, Self::ExternalService(_) | Self::Timeout(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_is_bare() {
        let err = DomainError::Validation("Category is required".to_string());
        assert_eq!(err.to_string(), "Category is required");
        assert!(!err.is_upstream());
    }

    #[test]
    fn test_upstream_errors() {
        assert!(DomainError::Timeout(Duration::from_secs(5)).is_upstream());
        assert!(DomainError::ExternalService("boom".into()).is_upstream());
        assert!(!DomainError::not_found_str("Image", "x").is_upstream());
    }
}
