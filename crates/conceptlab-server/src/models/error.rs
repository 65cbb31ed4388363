//! Error - JSON error responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use conceptlab::DomainError;

/// Body of every error response
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Handler error carrying its HTTP status
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ErrorBody,
}

impl ApiError {
    pub fn new(status: StatusCode, error: impl Into<String>) -> Self {
        Self {
            status,
            body: ErrorBody {
                error: error.into(),
                details: None,
            },
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.body.details = Some(details.into());
        self
    }

    pub fn method_not_allowed() -> Self {
        Self::new(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(message) => Self::new(StatusCode::BAD_REQUEST, message),
            DomainError::Configuration(details) => {
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "OpenAI API not configured")
                    .with_details(details)
            }
            DomainError::NotFound { entity_type, .. } => {
                Self::new(StatusCode::NOT_FOUND, format!("{} not found", entity_type))
            }
            err @ (DomainError::ExternalService(_) | DomainError::Timeout(_)) => {
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Failed to generate")
                    .with_details(err.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(
                "❌ {} {}: {}",
                self.status.as_u16(),
                self.body.error,
                self.body.details.as_deref().unwrap_or("-")
            );
        } else {
            tracing::info!("{} {}", self.status.as_u16(), self.body.error);
        }
        (self.status, Json(self.body)).into_response()
    }
}
