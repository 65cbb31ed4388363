//! ConceptLab API Routes
//!
//! - /api/generate - Concept generation (POST, OPTIONS)
//! - /api/health - Service status
//! - /api/images - Tool image redirects
//! - /swagger-ui - OpenAPI documentation

pub mod generate;
pub mod health;
pub mod images;
pub mod swagger;

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::AppState;

/// Assemble the full application router
pub fn app(state: AppState) -> Router {
    let openapi = swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .merge(health::router())
        .merge(generate::router())
        .merge(images::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
