//! Health Routes

use axum::{extract::State, routing::get, Json, Router};
use chrono::Utc;

use crate::models::{HealthCheck, HealthEnv};
use crate::AppState;

/// Service status and configuration summary
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service is running", body = HealthCheck)
    ),
    tag = "Health"
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "ConceptLab API is running - ideas take shape".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
        env: HealthEnv {
            has_openai_key: state.config.has_openai_key(),
            key_prefix: state.config.key_prefix(),
            image_generation: state.concepts.backend().label().to_string(),
        },
    })
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/health", get(health_check))
}
