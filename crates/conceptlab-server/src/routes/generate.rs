//! Generate Routes - Concept and image generation

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{HeaderMap, StatusCode},
    routing::post,
    Json, Router,
};
use uuid::Uuid;

use conceptlab::Category;

use crate::application::GenerateCommand;
use crate::models::{ApiError, ErrorBody, GenerateRequest, GenerateResponse, GeneratedImageResponse};
use crate::AppState;

/// Header a client may use to keep one session id across calls
pub const SESSION_HEADER: &str = "x-session-id";

/// Generate product concepts with images
#[utoipa::path(
    post,
    path = "/api/generate",
    request_body = GenerateRequest,
    params(("x-session-id" = Option<String>, Header, description = "Session ID to echo back")),
    responses(
        (status = 200, description = "Concepts generated", body = GenerateResponse),
        (status = 400, description = "Category missing or body malformed", body = ErrorBody),
        (status = 405, description = "Method not allowed", body = ErrorBody),
        (status = 500, description = "Image generation not configured", body = ErrorBody)
    ),
    tag = "Generate"
)]
pub async fn generate_images(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let Json(payload) = payload.map_err(|rejection| {
        ApiError::new(StatusCode::BAD_REQUEST, "Invalid request body")
            .with_details(rejection.body_text())
    })?;

    let category = Category::from_optional(payload.category.as_deref())?;
    let count = payload.requested_count();

    tracing::info!(
        "Generating for category={} brand={} count={:?}",
        category,
        payload.brand.as_deref().unwrap_or("-"),
        count
    );

    let command = GenerateCommand {
        category,
        brand: payload.brand,
        count,
    };

    let images = state.concepts.generate(&command).await?;
    let placeholders = images.iter().filter(|i| i.is_placeholder).count();

    tracing::info!(
        "✅ Generated {} concept(s), {} placeholder image(s)",
        images.len(),
        placeholders
    );

    let images: Vec<GeneratedImageResponse> = images.into_iter().map(Into::into).collect();

    Ok(Json(GenerateResponse {
        total_generated: images.len(),
        images,
        session_id: session_id(&headers),
    }))
}

/// CORS preflight without the browser headers: acknowledge with an empty body
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

pub async fn method_not_allowed() -> ApiError {
    ApiError::method_not_allowed()
}

fn session_id(headers: &HeaderMap) -> String {
    headers
        .get(SESSION_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string())
}

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/api/generate",
        post(generate_images)
            .options(preflight)
            .fallback(method_not_allowed),
    )
}
