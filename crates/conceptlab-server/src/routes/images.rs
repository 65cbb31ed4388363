//! Image Routes - Redirects to hosted tool images

use axum::{
    extract::{Path, Query},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::IntoParams;

use conceptlab::{resolve_tool_image, ImageVariant};

use crate::models::{ApiError, ErrorBody};
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ImageQuery {
    /// Tool image name, with or without `.png`/`.jpg`
    pub name: Option<String>,
}

/// Redirect to the banner rendering of a tool image
#[utoipa::path(
    get,
    path = "/api/images",
    params(ImageQuery),
    responses(
        (status = 302, description = "Redirect to the image"),
        (status = 400, description = "Image name missing", body = ErrorBody),
        (status = 404, description = "Image not found", body = ErrorBody)
    ),
    tag = "Images"
)]
pub async fn redirect_by_query(Query(query): Query<ImageQuery>) -> Result<Response, ApiError> {
    let name = query
        .name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .ok_or_else(|| ApiError::new(StatusCode::BAD_REQUEST, "Image name is required"))?;

    redirect(name, ImageVariant::Banner)
}

/// Redirect to the thumbnail rendering of a tool image
#[utoipa::path(
    get,
    path = "/api/images/{name}",
    params(("name" = String, Path, description = "Tool image name")),
    responses(
        (status = 302, description = "Redirect to the image"),
        (status = 404, description = "Image not found", body = ErrorBody)
    ),
    tag = "Images"
)]
pub async fn redirect_by_path(Path(name): Path<String>) -> Result<Response, ApiError> {
    redirect(&name, ImageVariant::Thumbnail)
}

fn redirect(name: &str, variant: ImageVariant) -> Result<Response, ApiError> {
    let url = resolve_tool_image(name, variant)?;
    tracing::debug!("Redirecting image {} -> {}", name, url);
    Ok((StatusCode::FOUND, [(header::LOCATION, url)]).into_response())
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/images", get(redirect_by_query))
        .route("/api/images/:name", get(redirect_by_path))
}
