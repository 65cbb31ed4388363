//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{
    ErrorBody, GenerateRequest, GenerateResponse, GeneratedImageResponse, HealthCheck, HealthEnv,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Generate endpoints
        super::generate::generate_images,
        // Health endpoints
        super::health::health_check,
        // Image endpoints
        super::images::redirect_by_query,
        super::images::redirect_by_path,
    ),
    info(
        title = "ConceptLab API",
        version = "0.1.0",
        description = "Product innovation concepts with generated imagery.\n\nTemplated copy per category and brand, rendered by an image model or a local placeholder.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Generate", description = "Generate - Concepts with images"),
        (name = "Images", description = "Images - Hosted tool imagery"),
    ),
    components(
        schemas(
            GenerateRequest,
            GenerateResponse,
            GeneratedImageResponse,
            HealthCheck,
            HealthEnv,
            ErrorBody,
        )
    ),
)]
pub struct ApiDoc;
