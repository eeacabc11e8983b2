//! System handlers: health, OpenAPI document, CORS pre-flight

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

/// GET /health - Health check
#[utoipa::path(
    get,
    path = "/health",
    tag = "system",
    responses(
        (status = 200, description = "Service is healthy")
    )
)]
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// GET /openapi.json - OpenAPI specification
#[utoipa::path(
    get,
    path = "/openapi.json",
    tag = "system",
    responses(
        (status = 200, description = "OpenAPI specification in JSON format")
    )
)]
pub async fn openapi_spec() -> impl IntoResponse {
    use crate::api::openapi::ApiDoc;
    use utoipa::OpenApi;

    Json(ApiDoc::openapi())
}

/// OPTIONS pre-flight handler: 204 with no body
///
/// Only reached when the CORS layer is disabled; with CORS enabled the layer
/// answers pre-flight itself and the router's outer middleware pins the 204.
pub async fn preflight() -> impl IntoResponse {
    StatusCode::NO_CONTENT
}
