//! REST API server module
//!
//! Serves the two CORS-open proxy endpoints the portfolio page calls, plus a
//! health check and the OpenAPI document. Both proxy endpoints are stateless
//! pass-through aggregators: every request re-fetches upstream, no caching.

use crate::config::Config;
use crate::error::Result;
use crate::roblox::RobloxClient;
use axum::{
    body::Body,
    extract::Request,
    http::{HeaderValue, Method, StatusCode},
    middleware::{self, Next},
    response::Response,
    routing::get,
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

pub mod error_response;
pub mod openapi;
pub mod routes;
pub mod state;

pub use openapi::ApiDoc;
pub use state::AppState;

/// Create the API router with all route definitions
///
/// # Routes
///
/// ## Proxy
/// - `GET /games?id=<universeId>` - Merged game metadata and icon
/// - `GET /user?id=<userId>` - Aggregated user profile, social counts, avatar
/// - `OPTIONS /games`, `OPTIONS /user` - CORS pre-flight (204, no body)
///
/// ## System
/// - `GET /health` - Health check
/// - `GET /openapi.json` - OpenAPI specification
pub fn create_router(client: Arc<RobloxClient>, config: Arc<Config>) -> Router {
    let state = AppState::new(client, config.clone());

    let router = Router::new()
        .route(
            "/games",
            get(routes::get_game).options(routes::preflight),
        )
        .route("/user", get(routes::get_user).options(routes::preflight))
        .route("/health", get(routes::health_check))
        .route("/openapi.json", get(routes::openapi_spec))
        .with_state(state);

    // Apply CORS middleware if enabled in config. The pre-flight rewrite sits
    // outside the CORS layer: `CorsLayer` answers OPTIONS itself with a 200
    // before the route handlers run, and the frontend contract is an empty 204.
    if config.server.api.cors_enabled {
        let cors = build_cors_layer(&config.server.api.cors_origins);
        router
            .layer(cors)
            .layer(middleware::from_fn(pin_preflight_status))
    } else {
        router
    }
}

/// Rewrite successful OPTIONS answers to an empty `204 No Content`
///
/// The access-control headers attached by the CORS layer are kept; only the
/// status and body change.
async fn pin_preflight_status(request: Request, next: Next) -> Response {
    let is_options = request.method() == Method::OPTIONS;
    let mut response = next.run(request).await;
    if is_options && response.status() == StatusCode::OK {
        *response.status_mut() = StatusCode::NO_CONTENT;
        *response.body_mut() = Body::empty();
    }
    response
}

/// Build a CORS layer based on configured origins
///
/// # Arguments
///
/// * `origins` - List of allowed origins (supports "*" for any origin)
///
/// # Returns
///
/// A configured CorsLayer allowing the specified origins for GET and OPTIONS
/// requests with any headers.
fn build_cors_layer(origins: &[String]) -> CorsLayer {
    let allow_any = origins.iter().any(|o| o == "*");

    if allow_any || origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::OPTIONS])
            .allow_headers(Any)
    } else {
        let allowed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();

        CorsLayer::new()
            .allow_origin(AllowOrigin::list(allowed))
            .allow_methods([Method::GET, Method::OPTIONS])
            .allow_headers(Any)
    }
}

/// Start the API server on the configured bind address
///
/// Creates a TCP listener, binds it to the configured address, and serves the
/// router until the server stops.
///
/// # Arguments
///
/// * `client` - Arc-wrapped upstream client shared across requests
/// * `config` - Arc-wrapped configuration with the bind address and CORS settings
///
/// # Example
///
/// ```no_run
/// use roblox_showcase::config::Config;
/// use roblox_showcase::roblox::RobloxClient;
/// use std::sync::Arc;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = Arc::new(Config::default());
/// let client = Arc::new(RobloxClient::new(&config.upstream)?);
///
/// // Start API server (blocks until shutdown)
/// roblox_showcase::api::start_api_server(client, config).await?;
/// # Ok(())
/// # }
/// ```
pub async fn start_api_server(client: Arc<RobloxClient>, config: Arc<Config>) -> Result<()> {
    let bind_address = config.server.api.bind_address;

    tracing::info!(address = %bind_address, "Starting API server");

    let app = create_router(client, config);

    let listener = TcpListener::bind(bind_address)
        .await
        .map_err(crate::error::Error::Io)?;

    tracing::info!(address = %bind_address, "API server listening");

    axum::serve(listener, app)
        .await
        .map_err(|e| crate::error::Error::ApiServerError(e.to_string()))?;

    tracing::info!("API server stopped");
    Ok(())
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests;
