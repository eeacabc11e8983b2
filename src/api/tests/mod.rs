use super::*;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;
use wiremock::MockServer;


/// Build a router whose upstream bases all point at one mock server
fn test_router(server: &MockServer) -> Router {
    let mut config = Config::default();
    config.upstream.games_api_base = server.uri();
    config.upstream.thumbnails_api_base = server.uri();
    config.upstream.users_api_base = server.uri();
    config.upstream.friends_api_base = server.uri();
    let config = Arc::new(config);

    let client = Arc::new(RobloxClient::new(&config.upstream).expect("client should build"));
    create_router(client, config)
}

/// GET a path and return status plus parsed JSON body
async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .uri(uri)
        .header("Origin", "http://localhost:3000")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if body.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, json)
}
