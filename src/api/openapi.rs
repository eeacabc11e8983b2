//! OpenAPI documentation for the proxy API

use utoipa::OpenApi;

/// OpenAPI document covering the proxy endpoints
#[derive(OpenApi)]
#[openapi(
    info(
        title = "roblox-showcase API",
        description = "CORS-open proxy over the public Roblox web APIs for a portfolio site",
        license(name = "MIT OR Apache-2.0")
    ),
    paths(
        crate::api::routes::games::get_game,
        crate::api::routes::user::get_user,
        crate::api::routes::system::health_check,
        crate::api::routes::system::openapi_spec,
    ),
    components(schemas(
        crate::types::GamePayload,
        crate::types::GamesResponse,
        crate::types::UserProfile,
        crate::error::ErrorBody,
    )),
    tags(
        (name = "games", description = "Game metadata proxy"),
        (name = "user", description = "User profile proxy"),
        (name = "system", description = "Service health and documentation")
    )
)]
pub struct ApiDoc;
