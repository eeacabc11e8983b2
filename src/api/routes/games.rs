//! Games endpoint: merged game metadata and icon for one universe ID

use crate::api::AppState;
use crate::error::{Error, Result};
use crate::types::GamesResponse;
use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

/// Query parameters for `GET /games`
#[derive(Debug, Deserialize)]
pub struct GamesQuery {
    /// Universe ID of the game to look up
    #[serde(default)]
    pub id: Option<String>,
}

/// GET /games?id=<universeId> - Merged game metadata and icon
#[utoipa::path(
    get,
    path = "/games",
    tag = "games",
    params(
        ("id" = String, Query, description = "Universe ID of the game")
    ),
    responses(
        (status = 200, description = "Merged game record", body = crate::types::GamesResponse),
        (status = 400, description = "Missing id parameter", body = crate::error::ErrorBody),
        (status = 404, description = "No game data for this universe ID", body = crate::error::ErrorBody),
        (status = 500, description = "Upstream fetch failure", body = crate::error::ErrorBody)
    )
)]
pub async fn get_game(
    State(state): State<AppState>,
    Query(query): Query<GamesQuery>,
) -> Result<Json<GamesResponse>> {
    let id = query
        .id
        .filter(|id| !id.is_empty())
        .ok_or(Error::MissingParameter { name: "id" })?;

    let game = state.client.fetch_game(&id).await?;

    Ok(Json(GamesResponse { data: vec![game] }))
}
