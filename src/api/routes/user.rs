//! User endpoint: aggregated profile, social counts, and avatar

use crate::api::AppState;
use crate::error::{Error, Result};
use crate::types::UserProfile;
use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

/// Query parameters for `GET /user`
#[derive(Debug, Deserialize)]
pub struct UserQuery {
    /// Numeric ID of the user to look up
    #[serde(default)]
    pub id: Option<String>,
}

/// GET /user?id=<userId> - Aggregated user profile
#[utoipa::path(
    get,
    path = "/user",
    tag = "user",
    params(
        ("id" = String, Query, description = "Numeric user ID")
    ),
    responses(
        (status = 200, description = "Aggregated profile", body = crate::types::UserProfile),
        (status = 400, description = "Missing id parameter", body = crate::error::ErrorBody),
        (status = 500, description = "Upstream fetch failure", body = crate::error::ErrorBody)
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Query(query): Query<UserQuery>,
) -> Result<Json<UserProfile>> {
    let id = query
        .id
        .filter(|id| !id.is_empty())
        .ok_or(Error::MissingParameter { name: "id" })?;

    let user = state.client.fetch_user(&id).await?;

    Ok(Json(user))
}
