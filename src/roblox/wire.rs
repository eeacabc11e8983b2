//! Wire payloads for the upstream Roblox web APIs
//!
//! Only the fields the aggregation layer reads are modeled; everything else in
//! the upstream responses is ignored during deserialization.

use serde::Deserialize;

/// Envelope for `games.roblox.com/v1/games`
#[derive(Debug, Deserialize)]
pub struct GamesEnvelope {
    /// Matching game records; empty when the universe ID is unknown
    #[serde(default)]
    pub data: Vec<UpstreamGame>,
}

/// A single game record from the games catalog
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpstreamGame {
    /// Universe ID
    pub universe_id: u64,
    /// Root place ID; zero when the catalog omits it
    #[serde(default)]
    pub root_place_id: u64,
    /// Display name
    pub name: String,
    /// Description, if any
    #[serde(default)]
    pub description: Option<String>,
    /// Concurrent player count
    #[serde(default)]
    pub playing: u64,
    /// Total visit count
    #[serde(default)]
    pub visits: u64,
}

/// Envelope for `thumbnails.roblox.com` icon and headshot lookups
#[derive(Debug, Deserialize)]
pub struct ThumbnailEnvelope {
    /// Thumbnail entries; may be empty
    #[serde(default)]
    pub data: Vec<ThumbnailEntry>,
}

/// A single thumbnail entry
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThumbnailEntry {
    /// Image URL; absent while the thumbnail is still being generated
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Profile record from `users.roblox.com/v1/users/{id}`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpstreamUser {
    /// Numeric user ID
    pub id: u64,
    /// Account username
    pub name: String,
    /// Display name
    pub display_name: String,
    /// Profile description, if any
    #[serde(default)]
    pub description: Option<String>,
}

/// Envelope for the follower/friend count endpoints
#[derive(Debug, Deserialize)]
pub struct CountEnvelope {
    /// The count value
    pub count: u64,
}
