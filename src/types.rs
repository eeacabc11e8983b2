//! Core types for roblox-showcase

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A single portfolio project, mapped from a fetched game record
///
/// Immutable once constructed. `link_url` points at the game's public page and
/// is derived from the root place ID during mapping.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProjectRecord {
    /// Universe ID of the game in the upstream catalog
    pub universe_id: String,
    /// Display name of the game
    pub name: String,
    /// Game description, if the developer wrote one
    pub description: Option<String>,
    /// Concurrent player count at fetch time (CCU)
    pub playing: u64,
    /// Total visit count
    pub visits: u64,
    /// Icon image URL, if the thumbnail service had one
    pub image_url: Option<String>,
    /// Public page URL for the game
    pub link_url: String,
}

/// Display-ready projection of a [`ProjectRecord`]
///
/// Produced by the render sink; every field is ready to drop into the page
/// without further formatting.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DisplayModel {
    /// Icon image URL, if any
    pub image_url: Option<String>,
    /// Title, truncated with an ellipsis when it exceeds the configured length
    pub title_text: String,
    /// Player count with thousands grouping (e.g., "12,345")
    pub player_count_text: String,
    /// Visit count with thousands grouping
    pub visit_count_text: String,
    /// Description, or the fallback literal when absent
    pub description_text: String,
    /// Link target for the slide
    pub link_href: String,
}

/// Merged game record returned by `GET /games`
///
/// Field names are camelCased on the wire; the frontend reads them verbatim.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GamePayload {
    /// Universe ID of the game
    pub universe_id: u64,
    /// Root place ID (used to build the game's public page URL); zero when
    /// the upstream catalog omits it
    pub root_place_id: u64,
    /// Display name
    pub name: String,
    /// Description, if any
    pub description: Option<String>,
    /// Concurrent player count
    pub playing: u64,
    /// Total visit count
    pub visits: u64,
    /// Icon URL merged in from the thumbnails API, if any
    pub icon: Option<String>,
}

/// Response envelope for `GET /games`
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct GamesResponse {
    /// Matching game records (at most one; the envelope mirrors the upstream shape)
    pub data: Vec<GamePayload>,
}

/// Aggregated user profile returned by `GET /user`
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Numeric user ID
    pub id: u64,
    /// Account username
    pub username: String,
    /// Display name shown on the profile
    pub display_name: String,
    /// Profile description, if any
    pub description: Option<String>,
    /// Follower count
    pub followers: u64,
    /// Friend count
    pub friends: u64,
    /// Avatar headshot URL, `null` if the thumbnail service had no entry
    pub avatar_url: Option<String>,
}

/// Rotation phase of the carousel state machine
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// No items loaded yet
    Idle,
    /// A slide is displayed and navigation is accepted
    Showing,
    /// A slide change is in flight; navigation is rejected
    Transitioning,
}

/// Navigation direction for [`Carousel::advance`](crate::carousel::Carousel::advance)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Move to the next slide (wraps to the first after the last)
    Forward,
    /// Move to the previous slide (wraps to the last before the first)
    Back,
}

/// Events emitted by the carousel controller
///
/// Consumers subscribe via [`Carousel::subscribe`](crate::carousel::Carousel::subscribe);
/// no polling required.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "event")]
pub enum CarouselEvent {
    /// Items finished loading; `count` may be zero (empty state, not an error)
    Loaded {
        /// Number of records that survived fetching
        count: usize,
    },
    /// The current slide changed
    Advanced {
        /// New current index
        index: usize,
        /// Whether the change came from user navigation rather than autoplay
        manual: bool,
    },
    /// Autoplay was permanently disabled by manual navigation
    AutoplayDisabled,
    /// The controller was shut down
    Shutdown,
}
