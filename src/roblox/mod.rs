//! Upstream client for the public Roblox web APIs
//!
//! [`RobloxClient`] aggregates the handful of Roblox endpoints the portfolio
//! needs: game metadata plus icon for the projects carousel, and profile,
//! social counts, and avatar for the about section. Each aggregation issues its
//! upstream calls concurrently and fails as a whole if any required call fails
//! (join semantics, no partial success).

use crate::config::UpstreamConfig;
use crate::error::{Error, Result};
use crate::types::{GamePayload, UserProfile};
use serde::de::DeserializeOwned;
use url::Url;

pub mod wire;

use wire::{CountEnvelope, GamesEnvelope, ThumbnailEnvelope, UpstreamUser};

/// HTTP client over the public Roblox web APIs
///
/// Holds one `reqwest::Client` (connection pooling across calls) and the four
/// configured API base URLs. Stateless beyond the connection pool; every call
/// re-fetches upstream.
#[derive(Debug)]
pub struct RobloxClient {
    http: reqwest::Client,
    games_base: Url,
    thumbnails_base: Url,
    users_base: Url,
    friends_base: Url,
}

impl RobloxClient {
    /// Create a client from upstream configuration
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if any base URL fails to parse, and
    /// [`Error::Network`] if the underlying HTTP client cannot be built.
    pub fn new(config: &UpstreamConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            http,
            games_base: parse_base(&config.games_api_base, "games_api_base")?,
            thumbnails_base: parse_base(&config.thumbnails_api_base, "thumbnails_api_base")?,
            users_base: parse_base(&config.users_api_base, "users_api_base")?,
            friends_base: parse_base(&config.friends_api_base, "friends_api_base")?,
        })
    }

    /// Fetch game metadata and icon for one universe ID, merged into a single record
    ///
    /// Issues the catalog and icon lookups concurrently and merges the first
    /// entry of each.
    ///
    /// # Errors
    ///
    /// - [`Error::NoGameData`] when the catalog returns an empty data set
    /// - [`Error::GameLookup`] when either upstream call fails or decodes badly
    pub async fn fetch_game(&self, universe_id: &str) -> Result<GamePayload> {
        let games_url = endpoint(&self.games_base, "v1/games");
        let icons_url = endpoint(&self.thumbnails_base, "v1/games/icons");

        // Query slices must outlive the joined futures
        let games_query = [("universeIds", universe_id)];
        let icons_query = [
            ("universeIds", universe_id),
            ("size", "512x512"),
            ("format", "Png"),
            ("isCircular", "false"),
        ];

        let (games, icons) = tokio::try_join!(
            self.get_json::<GamesEnvelope>(&games_url, &games_query),
            self.get_json::<ThumbnailEnvelope>(&icons_url, &icons_query),
        )
        .map_err(|e| {
            tracing::warn!(universe_id, error = %e, "Game lookup failed");
            Error::GameLookup(e)
        })?;

        let icon = icons.data.into_iter().next().and_then(|t| t.image_url);
        let game = games.data.into_iter().next().ok_or_else(|| {
            tracing::debug!(universe_id, "Games API returned no data");
            Error::NoGameData {
                universe_id: universe_id.to_string(),
            }
        })?;

        Ok(GamePayload {
            universe_id: game.universe_id,
            root_place_id: game.root_place_id,
            name: game.name,
            description: game.description,
            playing: game.playing,
            visits: game.visits,
            icon,
        })
    }

    /// Fetch a user's profile, follower count, friend count, and avatar headshot
    ///
    /// All four upstream calls run concurrently; the avatar is `None` when the
    /// thumbnail service has no entry, which is not a failure.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UserLookup`] when any of the four calls fails.
    pub async fn fetch_user(&self, user_id: &str) -> Result<UserProfile> {
        let profile_url = endpoint(&self.users_base, &format!("v1/users/{user_id}"));
        let followers_url = endpoint(
            &self.friends_base,
            &format!("v1/users/{user_id}/followers/count"),
        );
        let friends_url = endpoint(
            &self.friends_base,
            &format!("v1/users/{user_id}/friends/count"),
        );
        let avatar_url = endpoint(&self.thumbnails_base, "v1/users/avatar-headshot");

        // Query slice must outlive the joined futures
        let avatar_query = [
            ("userIds", user_id),
            ("size", "420x420"),
            ("format", "Png"),
            ("isCircular", "false"),
        ];

        let (profile, followers, friends, avatar) = tokio::try_join!(
            self.get_json::<UpstreamUser>(&profile_url, &[]),
            self.get_json::<CountEnvelope>(&followers_url, &[]),
            self.get_json::<CountEnvelope>(&friends_url, &[]),
            self.get_json::<ThumbnailEnvelope>(&avatar_url, &avatar_query),
        )
        .map_err(|e| {
            tracing::warn!(user_id, error = %e, "User lookup failed");
            Error::UserLookup(e)
        })?;

        Ok(UserProfile {
            id: profile.id,
            username: profile.name,
            display_name: profile.display_name,
            description: profile.description,
            followers: followers.count,
            friends: friends.count,
            avatar_url: avatar.data.into_iter().next().and_then(|t| t.image_url),
        })
    }

    /// GET a JSON document, treating non-2xx statuses as errors
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> std::result::Result<T, reqwest::Error> {
        let mut request = self.http.get(url);
        if !query.is_empty() {
            request = request.query(query);
        }
        request.send().await?.error_for_status()?.json::<T>().await
    }
}

/// Parse and validate a configured base URL
fn parse_base(base: &str, key: &str) -> Result<Url> {
    Url::parse(base).map_err(|e| Error::Config {
        message: format!("invalid base URL '{base}': {e}"),
        key: Some(key.to_string()),
    })
}

/// Join a path onto a base URL without double slashes
fn endpoint(base: &Url, path: &str) -> String {
    format!("{}/{}", base.as_str().trim_end_matches('/'), path)
}
