//! Remote record fetcher: one project by universe ID, with bounded retry
//!
//! The fetcher is a trait so the batch orchestrator and controller tests can
//! swap in scripted implementations; the production implementation wraps
//! [`RobloxClient`].

use crate::config::RetryConfig;
use crate::error::Result;
use crate::retry::retry_fixed;
use crate::roblox::RobloxClient;
use crate::types::ProjectRecord;
use async_trait::async_trait;
use std::sync::Arc;

/// Source of project records, keyed by universe ID
#[async_trait]
pub trait ProjectFetcher: Send + Sync {
    /// Fetch one project record
    ///
    /// An upstream record with no data elements is an error, not an empty
    /// success; callers decide whether to retry or skip.
    async fn fetch_project(&self, universe_id: &str) -> Result<ProjectRecord>;
}

/// Production fetcher backed by the Roblox upstream client
pub struct RobloxProjectFetcher {
    client: Arc<RobloxClient>,
}

impl RobloxProjectFetcher {
    /// Create a fetcher over an existing client
    pub fn new(client: Arc<RobloxClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProjectFetcher for RobloxProjectFetcher {
    async fn fetch_project(&self, universe_id: &str) -> Result<ProjectRecord> {
        let game = self.client.fetch_game(universe_id).await?;
        Ok(ProjectRecord {
            universe_id: game.universe_id.to_string(),
            name: game.name,
            description: game.description,
            playing: game.playing,
            visits: game.visits,
            image_url: game.icon,
            link_url: game_link_url(game.universe_id, game.root_place_id),
        })
    }
}

/// Public page URL for a game; falls back to the universe ID when the catalog
/// has no root place for the record
fn game_link_url(universe_id: u64, root_place_id: u64) -> String {
    let place = if root_place_id != 0 {
        root_place_id
    } else {
        universe_id
    };
    format!("https://www.roblox.com/games/{place}")
}

/// Fetch one record with bounded fixed-delay retry, skipping on exhaustion
///
/// Returns `None` after the retry budget is spent; per the pipeline contract a
/// missing record means "skip this item", never a propagated error.
pub async fn fetch_with_retry(
    fetcher: &dyn ProjectFetcher,
    universe_id: &str,
    retry: &RetryConfig,
) -> Option<ProjectRecord> {
    match retry_fixed(retry, || fetcher.fetch_project(universe_id)).await {
        Ok(record) => Some(record),
        Err(e) => {
            tracing::warn!(universe_id, error = %e, "Skipping project after retries exhausted");
            None
        }
    }
}
