//! Shared application state for API handlers

use crate::config::Config;
use crate::roblox::RobloxClient;
use std::sync::Arc;

/// State shared across all API route handlers
#[derive(Clone)]
pub struct AppState {
    /// Upstream Roblox client
    pub client: Arc<RobloxClient>,
    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(client: Arc<RobloxClient>, config: Arc<Config>) -> Self {
        Self { client, config }
    }
}
