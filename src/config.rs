//! Configuration types for roblox-showcase

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::time::Duration;
use utoipa::ToSchema;

/// Top-level configuration
///
/// Every field has a sensible default, so `Config::default()` produces a
/// working setup pointed at the public Roblox APIs.
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct Config {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Upstream Roblox API endpoints
    #[serde(default)]
    pub upstream: UpstreamConfig,

    /// Carousel pipeline behavior
    #[serde(default)]
    pub carousel: CarouselConfig,
}

/// HTTP server configuration
///
/// Used as a nested sub-config within [`Config`].
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct ServerConfig {
    /// REST API settings
    #[serde(default)]
    pub api: ApiConfig,
}

/// REST API configuration (bind address, CORS)
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiConfig {
    /// Address to bind the API server to (default: 127.0.0.1:8080)
    #[serde(default = "default_bind_address")]
    pub bind_address: SocketAddr,

    /// Enable CORS headers (default: true; the endpoints exist to be called
    /// cross-origin from the static portfolio page)
    #[serde(default = "default_true")]
    pub cors_enabled: bool,

    /// Allowed CORS origins; "*" allows any origin (default: ["*"])
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            cors_enabled: true,
            cors_origins: default_cors_origins(),
        }
    }
}

/// Upstream Roblox web API base URLs and request timeout
///
/// The bases are overridable so tests can point the client at a mock server.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct UpstreamConfig {
    /// Base URL of the games catalog API (default: <https://games.roblox.com>)
    #[serde(default = "default_games_api_base")]
    pub games_api_base: String,

    /// Base URL of the thumbnails API (default: <https://thumbnails.roblox.com>)
    #[serde(default = "default_thumbnails_api_base")]
    pub thumbnails_api_base: String,

    /// Base URL of the users API (default: <https://users.roblox.com>)
    #[serde(default = "default_users_api_base")]
    pub users_api_base: String,

    /// Base URL of the friends API (default: <https://friends.roblox.com>)
    #[serde(default = "default_friends_api_base")]
    pub friends_api_base: String,

    /// Per-request timeout (default: 10 seconds)
    #[serde(default = "default_request_timeout", with = "duration_ms_serde")]
    pub request_timeout: Duration,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            games_api_base: default_games_api_base(),
            thumbnails_api_base: default_thumbnails_api_base(),
            users_api_base: default_users_api_base(),
            friends_api_base: default_friends_api_base(),
            request_timeout: default_request_timeout(),
        }
    }
}

/// Carousel pipeline configuration (fetch batching, retry, rotation timing)
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CarouselConfig {
    /// Universe IDs of the projects to show, in display order
    #[serde(default)]
    pub universe_ids: Vec<String>,

    /// Number of records fetched concurrently per batch (default: 3)
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    /// Per-record retry behavior
    #[serde(default)]
    pub retry: RetryConfig,

    /// Interval between automatic advances (default: 5000 ms)
    #[serde(default = "default_autoplay_interval", with = "duration_ms_serde")]
    pub autoplay_interval: Duration,

    /// Duration of the visual transition between slides (default: 150 ms)
    #[serde(default = "default_transition_duration", with = "duration_ms_serde")]
    pub transition_duration: Duration,

    /// Maximum title length before truncation with an ellipsis (default: 30)
    #[serde(default = "default_title_max_chars")]
    pub title_max_chars: usize,

    /// Fraction of the carousel that must be visible for autoplay to run
    /// (default: 0.3)
    #[serde(default = "default_visibility_threshold")]
    pub visibility_threshold: f64,

    /// Permanently disable autoplay once the user navigates manually
    /// (default: true)
    #[serde(default = "default_true")]
    pub disable_autoplay_on_manual_nav: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            universe_ids: Vec::new(),
            batch_size: default_batch_size(),
            retry: RetryConfig::default(),
            autoplay_interval: default_autoplay_interval(),
            transition_duration: default_transition_duration(),
            title_max_chars: default_title_max_chars(),
            visibility_threshold: default_visibility_threshold(),
            disable_autoplay_on_manual_nav: true,
        }
    }
}

/// Retry configuration for per-record fetches
///
/// The delay is fixed between attempts; the record count is small enough that
/// exponential backoff would buy nothing.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct RetryConfig {
    /// Maximum number of retry attempts after the first failure (default: 3)
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Fixed delay between attempts (default: 300 ms)
    #[serde(default = "default_retry_delay", with = "duration_ms_serde")]
    pub delay: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: default_max_retries(),
            delay: default_retry_delay(),
        }
    }
}

fn default_bind_address() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 8080))
}

fn default_true() -> bool {
    true
}

fn default_cors_origins() -> Vec<String> {
    vec!["*".to_string()]
}

fn default_games_api_base() -> String {
    "https://games.roblox.com".to_string()
}

fn default_thumbnails_api_base() -> String {
    "https://thumbnails.roblox.com".to_string()
}

fn default_users_api_base() -> String {
    "https://users.roblox.com".to_string()
}

fn default_friends_api_base() -> String {
    "https://friends.roblox.com".to_string()
}

fn default_request_timeout() -> Duration {
    Duration::from_secs(10)
}

fn default_batch_size() -> usize {
    3
}

fn default_autoplay_interval() -> Duration {
    Duration::from_millis(5000)
}

fn default_transition_duration() -> Duration {
    Duration::from_millis(150)
}

fn default_title_max_chars() -> usize {
    30
}

fn default_visibility_threshold() -> f64 {
    0.3
}

fn default_max_retries() -> u32 {
    3
}

fn default_retry_delay() -> Duration {
    Duration::from_millis(300)
}

/// Serialize/deserialize `Duration` as whole milliseconds
///
/// Every interval in this crate is between 150 ms and a few seconds, so
/// millisecond resolution keeps config files readable.
mod duration_ms_serde {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(duration.as_millis() as u64)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(millis))
    }
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_points_at_roblox() {
        let config = Config::default();
        assert_eq!(config.upstream.games_api_base, "https://games.roblox.com");
        assert_eq!(config.carousel.batch_size, 3);
        assert_eq!(config.carousel.retry.max_retries, 3);
        assert_eq!(config.carousel.retry.delay, Duration::from_millis(300));
        assert_eq!(
            config.carousel.autoplay_interval,
            Duration::from_millis(5000)
        );
        assert!(config.carousel.disable_autoplay_on_manual_nav);
    }

    #[test]
    fn test_durations_roundtrip_as_millis() {
        let config = CarouselConfig::default();
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["autoplay_interval"], 5000);
        assert_eq!(json["transition_duration"], 150);
        assert_eq!(json["retry"]["delay"], 300);

        let parsed: CarouselConfig = serde_json::from_value(json).unwrap();
        assert_eq!(parsed.autoplay_interval, Duration::from_millis(5000));
    }

    #[test]
    fn test_empty_json_uses_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert!(config.server.api.cors_enabled);
        assert_eq!(config.server.api.cors_origins, vec!["*".to_string()]);
        assert_eq!(config.carousel.title_max_chars, 30);
    }
}
