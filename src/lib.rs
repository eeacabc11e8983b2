//! # roblox-showcase
//!
//! Backend library for a Roblox game developer's portfolio site.
//!
//! Two things live here:
//!
//! - **Proxy API** - stateless, CORS-open `GET /games` and `GET /user`
//!   endpoints that aggregate the public Roblox web APIs so the static page
//!   never talks to Roblox directly.
//! - **Carousel engine** - the project carousel's fetch-and-rotate pipeline:
//!   ordered batch fetching with per-item retry, and a rotation controller
//!   with autoplay, hover/visibility suspension, and clean teardown.
//!
//! ## Design Philosophy
//!
//! - **Library-first** - No CLI or UI, purely a Rust crate for embedding
//! - **Sensible defaults** - `Config::default()` points at the public Roblox APIs
//! - **Event-driven** - Consumers subscribe to carousel events, no polling required
//! - **Stateless proxy** - Every API request re-fetches upstream; no cache, no auth
//!
//! ## Quick Start
//!
//! ```no_run
//! use roblox_showcase::{Carousel, Config, RobloxClient, RobloxProjectFetcher};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Arc::new(Config::default());
//!     let client = Arc::new(RobloxClient::new(&config.upstream)?);
//!
//!     // Serve the proxy endpoints
//!     tokio::spawn({
//!         let client = client.clone();
//!         let config = config.clone();
//!         async move { roblox_showcase::api::start_api_server(client, config).await }
//!     });
//!
//!     // Drive the carousel
//!     let carousel = Arc::new(Carousel::new(config.carousel.clone()));
//!     let fetcher = RobloxProjectFetcher::new(client);
//!     carousel.load(&fetcher).await;
//!     let autoplay = carousel.spawn_autoplay();
//!
//!     roblox_showcase::run_with_shutdown(&carousel).await;
//!     autoplay.await?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// REST API module
pub mod api;
/// Carousel fetch pipeline and rotation controller
pub mod carousel;
/// Configuration types
pub mod config;
/// Error types
pub mod error;
/// Retry logic with fixed delay
pub mod retry;
/// Upstream Roblox API client
pub mod roblox;
/// Core types and events
pub mod types;

// Re-export commonly used types
pub use carousel::{Carousel, ProjectFetcher, RobloxProjectFetcher};
pub use config::{CarouselConfig, Config, RetryConfig, UpstreamConfig};
pub use error::{Error, ErrorBody, Result, ToHttpStatus};
pub use roblox::RobloxClient;
pub use types::{
    CarouselEvent, Direction, DisplayModel, GamePayload, GamesResponse, Phase, ProjectRecord,
    UserProfile,
};

/// Wait for a termination signal, then shut the carousel down.
///
/// - **Unix:** listens for SIGTERM and SIGINT, with fallbacks if signal
///   registration fails.
/// - **Windows/other:** listens for Ctrl+C via `tokio::signal::ctrl_c()`.
pub async fn run_with_shutdown(carousel: &Carousel) {
    wait_for_signal().await;
    carousel.shutdown();
}

#[cfg(unix)]
async fn wait_for_signal() {
    use tokio::signal::unix::{signal, SignalKind};

    // Signal registration may fail in restricted environments (containers, tests)
    let sigterm_result = signal(SignalKind::terminate());
    let sigint_result = signal(SignalKind::interrupt());

    match (sigterm_result, sigint_result) {
        (Ok(mut sigterm), Ok(mut sigint)) => {
            tokio::select! {
                _ = sigterm.recv() => {
                    tracing::info!("Received SIGTERM signal");
                }
                _ = sigint.recv() => {
                    tracing::info!("Received SIGINT signal (Ctrl+C)");
                }
            }
        }
        (Err(e), _) => {
            tracing::warn!(error = %e, "Could not register SIGTERM handler, waiting for SIGINT only");
            if let Ok(mut sigint) = signal(SignalKind::interrupt()) {
                sigint.recv().await;
                tracing::info!("Received SIGINT signal (Ctrl+C)");
            } else {
                tracing::error!("Could not register any signal handlers, using ctrl_c fallback");
                tokio::signal::ctrl_c().await.ok();
            }
        }
        (_, Err(e)) => {
            tracing::warn!(error = %e, "Could not register SIGINT handler, waiting for SIGTERM only");
            if let Ok(mut sigterm) = signal(SignalKind::terminate()) {
                sigterm.recv().await;
                tracing::info!("Received SIGTERM signal");
            } else {
                tracing::error!("Could not register any signal handlers, using ctrl_c fallback");
                tokio::signal::ctrl_c().await.ok();
            }
        }
    }
}

#[cfg(not(unix))]
async fn wait_for_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => {
            tracing::info!("Received Ctrl+C signal");
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C signal");
        }
    }
}
