//! Error types for roblox-showcase
//!
//! This module provides error handling for the library, including:
//! - Domain-specific error variants for upstream lookups and request validation
//! - HTTP status code mapping for the API layer
//! - The flat `{ "error": "<message>" }` wire shape the portfolio frontend expects

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Result type alias for roblox-showcase operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for roblox-showcase
///
/// Each variant carries enough context to pick the right HTTP status code and
/// wire message in the API layer.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g., "games_api_base")
        key: Option<String>,
    },

    /// A required query parameter was absent or empty
    #[error("missing required query parameter: {name}")]
    MissingParameter {
        /// Name of the missing parameter
        name: &'static str,
    },

    /// The upstream games catalog returned an empty data set for a universe
    #[error("no game data found for universe {universe_id}")]
    NoGameData {
        /// The universe ID that had no matching record
        universe_id: String,
    },

    /// An aggregated game metadata/icon call failed
    #[error("game lookup failed: {0}")]
    GameLookup(#[source] reqwest::Error),

    /// An aggregated user profile/social-count/avatar call failed
    #[error("user lookup failed: {0}")]
    UserLookup(#[source] reqwest::Error),

    /// Network error outside the two aggregation paths (e.g., client build)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// API server error
    #[error("API server error: {0}")]
    ApiServerError(String),
}

/// Mapping from domain errors to HTTP status codes and machine-readable codes
pub trait ToHttpStatus {
    /// HTTP status code for this error
    fn status_code(&self) -> u16;

    /// Stable machine-readable error code (used in logs and tests)
    fn error_code(&self) -> &'static str;

    /// The literal message sent on the wire in the `{ "error": ... }` body
    ///
    /// These strings are part of the public contract with the portfolio
    /// frontend and must not change.
    fn wire_message(&self) -> String;
}

impl ToHttpStatus for Error {
    fn status_code(&self) -> u16 {
        match self {
            Error::MissingParameter { .. } => 400,
            Error::NoGameData { .. } => 404,
            Error::GameLookup(_)
            | Error::UserLookup(_)
            | Error::Network(_)
            | Error::Config { .. }
            | Error::Io(_)
            | Error::Serialization(_)
            | Error::ApiServerError(_) => 500,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Error::Config { .. } => "config_error",
            Error::MissingParameter { .. } => "missing_parameter",
            Error::NoGameData { .. } => "no_game_data",
            Error::GameLookup(_) => "game_lookup_failed",
            Error::UserLookup(_) => "user_lookup_failed",
            Error::Network(_) => "network_error",
            Error::Io(_) => "io_error",
            Error::Serialization(_) => "serialization_error",
            Error::ApiServerError(_) => "api_server_error",
        }
    }

    fn wire_message(&self) -> String {
        match self {
            Error::MissingParameter { name } => format!("Missing {name}"),
            Error::NoGameData { .. } => "No game data found".to_string(),
            Error::GameLookup(_) => "Failed to fetch Roblox API".to_string(),
            Error::UserLookup(_) => "Failed to fetch Roblox user API".to_string(),
            _ => "Internal server error".to_string(),
        }
    }
}

/// JSON body sent for every error response
///
/// The portfolio frontend expects a flat `{ "error": "<message>" }` object, so
/// the richer nested shapes common in REST APIs are not used.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Human-readable error message
    pub error: String,
}

impl From<&Error> for ErrorBody {
    fn from(err: &Error) -> Self {
        Self {
            error: err.wire_message(),
        }
    }
}
