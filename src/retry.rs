//! Retry logic with a fixed inter-attempt delay
//!
//! The carousel fetch pipeline retries failed record lookups a bounded number
//! of times, waiting the same delay between attempts. There is no exponential
//! backoff: the request volume (a handful of records per page load) does not
//! warrant more than a flat delay.
//!
//! # Example
//!
//! ```no_run
//! use roblox_showcase::retry::{retry_fixed, IsRetryable};
//! use roblox_showcase::config::RetryConfig;
//!
//! #[derive(Debug)]
//! enum MyError {
//!     Transient,
//!     Permanent,
//! }
//!
//! impl std::fmt::Display for MyError {
//!     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
//!         write!(f, "{:?}", self)
//!     }
//! }
//!
//! impl IsRetryable for MyError {
//!     fn is_retryable(&self) -> bool {
//!         matches!(self, MyError::Transient)
//!     }
//! }
//!
//! # async fn example() -> Result<(), MyError> {
//! let config = RetryConfig::default();
//! let result = retry_fixed(&config, || async {
//!     // Your operation here
//!     Ok::<_, MyError>(())
//! }).await?;
//! # Ok(())
//! # }
//! ```

use crate::config::RetryConfig;
use crate::error::Error;
use std::future::Future;

/// Trait for errors that can be classified as retryable or not
///
/// Transient failures (network timeouts, connection resets, empty upstream
/// responses that may fill in on the next attempt) should return `true`.
/// Permanent failures (bad configuration, invalid input) should return `false`.
pub trait IsRetryable {
    /// Returns true if the error is transient and the operation should be retried
    fn is_retryable(&self) -> bool;
}

impl IsRetryable for Error {
    fn is_retryable(&self) -> bool {
        match self {
            // An empty data set can be a transient upstream hiccup, so it is
            // retried like any other failure
            Error::NoGameData { .. } => true,
            // Aggregated upstream calls are retried wholesale
            Error::GameLookup(_) | Error::UserLookup(_) => true,
            Error::Network(e) => e.is_timeout() || e.is_connect(),
            Error::Io(e) => matches!(
                e.kind(),
                std::io::ErrorKind::TimedOut
                    | std::io::ErrorKind::ConnectionRefused
                    | std::io::ErrorKind::ConnectionReset
                    | std::io::ErrorKind::ConnectionAborted
                    | std::io::ErrorKind::BrokenPipe
                    | std::io::ErrorKind::Interrupted
            ),
            // Request validation and configuration problems are permanent
            Error::MissingParameter { .. } => false,
            Error::Config { .. } => false,
            Error::Serialization(_) => false,
            Error::ApiServerError(_) => false,
        }
    }
}

/// Execute an async operation with bounded, fixed-delay retry
///
/// # Arguments
///
/// * `config` - Retry configuration (max retries, fixed delay)
/// * `operation` - Async closure returning `Result<T, E>` where `E: IsRetryable`
///
/// # Returns
///
/// The successful result, or the last error once the retry budget is spent or
/// a non-retryable error occurs.
pub async fn retry_fixed<F, Fut, T, E>(config: &RetryConfig, mut operation: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: IsRetryable + std::fmt::Display,
{
    let mut attempt = 0;

    loop {
        match operation().await {
            Ok(result) => {
                if attempt > 0 {
                    tracing::info!(attempts = attempt + 1, "Operation succeeded after retry");
                }
                return Ok(result);
            }
            Err(e) if e.is_retryable() && attempt < config.max_retries => {
                attempt += 1;

                tracing::warn!(
                    error = %e,
                    attempt = attempt,
                    max_retries = config.max_retries,
                    delay_ms = config.delay.as_millis(),
                    "Operation failed, retrying"
                );

                tokio::time::sleep(config.delay).await;
            }
            Err(e) => {
                if e.is_retryable() {
                    tracing::error!(
                        error = %e,
                        attempts = attempt + 1,
                        "Operation failed after all retry attempts exhausted"
                    );
                } else {
                    tracing::error!(error = %e, "Operation failed with non-retryable error");
                }
                return Err(e);
            }
        }
    }
}
