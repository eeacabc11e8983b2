//! Batch orchestrator: fetch a fixed list of records in ordered batches
//!
//! Chunks are processed sequentially; members within a chunk run concurrently
//! with join semantics (the whole chunk completes before the next starts).
//! Output order always equals input order with failed entries removed;
//! `join_all` yields results in the order the futures were given, regardless
//! of completion order.

use crate::config::RetryConfig;
use crate::types::ProjectRecord;
use futures::future::join_all;

use super::fetcher::{fetch_with_retry, ProjectFetcher};

/// Fetch every ID in `ids`, in consecutive chunks of at most `batch_size`
///
/// Failed entries (after per-item retry) are dropped. An empty result is the
/// "no data available" signal, not an error.
pub async fn fetch_all(
    fetcher: &dyn ProjectFetcher,
    ids: &[String],
    batch_size: usize,
    retry: &RetryConfig,
) -> Vec<ProjectRecord> {
    let batch_size = batch_size.max(1);
    let mut results = Vec::with_capacity(ids.len());

    for chunk in ids.chunks(batch_size) {
        let fetches = chunk.iter().map(|id| fetch_with_retry(fetcher, id, retry));
        let records = join_all(fetches).await;
        results.extend(records.into_iter().flatten());
    }

    if results.len() < ids.len() {
        tracing::info!(
            requested = ids.len(),
            loaded = results.len(),
            "Some projects were unavailable and skipped"
        );
    }

    results
}
