//! Scripted fetcher for carousel pipeline tests

use crate::error::{Error, Result};
use crate::types::ProjectRecord;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use super::fetcher::ProjectFetcher;

/// A fetcher whose per-ID behavior (failures, latency) is scripted up front
pub(crate) struct ScriptedFetcher {
    records: HashMap<String, ProjectRecord>,
    /// Remaining failures per ID; `u32::MAX` means fail forever
    failures: Mutex<HashMap<String, u32>>,
    calls: Mutex<HashMap<String, u32>>,
    latency: HashMap<String, Duration>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl ScriptedFetcher {
    pub(crate) fn new(ids: &[&str]) -> Self {
        let records = ids
            .iter()
            .map(|id| (id.to_string(), sample_record(id)))
            .collect();
        Self {
            records,
            failures: Mutex::new(HashMap::new()),
            calls: Mutex::new(HashMap::new()),
            latency: HashMap::new(),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
        }
    }

    /// Fail the first `count` fetches of `id`, then succeed
    pub(crate) fn failures_before_success(self, id: &str, count: u32) -> Self {
        self.lock_failures().insert(id.to_string(), count);
        self
    }

    /// Every fetch of `id` fails
    pub(crate) fn always_fail(self, id: &str) -> Self {
        self.lock_failures().insert(id.to_string(), u32::MAX);
        self
    }

    /// Delay each fetch of `id` to shuffle completion order within a chunk
    pub(crate) fn with_latency(mut self, id: &str, latency: Duration) -> Self {
        self.latency.insert(id.to_string(), latency);
        self
    }

    /// Number of times `id` was fetched
    pub(crate) fn call_count(&self, id: &str) -> u32 {
        *self
            .calls
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .get(id)
            .unwrap_or(&0)
    }

    /// Highest number of fetches observed in flight at once
    pub(crate) fn max_concurrency(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    fn lock_failures(&self) -> std::sync::MutexGuard<'_, HashMap<String, u32>> {
        self.failures.lock().unwrap_or_else(|p| p.into_inner())
    }
}

#[async_trait]
impl ProjectFetcher for ScriptedFetcher {
    async fn fetch_project(&self, universe_id: &str) -> Result<ProjectRecord> {
        *self
            .calls
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .entry(universe_id.to_string())
            .or_insert(0) += 1;

        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(current, Ordering::SeqCst);

        if let Some(latency) = self.latency.get(universe_id) {
            tokio::time::sleep(*latency).await;
        }

        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        let should_fail = {
            let mut failures = self.lock_failures();
            match failures.get_mut(universe_id) {
                Some(&mut u32::MAX) => true,
                Some(remaining) if *remaining > 0 => {
                    *remaining -= 1;
                    true
                }
                _ => false,
            }
        };

        if should_fail {
            return Err(Error::NoGameData {
                universe_id: universe_id.to_string(),
            });
        }

        self.records
            .get(universe_id)
            .cloned()
            .ok_or_else(|| Error::NoGameData {
                universe_id: universe_id.to_string(),
            })
    }
}

/// Build a distinguishable record for an ID
pub(crate) fn sample_record(id: &str) -> ProjectRecord {
    ProjectRecord {
        universe_id: id.to_string(),
        name: format!("Project {id}"),
        description: Some(format!("Description for {id}")),
        playing: 100,
        visits: 1_000_000,
        image_url: Some(format!("https://cdn.example/{id}.png")),
        link_url: format!("https://www.roblox.com/games/{id}"),
    }
}
