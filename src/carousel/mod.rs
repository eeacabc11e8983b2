//! Carousel engine: fetch pipeline and rotation controller
//!
//! The carousel is the one piece of this crate with real control flow: records
//! are batch-fetched with per-item retry ([`batch`], [`fetcher`]), and a
//! [`Carousel`] controller owns the rotation state machine: current index,
//! transition re-entrancy guard, autoplay timer with hover/visibility
//! suspension, and clean teardown.
//!
//! All state lives in the controller; there are no module-level globals. One
//! controller is instantiated per page.
//!
//! # Example
//!
//! ```no_run
//! use roblox_showcase::carousel::{Carousel, RobloxProjectFetcher};
//! use roblox_showcase::config::CarouselConfig;
//! use roblox_showcase::roblox::RobloxClient;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = CarouselConfig {
//!     universe_ids: vec!["8606799872".into(), "7640282930".into()],
//!     ..Default::default()
//! };
//! let client = Arc::new(RobloxClient::new(&Default::default())?);
//! let fetcher = RobloxProjectFetcher::new(client);
//!
//! let carousel = Arc::new(Carousel::new(config));
//! carousel.load(&fetcher).await;
//! let autoplay = carousel.spawn_autoplay();
//!
//! // ... page lifetime ...
//!
//! carousel.shutdown();
//! autoplay.await?;
//! # Ok(())
//! # }
//! ```

use crate::config::CarouselConfig;
use crate::types::{CarouselEvent, Direction, DisplayModel, Phase, ProjectRecord};
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::broadcast;
use tokio_util::sync::CancellationToken;

pub mod batch;
pub mod fetcher;
pub mod render;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use batch::fetch_all;
pub use fetcher::{fetch_with_retry, ProjectFetcher, RobloxProjectFetcher};
pub use render::{render, RenderOptions, NO_DESCRIPTION_FALLBACK};

/// Capacity of the event broadcast channel
const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Internal mutable state; mutated only by the controller methods
struct CarouselState {
    items: Vec<ProjectRecord>,
    current_index: usize,
    phase: Phase,
    autoplay_enabled: bool,
    hovered: bool,
    visible: bool,
}

/// Rotation target for the shared transition path
enum Target {
    Step(Direction),
    Index(usize),
}

/// Rotation controller for the projects carousel
///
/// State machine over {Idle, Showing, Transitioning}. Navigation is rejected
/// while a transition is in flight (`is_transitioning` re-entrancy guard), and
/// autoplay is suspended while the pointer hovers the carousel or the carousel
/// is scrolled out of view. [`shutdown`](Carousel::shutdown) cancels the
/// autoplay timer and any in-flight transition; nothing fires after teardown.
pub struct Carousel {
    state: Mutex<CarouselState>,
    config: CarouselConfig,
    render_options: RenderOptions,
    event_tx: broadcast::Sender<CarouselEvent>,
    cancel: CancellationToken,
}

impl Carousel {
    /// Create an idle controller; call [`load`](Self::load) or
    /// [`set_items`](Self::set_items) to bring it to life
    pub fn new(config: CarouselConfig) -> Self {
        let (event_tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        let render_options = RenderOptions {
            title_max_chars: config.title_max_chars,
        };
        Self {
            state: Mutex::new(CarouselState {
                items: Vec::new(),
                current_index: 0,
                phase: Phase::Idle,
                autoplay_enabled: true,
                hovered: false,
                visible: true,
            }),
            config,
            render_options,
            event_tx,
            cancel: CancellationToken::new(),
        }
    }

    /// Subscribe to controller events
    pub fn subscribe(&self) -> broadcast::Receiver<CarouselEvent> {
        self.event_tx.subscribe()
    }

    /// Fetch the configured universe IDs and install the results
    ///
    /// Uses the configured batch size and retry budget. Returns the number of
    /// records that loaded; zero is the user-visible empty state, not an error.
    pub async fn load(&self, fetcher: &dyn ProjectFetcher) -> usize {
        let items = fetch_all(
            fetcher,
            &self.config.universe_ids,
            self.config.batch_size,
            &self.config.retry,
        )
        .await;
        self.set_items(items)
    }

    /// Install an already-fetched item list, replacing any previous one
    ///
    /// Non-empty items move the controller to Showing at index 0; an empty
    /// list returns it to Idle.
    pub fn set_items(&self, items: Vec<ProjectRecord>) -> usize {
        let count = items.len();
        {
            let mut state = self.state_guard();
            state.items = items;
            state.current_index = 0;
            state.phase = if count == 0 { Phase::Idle } else { Phase::Showing };
        }
        tracing::info!(count, "Carousel items loaded");
        let _ = self.event_tx.send(CarouselEvent::Loaded { count });
        count
    }

    /// Move one slide forward or back (manual navigation)
    ///
    /// Wraps around in both directions. Returns the new display model, or
    /// `None` when the carousel is empty or a transition is already in flight.
    /// Depending on configuration, manual navigation permanently disables
    /// autoplay.
    pub async fn advance(&self, direction: Direction) -> Option<DisplayModel> {
        self.rotate(Target::Step(direction), true).await
    }

    /// Jump directly to `index` (manual navigation)
    ///
    /// Out-of-range indices are a caller bug; they are rejected with `None`
    /// rather than panicking.
    pub async fn go_to(&self, index: usize) -> Option<DisplayModel> {
        self.rotate(Target::Index(index), true).await
    }

    /// Render the current slide without navigating
    pub fn render_current(&self) -> Option<DisplayModel> {
        let state = self.state_guard();
        let item = state.items.get(state.current_index)?;
        Some(render(item, &self.render_options))
    }

    /// Current slide index; `None` while no items are loaded
    pub fn current_index(&self) -> Option<usize> {
        let state = self.state_guard();
        if state.items.is_empty() {
            None
        } else {
            Some(state.current_index)
        }
    }

    /// Current rotation phase
    pub fn phase(&self) -> Phase {
        self.state_guard().phase
    }

    /// Number of loaded items
    pub fn len(&self) -> usize {
        self.state_guard().items.len()
    }

    /// Whether no items are loaded
    pub fn is_empty(&self) -> bool {
        self.state_guard().items.is_empty()
    }

    /// Whether autoplay is still enabled for this controller
    pub fn autoplay_enabled(&self) -> bool {
        self.state_guard().autoplay_enabled
    }

    /// Report whether the pointer is over the carousel region
    ///
    /// Hover suspends autoplay; clearing it resumes (unless autoplay was
    /// permanently disabled by manual navigation).
    pub fn set_hovered(&self, hovered: bool) {
        self.state_guard().hovered = hovered;
    }

    /// Report the fraction of the carousel currently visible in the viewport
    ///
    /// The host feeds this from its viewport intersection tracking; ratios
    /// below the configured threshold suspend autoplay.
    pub fn set_visibility_ratio(&self, ratio: f64) {
        let mut state = self.state_guard();
        state.visible = ratio >= self.config.visibility_threshold;
    }

    /// Spawn the autoplay timer task
    ///
    /// Ticks every `autoplay_interval`; a tick auto-advances only while the
    /// controller is Showing, autoplay is enabled, the pointer is elsewhere,
    /// and the carousel is visible. Suspension skips ticks rather than
    /// stopping the timer, so clearing the condition resumes on the next tick.
    /// The task exits when [`shutdown`](Self::shutdown) is called.
    pub fn spawn_autoplay(self: &Arc<Self>) -> tokio::task::JoinHandle<()> {
        let carousel = Arc::clone(self);
        tokio::spawn(async move {
            tracing::info!(
                interval_ms = carousel.config.autoplay_interval.as_millis(),
                "Autoplay task started"
            );
            loop {
                tokio::select! {
                    _ = carousel.cancel.cancelled() => break,
                    _ = tokio::time::sleep(carousel.config.autoplay_interval) => {}
                }
                if !carousel.autoplay_eligible() {
                    continue;
                }
                carousel.rotate(Target::Step(Direction::Forward), false).await;
            }
            tracing::info!("Autoplay task stopped");
        })
    }

    /// Tear down the controller
    ///
    /// Cancels the autoplay task and any in-flight transition. Safe to call
    /// more than once; navigation after shutdown is a no-op.
    pub fn shutdown(&self) {
        if self.cancel.is_cancelled() {
            return;
        }
        tracing::info!("Carousel shutting down");
        self.cancel.cancel();
        let _ = self.event_tx.send(CarouselEvent::Shutdown);
    }

    /// Shared transition path for manual and automatic navigation
    async fn rotate(&self, target: Target, manual: bool) -> Option<DisplayModel> {
        if self.cancel.is_cancelled() {
            return None;
        }

        let (index, item) = {
            let mut state = self.state_guard();
            if state.items.is_empty() || state.phase == Phase::Transitioning {
                return None;
            }
            let len = state.items.len();
            let next = match target {
                Target::Step(Direction::Forward) => (state.current_index + 1) % len,
                Target::Step(Direction::Back) => (state.current_index + len - 1) % len,
                Target::Index(index) => {
                    if index >= len {
                        tracing::debug!(index, len, "go_to index out of range, rejected");
                        return None;
                    }
                    index
                }
            };

            state.phase = Phase::Transitioning;
            state.current_index = next;

            if manual && self.config.disable_autoplay_on_manual_nav && state.autoplay_enabled {
                state.autoplay_enabled = false;
                let _ = self.event_tx.send(CarouselEvent::AutoplayDisabled);
            }

            (next, state.items[next].clone())
        };

        // Visual transition; observes cancellation so teardown never leaves
        // the re-entrancy guard set
        tokio::select! {
            _ = self.cancel.cancelled() => {
                self.state_guard().phase = Phase::Showing;
                return None;
            }
            _ = tokio::time::sleep(self.config.transition_duration) => {}
        }

        let model = render(&item, &self.render_options);
        self.state_guard().phase = Phase::Showing;
        let _ = self.event_tx.send(CarouselEvent::Advanced { index, manual });
        Some(model)
    }

    fn autoplay_eligible(&self) -> bool {
        let state = self.state_guard();
        state.phase == Phase::Showing
            && state.autoplay_enabled
            && !state.hovered
            && state.visible
            && !state.items.is_empty()
    }

    fn state_guard(&self) -> MutexGuard<'_, CarouselState> {
        // Lock poisoning cannot leave the state torn; every critical section
        // restores its invariants before unwinding is possible
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests;
