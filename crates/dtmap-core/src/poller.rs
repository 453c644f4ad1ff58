//! Fixed-interval polling of the backend's scraping progress.
//!
//! A poller moves through `Idle → Polling → Idle` exactly once. It leaves
//! `Polling` when the backend reports 100%, when a poll fails, or when
//! [`PollerHandle::stop`] is called, whichever happens first.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tracing::{debug, trace};

use dtmap_client::MappingApi;

use crate::view::ProgressIndicator;

/// Delay between progress polls.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

const MIN_POLL_INTERVAL: Duration = Duration::from_millis(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollState {
    Idle,
    Polling,
}

pub struct ProgressPoller;

impl ProgressPoller {
    /// Show the indicator and start polling on the current tokio runtime.
    ///
    /// The first poll is issued one `interval` after the start.
    pub fn start(
        api: Arc<dyn MappingApi>,
        indicator: Arc<dyn ProgressIndicator>,
        interval: Duration,
    ) -> PollerHandle {
        let state = Arc::new(Mutex::new(PollState::Polling));
        indicator.show();
        let task = tokio::spawn(poll_loop(
            api,
            Arc::clone(&indicator),
            Arc::clone(&state),
            interval.max(MIN_POLL_INTERVAL),
        ));
        PollerHandle {
            state,
            indicator,
            task,
        }
    }
}

/// Owner of a running poll task. Dropping it cancels the task without
/// touching the indicator.
pub struct PollerHandle {
    state: Arc<Mutex<PollState>>,
    indicator: Arc<dyn ProgressIndicator>,
    task: JoinHandle<()>,
}

impl PollerHandle {
    pub fn state(&self) -> PollState {
        *lock(&self.state)
    }

    /// Stop polling and hide the indicator. Safe to call more than once.
    pub fn stop(&self) {
        let mut state = lock(&self.state);
        *state = PollState::Idle;
        self.task.abort();
        self.indicator.hide();
    }
}

impl Drop for PollerHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn poll_loop(
    api: Arc<dyn MappingApi>,
    indicator: Arc<dyn ProgressIndicator>,
    state: Arc<Mutex<PollState>>,
    period: Duration,
) {
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    loop {
        ticker.tick().await;
        if *lock(&state) == PollState::Idle {
            return;
        }
        match api.scraping_progress().await {
            Ok(progress) => {
                // Holding the lock keeps a concurrent stop() from hiding the
                // bar between our check and the update.
                let mut current = lock(&state);
                if *current == PollState::Idle {
                    return;
                }
                let percent = progress.percentage();
                trace!(percent, "progress polled");
                indicator.update(percent);
                if progress.is_complete() {
                    debug!("progress reached 100%, stopping poller");
                    *current = PollState::Idle;
                    indicator.hide();
                    return;
                }
            }
            Err(err) => {
                debug!(error = %err, "progress poll failed, stopping poller");
                *lock(&state) = PollState::Idle;
                return;
            }
        }
    }
}

fn lock(state: &Mutex<PollState>) -> MutexGuard<'_, PollState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}
