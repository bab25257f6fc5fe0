//! A live viewing session over the fleet.
//!
//! A session owns one [`FleetStore`], the currently selected line and a
//! background task that advances the store on every tick. Readers get
//! filtered snapshots; the task always mutates the full roster.
//!
//! Guarantees:
//! - ticks are handled one at a time by a single task, so two mutations of
//!   the roster never interleave;
//! - selecting a line swaps the visible subset and resets it to seed under
//!   the same lock the task mutates under;
//! - once [`FleetSession::stop`] returns, no tick mutates the store again.

use std::sync::Arc;

use parking_lot::Mutex;
use rand::Rng;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use super::simulator::Simulator;
use super::status::TrainStatus;
use super::store::FleetStore;
use super::ticker::Ticker;

/// Mutable session state, guarded by one lock.
struct SessionState {
    store: FleetStore,
    selected: String,
    /// Bumped on every line selection; subscriptions from an older
    /// generation are finished.
    generation: u64,
    stopped: bool,
    ticks: u64,
}

struct Shared {
    state: Mutex<SessionState>,
    /// Version counter, bumped after every change subscribers may care about.
    version: watch::Sender<u64>,
}

impl Shared {
    fn notify(&self) {
        self.version.send_modify(|v| *v = v.wrapping_add(1));
    }
}

/// Handle to a running fleet simulation.
pub struct FleetSession {
    shared: Arc<Shared>,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl FleetSession {
    /// Start a session showing `line`, ticking on `ticker`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start<R, T>(
        store: FleetStore,
        simulator: Simulator<R>,
        ticker: T,
        line: &str,
    ) -> Self
    where
        R: Rng + Send + 'static,
        T: Ticker,
    {
        let (version, _) = watch::channel(0);
        let shared = Arc::new(Shared {
            state: Mutex::new(SessionState {
                store,
                selected: line.to_string(),
                generation: 0,
                stopped: false,
                ticks: 0,
            }),
            version,
        });

        let task = tokio::spawn(drive(shared.clone(), simulator, ticker));
        info!(line, "fleet session started");

        Self {
            shared,
            task: Mutex::new(Some(task)),
        }
    }

    /// Returns the currently selected line.
    pub fn selected_line(&self) -> String {
        self.shared.state.lock().selected.clone()
    }

    /// Switch the visible line.
    ///
    /// The newly selected line's trains are reset to their seed values, so
    /// drift accumulated on an earlier visit is not carried forward.
    /// Subscriptions taken before the switch are finished. Selecting the
    /// line that is already visible changes nothing.
    pub fn select_line(&self, line: &str) {
        {
            let mut state = self.shared.state.lock();
            if state.selected == line {
                return;
            }
            let reset = state.store.reset_line(line);
            state.selected = line.to_string();
            state.generation += 1;
            debug!(line, reset, "fleet line selected");
        }
        self.shared.notify();
    }

    /// Returns the trains on the selected line.
    pub fn visible(&self) -> Vec<TrainStatus> {
        let state = self.shared.state.lock();
        state.store.roster_for(&state.selected)
    }

    /// Returns the trains on any line, without changing the selection.
    pub fn roster_for(&self, line: &str) -> Vec<TrainStatus> {
        self.shared.state.lock().store.roster_for(line)
    }

    /// Returns how many ticks have been applied so far.
    pub fn ticks(&self) -> u64 {
        self.shared.state.lock().ticks
    }

    /// Snapshot the selected line and subscribe to its future updates.
    pub fn subscribe(&self) -> (Vec<TrainStatus>, FleetSubscription) {
        // Subscribe before reading the snapshot so a tick landing in between
        // is still reported by `next`.
        let version = self.shared.version.subscribe();

        let state = self.shared.state.lock();
        let snapshot = state.store.roster_for(&state.selected);
        let subscription = FleetSubscription {
            shared: self.shared.clone(),
            version,
            line: state.selected.clone(),
            generation: state.generation,
            cancelled: false,
        };
        (snapshot, subscription)
    }

    /// Stop the simulation.
    ///
    /// No tick mutates the store after this returns. Calling it again is a
    /// no-op.
    pub fn stop(&self) {
        let was_running = {
            let mut state = self.shared.state.lock();
            !std::mem::replace(&mut state.stopped, true)
        };

        if let Some(task) = self.task.lock().take() {
            task.abort();
        }

        if was_running {
            self.shared.notify();
            info!("fleet session stopped");
        }
    }

    /// Returns true once the session has been stopped.
    pub fn is_stopped(&self) -> bool {
        self.shared.state.lock().stopped
    }
}

impl Drop for FleetSession {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Driver loop: one tick at a time until the ticker ends or the session stops.
async fn drive<R: Rng, T: Ticker>(
    shared: Arc<Shared>,
    mut simulator: Simulator<R>,
    mut ticker: T,
) {
    while ticker.tick().await {
        {
            let mut state = shared.state.lock();
            if state.stopped {
                break;
            }
            simulator.tick(&mut state.store);
            state.ticks += 1;
        }
        shared.notify();
    }
    debug!("fleet driver finished");
}

/// One subscriber's view of a session's selected line.
///
/// A subscription ends when it is cancelled, when the session switches to
/// another line, or when the session stops. Once ended, it never yields
/// another snapshot.
pub struct FleetSubscription {
    shared: Arc<Shared>,
    version: watch::Receiver<u64>,
    line: String,
    generation: u64,
    cancelled: bool,
}

impl FleetSubscription {
    /// Returns the line this subscription follows.
    pub fn line(&self) -> &str {
        &self.line
    }

    /// Wait for the next change and return the updated trains.
    ///
    /// Returns `None` once the subscription has ended.
    pub async fn next(&mut self) -> Option<Vec<TrainStatus>> {
        if self.cancelled {
            return None;
        }
        if self.version.changed().await.is_err() {
            self.cancelled = true;
            return None;
        }

        let state = self.shared.state.lock();
        if state.stopped || state.generation != self.generation {
            self.cancelled = true;
            return None;
        }
        Some(state.store.roster_for(&self.line))
    }

    /// Stop receiving updates. Calling it again is a no-op.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    /// Returns true once the subscription has ended.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}
