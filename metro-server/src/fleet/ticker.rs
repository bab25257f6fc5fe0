//! Tick sources for the fleet simulation.
//!
//! The session driver never touches a clock directly; it awaits a
//! [`Ticker`]. Production uses a tokio interval, tests drive ticks by hand.

use std::future::Future;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{Instant, Interval, MissedTickBehavior};

/// A source of simulation ticks.
pub trait Ticker: Send + 'static {
    /// Wait for the next tick.
    ///
    /// Returns `false` once the source is exhausted and no further ticks
    /// will ever arrive.
    fn tick(&mut self) -> impl Future<Output = bool> + Send;
}

/// Shortest period an [`IntervalTicker`] runs at.
const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Wall-clock ticker backed by a tokio interval.
///
/// The first tick fires one full period after creation, not immediately.
/// Ticks missed while a previous tick was still being handled are skipped
/// rather than delivered in a burst; the schedule resumes on the next
/// period boundary.
pub struct IntervalTicker {
    interval: Interval,
}

impl IntervalTicker {
    /// Create a ticker firing every `period`.
    ///
    /// A zero period is raised to one millisecond. Must be called from
    /// within a tokio runtime.
    pub fn new(period: Duration) -> Self {
        let period = period.max(MIN_PERIOD);
        let mut interval = tokio::time::interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        Self { interval }
    }
}

impl Ticker for IntervalTicker {
    async fn tick(&mut self) -> bool {
        self.interval.tick().await;
        true
    }
}

/// Ticker driven explicitly through a [`TickTrigger`].
pub struct ManualTicker {
    rx: mpsc::UnboundedReceiver<()>,
}

/// Handle that fires ticks on a paired [`ManualTicker`].
#[derive(Clone)]
pub struct TickTrigger {
    tx: mpsc::UnboundedSender<()>,
}

impl ManualTicker {
    /// Create a ticker and the trigger that drives it.
    pub fn new() -> (TickTrigger, Self) {
        let (tx, rx) = mpsc::unbounded_channel();
        (TickTrigger { tx }, Self { rx })
    }
}

impl Ticker for ManualTicker {
    async fn tick(&mut self) -> bool {
        self.rx.recv().await.is_some()
    }
}

impl TickTrigger {
    /// Queue one tick.
    ///
    /// Returns `false` if the ticker has been dropped.
    pub fn fire(&self) -> bool {
        self.tx.send(()).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn manual_ticker_delivers_fired_ticks() {
        let (trigger, mut ticker) = ManualTicker::new();

        assert!(trigger.fire());
        assert!(trigger.fire());

        assert!(ticker.tick().await);
        assert!(ticker.tick().await);
    }

    #[tokio::test]
    async fn manual_ticker_ends_when_trigger_dropped() {
        let (trigger, mut ticker) = ManualTicker::new();
        drop(trigger);

        assert!(!ticker.tick().await);
    }

    #[tokio::test]
    async fn fire_fails_after_ticker_dropped() {
        let (trigger, ticker) = ManualTicker::new();
        drop(ticker);

        assert!(!trigger.fire());
    }

    #[tokio::test(start_paused = true)]
    async fn interval_ticker_waits_one_period() {
        let start = Instant::now();
        let mut ticker = IntervalTicker::new(Duration::from_secs(10));

        assert!(ticker.tick().await);
        assert!(start.elapsed() >= Duration::from_secs(10));
    }

    #[tokio::test(start_paused = true)]
    async fn interval_ticker_skips_missed_ticks() {
        let start = Instant::now();
        let mut ticker = IntervalTicker::new(Duration::from_secs(10));

        // Deadlines at 10s and 20s both pass while nobody is waiting.
        tokio::time::advance(Duration::from_secs(25)).await;

        assert!(ticker.tick().await);
        assert_eq!(start.elapsed(), Duration::from_secs(25));

        // The 20s tick is dropped; the next one lands on the 30s boundary.
        assert!(ticker.tick().await);
        assert_eq!(start.elapsed(), Duration::from_secs(30));

        assert!(ticker.tick().await);
        assert_eq!(start.elapsed(), Duration::from_secs(40));
    }

    #[tokio::test(start_paused = true)]
    async fn interval_ticker_accepts_zero_period() {
        let start = Instant::now();
        let mut ticker = IntervalTicker::new(Duration::ZERO);

        assert!(ticker.tick().await);
        assert_eq!(start.elapsed(), MIN_PERIOD);
    }
}
