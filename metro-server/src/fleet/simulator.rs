//! Bounded random-walk perturbation of fleet state.
//!
//! Each tick nudges the numeric schedule fields of every train by a step
//! drawn from {-1, 0, +1} minutes. ETA is floored at the configured
//! minimum. Delay is left undamped: over many ticks it can wander
//! arbitrarily far in either direction. This is a property of the
//! simulation, not a model of real delay behaviour.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::trace;

use crate::config::SimulationConfig;

use super::status::TrainStatus;
use super::store::FleetStore;

/// Largest change, in minutes, a single tick applies to ETA or delay.
const MAX_STEP_MINS: i32 = 1;

/// Applies one simulation step at a time, drawing from an injected RNG.
#[derive(Debug, Clone)]
pub struct Simulator<R> {
    rng: R,
    min_eta_mins: u32,
}

impl<R: Rng> Simulator<R> {
    /// Create a simulator using `rng` for every random draw.
    pub fn new(rng: R, config: &SimulationConfig) -> Self {
        Self {
            rng,
            min_eta_mins: config.min_eta_mins.max(1),
        }
    }

    /// Compute the next status of a single train.
    ///
    /// Only ETA and delay move; stations, direction and crowd level are
    /// carried over unchanged.
    pub fn step(&mut self, status: &TrainStatus) -> TrainStatus {
        let eta_step = self.rng.gen_range(-MAX_STEP_MINS..=MAX_STEP_MINS);
        let delay_step = self.rng.gen_range(-MAX_STEP_MINS..=MAX_STEP_MINS);

        let eta = i64::from(status.eta_mins) + i64::from(eta_step);
        let eta_mins = u32::try_from(eta).unwrap_or(0).max(self.min_eta_mins);

        TrainStatus {
            eta_mins,
            delay_mins: status.delay_mins.saturating_add(delay_step),
            ..status.clone()
        }
    }

    /// Advance every entry in `store` by one step.
    pub fn tick(&mut self, store: &mut FleetStore) {
        store.apply(|status| self.step(status));
        trace!(trains = store.len(), "simulation tick applied");
    }
}

impl Simulator<ChaCha8Rng> {
    /// Create a simulator seeded from config, or from OS entropy when the
    /// config has no seed.
    pub fn from_config(config: &SimulationConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self::new(rng, config)
    }
}
