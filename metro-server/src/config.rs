//! Configuration for route costing and the live fleet simulation.
//!
//! Every value has a default matching the published Kochi metro tariff.
//! An embedding application can override any subset of them from a JSON
//! file; missing fields fall back to their defaults.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

/// Errors from loading a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid configuration JSON
    #[error("invalid config file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Cost model used by the route planner.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RouteConfig {
    /// Fare charged for any journey, before distance (rupees).
    pub base_fare: u32,

    /// Fare added per station hop (rupees).
    pub per_hop_fare: u32,

    /// Maximum fare regardless of distance (rupees).
    pub fare_cap: u32,

    /// Fixed boarding/alighting time added to every journey (minutes).
    pub base_duration_mins: i64,

    /// Running time per station hop (minutes).
    pub per_hop_duration_mins: i64,

    /// Average distance between adjacent stations (km).
    pub km_per_hop: f64,
}

impl RouteConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        base_fare: u32,
        per_hop_fare: u32,
        fare_cap: u32,
        base_duration_mins: i64,
        per_hop_duration_mins: i64,
        km_per_hop: f64,
    ) -> Self {
        Self {
            base_fare,
            per_hop_fare,
            fare_cap,
            base_duration_mins,
            per_hop_duration_mins,
            km_per_hop,
        }
    }

    /// Fare for a journey of `hops` stations, capped at `fare_cap`.
    pub fn fare_for(&self, hops: usize) -> u32 {
        let hops = u32::try_from(hops).unwrap_or(u32::MAX);
        self.per_hop_fare
            .saturating_mul(hops)
            .saturating_add(self.base_fare)
            .min(self.fare_cap)
    }

    /// Travel time in minutes for a journey of `hops` stations.
    pub fn duration_mins_for(&self, hops: usize) -> i64 {
        let hops = i64::try_from(hops).unwrap_or(i64::MAX);
        self.per_hop_duration_mins
            .saturating_mul(hops)
            .saturating_add(self.base_duration_mins)
    }
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            base_fare: 10,
            per_hop_fare: 2,
            fare_cap: 40,
            base_duration_mins: 12,
            per_hop_duration_mins: 2,
            km_per_hop: 1.2,
        }
    }
}

/// Parameters for the live fleet simulation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Wall-clock time between ticks (seconds). Zero is treated as 1.
    pub tick_interval_secs: u64,

    /// Floor applied to every ETA after a tick (minutes).
    pub min_eta_mins: u32,

    /// Seed for the perturbation RNG. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl SimulationConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(tick_interval_secs: u64, min_eta_mins: u32, seed: Option<u64>) -> Self {
        Self {
            tick_interval_secs,
            min_eta_mins,
            seed,
        }
    }

    /// Returns the tick interval for tokio timers, at least one second.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(self.tick_interval_secs.max(1))
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            tick_interval_secs: 10,
            min_eta_mins: 1,
            seed: None,
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub route: RouteConfig,
    pub simulation: SimulationConfig,
}

impl Config {
    /// Load configuration from a JSON file.
    ///
    /// Fields absent from the file keep their default values.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&contents)?;
        Ok(config)
    }
}
