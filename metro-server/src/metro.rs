//! Entry point for presentation layers.
//!
//! `MetroCore` ties the shared topology, the route planner and one fleet
//! session together behind the two calls a front end needs:
//! [`MetroCore::plan_route`] and [`MetroCore::subscribe_fleet`].

use std::sync::Arc;

use rand::Rng;

use crate::config::Config;
use crate::fleet::{
    FleetSession, FleetStore, FleetSubscription, IntervalTicker, Simulator, Ticker, TrainStatus,
};
use crate::network::{initial_roster, kochi_metro};
use crate::planner::{RouteError, RoutePlan, RoutePlanner};
use crate::topology::{Topology, TopologyError};

/// The transit core: route planning plus one live fleet view.
pub struct MetroCore {
    topology: Arc<Topology>,
    config: Config,
    fleet: FleetSession,
}

impl MetroCore {
    /// Start the built-in Kochi network with a wall-clock ticker.
    ///
    /// Must be called from within a tokio runtime.
    pub fn kochi(config: Config) -> Result<Self, TopologyError> {
        let topology = kochi_metro()?;
        Ok(Self::start(topology, initial_roster(), config))
    }

    /// Start a core over `topology` with a wall-clock ticker.
    ///
    /// The simulator is seeded from `config.simulation`. Must be called
    /// from within a tokio runtime.
    pub fn start(topology: Topology, roster: Vec<TrainStatus>, config: Config) -> Self {
        let simulator = Simulator::from_config(&config.simulation);
        let ticker = IntervalTicker::new(config.simulation.tick_interval());
        Self::with_ticker(topology, roster, config, simulator, ticker)
    }

    /// Start a core with an explicit simulator and tick source.
    ///
    /// The session initially shows the first line of the topology.
    pub fn with_ticker<R, T>(
        topology: Topology,
        roster: Vec<TrainStatus>,
        config: Config,
        simulator: Simulator<R>,
        ticker: T,
    ) -> Self
    where
        R: Rng + Send + 'static,
        T: Ticker,
    {
        let initial_line = topology
            .lines()
            .next()
            .map(|l| l.name().to_string())
            .unwrap_or_default();
        let fleet = FleetSession::start(FleetStore::new(roster), simulator, ticker, &initial_line);

        Self {
            topology: Arc::new(topology),
            config,
            fleet,
        }
    }

    /// Plan a route between two named stations.
    ///
    /// Synchronous and deterministic: the same names always give the same
    /// plan.
    pub fn plan_route(&self, origin: &str, destination: &str) -> Result<RoutePlan, RouteError> {
        RoutePlanner::new(&self.topology, &self.config.route).plan_any(origin, destination)
    }

    /// Show `line` and subscribe to its live updates.
    ///
    /// Switching to a different line resets its trains to their seed state
    /// and finishes subscriptions taken for the previous line. Subscribing
    /// again to the line already shown leaves its state and existing
    /// subscribers alone. An unknown line gives an empty snapshot.
    pub fn subscribe_fleet(&self, line: &str) -> (Vec<TrainStatus>, FleetSubscription) {
        self.fleet.select_line(line);
        self.fleet.subscribe()
    }

    /// Returns the shared topology.
    pub fn topology(&self) -> &Arc<Topology> {
        &self.topology
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the fleet session.
    pub fn fleet(&self) -> &FleetSession {
        &self.fleet
    }

    /// Stop the fleet simulation. Calling it again is a no-op.
    pub fn shutdown(&self) {
        self.fleet.stop();
    }
}
