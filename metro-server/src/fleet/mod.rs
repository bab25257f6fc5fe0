//! Live fleet state and its simulated updates.
//!
//! The fleet is a fixed roster of trains. A [`FleetSession`] owns a
//! [`FleetStore`] and advances it on every tick from a [`Ticker`], using a
//! [`Simulator`] that nudges ETA and delay by bounded random steps.
//! There is no external telemetry: every change comes from the simulation.

mod session;
mod simulator;
mod status;
mod store;
mod ticker;

pub use session::{FleetSession, FleetSubscription};
pub use simulator::Simulator;
pub use status::{CrowdLevel, DelayStatus, TrainStatus};
pub use store::FleetStore;
pub use ticker::{IntervalTicker, ManualTicker, TickTrigger, Ticker};
