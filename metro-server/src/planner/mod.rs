//! Route planning over the network topology.
//!
//! Each line is a total order of stations, so a single-line route is a
//! slice of that order between the two endpoints, reversed when travelling
//! against track order. No graph search is needed. Routes that would need
//! an interchange between lines are reported as [`RouteError::NoRoute`]
//! rather than approximated.

mod error;
mod route;

pub use error::RouteError;
pub use route::{RoutePlan, RoutePlanner};
