//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::fleet::TrainStatus;
use crate::planner::RoutePlan;
use crate::topology::{Line, Station};

/// Request to search stations.
#[derive(Debug, Deserialize)]
pub struct StationSearchRequest {
    /// Case-insensitive name fragment; empty or absent matches everything
    #[serde(default)]
    pub q: String,

    /// Optional line to restrict the search to
    pub line: Option<String>,
}

/// A station in search results.
#[derive(Debug, Serialize)]
pub struct StationResult {
    pub name: String,
    pub line: String,
    /// Position in the line's track order
    pub position: usize,
}

impl From<Station> for StationResult {
    fn from(station: Station) -> Self {
        Self {
            name: station.name,
            line: station.line,
            position: station.position,
        }
    }
}

/// Response for station search.
#[derive(Debug, Serialize)]
pub struct StationSearchResponse {
    pub stations: Vec<StationResult>,
}

/// A line and its stations.
#[derive(Debug, Serialize)]
pub struct LineResult {
    pub name: String,
    /// Stations in track order
    pub stations: Vec<String>,
}

impl LineResult {
    pub fn from_line(line: &Line) -> Self {
        Self {
            name: line.name().to_string(),
            stations: line.stations().to_vec(),
        }
    }
}

/// Response listing every line.
#[derive(Debug, Serialize)]
pub struct LinesResponse {
    pub lines: Vec<LineResult>,
}

/// Request to plan a route.
#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    /// Origin station name
    pub from: String,

    /// Destination station name
    pub to: String,
}

/// A planned route.
#[derive(Debug, Serialize)]
pub struct RouteResult {
    pub from: String,
    pub to: String,
    pub line: String,

    /// Stations visited, origin first
    pub stations: Vec<String>,

    pub hops: usize,
    pub distance_km: f64,

    /// Distance for display (e.g., "2.4 km")
    pub distance: String,

    pub duration_mins: i64,

    /// Duration for display (e.g., "16 min")
    pub duration: String,

    /// Fare in rupees
    pub fare: u32,

    pub interchanges: usize,
}

impl RouteResult {
    pub fn from_plan(plan: RoutePlan) -> Self {
        Self {
            distance: format!("{:.1} km", plan.distance_km),
            duration: format!("{} min", plan.duration_mins),
            from: plan.origin,
            to: plan.destination,
            line: plan.line,
            stations: plan.stations,
            hops: plan.hops,
            distance_km: plan.distance_km,
            duration_mins: plan.duration_mins,
            fare: plan.fare,
            interchanges: plan.interchanges,
        }
    }
}

/// Request for the live fleet view.
#[derive(Debug, Deserialize)]
pub struct FleetRequest {
    pub line: String,
}

/// Live status of one train.
#[derive(Debug, Serialize)]
pub struct TrainResult {
    pub id: String,
    pub line: String,
    pub current_station: String,
    pub next_station: String,
    pub direction: String,
    pub delay_mins: i32,

    /// Signed delay for display (e.g., "+2")
    pub delay: String,

    /// "on_time", "minor" or "major"
    pub delay_status: &'static str,

    /// "Low", "Medium" or "High"
    pub crowd_level: &'static str,

    pub eta_mins: u32,

    /// ETA for display (e.g., "3 min")
    pub eta: String,
}

impl TrainResult {
    pub fn from_status(status: &TrainStatus) -> Self {
        Self {
            id: status.id.clone(),
            line: status.line.clone(),
            current_station: status.current_station.clone(),
            next_station: status.next_station.clone(),
            direction: status.direction.clone(),
            delay_mins: status.delay_mins,
            delay: status.delay_label(),
            delay_status: status.delay_status().as_str(),
            crowd_level: status.crowd_level.as_str(),
            eta_mins: status.eta_mins,
            eta: format!("{} min", status.eta_mins),
        }
    }
}

/// Response for the live fleet view.
#[derive(Debug, Serialize)]
pub struct FleetResponse {
    pub line: String,
    pub trains: Vec<TrainResult>,

    /// Number of simulation ticks applied so far
    pub ticks: u64,

    /// When this snapshot was taken (RFC 3339, local time)
    pub updated_at: String,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
