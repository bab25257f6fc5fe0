//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use chrono::Local;
use tracing::warn;

use crate::planner::RouteError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/lines", get(list_lines))
        .route("/api/stations/search", get(search_stations))
        .route("/api/route", get(plan_route))
        .route("/api/fleet", get(fleet))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List every line with its stations in track order.
async fn list_lines(State(state): State<AppState>) -> Json<LinesResponse> {
    let lines = state
        .core
        .topology()
        .lines()
        .map(LineResult::from_line)
        .collect();

    Json(LinesResponse { lines })
}

/// Search stations by name fragment.
async fn search_stations(
    State(state): State<AppState>,
    Query(req): Query<StationSearchRequest>,
) -> Json<StationSearchResponse> {
    let stations = state
        .core
        .topology()
        .search(&req.q, req.line.as_deref())
        .into_iter()
        .map(StationResult::from)
        .collect();

    Json(StationSearchResponse { stations })
}

/// Plan a route between two stations.
async fn plan_route(
    State(state): State<AppState>,
    Query(req): Query<RouteRequest>,
) -> Result<Json<RouteResult>, AppError> {
    let plan = state.core.plan_route(&req.from, &req.to)?;
    Ok(Json(RouteResult::from_plan(plan)))
}

/// Current state of the trains on a line.
///
/// This is a read-only view: it does not change the session's selected
/// line or reset any drift.
async fn fleet(
    State(state): State<AppState>,
    Query(req): Query<FleetRequest>,
) -> Json<FleetResponse> {
    let session = state.core.fleet();
    let trains = session
        .roster_for(&req.line)
        .iter()
        .map(TrainResult::from_status)
        .collect();

    Json(FleetResponse {
        line: req.line,
        trains,
        ticks: session.ticks(),
        updated_at: Local::now().to_rfc3339(),
    })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
}

impl From<RouteError> for AppError {
    fn from(e: RouteError) -> Self {
        match e {
            RouteError::UnknownStation(_) => AppError::NotFound {
                message: e.to_string(),
            },
            RouteError::SameStation(_) | RouteError::NoRoute { .. } => AppError::BadRequest {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
        };

        warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
