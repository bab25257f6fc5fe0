//! Web layer for the metro planner.
//!
//! Provides JSON endpoints for station search, route planning and the
//! live fleet view.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
