//! Application state for the web layer.

use std::sync::Arc;

use crate::metro::MetroCore;

/// Shared application state.
///
/// Contains the transit core every handler reads from.
#[derive(Clone)]
pub struct AppState {
    /// Topology, route planner configuration and the live fleet
    pub core: Arc<MetroCore>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(core: MetroCore) -> Self {
        Self {
            core: Arc::new(core),
        }
    }
}
