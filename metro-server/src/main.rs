use std::net::SocketAddr;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use metro_server::config::Config;
use metro_server::metro::MetroCore;
use metro_server::web::{AppState, create_router};

/// Default listen address when `METRO_ADDR` is unset.
const DEFAULT_ADDR: ([u8; 4], u16) = ([127, 0, 0, 1], 3000);

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration, falling back to defaults
    let config = match std::env::var("METRO_CONFIG") {
        Ok(path) => match Config::load(&path) {
            Ok(config) => {
                info!(%path, "loaded configuration");
                config
            }
            Err(e) => {
                error!(%path, error = %e, "failed to load configuration");
                std::process::exit(1);
            }
        },
        Err(_) => Config::default(),
    };

    let addr = std::env::var("METRO_ADDR")
        .ok()
        .and_then(|s| {
            s.parse::<SocketAddr>()
                .inspect_err(|e| warn!(addr = %s, error = %e, "ignoring invalid METRO_ADDR"))
                .ok()
        })
        .unwrap_or_else(|| SocketAddr::from(DEFAULT_ADDR));

    // Start the transit core (topology, planner, live fleet)
    let core = MetroCore::kochi(config).expect("Built-in network is invalid");
    info!(
        lines = core.topology().lines().count(),
        stations = core.topology().station_count(),
        tick_secs = core.config().simulation.tick_interval_secs,
        "metro core started"
    );

    let app = create_router(AppState::new(core));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listen address");
    info!("Metro planner listening on http://{addr}");
    info!("  GET /health                      - Health check");
    info!("  GET /api/lines                   - Lines and stations");
    info!("  GET /api/stations/search?q=      - Search stations");
    info!("  GET /api/route?from=&to=         - Plan a route");
    info!("  GET /api/fleet?line=             - Live trains on a line");

    axum::serve(listener, app).await.expect("Server error");
}
