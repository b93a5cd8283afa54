use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use route_server::config::ServerConfig;
use route_server::stations::StationIndex;
use route_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> ExitCode {
    // RUST_LOG overrides the default level, e.g. RUST_LOG=route_server=debug
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    // Load station snapshot (fail fast if unavailable)
    let stations = match StationIndex::load(&config.stations_path) {
        Ok(stations) => stations,
        Err(e) => {
            error!("failed to load stations: {e}");
            return ExitCode::FAILURE;
        }
    };

    let app = create_router(AppState::new(stations));

    let listener = match tokio::net::TcpListener::bind(config.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %config.bind_addr, "failed to bind: {e}");
            return ExitCode::FAILURE;
        }
    };

    info!(addr = %config.bind_addr, "route server listening");
    info!("  GET  /health            - Health check");
    info!("  GET  /lines             - Catalogued lines");
    info!("  GET  /lines/:code/route - Route diagram for a line");

    if let Err(e) = axum::serve(listener, app).await {
        error!("server error: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
