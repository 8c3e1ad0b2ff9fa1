use std::net::SocketAddr;

use tracing::info;
use tracing_subscriber::EnvFilter;

use trip_server::catalog::ivory_coast;
use trip_server::planner::PlannerConfig;
use trip_server::web::{AppState, create_router};

/// Address used when `TRIP_SERVER_ADDR` is not set.
const DEFAULT_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let addr: SocketAddr = std::env::var("TRIP_SERVER_ADDR")
        .unwrap_or_else(|_| DEFAULT_ADDR.to_string())
        .parse()?;

    // Load the built-in catalog (fail fast if it is inconsistent)
    let catalog = ivory_coast()?;
    info!(
        cities = catalog.cities().len(),
        activities = catalog.activities().len(),
        hotels = catalog.hotels().len(),
        "Loaded catalog"
    );

    let state = AppState::new(catalog, PlannerConfig::default());
    let app = create_router(state);

    info!(%addr, "Trip planner listening");
    info!("  GET  /health      - Health check");
    info!("  GET  /api/cities  - List cities (?interest=beach,nightlife)");
    info!("  POST /trip/plan   - Plan a trip");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
