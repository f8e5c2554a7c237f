use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use booking_api::{create_router, telemetry, AppState, Config, InMemoryStore};
use slot_engine::Dataset;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    telemetry::init_tracing();

    let config = Config::from_env().context("Failed to load configuration")?;

    let dataset = match &config.booking.seed_path {
        Some(path) => load_seed(path)?,
        None => Dataset::default(),
    };
    info!(
        barbers = dataset.barbers.len(),
        services = dataset.services.len(),
        appointments = dataset.appointments.len(),
        "store ready"
    );

    let store = Arc::new(InMemoryStore::from_dataset(dataset));
    let state = AppState::from_config(store, &config.booking);
    let app = create_router(state);

    let addr = config.server_addr();
    info!(
        %addr,
        step_minutes = config.booking.step_minutes,
        timezone = %config.booking.timezone,
        "{} listening",
        env!("CARGO_CRATE_NAME")
    );

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app)
        .await
        .context("Failed to serve application")?;

    Ok(())
}

fn load_seed(path: &Path) -> Result<Dataset> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read seed file: {}", path.display()))?;
    Dataset::from_json(&raw).with_context(|| format!("Invalid seed file: {}", path.display()))
}
