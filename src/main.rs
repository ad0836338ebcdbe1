//! BerapaYa HTTP server.
//!
//! Loads configuration, trains the cost model, and serves the JSON API and
//! landing page until Ctrl-C.

use std::error::Error;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use berapaya::adapters::http::{app_router, EstimateAppState, LandingAppState};
use berapaya::adapters::{CsvCostCatalogSource, GeoJsonHospitalSource};
use berapaya::application::LoadModelsHandler;
use berapaya::config::AppConfig;
use berapaya::domain::landing::LandingPage;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);

    tracing::info!(
        catalog = %config.data.catalog_path.display(),
        hospitals = %config.data.hospitals_path.display(),
        n_estimators = config.model.n_estimators,
        "Loading models"
    );

    let loader = LoadModelsHandler::new(
        Arc::new(CsvCostCatalogSource::new(&config.data.catalog_path)),
        Arc::new(GeoJsonHospitalSource::new(&config.data.hospitals_path)),
        config.model.forest(),
        config.model.nearby_fallback_limit,
    );
    let models = loader.handle().await?;

    tracing::info!(
        trees = models.estimator.forest_size(),
        hospitals = models.directory.len(),
        "Models ready"
    );

    let landing = LandingAppState::new(&LandingPage::new(&config.server.public_url));
    let app = app_router(EstimateAppState::from(models), landing, &config);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if config.is_production() {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        return;
    }
    tracing::info!("Shutdown signal received");
}
