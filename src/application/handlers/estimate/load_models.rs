//! LoadModelsHandler - Loads the data sources and trains the cost model.
//!
//! Runs once at startup. Training is CPU-bound, so it runs on the blocking
//! thread pool.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::estimate::{CatalogError, CostCatalog, CostEstimator, EstimateError, ForestConfig};
use crate::domain::hospital::{HospitalDirectory, HospitalError};
use crate::ports::{CostCatalogSource, HospitalSource};

/// Trained model and hospital directory, ready to serve.
#[derive(Debug, Clone)]
pub struct LoadedModels {
    pub estimator: Arc<CostEstimator>,
    pub directory: Arc<HospitalDirectory>,
}

/// Errors raised while preparing the models.
#[derive(Debug, Error)]
pub enum LoadModelsError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Training failed: {0}")]
    Training(#[from] EstimateError),

    #[error("Hospital data error: {0}")]
    Hospital(#[from] HospitalError),

    #[error("Training task failed: {0}")]
    TaskFailed(String),
}

/// Handler that builds [`LoadedModels`] from the configured sources.
pub struct LoadModelsHandler {
    catalog_source: Arc<dyn CostCatalogSource>,
    hospital_source: Arc<dyn HospitalSource>,
    forest: ForestConfig,
    fallback_limit: usize,
}

impl LoadModelsHandler {
    pub fn new(
        catalog_source: Arc<dyn CostCatalogSource>,
        hospital_source: Arc<dyn HospitalSource>,
        forest: ForestConfig,
        fallback_limit: usize,
    ) -> Self {
        Self {
            catalog_source,
            hospital_source,
            forest,
            fallback_limit,
        }
    }

    pub async fn handle(&self) -> Result<LoadedModels, LoadModelsError> {
        let catalog = CostCatalog::new(self.catalog_source.load().await?)?;

        let gaps = catalog.coverage_gaps();
        if !gaps.is_empty() {
            let labels: Vec<&str> = gaps.iter().map(|d| d.label()).collect();
            tracing::warn!(missing = ?labels, "Catalog has no rows for some disease categories");
        }

        let forest = self.forest.clone();
        let estimator = tokio::task::spawn_blocking(move || CostEstimator::train(catalog, &forest))
            .await
            .map_err(|e| LoadModelsError::TaskFailed(e.to_string()))??;

        let hospitals = self.hospital_source.load().await?;
        if hospitals.is_empty() {
            tracing::warn!("No hospitals loaded, nearby search will be unavailable");
        }
        let directory = HospitalDirectory::new(hospitals, self.fallback_limit);

        Ok(LoadedModels {
            estimator: Arc::new(estimator),
            directory: Arc::new(directory),
        })
    }
}
