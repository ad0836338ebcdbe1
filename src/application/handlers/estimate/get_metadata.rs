//! GetMetadataHandler - Query handler describing the loaded catalog.

use std::sync::Arc;

use crate::domain::estimate::CostEstimator;

use super::predict_nearby::PredictNearbyQuery;

/// Result of the metadata query.
#[derive(Debug, Clone, PartialEq)]
pub struct GetMetadataResult {
    /// Sorted unique disease names.
    pub diseases: Vec<String>,
    /// Sorted unique categories.
    pub categories: Vec<String>,
    /// Sorted unique procedures.
    pub procedures: Vec<String>,
    /// A ready-to-send query for the first catalog row.
    pub example_request: PredictNearbyQuery,
}

/// Handler for catalog metadata.
pub struct GetMetadataHandler {
    estimator: Arc<CostEstimator>,
}

impl GetMetadataHandler {
    pub fn new(estimator: Arc<CostEstimator>) -> Self {
        Self { estimator }
    }

    pub async fn handle(&self) -> GetMetadataResult {
        let catalog = self.estimator.catalog();
        GetMetadataResult {
            diseases: catalog.diseases(),
            categories: catalog.categories(),
            procedures: catalog.procedures(),
            example_request: PredictNearbyQuery::new(catalog.first().disease.clone()),
        }
    }
}
