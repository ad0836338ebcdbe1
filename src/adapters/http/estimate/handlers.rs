//! HTTP handlers for estimate endpoints.
//!
//! These handlers connect Axum routes to application layer query handlers.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::response::IntoResponse;

use crate::application::{
    GetMetadataHandler, ListDiseasesHandler, LoadedModels, PredictNearbyHandler,
};
use crate::domain::estimate::CostEstimator;
use crate::domain::hospital::HospitalDirectory;

use super::super::error::ApiError;
use super::dto::{
    DiseaseResponse, HealthResponse, MetadataResponse, PredictNearbyRequest,
    PredictNearbyResponse,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for estimate endpoints.
///
/// Cloned per request; the trained model and directory are shared behind `Arc`.
#[derive(Clone)]
pub struct EstimateAppState {
    pub estimator: Arc<CostEstimator>,
    pub directory: Arc<HospitalDirectory>,
}

impl EstimateAppState {
    pub fn new(estimator: Arc<CostEstimator>, directory: Arc<HospitalDirectory>) -> Self {
        Self {
            estimator,
            directory,
        }
    }

    pub fn predict_nearby_handler(&self) -> PredictNearbyHandler {
        PredictNearbyHandler::new(self.estimator.clone(), self.directory.clone())
    }

    pub fn metadata_handler(&self) -> GetMetadataHandler {
        GetMetadataHandler::new(self.estimator.clone())
    }

    pub fn list_diseases_handler(&self) -> ListDiseasesHandler {
        ListDiseasesHandler::new()
    }
}

impl From<LoadedModels> for EstimateAppState {
    fn from(models: LoadedModels) -> Self {
        Self::new(models.estimator, models.directory)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /health - Liveness check
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse::ok())
}

/// GET /metadata - Catalog lists and an example request
pub async fn get_metadata(State(state): State<EstimateAppState>) -> impl IntoResponse {
    let result = state.metadata_handler().handle().await;
    Json(MetadataResponse::from(result))
}

/// GET /diseases - Disease categories as code/label pairs
pub async fn list_diseases(State(state): State<EstimateAppState>) -> impl IntoResponse {
    let entries = state.list_diseases_handler().handle().await;
    Json(
        entries
            .into_iter()
            .map(DiseaseResponse::from)
            .collect::<Vec<_>>(),
    )
}

/// POST /predict-nearby - Predict a cost and list nearby hospitals
pub async fn predict_nearby(
    State(state): State<EstimateAppState>,
    payload: Result<Json<PredictNearbyRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload?;
    let result = state
        .predict_nearby_handler()
        .handle(request.into())
        .await?;
    Ok(Json(PredictNearbyResponse::from(result)))
}
