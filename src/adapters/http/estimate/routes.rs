//! Axum router configuration for estimate endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{get_metadata, health, list_diseases, predict_nearby, EstimateAppState};

/// Create the estimate API router.
///
/// # Routes
///
/// - `GET /health` - Liveness check
/// - `GET /metadata` - Catalog lists and an example request
/// - `GET /diseases` - Disease categories
/// - `POST /predict-nearby` - Cost prediction with nearby hospitals
///
/// Every route requires the API key; the layer is applied by the caller.
pub fn estimate_routes() -> Router<EstimateAppState> {
    Router::new()
        .route("/health", get(health))
        .route("/metadata", get(get_metadata))
        .route("/diseases", get(list_diseases))
        .route("/predict-nearby", post(predict_nearby))
}
