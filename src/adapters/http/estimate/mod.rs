//! HTTP adapter for estimate endpoints.
//!
//! Exposes cost prediction and hospital search via REST API:
//! - `GET /health` - Liveness check
//! - `GET /metadata` - Catalog lists and an example request
//! - `GET /diseases` - Disease categories
//! - `POST /predict-nearby` - Cost prediction with nearby hospitals

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use handlers::EstimateAppState;
pub use routes::estimate_routes;
