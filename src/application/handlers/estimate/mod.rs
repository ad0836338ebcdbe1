//! Estimate handlers.
//!
//! ## Startup
//! - Loading the data sources and training the cost model
//!
//! ## Queries
//! - Predict a treatment cost and find nearby hospitals
//! - Get catalog metadata
//! - List disease categories

mod get_metadata;
mod list_diseases;
mod load_models;
mod predict_nearby;

// Startup
pub use load_models::{LoadModelsError, LoadModelsHandler, LoadedModels};

// Queries
pub use get_metadata::{GetMetadataHandler, GetMetadataResult};
pub use list_diseases::{DiseaseEntry, ListDiseasesHandler};
pub use predict_nearby::{
    PredictNearbyError, PredictNearbyHandler, PredictNearbyQuery, PredictNearbyResult,
    DEFAULT_BUDGET, DEFAULT_LAT, DEFAULT_LON, DEFAULT_RADIUS_KM, MIN_RADIUS_KM,
};
