//! Application handlers.
//!
//! Query handlers that orchestrate domain operations.

pub mod estimate;

pub use estimate::{
    DiseaseEntry, GetMetadataHandler, GetMetadataResult, ListDiseasesHandler, LoadModelsError,
    LoadModelsHandler, LoadedModels, PredictNearbyError, PredictNearbyHandler,
    PredictNearbyQuery, PredictNearbyResult,
};
