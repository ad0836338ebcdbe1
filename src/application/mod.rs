//! Application layer - Queries and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;

pub use handlers::{
    DiseaseEntry, GetMetadataHandler, GetMetadataResult, ListDiseasesHandler, LoadModelsError,
    LoadModelsHandler, LoadedModels, PredictNearbyError, PredictNearbyHandler,
    PredictNearbyQuery, PredictNearbyResult,
};
