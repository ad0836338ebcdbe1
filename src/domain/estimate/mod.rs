//! Estimate module - cost catalog and the cost prediction model.
//!
//! # Module Organization
//!
//! - `catalog` - Catalog rows and lookups
//! - `encoder` - Label encoding of categorical columns
//! - `forest` - Random forest regression
//! - `estimator` - Catalog + encoders + forest, ready to predict

mod catalog;
mod encoder;
mod errors;
mod estimator;
mod forest;

pub use catalog::{
    CostCatalog, CostRecord, CATEGORY_COLUMN, DISEASE_COLUMN, MAX_COST_COLUMN, MIN_COST_COLUMN,
    PROCEDURE_COLUMN, REQUIRED_COLUMNS,
};
pub use encoder::LabelEncoder;
pub use errors::{CatalogError, EstimateError};
pub use estimator::{CostEstimate, CostEstimator};
pub use forest::{ForestConfig, RandomForestRegressor, RegressionTree};
