//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `catalog` - Cost catalog sources (CSV file, in-memory)
//! - `hospitals` - Hospital location sources (GeoJSON file, in-memory)
//! - `http` - Axum routers for the JSON API and landing page

pub mod catalog;
pub mod hospitals;
pub mod http;

pub use catalog::{CsvCostCatalogSource, InMemoryCostCatalogSource};
pub use hospitals::{GeoJsonHospitalSource, InMemoryHospitalSource};
pub use http::app_router;
