//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Data Ports
//!
//! - `CostCatalogSource` - Rows of the treatment cost catalog
//! - `HospitalSource` - Hospital locations for nearby search

mod cost_catalog_source;
mod hospital_source;

pub use cost_catalog_source::CostCatalogSource;
pub use hospital_source::HospitalSource;
