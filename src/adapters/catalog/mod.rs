//! Cost catalog adapters.
//!
//! - `CsvCostCatalogSource` - CSV file export of the catalog spreadsheet
//! - `InMemoryCostCatalogSource` - Fixed rows for tests

mod csv_catalog;
mod in_memory;

pub use csv_catalog::{parse_catalog, parse_cost, CsvCostCatalogSource};
pub use in_memory::InMemoryCostCatalogSource;
