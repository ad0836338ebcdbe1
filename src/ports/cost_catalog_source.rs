//! Cost catalog source port.
//!
//! Supplies the raw rows the cost model is trained on. Adapters read them
//! from files or keep them in memory for tests.
//!
//! # Example
//!
//! ```ignore
//! async fn build_catalog(source: &dyn CostCatalogSource) -> Result<CostCatalog, CatalogError> {
//!     let records = source.load().await?;
//!     CostCatalog::new(records)
//! }
//! ```

use crate::domain::estimate::{CatalogError, CostRecord};
use async_trait::async_trait;

/// Port for loading cost catalog rows.
#[async_trait]
pub trait CostCatalogSource: Send + Sync {
    /// Load every row of the catalog in source order.
    ///
    /// # Errors
    ///
    /// - `Io` if the underlying data cannot be read
    /// - `MissingColumns` if a required column is absent
    /// - `InvalidNumber` if a cost cell is not numeric
    async fn load(&self) -> Result<Vec<CostRecord>, CatalogError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn CostCatalogSource) {}
}
