//! In-Memory Cost Catalog Adapter
//!
//! Serves catalog rows held in memory. Useful for testing and development.

use async_trait::async_trait;

use crate::domain::estimate::{CatalogError, CostRecord};
use crate::ports::CostCatalogSource;

/// Catalog source returning a fixed list of rows.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCostCatalogSource {
    records: Vec<CostRecord>,
}

impl InMemoryCostCatalogSource {
    pub fn new(records: Vec<CostRecord>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl CostCatalogSource for InMemoryCostCatalogSource {
    async fn load(&self) -> Result<Vec<CostRecord>, CatalogError> {
        Ok(self.records.clone())
    }
}
