//! Cost catalog: the table of known diseases, procedures and cost ranges.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::errors::CatalogError;
use crate::domain::disease::Disease;

/// Column headers the catalog source must provide.
pub const CATEGORY_COLUMN: &str = "Kategori";
pub const DISEASE_COLUMN: &str = "Penyakit";
pub const PROCEDURE_COLUMN: &str = "Tindakan Medis Utama";
pub const MIN_COST_COLUMN: &str = "Estimasi Min (Rp)";
pub const MAX_COST_COLUMN: &str = "Estimasi Max (Rp)";

/// All required columns, in catalog order.
pub const REQUIRED_COLUMNS: [&str; 5] = [
    CATEGORY_COLUMN,
    DISEASE_COLUMN,
    PROCEDURE_COLUMN,
    MIN_COST_COLUMN,
    MAX_COST_COLUMN,
];

/// One catalog row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostRecord {
    pub category: String,
    pub disease: String,
    pub procedure: String,
    /// Lower bound in Rupiah.
    pub min_cost: f64,
    /// Upper bound in Rupiah.
    pub max_cost: f64,
}

impl CostRecord {
    pub fn new(
        category: impl Into<String>,
        disease: impl Into<String>,
        procedure: impl Into<String>,
        min_cost: f64,
        max_cost: f64,
    ) -> Self {
        Self {
            category: category.into(),
            disease: disease.into(),
            procedure: procedure.into(),
            min_cost,
            max_cost,
        }
    }

    /// Midpoint of the cost range; the value the model learns.
    pub fn midpoint(&self) -> f64 {
        (self.min_cost + self.max_cost) / 2.0
    }
}

/// An ordered, non-empty list of cost records.
#[derive(Debug, Clone, PartialEq)]
pub struct CostCatalog {
    records: Vec<CostRecord>,
}

impl CostCatalog {
    /// Wraps records into a catalog. Rejects an empty list.
    pub fn new(records: Vec<CostRecord>) -> Result<Self, CatalogError> {
        if records.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self { records })
    }

    pub fn records(&self) -> &[CostRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First row in the catalog.
    pub fn first(&self) -> &CostRecord {
        &self.records[0]
    }

    /// First record whose disease equals `name` exactly.
    pub fn find_disease(&self, name: &str) -> Option<&CostRecord> {
        self.records.iter().find(|r| r.disease == name)
    }

    /// Sorted unique disease names.
    pub fn diseases(&self) -> Vec<String> {
        sorted_unique(self.records.iter().map(|r| r.disease.as_str()))
    }

    /// Sorted unique categories.
    pub fn categories(&self) -> Vec<String> {
        sorted_unique(self.records.iter().map(|r| r.category.as_str()))
    }

    /// Sorted unique procedures.
    pub fn procedures(&self) -> Vec<String> {
        sorted_unique(self.records.iter().map(|r| r.procedure.as_str()))
    }

    /// Enum diseases that have no catalog row.
    pub fn coverage_gaps(&self) -> Vec<Disease> {
        Disease::all()
            .iter()
            .copied()
            .filter(|d| self.find_disease(d.label()).is_none())
            .collect()
    }
}

fn sorted_unique<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> CostCatalog {
        CostCatalog::new(vec![
            CostRecord::new("Infeksi", "Tifus", "Rawat Inap", 3_000_000.0, 7_000_000.0),
            CostRecord::new("Bedah", "Caesar", "Operasi Caesar", 15_000_000.0, 30_000_000.0),
            CostRecord::new("Infeksi", "Demam Berdarah", "Rawat Inap", 4_000_000.0, 10_000_000.0),
            CostRecord::new("Bedah", "Caesar", "Operasi Darurat", 20_000_000.0, 40_000_000.0),
        ])
        .unwrap()
    }

    #[test]
    fn empty_catalog_is_rejected() {
        assert_eq!(CostCatalog::new(vec![]), Err(CatalogError::Empty));
    }

    #[test]
    fn midpoint_is_mean_of_range() {
        let record = CostRecord::new("A", "B", "C", 1_000.0, 3_000.0);
        assert_eq!(record.midpoint(), 2_000.0);
    }

    #[test]
    fn find_disease_returns_first_match() {
        let catalog = sample_catalog();
        let record = catalog.find_disease("Caesar").unwrap();
        assert_eq!(record.procedure, "Operasi Caesar");
    }

    #[test]
    fn find_disease_is_exact() {
        let catalog = sample_catalog();
        assert!(catalog.find_disease("caesar").is_none());
        assert!(catalog.find_disease("Caesar ").is_none());
    }

    #[test]
    fn lists_are_sorted_and_unique() {
        let catalog = sample_catalog();
        assert_eq!(catalog.diseases(), vec!["Caesar", "Demam Berdarah", "Tifus"]);
        assert_eq!(catalog.categories(), vec!["Bedah", "Infeksi"]);
        assert_eq!(
            catalog.procedures(),
            vec!["Operasi Caesar", "Operasi Darurat", "Rawat Inap"]
        );
    }

    #[test]
    fn coverage_gaps_lists_enum_diseases_without_rows() {
        let gaps = sample_catalog().coverage_gaps();
        assert_eq!(gaps.len(), 12);
        assert!(!gaps.contains(&Disease::Caesar));
        assert!(gaps.contains(&Disease::Stroke));
    }
}
