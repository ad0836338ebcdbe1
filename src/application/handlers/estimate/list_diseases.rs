//! ListDiseasesHandler - Query handler for the disease categories.

use crate::domain::disease::Disease;

/// One disease category with its stable code and display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiseaseEntry {
    pub code: &'static str,
    pub label: &'static str,
}

/// Handler listing every disease category in declaration order.
#[derive(Debug, Default)]
pub struct ListDiseasesHandler;

impl ListDiseasesHandler {
    pub fn new() -> Self {
        Self
    }

    pub async fn handle(&self) -> Vec<DiseaseEntry> {
        Disease::all()
            .iter()
            .map(|d| DiseaseEntry {
                code: d.code(),
                label: d.label(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn lists_all_fifteen_categories_in_order() {
        let entries = ListDiseasesHandler::new().handle().await;
        assert_eq!(entries.len(), 15);
        assert_eq!(entries[0].label, "Demam Berdarah");
        assert_eq!(entries[14].label, "Patah Tulang");
    }

    #[tokio::test]
    async fn caesar_code_is_stable() {
        let entries = ListDiseasesHandler::new().handle().await;
        assert!(entries
            .iter()
            .any(|e| e.label == "Caesar" && e.code == Disease::Caesar.code()));
    }
}
