//! Estimate-specific error types.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | UnknownDisease | 400 |
//! | InvalidTrainingData | 500 |
//! | Catalog | 500 |

use thiserror::Error;

/// Errors raised while loading or validating a cost catalog.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("Cannot read catalog {path}: {message}")]
    Io { path: String, message: String },

    #[error("Kolom tidak lengkap di katalog: {missing:?}. Kolom ada: {present:?}")]
    MissingColumns {
        missing: Vec<String>,
        present: Vec<String>,
    },

    #[error("Row {row}: column '{column}' is not a number: '{value}'")]
    InvalidNumber {
        row: usize,
        column: String,
        value: String,
    },

    #[error("Malformed catalog: {0}")]
    Malformed(String),

    #[error("Catalog contains no rows")]
    Empty,
}

/// Errors raised by the cost estimator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EstimateError {
    #[error("Penyakit '{0}' tidak ditemukan di Excel")]
    UnknownDisease(String),

    #[error("Invalid training data: {0}")]
    InvalidTrainingData(String),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

impl EstimateError {
    pub fn unknown_disease(name: impl Into<String>) -> Self {
        EstimateError::UnknownDisease(name.into())
    }

    pub fn invalid_training_data(message: impl Into<String>) -> Self {
        EstimateError::InvalidTrainingData(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_disease_message_names_the_disease() {
        let err = EstimateError::unknown_disease("Flu");
        assert_eq!(err.to_string(), "Penyakit 'Flu' tidak ditemukan di Excel");
    }

    #[test]
    fn missing_columns_lists_both_sides() {
        let err = CatalogError::MissingColumns {
            missing: vec!["Penyakit".to_string()],
            present: vec!["Kategori".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("\"Penyakit\""));
        assert!(msg.contains("\"Kategori\""));
    }

    #[test]
    fn catalog_error_converts_into_estimate_error() {
        let err: EstimateError = CatalogError::Empty.into();
        assert_eq!(err, EstimateError::Catalog(CatalogError::Empty));
    }
}
