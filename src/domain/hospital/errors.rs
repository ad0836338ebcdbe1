//! Hospital-specific error types.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | NoHospitals | 503 |
//! | Io / Malformed / MissingNameProperty | 500 (startup only) |

use thiserror::Error;

/// Errors raised while loading or searching hospitals.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HospitalError {
    #[error("Cannot read hospital data {path}: {message}")]
    Io { path: String, message: String },

    #[error("Malformed hospital data: {0}")]
    Malformed(String),

    #[error("GeoJSON wajib punya kolom 'NAMOBJ'. Kolom tersedia: {available:?}")]
    MissingNameProperty { available: Vec<String> },

    #[error("No hospitals are loaded")]
    NoHospitals,
}

impl HospitalError {
    pub fn malformed(message: impl Into<String>) -> Self {
        HospitalError::Malformed(message.into())
    }
}
