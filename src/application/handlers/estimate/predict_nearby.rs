//! PredictNearbyHandler - Query handler combining a cost prediction with a
//! nearby hospital search.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::estimate::{CostEstimator, EstimateError};
use crate::domain::foundation::{ErrorCode, ValidationError};
use crate::domain::hospital::{
    GeoPoint, GeometryMethod, HospitalDirectory, HospitalError, NearbyHospital,
};

pub const DEFAULT_BUDGET: i64 = 5_000_000;
pub const DEFAULT_LAT: f64 = -6.2;
pub const DEFAULT_LON: f64 = 106.8;
pub const DEFAULT_RADIUS_KM: f64 = 10.0;
pub const MIN_RADIUS_KM: f64 = 1.0;

/// Query for a cost estimate and the hospitals around a location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictNearbyQuery {
    /// Disease name exactly as it appears in the catalog.
    pub disease: String,
    /// Budget in Rupiah.
    pub budget: i64,
    pub lat: f64,
    pub lon: f64,
    pub radius_km: f64,
    pub geom_method: GeometryMethod,
}

impl PredictNearbyQuery {
    /// A query for `disease` with every other field at its default.
    pub fn new(disease: impl Into<String>) -> Self {
        Self {
            disease: disease.into(),
            budget: DEFAULT_BUDGET,
            lat: DEFAULT_LAT,
            lon: DEFAULT_LON,
            radius_km: DEFAULT_RADIUS_KM,
            geom_method: GeometryMethod::default(),
        }
    }

    fn validate(&self) -> Result<GeoPoint, ValidationError> {
        if !self.radius_km.is_finite() || self.radius_km < MIN_RADIUS_KM {
            return Err(ValidationError::below_minimum(
                "radius_km",
                MIN_RADIUS_KM,
                self.radius_km,
            ));
        }
        GeoPoint::new(self.lat, self.lon)
    }
}

/// Result of a successful prediction.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictNearbyResult {
    pub disease: String,
    pub predicted_cost: f64,
    pub budget: i64,
    pub budget_ok: bool,
    pub radius_km: f64,
    pub hospitals_in_radius: Vec<NearbyHospital>,
    /// Zero when nothing was in range and the global nearest were returned.
    pub count_in_radius: usize,
    pub nearest_hospital: NearbyHospital,
    pub note: Option<String>,
}

/// Errors from [`PredictNearbyHandler`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictNearbyError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Estimate(#[from] EstimateError),

    #[error(transparent)]
    Hospital(#[from] HospitalError),
}

impl PredictNearbyError {
    pub fn code(&self) -> ErrorCode {
        match self {
            PredictNearbyError::Validation(_) => ErrorCode::ValidationFailed,
            PredictNearbyError::Estimate(EstimateError::UnknownDisease(_)) => {
                ErrorCode::UnknownDisease
            }
            PredictNearbyError::Estimate(_) => ErrorCode::InternalError,
            PredictNearbyError::Hospital(HospitalError::NoHospitals) => ErrorCode::DataNotReady,
            PredictNearbyError::Hospital(_) => ErrorCode::InternalError,
        }
    }
}

/// Handler for cost prediction with nearby hospitals.
///
/// Validates the query, predicts the cost of the first catalog row for the
/// disease, then searches the hospital directory around the given point.
pub struct PredictNearbyHandler {
    estimator: Arc<CostEstimator>,
    directory: Arc<HospitalDirectory>,
}

impl PredictNearbyHandler {
    pub fn new(estimator: Arc<CostEstimator>, directory: Arc<HospitalDirectory>) -> Self {
        Self {
            estimator,
            directory,
        }
    }

    pub async fn handle(
        &self,
        query: PredictNearbyQuery,
    ) -> Result<PredictNearbyResult, PredictNearbyError> {
        let origin = query.validate()?;

        let estimate = self.estimator.estimate(&query.disease)?;
        let search = self
            .directory
            .search(origin, query.radius_km, query.geom_method)?;
        let nearest_hospital = search
            .nearest()
            .cloned()
            .ok_or(HospitalError::NoHospitals)?;

        let count_in_radius = if search.within_radius {
            search.hospitals.len()
        } else {
            0
        };

        tracing::info!(
            disease = %query.disease,
            predicted_cost = estimate.predicted_cost,
            count_in_radius,
            "Prediction served"
        );

        Ok(PredictNearbyResult {
            budget_ok: query.budget as f64 >= estimate.predicted_cost,
            predicted_cost: estimate.predicted_cost,
            disease: query.disease,
            budget: query.budget,
            radius_km: query.radius_km,
            hospitals_in_radius: search.hospitals,
            count_in_radius,
            nearest_hospital,
            note: search.note,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::estimate::{CostCatalog, CostRecord, ForestConfig};
    use crate::domain::hospital::{Hospital, DEFAULT_FALLBACK_LIMIT};

    // ════════════════════════════════════════════════════════════════════════════
    // Test Helpers
    // ════════════════════════════════════════════════════════════════════════════

    fn estimator() -> Arc<CostEstimator> {
        let catalog = CostCatalog::new(vec![
            CostRecord::new("Infeksi", "Tifus", "Rawat Inap", 3_000_000.0, 7_000_000.0),
            CostRecord::new("Kebidanan", "Caesar", "Operasi Caesar", 15_000_000.0, 30_000_000.0),
            CostRecord::new("Jantung", "Operasi Bypass", "Bedah Jantung", 150_000_000.0, 250_000_000.0),
        ])
        .unwrap();
        let config = ForestConfig {
            n_estimators: 30,
            ..Default::default()
        };
        Arc::new(CostEstimator::train(catalog, &config).unwrap())
    }

    fn directory(hospitals: Vec<Hospital>) -> Arc<HospitalDirectory> {
        Arc::new(HospitalDirectory::new(hospitals, DEFAULT_FALLBACK_LIMIT))
    }

    fn jakarta_hospitals() -> Vec<Hospital> {
        vec![
            Hospital::at("RS Dekat", GeoPoint { lat: -6.21, lon: 106.8 }),
            Hospital::at("RS Bandung", GeoPoint { lat: -6.9175, lon: 107.6191 }),
        ]
    }

    fn handler() -> PredictNearbyHandler {
        PredictNearbyHandler::new(estimator(), directory(jakarta_hospitals()))
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Success Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn predicts_and_lists_hospitals_in_radius() {
        let result = handler().handle(PredictNearbyQuery::new("Tifus")).await.unwrap();

        assert_eq!(result.disease, "Tifus");
        assert_eq!(result.budget, DEFAULT_BUDGET);
        assert_eq!(result.count_in_radius, 1);
        assert_eq!(result.hospitals_in_radius.len(), 1);
        assert_eq!(result.nearest_hospital.name, "RS Dekat");
        assert!(result.note.is_none());
    }

    #[tokio::test]
    async fn budget_ok_compares_budget_with_prediction() {
        let handler = handler();
        let mut query = PredictNearbyQuery::new("Operasi Bypass");
        query.budget = 1_000_000;
        let result = handler.handle(query).await.unwrap();
        assert!(!result.budget_ok);

        let mut query = PredictNearbyQuery::new("Operasi Bypass");
        query.budget = 1_000_000_000;
        let result = handler.handle(query).await.unwrap();
        assert!(result.budget_ok);
    }

    #[tokio::test]
    async fn fallback_reports_zero_in_radius() {
        let mut query = PredictNearbyQuery::new("Caesar");
        query.lat = 3.59;
        query.lon = 98.67;
        let result = handler().handle(query).await.unwrap();

        assert_eq!(result.count_in_radius, 0);
        assert_eq!(result.hospitals_in_radius.len(), 2);
        assert_eq!(result.nearest_hospital, result.hospitals_in_radius[0]);
        assert!(result.note.is_some());
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Error Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn unknown_disease_fails() {
        let err = handler()
            .handle(PredictNearbyQuery::new("Flu"))
            .await
            .unwrap_err();
        assert_eq!(err, PredictNearbyError::Estimate(EstimateError::unknown_disease("Flu")));
        assert_eq!(err.code(), ErrorCode::UnknownDisease);
    }

    #[tokio::test]
    async fn radius_below_one_fails_validation() {
        let mut query = PredictNearbyQuery::new("Tifus");
        query.radius_km = 0.5;
        let err = handler().handle(query).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::ValidationFailed);
    }

    #[tokio::test]
    async fn out_of_range_latitude_fails_validation() {
        let mut query = PredictNearbyQuery::new("Tifus");
        query.lat = 123.0;
        let err = handler().handle(query).await.unwrap_err();
        assert!(matches!(err, PredictNearbyError::Validation(_)));
    }

    #[tokio::test]
    async fn empty_directory_is_data_not_ready() {
        let handler = PredictNearbyHandler::new(estimator(), directory(vec![]));
        let err = handler
            .handle(PredictNearbyQuery::new("Tifus"))
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::DataNotReady);
    }
}
