//! HTTP DTOs (Data Transfer Objects) for estimate endpoints.
//!
//! Field names follow the public wire format (`penyakit`, `kategori_list`),
//! which is kept stable for existing clients.

use serde::{Deserialize, Serialize};

use crate::application::handlers::estimate::{
    DEFAULT_BUDGET, DEFAULT_LAT, DEFAULT_LON, DEFAULT_RADIUS_KM,
};
use crate::application::{DiseaseEntry, GetMetadataResult, PredictNearbyQuery, PredictNearbyResult};
use crate::domain::hospital::{GeometryMethod, NearbyHospital};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request for a cost prediction with nearby hospitals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictNearbyRequest {
    /// Disease name exactly as it appears in the catalog.
    pub penyakit: String,
    /// Budget in Rupiah.
    #[serde(default = "default_budget")]
    pub budget: i64,
    #[serde(default = "default_lat")]
    pub lat: f64,
    #[serde(default = "default_lon")]
    pub lon: f64,
    /// Search radius in km, at least 1.
    #[serde(default = "default_radius_km")]
    pub radius_km: f64,
    #[serde(default)]
    pub geom_method: GeometryMethod,
}

fn default_budget() -> i64 {
    DEFAULT_BUDGET
}

fn default_lat() -> f64 {
    DEFAULT_LAT
}

fn default_lon() -> f64 {
    DEFAULT_LON
}

fn default_radius_km() -> f64 {
    DEFAULT_RADIUS_KM
}

impl From<PredictNearbyRequest> for PredictNearbyQuery {
    fn from(req: PredictNearbyRequest) -> Self {
        Self {
            disease: req.penyakit,
            budget: req.budget,
            lat: req.lat,
            lon: req.lon,
            radius_km: req.radius_km,
            geom_method: req.geom_method,
        }
    }
}

impl From<PredictNearbyQuery> for PredictNearbyRequest {
    fn from(query: PredictNearbyQuery) -> Self {
        Self {
            penyakit: query.disease,
            budget: query.budget,
            lat: query.lat,
            lon: query.lon,
            radius_km: query.radius_km,
            geom_method: query.geom_method,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Response for the health check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

/// A hospital in a prediction response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HospitalResponse {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub distance_km: f64,
    pub google_maps_directions: String,
}

impl From<NearbyHospital> for HospitalResponse {
    fn from(h: NearbyHospital) -> Self {
        Self {
            name: h.name,
            lat: h.lat,
            lon: h.lon,
            distance_km: h.distance_km,
            google_maps_directions: h.google_maps_directions,
        }
    }
}

/// Response for a prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictNearbyResponse {
    pub penyakit: String,
    pub predicted_cost: f64,
    pub budget: i64,
    pub budget_ok: bool,
    pub radius_km: f64,
    pub hospitals_in_radius: Vec<HospitalResponse>,
    pub count_in_radius: usize,
    pub nearest_hospital: HospitalResponse,
    pub note: Option<String>,
}

impl From<PredictNearbyResult> for PredictNearbyResponse {
    fn from(result: PredictNearbyResult) -> Self {
        Self {
            penyakit: result.disease,
            predicted_cost: result.predicted_cost,
            budget: result.budget,
            budget_ok: result.budget_ok,
            radius_km: result.radius_km,
            hospitals_in_radius: result
                .hospitals_in_radius
                .into_iter()
                .map(HospitalResponse::from)
                .collect(),
            count_in_radius: result.count_in_radius,
            nearest_hospital: result.nearest_hospital.into(),
            note: result.note,
        }
    }
}

/// Response for catalog metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataResponse {
    pub penyakit_list: Vec<String>,
    pub kategori_list: Vec<String>,
    pub tindakan_list: Vec<String>,
    pub example_request: PredictNearbyRequest,
}

impl From<GetMetadataResult> for MetadataResponse {
    fn from(result: GetMetadataResult) -> Self {
        Self {
            penyakit_list: result.diseases,
            kategori_list: result.categories,
            tindakan_list: result.procedures,
            example_request: result.example_request.into(),
        }
    }
}

/// One disease category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiseaseResponse {
    pub code: String,
    pub label: String,
}

impl From<DiseaseEntry> for DiseaseResponse {
    fn from(entry: DiseaseEntry) -> Self {
        Self {
            code: entry.code.to_string(),
            label: entry.label.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_fills_defaults() {
        let req: PredictNearbyRequest = serde_json::from_str(r#"{"penyakit": "Tifus"}"#).unwrap();
        assert_eq!(req.budget, 5_000_000);
        assert_eq!(req.lat, -6.2);
        assert_eq!(req.lon, 106.8);
        assert_eq!(req.radius_km, 10.0);
        assert_eq!(req.geom_method, GeometryMethod::RepresentativePoint);
    }

    #[test]
    fn request_accepts_centroid_method() {
        let req: PredictNearbyRequest = serde_json::from_str(
            r#"{"penyakit": "Tifus", "geom_method": "Centroid", "radius_km": 5}"#,
        )
        .unwrap();
        assert_eq!(req.geom_method, GeometryMethod::Centroid);
        assert_eq!(req.radius_km, 5.0);
    }

    #[test]
    fn request_requires_penyakit() {
        assert!(serde_json::from_str::<PredictNearbyRequest>(r#"{"budget": 1}"#).is_err());
    }

    #[test]
    fn request_converts_to_query() {
        let req: PredictNearbyRequest = serde_json::from_str(r#"{"penyakit": "Caesar"}"#).unwrap();
        let query = PredictNearbyQuery::from(req);
        assert_eq!(query, PredictNearbyQuery::new("Caesar"));
    }

    #[test]
    fn response_serializes_null_note() {
        let hospital = HospitalResponse {
            name: "RS".to_string(),
            lat: -6.21,
            lon: 106.8,
            distance_km: 1.1057,
            google_maps_directions: "https://www.google.com/maps/dir/-6.2,106.8/-6.21,106.8"
                .to_string(),
        };
        let response = PredictNearbyResponse {
            penyakit: "Tifus".to_string(),
            predicted_cost: 5_000_000.0,
            budget: 5_000_000,
            budget_ok: true,
            radius_km: 10.0,
            hospitals_in_radius: vec![hospital.clone()],
            count_in_radius: 1,
            nearest_hospital: hospital,
            note: None,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert!(json["note"].is_null());
        assert_eq!(json["penyakit"], "Tifus");
        assert_eq!(json["nearest_hospital"]["name"], "RS");
    }
}
