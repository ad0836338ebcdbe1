//! Error responses shared by all HTTP endpoints.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::application::PredictNearbyError;
use crate::domain::foundation::ErrorCode;
use crate::domain::hospital::HospitalError;

/// Detail returned while the hospital directory is unavailable.
pub const DATA_NOT_READY_MESSAGE: &str = "Model/data belum siap";

/// JSON error body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable message.
    pub detail: String,
    /// Error code for programmatic handling.
    pub code: String,
}

impl ErrorResponse {
    pub fn new(detail: impl Into<String>, code: ErrorCode) -> Self {
        Self {
            detail: detail.into(),
            code: code.to_string(),
        }
    }
}

/// API error type that converts application errors to HTTP responses.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorResponse,
}

impl ApiError {
    pub fn new(status: StatusCode, code: ErrorCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            body: ErrorResponse::new(detail, code),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<PredictNearbyError> for ApiError {
    fn from(err: PredictNearbyError) -> Self {
        let code = err.code();
        match code {
            ErrorCode::ValidationFailed => {
                ApiError::new(StatusCode::UNPROCESSABLE_ENTITY, code, err.to_string())
            }
            ErrorCode::UnknownDisease => ApiError::new(StatusCode::BAD_REQUEST, code, err.to_string()),
            ErrorCode::DataNotReady => {
                ApiError::new(StatusCode::SERVICE_UNAVAILABLE, code, DATA_NOT_READY_MESSAGE)
            }
            ErrorCode::InvalidApiKey => ApiError::new(StatusCode::FORBIDDEN, code, err.to_string()),
            ErrorCode::InternalError => {
                tracing::error!(error = %err, "Prediction failed");
                ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, code, err.to_string())
            }
        }
    }
}

impl From<HospitalError> for ApiError {
    fn from(err: HospitalError) -> Self {
        PredictNearbyError::from(err).into()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        let status = match rejection.status() {
            StatusCode::UNSUPPORTED_MEDIA_TYPE => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            _ => StatusCode::UNPROCESSABLE_ENTITY,
        };
        ApiError::new(status, ErrorCode::ValidationFailed, rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::estimate::EstimateError;
    use crate::domain::foundation::ValidationError;

    #[test]
    fn unknown_disease_is_bad_request_with_message() {
        let err: ApiError =
            PredictNearbyError::from(EstimateError::unknown_disease("Flu")).into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.body.detail, "Penyakit 'Flu' tidak ditemukan di Excel");
        assert_eq!(err.body.code, "UNKNOWN_DISEASE");
    }

    #[test]
    fn validation_is_unprocessable() {
        let err: ApiError =
            PredictNearbyError::from(ValidationError::below_minimum("radius_km", 1.0, 0.0)).into();
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn no_hospitals_is_service_unavailable() {
        let err: ApiError = HospitalError::NoHospitals.into();
        assert_eq!(err.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(err.body.detail, "Model/data belum siap");
    }

    #[test]
    fn training_failure_is_internal() {
        let err: ApiError =
            PredictNearbyError::from(EstimateError::invalid_training_data("bad")).into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
