//! API key middleware for axum.
//!
//! Every protected route requires the shared key in the `X-API-Key` header.
//! The comparison runs in constant time.
//!
//! # Example
//!
//! ```ignore
//! use axum::{Router, routing::get, middleware};
//! use std::sync::Arc;
//!
//! let key: ApiKeyState = Arc::new(SecretString::new("berapaya".into()));
//!
//! let app = Router::new()
//!     .route("/health", get(health))
//!     .layer(middleware::from_fn_with_state(key, require_api_key));
//! ```

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use secrecy::{ExposeSecret, SecretString};
use subtle::ConstantTimeEq;

use crate::domain::foundation::ErrorCode;

use super::super::error::ErrorResponse;

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "X-API-Key";

/// Message returned for a missing or wrong key.
pub const INVALID_API_KEY_MESSAGE: &str = "Could not validate API KEY";

/// Middleware state - the expected key.
pub type ApiKeyState = Arc<SecretString>;

/// Rejects requests whose `X-API-Key` header does not match the configured
/// key with 403 Forbidden.
pub async fn require_api_key(
    State(expected): State<ApiKeyState>,
    request: Request,
    next: Next,
) -> Response {
    let provided = request
        .headers()
        .get(API_KEY_HEADER)
        .map(|v| v.as_bytes())
        .unwrap_or_default();

    if keys_match(provided, expected.expose_secret().as_bytes()) {
        next.run(request).await
    } else {
        tracing::warn!(path = %request.uri().path(), "Rejected request with invalid API key");
        (
            StatusCode::FORBIDDEN,
            Json(ErrorResponse::new(
                INVALID_API_KEY_MESSAGE,
                ErrorCode::InvalidApiKey,
            )),
        )
            .into_response()
    }
}

fn keys_match(provided: &[u8], expected: &[u8]) -> bool {
    provided.ct_eq(expected).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, middleware, routing::get, Router};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn app() -> Router {
        let key: ApiKeyState = Arc::new(SecretString::new("rahasia".to_string()));
        Router::new()
            .route("/ping", get(|| async { "pong" }))
            .layer(middleware::from_fn_with_state(key, require_api_key))
    }

    async fn call(key: Option<&str>) -> (StatusCode, String) {
        let mut builder = axum::http::Request::builder().uri("/ping");
        if let Some(key) = key {
            builder = builder.header(API_KEY_HEADER, key);
        }
        let response = app()
            .oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn correct_key_passes_through() {
        let (status, body) = call(Some("rahasia")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "pong");
    }

    #[tokio::test]
    async fn wrong_key_is_forbidden() {
        let (status, body) = call(Some("salah")).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["detail"], "Could not validate API KEY");
        assert_eq!(json["code"], "INVALID_API_KEY");
    }

    #[tokio::test]
    async fn missing_key_is_forbidden() {
        let (status, _) = call(None).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[test]
    fn keys_match_requires_equal_length_and_content() {
        assert!(keys_match(b"abc", b"abc"));
        assert!(!keys_match(b"abc", b"abd"));
        assert!(!keys_match(b"ab", b"abc"));
        assert!(!keys_match(b"", b"abc"));
    }
}
