//! HTTP adapters - Axum routers, handlers and middleware.
//!
//! - `estimate` - Prediction, metadata and health endpoints (API key required)
//! - `landing` - Public landing page and its images
//! - `middleware` - API key check
//! - `error` - Shared JSON error body

pub mod error;
pub mod estimate;
pub mod landing;
pub mod middleware;

pub use error::{ApiError, ErrorResponse, DATA_NOT_READY_MESSAGE};
pub use estimate::{estimate_routes, EstimateAppState};
pub use landing::{landing_routes, LandingAppState};
pub use middleware::{require_api_key, ApiKeyState, API_KEY_HEADER};

use std::sync::Arc;

use axum::http::HeaderValue;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;

/// Build the full application router.
///
/// Estimate routes sit behind the API key check. The landing page and its
/// images stay public. Every route shares the request id, tracing, timeout,
/// compression and CORS layers.
pub fn app_router(
    estimate: EstimateAppState,
    landing: LandingAppState,
    config: &AppConfig,
) -> Router {
    let api_key: ApiKeyState = Arc::new(config.auth.api_key.clone());

    let protected = estimate_routes()
        .with_state(estimate)
        .layer(axum::middleware::from_fn_with_state(api_key, require_api_key));

    let public = landing_routes(config.data.public_dir.as_deref()).with_state(landing);

    Router::new().merge(protected).merge(public).layer(
        ServiceBuilder::new()
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(config.server.request_timeout()))
            .layer(CompressionLayer::new())
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(cors_layer(&config.server.cors_origins_list())),
    )
}

/// Permissive CORS when no origins are configured, otherwise an allow list.
fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::permissive();
    }
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use axum::routing::get;
    use tower::ServiceExt;

    fn app(origins: &[String]) -> Router {
        Router::new()
            .route("/ping", get(|| async { "pong" }))
            .layer(cors_layer(origins))
    }

    fn request(origin: &str) -> Request<Body> {
        Request::builder()
            .uri("/ping")
            .header(header::ORIGIN, origin)
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn cors_allows_any_origin_without_list() {
        let response = app(&[]).oneshot(request("https://contoh.id")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    }

    #[tokio::test]
    async fn cors_echoes_listed_origin() {
        let origins = vec!["https://berapaya.id".to_string()];
        let response = app(&origins)
            .oneshot(request("https://berapaya.id"))
            .await
            .unwrap();

        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "https://berapaya.id"
        );
    }

    #[tokio::test]
    async fn cors_ignores_unlisted_origin() {
        let origins = vec!["https://berapaya.id".to_string()];
        let response = app(&origins)
            .oneshot(request("https://lain.id"))
            .await
            .unwrap();

        assert!(!response
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    }
}
