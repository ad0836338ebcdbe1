//! Axum router configuration for the landing page.

use std::path::Path;

use axum::{routing::get, Router};
use tower_http::services::ServeDir;

use super::handlers::{landing_page, LandingAppState};

/// Create the landing page router.
///
/// # Routes
///
/// - `GET /` - Landing page HTML
/// - `GET /img/*` - Images from `<public_dir>/img`, when a public directory is set
///
/// Neither route requires the API key.
pub fn landing_routes(public_dir: Option<&Path>) -> Router<LandingAppState> {
    let router = Router::new().route("/", get(landing_page));
    match public_dir {
        Some(dir) => router.nest_service("/img", ServeDir::new(dir.join("img"))),
        None => router,
    }
}
