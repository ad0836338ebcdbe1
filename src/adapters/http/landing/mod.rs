//! HTTP adapter for the landing page.
//!
//! - `GET /` - Static dashboard landing page
//! - `GET /img/*` - Page images

pub mod handlers;
pub mod routes;

pub use handlers::LandingAppState;
pub use routes::landing_routes;
