//! HTTP handler for the landing page.

use std::sync::Arc;

use axum::extract::State;
use axum::response::{Html, IntoResponse};

use crate::domain::landing::{render_landing_page, LandingPage};

/// Landing page rendered once at startup.
#[derive(Clone)]
pub struct LandingAppState {
    html: Arc<str>,
}

impl LandingAppState {
    pub fn new(page: &LandingPage) -> Self {
        Self {
            html: Arc::from(render_landing_page(page)),
        }
    }
}

/// GET / - Landing page
pub async fn landing_page(State(state): State<LandingAppState>) -> impl IntoResponse {
    Html(state.html.to_string())
}
