//! HTTP middleware for axum.
//!
//! This module contains middleware layers for cross-cutting concerns:
//!
//! - `api_key` - Shared API key check for protected routes

pub mod api_key;

pub use api_key::{require_api_key, ApiKeyState, API_KEY_HEADER, INVALID_API_KEY_MESSAGE};
