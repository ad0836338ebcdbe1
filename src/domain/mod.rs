//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (validation errors, error codes, rounding)
//! - `disease` - The closed set of disease categories
//! - `estimate` - Cost catalog and treatment cost prediction
//! - `hospital` - Hospital locations, geometry and nearby search
//! - `landing` - Static landing page content and rendering

pub mod disease;
pub mod estimate;
pub mod foundation;
pub mod hospital;
pub mod landing;
