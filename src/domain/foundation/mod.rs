//! Foundation module - Shared domain primitives.
//!
//! Contains the error vocabulary and numeric helpers shared by the
//! estimate and hospital domains.

mod errors;
mod rounding;

pub use errors::{ErrorCode, ValidationError};
pub use rounding::round_to;
