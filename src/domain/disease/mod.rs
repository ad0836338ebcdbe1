//! Disease module - the closed set of priced disease/procedure categories.

#[allow(clippy::module_inception)]
mod disease;

pub use disease::{Disease, UnknownDiseaseLabel};
