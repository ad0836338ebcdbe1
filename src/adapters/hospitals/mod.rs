//! Hospital location adapters.
//!
//! - `GeoJsonHospitalSource` - GeoJSON feature collections of map objects
//! - `InMemoryHospitalSource` - Fixed hospitals for tests

mod geojson;
mod in_memory;

pub use geojson::{parse_features, GeoJsonHospitalSource};
pub use in_memory::InMemoryHospitalSource;
