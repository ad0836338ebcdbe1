//! Hospital domain - locations, geometry and nearby search.

mod directory;
mod errors;
mod geo;
mod geometry;
#[allow(clippy::module_inception)]
mod hospital;

pub use directory::{
    directions_url, format_float, HospitalDirectory, NearbyHospital, NearbySearch,
    DEFAULT_FALLBACK_LIMIT,
};
pub use errors::HospitalError;
pub use geo::{geodesic_distance_km, haversine_distance_km, vincenty_distance_km, GeoPoint};
pub use geometry::{Geometry, Polygon, Position};
pub use hospital::{
    select_hospitals, GeometryMethod, Hospital, MapFeature, HOSPITAL_MARKER,
    HOSPITAL_MARKER_PROPERTIES, NAME_PROPERTY,
};
