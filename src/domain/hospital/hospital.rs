//! Hospital records and selection of hospital features from map data.

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use serde::{Deserialize, Serialize};

use super::errors::HospitalError;
use super::geo::GeoPoint;
use super::geometry::Geometry;

/// Property holding the feature name.
pub const NAME_PROPERTY: &str = "NAMOBJ";

/// Properties searched for the hospital marker.
pub const HOSPITAL_MARKER_PROPERTIES: [&str; 3] = ["NAMOBJ", "REMARK", "TIPSHT"];

/// Text that marks a feature as a hospital (matched case-insensitively).
pub const HOSPITAL_MARKER: &str = "Rumah Sakit";

/// Which point of a hospital's geometry to measure distance from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GeometryMethod {
    #[serde(rename = "Centroid")]
    Centroid,
    #[default]
    #[serde(rename = "Representative Point")]
    RepresentativePoint,
}

impl GeometryMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            GeometryMethod::Centroid => "Centroid",
            GeometryMethod::RepresentativePoint => "Representative Point",
        }
    }
}

impl fmt::Display for GeometryMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A hospital with its two precomputed reference points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hospital {
    pub name: String,
    pub centroid: GeoPoint,
    pub representative: GeoPoint,
}

impl Hospital {
    /// Builds a hospital from its geometry; `None` for empty geometries.
    pub fn from_geometry(name: impl Into<String>, geometry: &Geometry) -> Option<Self> {
        let centroid = geometry.centroid()?;
        let representative = geometry.representative_point()?;
        Some(Self {
            name: name.into(),
            centroid: centroid.to_geo_point(),
            representative: representative.to_geo_point(),
        })
    }

    /// A hospital located at a single point.
    pub fn at(name: impl Into<String>, location: GeoPoint) -> Self {
        Self {
            name: name.into(),
            centroid: location,
            representative: location,
        }
    }

    /// The reference point selected by `method`.
    pub fn location(&self, method: GeometryMethod) -> GeoPoint {
        match method {
            GeometryMethod::Centroid => self.centroid,
            GeometryMethod::RepresentativePoint => self.representative,
        }
    }
}

/// A named map feature as read from a map data source.
#[derive(Debug, Clone, PartialEq)]
pub struct MapFeature {
    /// String-valued properties; non-string values are stringified.
    pub properties: HashMap<String, String>,
    pub geometry: Option<Geometry>,
}

impl MapFeature {
    fn is_hospital(&self) -> bool {
        let marker = HOSPITAL_MARKER.to_lowercase();
        HOSPITAL_MARKER_PROPERTIES.iter().any(|key| {
            self.properties
                .get(*key)
                .is_some_and(|v| v.to_lowercase().contains(&marker))
        })
    }
}

/// Turns map features into hospitals.
///
/// Keeps features whose `NAMOBJ`, `REMARK` or `TIPSHT` mentions
/// "Rumah Sakit"; if none do, keeps every feature. Features without a
/// geometry are dropped. Fails if no feature carries a `NAMOBJ` property.
pub fn select_hospitals(features: &[MapFeature]) -> Result<Vec<Hospital>, HospitalError> {
    if !features.is_empty()
        && !features
            .iter()
            .any(|f| f.properties.contains_key(NAME_PROPERTY))
    {
        let available: BTreeSet<&String> =
            features.iter().flat_map(|f| f.properties.keys()).collect();
        return Err(HospitalError::MissingNameProperty {
            available: available.into_iter().cloned().collect(),
        });
    }

    let matching: Vec<&MapFeature> = features.iter().filter(|f| f.is_hospital()).collect();
    let selected: Vec<&MapFeature> = if matching.is_empty() {
        tracing::warn!(
            features = features.len(),
            "No feature is marked as a hospital, keeping all features"
        );
        features.iter().collect()
    } else {
        matching
    };

    let hospitals: Vec<Hospital> = selected
        .into_iter()
        .filter_map(|f| {
            let name = f.properties.get(NAME_PROPERTY).cloned().unwrap_or_default();
            f.geometry
                .as_ref()
                .and_then(|g| Hospital::from_geometry(name, g))
        })
        .collect();

    Ok(hospitals)
}
