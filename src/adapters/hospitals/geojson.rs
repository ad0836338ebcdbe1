//! GeoJSON Hospital Adapter
//!
//! Loads hospital features from a GeoJSON `FeatureCollection` and applies
//! the hospital selection rules. Coordinates are expected in WGS84
//! longitude/latitude order.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::hospital::{
    select_hospitals, Geometry, Hospital, HospitalError, MapFeature, Polygon, Position,
};
use crate::ports::HospitalSource;

/// Hospital source backed by a GeoJSON file.
#[derive(Debug, Clone)]
pub struct GeoJsonHospitalSource {
    path: PathBuf,
}

impl GeoJsonHospitalSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl HospitalSource for GeoJsonHospitalSource {
    async fn load(&self) -> Result<Vec<Hospital>, HospitalError> {
        let contents = fs::read_to_string(&self.path)
            .await
            .map_err(|e| HospitalError::Io {
                path: self.path.display().to_string(),
                message: e.to_string(),
            })?;

        let features = parse_features(&contents)?;
        let hospitals = select_hospitals(&features)?;
        tracing::info!(
            path = %self.path.display(),
            features = features.len(),
            hospitals = hospitals.len(),
            "Hospital data loaded"
        );
        Ok(hospitals)
    }
}

#[derive(Debug, Deserialize)]
struct FeatureCollectionDoc {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    features: Vec<FeatureDoc>,
    #[serde(default)]
    crs: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct FeatureDoc {
    #[serde(default)]
    properties: Option<Map<String, Value>>,
    #[serde(default)]
    geometry: Option<GeometryDoc>,
}

#[derive(Debug, Deserialize)]
struct GeometryDoc {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    coordinates: Value,
}

/// Parses a GeoJSON `FeatureCollection` into map features.
///
/// Geometries of unsupported kinds (e.g. `GeometryCollection`) are dropped
/// with a warning; the feature is kept without geometry.
pub fn parse_features(contents: &str) -> Result<Vec<MapFeature>, HospitalError> {
    let doc: FeatureCollectionDoc =
        serde_json::from_str(contents).map_err(|e| HospitalError::malformed(e.to_string()))?;
    if doc.kind != "FeatureCollection" {
        return Err(HospitalError::malformed(format!(
            "expected a FeatureCollection, found {}",
            doc.kind
        )));
    }
    if let Some(crs) = doc.crs.as_ref().and_then(crs_name) {
        if !is_wgs84(&crs) {
            tracing::warn!(crs = %crs, "GeoJSON is not in WGS84, coordinates are used as-is");
        }
    }

    doc.features
        .into_iter()
        .enumerate()
        .map(|(i, feature)| {
            let properties = feature
                .properties
                .unwrap_or_default()
                .into_iter()
                .filter_map(|(k, v)| property_text(v).map(|text| (k, text)))
                .collect::<HashMap<_, _>>();
            let geometry = match feature.geometry {
                Some(g) => parse_geometry(&g)
                    .map_err(|e| HospitalError::malformed(format!("feature {}: {}", i, e)))?,
                None => None,
            };
            Ok(MapFeature {
                properties,
                geometry,
            })
        })
        .collect()
}

fn crs_name(crs: &Value) -> Option<String> {
    crs.get("properties")?
        .get("name")?
        .as_str()
        .map(str::to_string)
}

fn is_wgs84(name: &str) -> bool {
    let upper = name.to_uppercase();
    upper.contains("CRS84") || upper.contains("4326")
}

fn property_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

fn parse_geometry(doc: &GeometryDoc) -> Result<Option<Geometry>, String> {
    let coords = &doc.coordinates;
    let geometry = match doc.kind.as_str() {
        "Point" => Geometry::Point(position(coords)?),
        "MultiPoint" => Geometry::MultiPoint(positions(coords)?),
        "LineString" => Geometry::LineString(positions(coords)?),
        "MultiLineString" => Geometry::MultiLineString(
            array(coords)?
                .iter()
                .map(positions)
                .collect::<Result<_, _>>()?,
        ),
        "Polygon" => Geometry::Polygon(polygon(coords)?),
        "MultiPolygon" => Geometry::MultiPolygon(
            array(coords)?
                .iter()
                .map(polygon)
                .collect::<Result<_, _>>()?,
        ),
        other => {
            tracing::warn!(geometry = other, "Unsupported geometry type, skipping");
            return Ok(None);
        }
    };
    Ok(Some(geometry))
}

fn array(value: &Value) -> Result<&Vec<Value>, String> {
    value
        .as_array()
        .ok_or_else(|| format!("expected an array, found {}", value))
}

fn position(value: &Value) -> Result<Position, String> {
    let items = array(value)?;
    let coord = |i: usize| {
        items
            .get(i)
            .and_then(Value::as_f64)
            .ok_or_else(|| format!("invalid position {}", value))
    };
    Ok(Position::new(coord(0)?, coord(1)?))
}

fn positions(value: &Value) -> Result<Vec<Position>, String> {
    array(value)?.iter().map(position).collect()
}

fn polygon(value: &Value) -> Result<Polygon, String> {
    let rings = array(value)?
        .iter()
        .map(positions)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Polygon::new(rings))
}
