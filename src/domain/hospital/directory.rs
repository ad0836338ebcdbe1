//! HospitalDirectory - nearby hospital search.

use serde::Serialize;

use super::errors::HospitalError;
use super::geo::{geodesic_distance_km, GeoPoint};
use super::hospital::{GeometryMethod, Hospital};
use crate::domain::foundation::round_to;

/// Number of hospitals returned when none are inside the radius.
pub const DEFAULT_FALLBACK_LIMIT: usize = 30;

/// A hospital matched by a nearby search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NearbyHospital {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    /// Geodesic distance from the origin, rounded to 4 decimals.
    pub distance_km: f64,
    pub google_maps_directions: String,
}

/// Outcome of [`HospitalDirectory::search`].
#[derive(Debug, Clone, PartialEq)]
pub struct NearbySearch {
    /// Hospitals sorted by ascending distance.
    pub hospitals: Vec<NearbyHospital>,
    /// False when nothing was in range and the global nearest were returned.
    pub within_radius: bool,
    pub note: Option<String>,
}

impl NearbySearch {
    pub fn nearest(&self) -> Option<&NearbyHospital> {
        self.hospitals.first()
    }
}

/// All loaded hospitals.
#[derive(Debug, Clone)]
pub struct HospitalDirectory {
    hospitals: Vec<Hospital>,
    fallback_limit: usize,
}

impl HospitalDirectory {
    pub fn new(hospitals: Vec<Hospital>, fallback_limit: usize) -> Self {
        Self {
            hospitals,
            fallback_limit,
        }
    }

    pub fn len(&self) -> usize {
        self.hospitals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hospitals.is_empty()
    }

    pub fn hospitals(&self) -> &[Hospital] {
        &self.hospitals
    }

    /// Finds hospitals within `radius_km` of `origin`.
    ///
    /// When none are in range, returns the globally nearest ones (up to the
    /// fallback limit) with an explanatory note.
    pub fn search(
        &self,
        origin: GeoPoint,
        radius_km: f64,
        method: GeometryMethod,
    ) -> Result<NearbySearch, HospitalError> {
        if self.hospitals.is_empty() {
            return Err(HospitalError::NoHospitals);
        }

        let mut ranked: Vec<(f64, &Hospital, GeoPoint)> = self
            .hospitals
            .iter()
            .map(|h| {
                let location = h.location(method);
                (geodesic_distance_km(origin, location), h, location)
            })
            .collect();
        ranked.sort_by(|a, b| a.0.total_cmp(&b.0));

        let in_range = ranked.iter().take_while(|(d, _, _)| *d <= radius_km).count();
        let (selected, within_radius, note) = if in_range > 0 {
            (&ranked[..in_range], true, None)
        } else {
            let limit = self.fallback_limit.min(ranked.len());
            let note = format!(
                "Tidak ada RS dalam radius {} km. Mengembalikan RS terdekat secara global.",
                format_float(radius_km)
            );
            (&ranked[..limit], false, Some(note))
        };

        let hospitals = selected
            .iter()
            .map(|(distance, hospital, location)| NearbyHospital {
                name: hospital.name.clone(),
                lat: location.lat,
                lon: location.lon,
                distance_km: round_to(*distance, 4),
                google_maps_directions: directions_url(origin, *location),
            })
            .collect();

        tracing::debug!(
            radius_km,
            method = %method,
            matched = in_range,
            within_radius,
            "Nearby hospital search"
        );

        Ok(NearbySearch {
            hospitals,
            within_radius,
            note,
        })
    }
}

/// Google Maps driving directions from `from` to `to`.
pub fn directions_url(from: GeoPoint, to: GeoPoint) -> String {
    format!(
        "https://www.google.com/maps/dir/{},{}/{},{}",
        format_float(from.lat),
        format_float(from.lon),
        format_float(to.lat),
        format_float(to.lon)
    )
}

/// Formats a float keeping a trailing `.0` on integral values (`10.0`).
pub fn format_float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}
