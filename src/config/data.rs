//! Data file configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Locations of the input data
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// CSV export of the cost catalog
    #[serde(default = "default_catalog_path")]
    pub catalog_path: PathBuf,

    /// GeoJSON file with hospital features
    #[serde(default = "default_hospitals_path")]
    pub hospitals_path: PathBuf,

    /// Directory holding landing page assets (`img/`); not served when unset
    pub public_dir: Option<PathBuf>,
}

impl DataConfig {
    /// Validate data configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.catalog_path.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("DATA__CATALOG_PATH"));
        }
        if self.hospitals_path.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("DATA__HOSPITALS_PATH"));
        }
        Ok(())
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            catalog_path: default_catalog_path(),
            hospitals_path: default_hospitals_path(),
            public_dir: None,
        }
    }
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from("estimasi_biaya.csv")
}

fn default_hospitals_path() -> PathBuf {
    PathBuf::from("rumah_sakit.geojson")
}
