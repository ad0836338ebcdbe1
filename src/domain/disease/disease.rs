//! Disease enum representing the 15 disease/procedure categories.

use once_cell::sync::Lazy;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The disease and procedure categories the application prices.
///
/// The label is the stored value: it is what gets persisted and what goes
/// over the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Disease {
    DemamBerdarah,
    Tifus,
    Pneumonia,
    UsusBuntu,
    BatuEmpedu,
    PersalinanNormal,
    Caesar,
    SeranganJantung,
    PemasanganRing,
    OperasiBypass,
    KankerPayudara,
    KankerParu,
    Stroke,
    TumorOtak,
    PatahTulang,
}

/// Returned when a string matches no disease label.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown disease label: '{0}'")]
pub struct UnknownDiseaseLabel(pub String);

impl Disease {
    /// Returns all diseases in declaration order.
    pub fn all() -> &'static [Disease] {
        &[
            Disease::DemamBerdarah,
            Disease::Tifus,
            Disease::Pneumonia,
            Disease::UsusBuntu,
            Disease::BatuEmpedu,
            Disease::PersalinanNormal,
            Disease::Caesar,
            Disease::SeranganJantung,
            Disease::PemasanganRing,
            Disease::OperasiBypass,
            Disease::KankerPayudara,
            Disease::KankerParu,
            Disease::Stroke,
            Disease::TumorOtak,
            Disease::PatahTulang,
        ]
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Disease::DemamBerdarah => "Demam Berdarah",
            Disease::Tifus => "Tifus",
            Disease::Pneumonia => "Pneumonia",
            Disease::UsusBuntu => "Usus Buntu",
            Disease::BatuEmpedu => "Batu Empedu Ringan",
            Disease::PersalinanNormal => "Persalinan Normal",
            Disease::Caesar => "Caesar",
            Disease::SeranganJantung => "Serangan Jantung",
            Disease::PemasanganRing => "Pemasangan Ring",
            Disease::OperasiBypass => "Operasi Bypass",
            Disease::KankerPayudara => "Kanker Payudara",
            Disease::KankerParu => "Kanker Paru",
            Disease::Stroke => "Stroke",
            Disease::TumorOtak => "Tumor Otak",
            Disease::PatahTulang => "Patah Tulang",
        }
    }

    /// Returns the symbolic code.
    pub fn code(&self) -> &'static str {
        match self {
            Disease::DemamBerdarah => "DEMAM_BERDARAH",
            Disease::Tifus => "TIFUS",
            Disease::Pneumonia => "PNEUMONIA",
            Disease::UsusBuntu => "USUS_BUNTU",
            Disease::BatuEmpedu => "BATU_EMP",
            Disease::PersalinanNormal => "PERSALINAN_NORMAL",
            Disease::Caesar => "CAESAR",
            Disease::SeranganJantung => "SERANGAN_JANTUNG",
            Disease::PemasanganRing => "PEMASANGAN_RING",
            Disease::OperasiBypass => "OPERASI_BYPASS",
            Disease::KankerPayudara => "KANKER_PAYUDARA",
            Disease::KankerParu => "KANKER_PARU",
            Disease::Stroke => "STROKE",
            Disease::TumorOtak => "TUMOR_OTAK",
            Disease::PatahTulang => "PATAH_TULANG",
        }
    }

    /// Looks up a disease by its exact label.
    pub fn from_label(label: &str) -> Result<Disease, UnknownDiseaseLabel> {
        LABEL_INDEX
            .get(label)
            .copied()
            .ok_or_else(|| UnknownDiseaseLabel(label.to_string()))
    }
}

static LABEL_INDEX: Lazy<HashMap<&'static str, Disease>> =
    Lazy::new(|| Disease::all().iter().map(|d| (d.label(), *d)).collect());

impl fmt::Display for Disease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Disease {
    type Err = UnknownDiseaseLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Disease::from_label(s)
    }
}

impl TryFrom<&str> for Disease {
    type Error = UnknownDiseaseLabel;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Disease::from_label(value)
    }
}

impl Serialize for Disease {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Disease {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Disease::from_label(&label).map_err(serde::de::Error::custom)
    }
}
