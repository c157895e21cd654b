use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque identifier for a record within a batch. Stable for the record's
/// lifetime, used only for edit/delete targeting, never exported.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordId(String);

impl RecordId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Recipient address block, present on records entered through the carrier
/// (full-schema) form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipient {
    pub company: String,
    pub attention: String,
    pub street1: String,
    pub street2: Option<String>,
    pub city: String,
    /// Two-letter code, upper-cased at normalization.
    pub state: String,
    pub zipcode: String,
    /// Digits only after normalization.
    pub phone: String,
    pub reference1: Option<String>,
    pub reference2: Option<String>,
    pub residential: bool,
}

/// A normalized parcel, the unit of export.
///
/// Dimensions are billable inches: rounded up to whole numbers so the
/// manifest never understates a package's footprint. Weight stays at the
/// precision the user entered it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParcelRecord {
    pub id: RecordId,
    pub length: u32,
    pub width: u32,
    pub height: u32,
    pub weight: f64,
    pub recipient: Option<Recipient>,
}

const CUBIC_INCHES_PER_FT3: f64 = 1728.0;

impl ParcelRecord {
    /// Volume in cubic feet, computed from the already-rounded dimensions.
    /// Display only; never part of the exported manifest.
    pub fn volume_ft3(&self) -> f64 {
        f64::from(self.length) * f64::from(self.width) * f64::from(self.height)
            / CUBIC_INCHES_PER_FT3
    }
}

/// Raw form state as the UI hands it over: every field a string, exactly as
/// typed. Normalization turns this into a [`ParcelRecord`] or rejects it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParcelDraft {
    pub company: String,
    pub attention: String,
    pub street1: String,
    pub street2: String,
    pub city: String,
    pub state: String,
    pub zipcode: String,
    pub phone: String,
    pub length: String,
    pub width: String,
    pub height: String,
    pub weight: String,
    pub reference1: String,
    pub reference2: String,
    pub residential: bool,
}

impl ParcelDraft {
    /// Shorthand for the dimensions-only entry form.
    pub fn dimensions(length: &str, width: &str, height: &str, weight: &str) -> Self {
        Self {
            length: length.to_string(),
            width: width.to_string(),
            height: height.to_string(),
            weight: weight.to_string(),
            ..Self::default()
        }
    }
}

/// Which batch-import schema the session targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ManifestFormat {
    /// Six columns, one shared SO/INV reference applied to every row.
    Compact,
    /// The 28-column carrier schema with per-record recipient fields.
    Carrier,
}

/// The export artifact: CSV text plus the suggested filename.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub filename: String,
    pub contents: String,
}
