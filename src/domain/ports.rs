use crate::domain::model::Manifest;
use crate::utils::error::Result;

/// Destination for an exported manifest. In the browser tool this was the
/// save-as-download mechanism; tests and desktop hosts write to disk.
pub trait ManifestSink {
    fn save(&self, manifest: &Manifest) -> Result<()>;
}
