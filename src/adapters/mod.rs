// Adapters layer: concrete sinks for exported manifests. The browser tool
// handed the CSV to a download collaborator; desktop hosts and tests write
// to a directory instead.

use std::fs;
use std::path::PathBuf;

use crate::domain::model::Manifest;
use crate::domain::ports::ManifestSink;
use crate::utils::error::Result;

#[derive(Debug, Clone)]
pub struct DirectorySink {
    base_path: PathBuf,
}

impl DirectorySink {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }
}

impl ManifestSink for DirectorySink {
    fn save(&self, manifest: &Manifest) -> Result<()> {
        fs::create_dir_all(&self.base_path)?;
        fs::write(self.base_path.join(&manifest.filename), &manifest.contents)?;
        Ok(())
    }
}
