use chrono::Local;
use regex::Regex;

use crate::config::ManifestConfig;
use crate::core::{encoder, normalizer};
use crate::domain::model::{Manifest, ManifestFormat, ParcelDraft, ParcelRecord, RecordId};
use crate::domain::ports::ManifestSink;
use crate::utils::error::{BatchError, Result};

/// One editing session's batch: an owned, ordered list of parcels plus the
/// shared SO/INV reference. Insertion order drives the Package Number
/// column, so it is preserved across edits.
///
/// State lives only for the session; nothing is persisted between runs.
#[derive(Debug, Clone)]
pub struct BatchSession {
    format: ManifestFormat,
    filename_base: String,
    reference: Option<String>,
    records: Vec<ParcelRecord>,
}

impl BatchSession {
    pub fn new(format: ManifestFormat) -> Self {
        Self::with_filename_base(format, crate::config::DEFAULT_FILENAME_BASE)
    }

    pub fn with_filename_base(format: ManifestFormat, filename_base: &str) -> Self {
        Self {
            format,
            filename_base: filename_base.to_string(),
            reference: None,
            records: Vec::new(),
        }
    }

    pub fn from_config(config: &ManifestConfig) -> Self {
        Self::with_filename_base(config.format(), config.filename_base())
    }

    pub fn format(&self) -> ManifestFormat {
        self.format
    }

    /// Validates and appends a new parcel, returning its fresh id.
    /// The batch is untouched when validation fails.
    pub fn add(&mut self, draft: &ParcelDraft) -> Result<RecordId> {
        let id = RecordId::new();
        let record = normalizer::normalize_draft(self.format, draft, id.clone())?;

        self.records.push(record);
        tracing::info!(id = %id, parcels = self.records.len(), "parcel added");
        Ok(id)
    }

    /// Replaces the record with the given id in place, keeping its id and
    /// its position. A no-op when the record was deleted from under the
    /// form; the draft is still validated either way.
    pub fn edit(&mut self, id: &RecordId, draft: &ParcelDraft) -> Result<()> {
        let record = normalizer::normalize_draft(self.format, draft, id.clone())?;

        match self.records.iter_mut().find(|r| &r.id == id) {
            Some(slot) => {
                *slot = record;
                tracing::info!(id = %id, "parcel updated");
            }
            None => {
                tracing::warn!(id = %id, "edit target not in batch, ignoring");
            }
        }
        Ok(())
    }

    /// Removes the record with the given id. Unknown ids are a no-op.
    pub fn delete(&mut self, id: &RecordId) {
        let before = self.records.len();
        self.records.retain(|r| &r.id != id);
        if self.records.len() < before {
            tracing::info!(id = %id, parcels = self.records.len(), "parcel removed");
        }
    }

    pub fn clear(&mut self) {
        tracing::info!(parcels = self.records.len(), "batch cleared");
        self.records.clear();
    }

    pub fn set_reference(&mut self, reference: impl Into<String>) {
        self.reference = Some(reference.into());
    }

    pub fn reference(&self) -> Option<&str> {
        self.reference.as_deref()
    }

    pub fn records(&self) -> &[ParcelRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sum of parcel weights, for the totals display.
    pub fn total_weight(&self) -> f64 {
        self.records.iter().map(|r| r.weight).sum()
    }

    /// Serializes the batch into a manifest without mutating it. Exporting
    /// the same batch twice yields identical contents.
    pub fn export(&self) -> Result<Manifest> {
        if self.records.is_empty() {
            tracing::warn!("export requested with an empty batch");
            return Err(BatchError::EmptyBatch);
        }

        let date = Local::now().format("%Y-%m-%d");
        let (contents, filename) = match self.format {
            ManifestFormat::Compact => {
                let reference = self
                    .reference
                    .as_deref()
                    .map(str::trim)
                    .filter(|r| !r.is_empty())
                    .ok_or(BatchError::MissingBatchReference)?;

                (
                    encoder::encode_compact(&self.records, reference),
                    format!(
                        "{}_{}_{}.csv",
                        self.filename_base,
                        filename_slug(reference),
                        date
                    ),
                )
            }
            ManifestFormat::Carrier => (
                encoder::encode_carrier(&self.records),
                format!("{}_{}.csv", self.filename_base, date),
            ),
        };

        tracing::info!(parcels = self.records.len(), filename = %filename, "manifest generated");
        Ok(Manifest { filename, contents })
    }

    /// Exports and hands the manifest to the save collaborator, returning
    /// the suggested filename.
    pub fn export_to<S: ManifestSink>(&self, sink: &S) -> Result<String> {
        let manifest = self.export()?;
        sink.save(&manifest)?;
        Ok(manifest.filename)
    }
}

/// The reference lands in the suggested filename; keep it safe for a save
/// dialog on any platform.
fn filename_slug(reference: &str) -> String {
    let re = Regex::new(r"[^A-Za-z0-9._-]+").unwrap();
    re.replace_all(reference, "-").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(length: &str, weight: &str) -> ParcelDraft {
        ParcelDraft::dimensions(length, "8", "6", weight)
    }

    #[test]
    fn test_add_and_list() {
        let mut session = BatchSession::new(ManifestFormat::Compact);
        session.add(&draft("11.2", "5.5")).unwrap();
        session.add(&draft("3", "1.25")).unwrap();

        assert_eq!(session.len(), 2);
        assert_eq!(session.records()[0].length, 12);
        assert_eq!(session.total_weight(), 6.75);
    }

    #[test]
    fn test_failed_add_leaves_batch_unchanged() {
        let mut session = BatchSession::new(ManifestFormat::Compact);
        session.add(&draft("1", "1")).unwrap();

        assert!(session.add(&draft("zero", "1")).is_err());
        assert_eq!(session.len(), 1);
    }

    #[test]
    fn test_edit_preserves_id_and_position() {
        let mut session = BatchSession::new(ManifestFormat::Compact);
        let first = session.add(&draft("1", "1")).unwrap();
        let second = session.add(&draft("2", "2")).unwrap();
        session.add(&draft("3", "3")).unwrap();

        session.edit(&second, &draft("20.5", "2.5")).unwrap();

        assert_eq!(session.len(), 3);
        assert_eq!(session.records()[1].id, second);
        assert_eq!(session.records()[1].length, 21);
        assert_eq!(session.records()[0].id, first);
    }

    #[test]
    fn test_edit_unknown_id_is_noop() {
        let mut session = BatchSession::new(ManifestFormat::Compact);
        session.add(&draft("1", "1")).unwrap();

        let gone = RecordId::new();
        session.edit(&gone, &draft("9", "9")).unwrap();

        assert_eq!(session.len(), 1);
        assert_eq!(session.records()[0].length, 1);
    }

    #[test]
    fn test_edit_still_validates_draft() {
        let mut session = BatchSession::new(ManifestFormat::Compact);
        let id = session.add(&draft("1", "1")).unwrap();

        assert!(session.edit(&id, &draft("", "1")).is_err());
        assert_eq!(session.records()[0].length, 1);
    }

    #[test]
    fn test_delete_by_id_and_unknown_noop() {
        let mut session = BatchSession::new(ManifestFormat::Compact);
        let first = session.add(&draft("1", "1")).unwrap();
        session.add(&draft("2", "2")).unwrap();

        session.delete(&RecordId::new());
        assert_eq!(session.len(), 2);

        session.delete(&first);
        assert_eq!(session.len(), 1);
        assert_eq!(session.records()[0].length, 2);
    }

    #[test]
    fn test_clear() {
        let mut session = BatchSession::new(ManifestFormat::Compact);
        session.add(&draft("1", "1")).unwrap();
        session.clear();
        assert!(session.is_empty());
    }

    #[test]
    fn test_export_empty_batch_rejected() {
        let session = BatchSession::new(ManifestFormat::Carrier);
        assert!(matches!(session.export(), Err(BatchError::EmptyBatch)));
    }

    #[test]
    fn test_export_compact_requires_reference() {
        let mut session = BatchSession::new(ManifestFormat::Compact);
        session.add(&draft("1", "1")).unwrap();

        assert!(matches!(
            session.export(),
            Err(BatchError::MissingBatchReference)
        ));

        session.set_reference("   ");
        assert!(matches!(
            session.export(),
            Err(BatchError::MissingBatchReference)
        ));

        session.set_reference("SO-100");
        let manifest = session.export().unwrap();
        assert!(manifest.contents.ends_with("1,SO-100,1,8,6,1"));
    }

    #[test]
    fn test_export_is_stable_and_non_mutating() {
        let mut session = BatchSession::new(ManifestFormat::Compact);
        session.set_reference("SO-100");
        session.add(&draft("11.2", "5.5")).unwrap();

        let first = session.export().unwrap();
        let second = session.export().unwrap();

        assert_eq!(first.contents, second.contents);
        assert_eq!(session.len(), 1);
    }

    #[test]
    fn test_export_filename_convention() {
        let mut session = BatchSession::new(ManifestFormat::Compact);
        session.set_reference("SO 100/7");
        session.add(&draft("1", "1")).unwrap();

        let manifest = session.export().unwrap();
        let date = Local::now().format("%Y-%m-%d").to_string();
        assert_eq!(
            manifest.filename,
            format!("fedex_shipments_SO-100-7_{date}.csv")
        );

        let carrier = BatchSession {
            format: ManifestFormat::Carrier,
            ..session.clone()
        };
        let manifest = carrier.export().unwrap();
        assert_eq!(manifest.filename, format!("fedex_shipments_{date}.csv"));
    }

    #[test]
    fn test_filename_slug() {
        assert_eq!(filename_slug("SO-100"), "SO-100");
        assert_eq!(filename_slug("SO 100 / rush!"), "SO-100-rush-");
    }
}
