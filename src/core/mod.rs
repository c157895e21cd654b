pub mod batch;
pub mod encoder;
pub mod normalizer;

pub use crate::domain::model::{Manifest, ManifestFormat, ParcelDraft, ParcelRecord, RecordId};
pub use crate::domain::ports::ManifestSink;
pub use crate::utils::error::Result;
