pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::DirectorySink;
pub use config::ManifestConfig;
pub use core::batch::BatchSession;
pub use domain::model::{Manifest, ManifestFormat, ParcelDraft, ParcelRecord, Recipient, RecordId};
pub use domain::ports::ManifestSink;
pub use utils::error::{BatchError, Result};
