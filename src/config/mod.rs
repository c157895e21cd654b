pub mod manifest;

pub use manifest::{ManifestConfig, DEFAULT_FILENAME_BASE};
