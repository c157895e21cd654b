use thiserror::Error;

#[derive(Error, Debug)]
pub enum BatchError {
    #[error("Please fill in {field}")]
    MissingField { field: String },

    #[error("{field} must be a valid number")]
    NotANumber { field: String },

    #[error("{field} must be greater than zero")]
    NotPositive { field: String },

    #[error("Add at least one parcel before exporting")]
    EmptyBatch,

    #[error("A SO/INV reference is required before exporting")]
    MissingBatchReference,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigError { field: String, message: String },
}

pub type Result<T> = std::result::Result<T, BatchError>;
