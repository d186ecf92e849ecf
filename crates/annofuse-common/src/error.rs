//! Error types for annofuse

use thiserror::Error;

/// Result type alias for annofuse operations
pub type Result<T> = std::result::Result<T, AnnofuseError>;

/// Main error type for annofuse
#[derive(Error, Debug)]
pub enum AnnofuseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Tabular parse error: {0}")]
    Tabular(#[from] csv::Error),

    #[error("Uploaded table is empty, expected a header row")]
    EmptyTable,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}
