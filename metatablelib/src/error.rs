//! Error types for metatablelib

use thiserror::Error;

/// Errors that can occur while loading metadata.
///
/// Building and formatting never fail; only turning external documents
/// into a [`Metadata`](crate::Metadata) mapping can.
#[derive(Error, Debug)]
pub enum MetatableError {
    /// The document parsed, but is not a mapping of field records
    #[error("invalid metadata: {0}")]
    InvalidMetadata(String),

    /// Failed to parse JSON input
    #[error("failed to parse JSON metadata: {0}")]
    Json(#[from] serde_json::Error),

    /// Failed to parse YAML input
    #[error("failed to parse YAML metadata: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
