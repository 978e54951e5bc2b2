//! Error types for the agentic control plane

use thiserror::Error;

/// Result type alias for control plane operations
pub type Result<T> = std::result::Result<T, ControlPlaneError>;

/// Main error type for control plane operations
#[derive(Error, Debug)]
pub enum ControlPlaneError {
    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Serialization/Deserialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// IO error
    #[error("IO error: {0}")]
    IoError(String),
}

impl From<serde_json::Error> for ControlPlaneError {
    fn from(err: serde_json::Error) -> Self {
        ControlPlaneError::SerializationError(err.to_string())
    }
}

impl From<std::io::Error> for ControlPlaneError {
    fn from(err: std::io::Error) -> Self {
        ControlPlaneError::IoError(err.to_string())
    }
}
