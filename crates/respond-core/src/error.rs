// Rust guideline compliant 2026-10-16

//! Error types for the respond core library.

use thiserror::Error;

/// Result type alias for respond operations.
pub type Result<T> = std::result::Result<T, Error>;

/// A numeric value that is not one of the supported status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Unsupported status code: {0}")]
pub struct UnsupportedCodeError(pub i64);

/// Error types for respond operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A status code outside the supported table was requested.
    #[error(transparent)]
    UnsupportedCode(#[from] UnsupportedCodeError),

    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration file could not be parsed.
    #[error("Invalid config file: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration could not be serialized.
    #[error("Failed to serialize config: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// Configuration values failed validation.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// A decoded envelope violates the envelope invariants.
    #[error("Invalid envelope: {0}")]
    InvalidEnvelope(String),
}
