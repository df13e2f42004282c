//! Namer error types

use thiserror::Error;

/// Result type alias for namer operations.
pub type Result<T> = std::result::Result<T, NamerError>;

/// Errors raised around the namer. Rendering itself never fails.
#[derive(Error, Debug)]
pub enum NamerError {
    /// Search payload could not be decoded
    #[error("Failed to decode relationship payload: {0}")]
    Decode(#[from] serde_json::Error),

    /// Well-formed JSON of an unexpected shape
    #[error("Unrecognized search payload: {0}")]
    Payload(String),

    /// Locale name not recognized
    #[error("Unknown locale: {0} (expected 'es' or 'en')")]
    UnknownLocale(String),
}
