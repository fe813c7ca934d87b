//! Error types for EcoLoop

use thiserror::Error;

/// Main error type for EcoLoop core operations
///
/// The overlay operations themselves are total; these errors come from the
/// edges: parsing overlay names and command scripts, and loading session
/// documents.
#[derive(Error, Debug)]
pub enum EcoError {
    /// Overlay name did not match any known surface
    #[error("Unknown overlay: {0}")]
    UnknownOverlay(String),

    /// Header command could not be parsed
    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    /// Session document could not be interpreted
    #[error("Malformed session: {0}")]
    MalformedSession(String),

    /// JSON encoding/decoding error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using EcoError
pub type EcoResult<T> = Result<T, EcoError>;
