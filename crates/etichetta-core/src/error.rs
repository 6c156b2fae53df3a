//! Error types for the etichetta-core library.
//!
//! The analysis path itself is infallible - a field that cannot be extracted
//! becomes an empty value, never an error. Errors here cover the surrounding
//! concerns only: configuration files and label payload decoding.

use thiserror::Error;

/// Main error type for the etichetta library.
#[derive(Error, Debug)]
pub enum EtichettaError {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Label payload could not be decoded.
    #[error("invalid label payload: {0}")]
    Labels(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the etichetta library.
pub type Result<T> = std::result::Result<T, EtichettaError>;
