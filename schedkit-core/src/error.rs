//! Error types for schedkit.

use thiserror::Error;

/// Errors that can occur in schedkit operations.
#[derive(Error, Debug)]
pub enum SchedKitError {
    /// Notice composition failed. Carries the underlying message
    /// (e.g. an ICS validation failure) verbatim.
    #[error("Template error: {0}")]
    Template(String),

    #[error("ICS validation error: {0}")]
    IcsValidation(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("Order persistence error: {0}")]
    Persistence(String),

    #[error("List cache error: {0}")]
    Cache(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for schedkit operations.
pub type SchedKitResult<T> = Result<T, SchedKitError>;
