//! Error types for the events service.

use thiserror::Error;

use crate::validate::FieldError;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while handling a request.
#[derive(Error, Debug)]
pub enum Error {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// One entry per missing or empty required field
    #[error("Validation failed")]
    Validation(Vec<FieldError>),

    /// Not found error
    #[error("Not found: {0}")]
    NotFound(String),

    /// Unrecognized method/path combination
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Malformed JSON in a request body
    #[error("Invalid request body: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Get HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            Error::Validation(_) => 400,
            Error::Serialization(_) => 400,
            Error::NotFound(_) => 404,
            Error::MethodNotAllowed => 405,
            _ => 500,
        }
    }
}
