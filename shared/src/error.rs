//! Error types for the tracking Lambda functions.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while serving a tracking lookup.
///
/// Callers never see these variants: the handler collapses every failure
/// into one generic 500 response and only the log line keeps the cause.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Credential error (key parsing or assertion signing)
    #[error("Credential error: {0}")]
    Credential(#[from] jsonwebtoken::errors::Error),

    /// Token exchange error
    #[error("Token exchange error: {0}")]
    Token(String),

    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Sheets API error
    #[error("Sheets API error: status {0}")]
    Api(u16),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
