//! Error types for suggest-map

use thiserror::Error;

/// Main error type for suggest-map operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Fetch error: {0}")]
    Fetch(String),

    #[error("Unexpected payload: {0}")]
    Payload(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for suggest-map operations
pub type Result<T> = std::result::Result<T, Error>;
