//! Error types for the staff portal

use thiserror::Error;

/// Error thrown when a color string is not a well-formed "#RRGGBB" value
#[derive(Debug, Error)]
#[error("Invalid color format '{value}': expected \"#RRGGBB\"")]
pub struct InvalidColorFormatError {
    pub value: String,
}

/// General portal error type
#[derive(Debug, Error)]
pub enum PortalError {
    #[error(transparent)]
    InvalidColorFormat(#[from] InvalidColorFormatError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Fetch error: {0}")]
    Fetch(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, PortalError>;
