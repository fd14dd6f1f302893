//! API error types

use tactile_core::TableError;
use thiserror::Error;

/// Message returned to clients for every internal failure
pub const INTERNAL_ERROR_MESSAGE: &str = "Failed to convert text to Braille";

/// API-level errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// Request rejected before conversion
    #[error("{0}")]
    Validation(String),

    /// Unexpected failure during conversion or formatting
    #[error("internal error: {0}")]
    Internal(String),

    /// Braille tables could not be loaded
    #[error("table error: {0}")]
    Table(#[from] TableError),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl ApiError {
    /// HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::Validation(_) => 400,
            _ => 500,
        }
    }

    /// Message safe to show to clients
    pub fn public_message(&self) -> String {
        match self {
            ApiError::Validation(msg) => msg.clone(),
            _ => INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
