//! # Error Types
//!
//! This module defines error types used throughout the almanac library.

use thiserror::Error;

/// Main error type for almanac operations
#[derive(Debug, Error)]
pub enum AlmanacError {
    /// Year outside the range chrono can represent
    #[error("Invalid year: {0}")]
    InvalidYear(i32),

    /// Invalid layout or palette configuration
    #[error("Invalid config: {0}")]
    Config(String),

    /// Unknown month-label language code
    #[error("Unsupported language: {0}")]
    Language(String),

    /// Malformed JSON config file
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Logger backend could not be started
    #[error("Logging error: {0}")]
    Logging(#[from] flexi_logger::FlexiLoggerError),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
