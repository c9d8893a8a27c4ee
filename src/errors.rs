/*!
 * Error types for the rawvtt application.
 *
 * This module contains custom error types for different parts of the
 * application, using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur while working with subtitle data
#[derive(Error, Debug)]
pub enum SubtitleError {
    /// Error for a timestamp that does not parse as an ISO local time
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// Error for a cue whose end precedes its start
    #[error("Invalid time range: end {end} precedes start {start}")]
    InvalidTimeRange {
        /// Start timestamp as rendered in the output
        start: String,
        /// End timestamp as rendered in the output
        end: String,
    },
}

/// Errors that can occur while validating configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Error for a limit that must be at least one character
    #[error("Invalid limit for {field}: must be at least 1")]
    InvalidLimit {
        /// Name of the offending configuration field
        field: &'static str,
    },
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from subtitle processing
    #[error("Subtitle error: {0}")]
    Subtitle(#[from] SubtitleError),

    /// Error from configuration handling
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
