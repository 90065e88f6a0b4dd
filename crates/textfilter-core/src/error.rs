//! Error types for textfilter-core.
//!
//! Validation and feedback errors double as user-facing messages: their
//! `Display` output is exactly what the CLI prints.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Reasons raw input is rejected before cleaning.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// No text was supplied, or the text is empty.
    #[error("ERROR: Please provide text")]
    EmptyInput,

    /// The text has more characters than the configured ceiling.
    #[error("ERROR: Text is too long. Please shorten it")]
    TooLong {
        /// Character count of the rejected text.
        length: usize,
        /// Ceiling that was exceeded.
        max: usize,
    },
}

/// Problems with a feedback rating.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FeedbackError {
    /// The rating is a number outside 1..=5.
    #[error("Invalid rating. Please provide a rating between 1 and 5.")]
    OutOfRange {
        /// The rejected rating.
        rating: i64,
    },

    /// The rating could not be parsed as a number.
    #[error("Invalid input. Please enter a number between 1 and 5.")]
    InvalidInput {
        /// The raw input that failed to parse.
        input: String,
    },
}

/// Errors that can occur while rendering a report.
#[derive(Error, Debug)]
pub enum RenderError {
    /// JSON serialization failed.
    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}
