//! Error types for the grant forecast engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The calculator itself only ever raises [`ForecastError::InvalidRange`] and
//! [`ForecastError::UnknownCategory`]; the configuration variants come from
//! loading rate schedules off disk.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the grant forecast engine.
///
/// # Example
///
/// ```
/// use grant_forecast::error::ForecastError;
///
/// let error = ForecastError::ConfigNotFound {
///     path: "/missing/schedule.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/schedule.yaml");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ForecastError {
    /// The grant end date precedes the start date.
    #[error("Invalid grant range: end date {end} is before start date {start}")]
    InvalidRange {
        /// The grant start date.
        start: NaiveDate,
        /// The grant end date.
        end: NaiveDate,
    },

    /// A grade or benefit plan code has no entry in the rate schedule.
    #[error("Unknown {kind} code: {code}")]
    UnknownCategory {
        /// What kind of code was looked up (e.g. "grade", "medical plan").
        kind: String,
        /// The code that was not found.
        code: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl ForecastError {
    /// Shorthand for an unknown grade code.
    pub fn unknown_grade(code: &str) -> Self {
        ForecastError::UnknownCategory {
            kind: "grade".to_string(),
            code: code.to_string(),
        }
    }
}

/// A type alias for Results that return ForecastError.
pub type ForecastResult<T> = Result<T, ForecastError>;
