//! Error types for the Weekly Wage Engine.
//!
//! The pricing, duration and aggregation functions have no failure paths. Errors only
//! arise at the edges: loading service configuration and validating incoming week
//! entries before they reach the calculator.

use chrono::NaiveDate;
use thiserror::Error;

/// Leading text of every [`EngineError::InvalidSurcharge`] message.
///
/// Surcharges are rejected while the request body is deserialized, so the HTTP layer
/// recognises the failure by this text inside the serde error.
pub const INVALID_SURCHARGE_MESSAGE: &str = "Invalid surcharge amount";

/// The main error type for the Weekly Wage Engine.
///
/// # Example
///
/// ```
/// use weekly_wage_engine::error::EngineError;
///
/// let error = EngineError::InvalidSurcharge { amount: 7000 };
/// assert_eq!(
///     error.to_string(),
///     "Invalid surcharge amount: 7000 (allowed: 0, 5000, 10000, 15000, 20000, 25000, 40000)"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
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

    /// A surcharge amount outside the fixed set was supplied.
    #[error(
        "{prefix}: {amount} (allowed: 0, 5000, 10000, 15000, 20000, 25000, 40000)",
        prefix = INVALID_SURCHARGE_MESSAGE
    )]
    InvalidSurcharge {
        /// The rejected amount.
        amount: u32,
    },

    /// A day entry was inconsistent (e.g. a worked day without clock times).
    #[error("Invalid entry for {day}: {message}")]
    InvalidDayEntry {
        /// The label of the offending day.
        day: String,
        /// What was wrong with the entry.
        message: String,
    },

    /// The supplied entries do not describe exactly one Monday..Sunday week.
    #[error("Incomplete week: {message}")]
    IncompleteWeek {
        /// A description of the missing or duplicated days.
        message: String,
    },

    /// A labelling period ends before it starts.
    #[error("Invalid week period: {end} is before {start}")]
    InvalidPeriod {
        /// The start date supplied.
        start: NaiveDate,
        /// The end date supplied.
        end: NaiveDate,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
