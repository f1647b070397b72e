//! Error types for the UIF Benefit Calculation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during a benefit calculation.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the UIF Benefit Calculation Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use uif_engine::error::EngineError;
///
/// let error = EngineError::InvalidDate {
///     input: "2023-13-01".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Date calculation error: '2023-13-01' is not a valid YYYY-MM-DD date"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A monetary input was negative or otherwise not a usable amount.
    #[error("Invalid amount for '{field}': {message}")]
    InvalidAmount {
        /// The name of the offending input field.
        field: String,
        /// A description of what made the amount invalid.
        message: String,
    },

    /// A date string could not be parsed as `YYYY-MM-DD`.
    #[error("Date calculation error: '{input}' is not a valid YYYY-MM-DD date")]
    InvalidDate {
        /// The text that failed to parse.
        input: String,
    },

    /// The employment end date fell before the start date.
    #[error("Date calculation error: end date {end} cannot be before start date {start}")]
    EndBeforeStart {
        /// The parsed employment start date.
        start: NaiveDate,
        /// The parsed employment end date.
        end: NaiveDate,
    },

    /// An arithmetic step exceeded the representable decimal range.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

impl EngineError {
    /// Returns `true` for user-correctable input errors.
    ///
    /// Validation errors (bad amounts, bad dates, inverted date ranges) should be
    /// surfaced to the user for re-entry. Anything else is an internal fault that
    /// callers should log and report as a generic failure.
    pub fn is_validation(&self) -> bool {
        !matches!(self, EngineError::CalculationError { .. })
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
