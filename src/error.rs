//! Error types for the Payroll Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading payroll policy
//! and computing a salary.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the Payroll Engine.
///
/// All fallible operations in the engine return this error type. None of
/// them are retried: every variant signals a defect in the inputs or the
/// configuration, not a transient failure.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/payroll.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/payroll.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Standard full-month hours was zero when deriving the hourly rate.
    #[error("Division by zero: cannot spread {dividend} over zero full-month hours")]
    DivisionByZero {
        /// The amount that was being divided.
        dividend: Decimal,
    },

    /// No tax bracket has a threshold below the taxable income.
    #[error("No tax bracket matches taxable income {taxable_income}")]
    NoBracketMatch {
        /// The taxable income that could not be placed in a bracket.
        taxable_income: Decimal,
    },

    /// A tax bracket table failed validation.
    #[error("Invalid tax bracket table: {message}")]
    InvalidBracketTable {
        /// A description of what made the table invalid.
        message: String,
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

    /// A configuration value was out of range.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// An amount left the representable decimal range.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
