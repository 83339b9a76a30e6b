//! Error types for the tool rental engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while pricing a rental.

use thiserror::Error;

/// The main error type for the tool rental engine.
///
/// Every failure is detected synchronously before any day of a rental
/// window is evaluated, so a returned error never carries partial results.
///
/// # Example
///
/// ```
/// use tool_rental::error::RentalError;
///
/// let error = RentalError::ToolNotFound {
///     code: "ABCD".to_string(),
/// };
/// assert_eq!(error.to_string(), "Tool ABCD not found");
/// ```
#[derive(Debug, Error)]
pub enum RentalError {
    /// An argument to the rental period calculation was missing or out of range.
    #[error("Invalid argument '{field}': {message}")]
    InvalidArgument {
        /// The name of the offending argument.
        field: String,
        /// A description of what made the argument invalid.
        message: String,
    },

    /// A checkout was requested for fewer than one rental day.
    #[error("Rental days must be greater than 0 (got {rental_days})")]
    InvalidRentalDays {
        /// The rental day count supplied by the caller.
        rental_days: i64,
    },

    /// A checkout was requested with a discount outside 0..=100.
    #[error("Discount percent must be between 0 and 100 (got {discount_percent})")]
    InvalidDiscountPercent {
        /// The discount percent supplied by the caller.
        discount_percent: i64,
    },

    /// The requested tool code is not in the catalog.
    #[error("Tool {code} not found")]
    ToolNotFound {
        /// The tool code that was not found.
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

    /// A tool in the configuration references a tool type that is not defined.
    #[error("Tool '{code}' references unknown tool type '{tool_type}'")]
    UnknownToolType {
        /// The code of the tool with the dangling reference.
        code: String,
        /// The tool type key that could not be resolved.
        tool_type: String,
    },
}

impl RentalError {
    /// Builds an [`RentalError::InvalidArgument`] for the given field.
    pub fn invalid_argument(field: impl Into<String>, message: impl Into<String>) -> Self {
        RentalError::InvalidArgument {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return RentalError.
pub type RentalResult<T> = Result<T, RentalError>;
