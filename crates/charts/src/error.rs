//! Defines the `Error` and `Result` types that this crate uses.

use std::error::Error;
use std::fmt::Display;

/// The result type that uses [ChartError] as the error type.
pub type Result<T> = std::result::Result<T, ChartError>;

/// The error type for building a chart out of a metric payload.
///
/// A chart error is always local to the chart being built; a failed
/// chart must not prevent sibling charts on the same page from rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartError {
    /// A category key expected to be a calendar date could not be parsed.
    InvalidDateFormat {
        /// The offending category key.
        key: String,
    },

    /// A payload leaf expected to be numeric is not.
    NonNumericValue {
        /// The category key of the offending leaf.
        key: String,
    },

    /// A proportional chart portion is below zero.
    NegativeValue {
        /// The category key of the offending portion.
        key: String,
    },
}

impl Error for ChartError {}

impl Display for ChartError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let chart_error = "chart error:";

        match self {
            ChartError::InvalidDateFormat { key } => write!(
                f,
                "{chart_error} the \"{key}\" category key is not a parseable calendar date"
            ),
            ChartError::NonNumericValue { key } => write!(
                f,
                "{chart_error} the value of the \"{key}\" category is not numeric"
            ),
            ChartError::NegativeValue { key } => write!(
                f,
                "{chart_error} the value of the \"{key}\" category is negative"
            ),
        }
    }
}
