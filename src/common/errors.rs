//! Error types for the allocator

use rust_decimal::Decimal;
use std::fmt;
use thiserror::Error;

/// Result type alias using our AllocationError
pub type Result<T> = std::result::Result<T, AllocationError>;

/// Why a fraction token was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FractionFault {
    /// Text does not match `<number>/<number>`
    Malformed,
    /// Denominator parsed as zero
    ZeroDenominator,
}

impl fmt::Display for FractionFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FractionFault::Malformed => write!(f, "expected <numerator>/<denominator>"),
            FractionFault::ZeroDenominator => write!(f, "denominator must not be zero"),
        }
    }
}

/// Main error type for allocation requests
///
/// Every variant carries the input it rejected so callers can match on
/// the kind and still show the user what was wrong.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AllocationError {
    /// Header line missing or not of the form `<count>u <amount>`
    #[error("Invalid header {line:?}: {reason}")]
    HeaderFormat { line: String, reason: String },

    /// Malformed fraction or zero denominator
    #[error("Invalid odds {text:?}: {reason}")]
    FractionFormat { text: String, reason: FractionFault },

    /// Entry line without a trailing fraction token
    #[error("Invalid entry {line:?}: expected <name> <numerator>/<denominator>")]
    LineFormat { line: String },

    /// No entries to allocate across
    #[error("No entries supplied")]
    EmptyRequest,

    /// Decimal odds below 1 handed straight to the engine
    #[error("Decimal odds must be at least 1, got {odds}")]
    InvalidOdds { odds: Decimal },

    /// Checked decimal operation overflowed or divided by zero
    #[error("Arithmetic error: {0}")]
    Arithmetic(&'static str),

    /// Rounding left more whole cents than there are entries
    #[error("Rounding deficit of {deficit} cents is outside 0..={entries}")]
    DeficitOutOfRange { deficit: i64, entries: usize },

    /// Report could not be serialized
    #[error("JSON serialization error: {0}")]
    Serialization(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl AllocationError {
    pub(crate) fn header(line: &str, reason: impl Into<String>) -> Self {
        AllocationError::HeaderFormat {
            line: line.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn fraction(text: &str, reason: FractionFault) -> Self {
        AllocationError::FractionFormat {
            text: text.to_string(),
            reason,
        }
    }

    /// Returns true for errors caused by malformed user text
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            AllocationError::HeaderFormat { .. }
                | AllocationError::FractionFormat { .. }
                | AllocationError::LineFormat { .. }
                | AllocationError::EmptyRequest
        )
    }
}
