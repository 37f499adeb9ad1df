//! Custom error types for the transfer pricing ledger
//!
//! This module defines the error hierarchy for the crate using thiserror
//! for ergonomic error definitions.

use std::fmt;

use thiserror::Error;

/// A user-editable field of a charge record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Date,
    ProvidingUnit,
    ServiceName,
    UnitPrice,
    ReceivingUnit,
    Quantity,
}

impl Field {
    /// The field's name as it appears in the persisted snapshot
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::ProvidingUnit => "providingUnit",
            Self::ServiceName => "serviceName",
            Self::UnitPrice => "unitPrice",
            Self::ReceivingUnit => "receivingUnit",
            Self::Quantity => "quantity",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The main error type for ledger operations
#[derive(Error, Debug)]
pub enum PricingError {
    /// A required form field was left blank
    #[error("Missing required field: {0}")]
    MissingField(Field),

    /// Imported text could not be read at all
    #[error("Import error: {0}")]
    ImportParse(String),

    /// The key-value adapter failed to read or write a snapshot
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// A positional operation referenced a record that does not exist
    #[error("Record index {index} out of range (store holds {len} records)")]
    IndexOutOfRange { index: usize, len: usize },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl PricingError {
    /// Check if this is a validation failure
    pub fn is_missing_field(&self) -> bool {
        matches!(self, Self::MissingField(_))
    }

    /// Check if this is an out-of-range index
    pub fn is_index_error(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
    }
}

impl From<std::io::Error> for PricingError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PricingError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for PricingError {
    fn from(err: csv::Error) -> Self {
        Self::ImportParse(err.to_string())
    }
}

/// Result type alias for ledger operations
pub type PricingResult<T> = Result<T, PricingError>;
