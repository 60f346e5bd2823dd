//! Error types for the bikeshare library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for bikeshare operations.
#[derive(Debug, Error)]
pub enum BikeshareError {
    /// Error reading or accessing a source file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from a city's header row.
    #[error("Missing column '{column}' in {city} data")]
    MissingColumn { city: String, column: String },

    /// User input that is not an integer code.
    #[error("Invalid input '{0}': expected a single number")]
    InvalidInput(String),

    /// Integer code outside the valid range for a choice.
    #[error("Invalid {kind} code {code}: expected a number from 0 to {max}")]
    OutOfRange {
        kind: &'static str,
        code: usize,
        max: usize,
    },

    /// No trips left after applying the selection.
    #[error("No trips match the selection ({selection})")]
    EmptySelection { selection: String },

    /// Empty table handed to an operation that needs rows.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl BikeshareError {
    /// Whether the error comes from user input and the prompt can simply be repeated.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::InvalidInput(_) | Self::OutOfRange { .. })
    }
}

/// Result type alias for bikeshare operations.
pub type Result<T> = std::result::Result<T, BikeshareError>;
