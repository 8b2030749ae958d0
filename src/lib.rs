//! Ledger Cleaner Library
//!
//! A Rust library for normalizing hand-annotated cryptocurrency transaction
//! CSV exports into strictly machine-parseable importer input.
//!
//! This library provides tools for:
//! - Dropping notes, subtotal and blank separator rows that lack identifying fields
//! - Pruning unlabeled working columns (running balances, flags) from the output
//! - Rewriting accountant-style numerics: `(1,000.00)` becomes `-1000.00`
//! - Preserving free-text memo fields verbatim, commas and all
//! - Validating account-header uniqueness before any output is produced

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod column_pruner;
        pub mod field_normalizer;
        pub mod row_filter;
        pub mod sanitizer;
    }
    pub mod adapters {
        pub mod filesystem;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Document, Row};
pub use app::services::sanitizer::{SanitizeResult, Sanitizer};
pub use config::Config;

/// Result type alias for the ledger cleaner
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for ledger cleaning operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV parsing or writing error
    #[error("CSV error in file '{file}': {message}")]
    CsvParsing {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Duplicate non-empty label in the account-header row
    ///
    /// This is the only fatal pipeline error: the run is all-or-nothing
    /// and no output file is produced.
    #[error("Duplicate account header '{label}' in header row 1. Please fix and re-run.")]
    DuplicateHeader { label: String },

    /// Input does not follow the 4-header-row convention
    #[error("Invalid input format in file '{file}': {message}")]
    InvalidFormat { file: String, message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// File not found
    #[error("File not found: {path}")]
    FileNotFound { path: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV error with context
    pub fn csv_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a duplicate header error
    pub fn duplicate_header(label: impl Into<String>) -> Self {
        Self::DuplicateHeader {
            label: label.into(),
        }
    }

    /// Create an invalid format error
    pub fn invalid_format(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidFormat {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            file: "unknown".to_string(),
            message: "CSV processing failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Configuration {
            message: format!("Failed to serialize report: {}", error),
        }
    }
}
