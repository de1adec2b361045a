//! Error types for the bill splitter.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for splitter operations
pub type Result<T> = std::result::Result<T, SplitError>;

/// Errors that can occur while loading, splitting, or writing a bill.
#[derive(Error, Debug)]
pub enum SplitError {
    /// Failed to read or write a file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input file is not syntactically valid JSON
    #[error("invalid JSON file: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// Input path does not exist
    #[error("input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// Input file exists but has no content
    #[error("input file is empty: {}", .0.display())]
    EmptyInput(PathBuf),

    /// A required field is absent from the bill object
    #[error("missing {field} field in bill object")]
    MissingField { field: &'static str },

    /// A required field is absent from an entry of the items array
    #[error("missing {field} field in bill object items array at index {index}")]
    MissingItemField { field: &'static str, index: usize },

    /// Bill date is not three dash-separated numeric components
    #[error("invalid date {0:?}, expected YYYY-MM-DD")]
    InvalidDate(String),

    /// Unsupported `--format` value
    #[error("invalid format {0:?}, expected \"json\" or \"text\"")]
    InvalidFormat(String),

    /// Missing required command-line arguments
    #[error("missing --input or --output argument. Usage: bill-splitter --input=<path> --output=<path> [--format=json|text]")]
    MissingArgument,
}
