//! Error types for fixture processing.

use thiserror::Error;

/// Errors that can occur while reading or running fixtures.
#[derive(Debug, Error)]
pub enum SpecError {
    /// Error parsing a fixture file.
    #[error("parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Error loading a fixture file.
    #[error("failed to load fixture: {path}: {message}")]
    Load { path: String, message: String },

    /// The fixture could not be turned into a valid annotation run.
    #[error("assertion failed: {message}")]
    Assertion { message: String },
}

/// Result type for fixture operations.
pub type SpecResult<T> = Result<T, SpecError>;
