//! Error types for antpath_io crate.
//!
//! Provides structured error handling for scan logs, the field cache and
//! output files.

use antpath_core::FieldError;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for antpath_io operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// The scan log is missing, unreadable or has no lines
    #[error("Invalid data file: {}", .0.display())]
    InvalidDataFile(PathBuf),

    /// Field construction failed
    #[error(transparent)]
    Field(#[from] FieldError),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// File system errors
    #[error("File system error: {0}")]
    FileSystem(#[from] std::io::Error),

    /// JSON parsing errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Generic error with context
    #[error("{context}: {source}")]
    Context {
        context: String,
        source: Box<IoError>,
    },
}

/// Result type alias for antpath_io operations.
pub type Result<T> = std::result::Result<T, IoError>;

impl IoError {
    #[must_use]
    pub fn serialization<S: Into<String>>(msg: S) -> Self {
        Self::Serialization(msg.into())
    }

    #[must_use]
    pub fn validation<S: Into<String>>(msg: S) -> Self {
        Self::Validation(msg.into())
    }

    /// Wraps an error with additional context.
    #[must_use]
    pub fn with_context<S: Into<String>>(self, context: S) -> Self {
        Self::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Whether the data file itself was the problem, as opposed to its
    /// contents or an output path.
    #[must_use]
    pub fn is_invalid_data_file(&self) -> bool {
        match self {
            Self::InvalidDataFile(_) => true,
            Self::Context { source, .. } => source.is_invalid_data_file(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IoError::InvalidDataFile(PathBuf::from("scans/log.txt"));
        assert_eq!(err.to_string(), "Invalid data file: scans/log.txt");
    }

    #[test]
    fn test_field_error_is_transparent() {
        let err: IoError = FieldError::EmptyScan.into();
        assert_eq!(err.to_string(), FieldError::EmptyScan.to_string());
    }

    #[test]
    fn test_error_context() {
        let err = IoError::InvalidDataFile(PathBuf::from("x")).with_context("loading field");
        assert!(err.to_string().contains("loading field"));
        assert!(err.is_invalid_data_file());
        assert!(!IoError::validation("bad").is_invalid_data_file());
    }
}
