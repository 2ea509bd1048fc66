//! Error types for field construction and scan decoding.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FieldError {
    /// No classified reading survived decoding, so the grid has no scale.
    #[error("Scan data contains no boundary or end readings")]
    EmptyScan,

    /// A reading scaled outside the grid.
    #[error("Reading at ({x}, {y}) lies outside the {width}x{height} grid")]
    IndexOutOfRange {
        x: i64,
        y: i64,
        width: usize,
        height: usize,
    },

    #[error("Grid dimensions must be positive (got {width}x{height})")]
    InvalidDimensions { width: usize, height: usize },

    /// A scan line could not be decoded.
    #[error("Malformed scan line {line}: {reason}")]
    MalformedLine { line: usize, reason: String },

    /// A deserialized field whose cells disagree with its shape.
    #[error("Inconsistent field: {0}")]
    Inconsistent(String),
}

impl FieldError {
    #[must_use]
    pub fn malformed<S: Into<String>>(line: usize, reason: S) -> Self {
        Self::MalformedLine {
            line,
            reason: reason.into(),
        }
    }

    /// Whether construction can continue past this error.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            FieldError::IndexOutOfRange { .. } | FieldError::MalformedLine { .. }
        )
    }
}
