//! Error types for table-builder-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or converting a table
#[derive(Debug, Error)]
pub enum Error {
    /// An argument violated its contract (non-positive size, empty merge span, ...)
    #[error("Invalid argument `{name}`: {message}")]
    InvalidArgument {
        /// Name of the offending argument
        name: &'static str,
        /// What was wrong with it
        message: String,
    },

    /// A merge request overlaps an existing merge area or leaves the table
    #[error("Invalid range {range}: {reason}")]
    InvalidRange {
        /// The requested range in A1 notation
        range: String,
        /// Why the range was rejected
        reason: String,
    },

    /// A style enum value or formula kind has no mapping in a renderer
    #[error("Unsupported {kind} value: {value}")]
    UnsupportedVariant {
        /// Kind of value (e.g. "formula kind", "border type")
        kind: &'static str,
        /// Debug rendering of the value, with its location when known
        value: String,
    },

    /// Row index out of bounds
    #[error("Row index {0} out of bounds (count: {1})")]
    RowOutOfBounds(usize, usize),

    /// Column index out of bounds
    #[error("Column index {0} out of bounds (count: {1})")]
    ColumnOutOfBounds(usize, usize),

    /// The process-wide DPI was already computed or configured
    #[error("Screen DPI is already initialized")]
    DpiAlreadyInitialized,
}

impl Error {
    /// Create an [`Error::InvalidArgument`]
    pub fn invalid_argument<S: Into<String>>(name: &'static str, message: S) -> Self {
        Error::InvalidArgument {
            name,
            message: message.into(),
        }
    }

    /// Create an [`Error::InvalidRange`]
    pub fn invalid_range<R: ToString, S: Into<String>>(range: R, reason: S) -> Self {
        Error::InvalidRange {
            range: range.to_string(),
            reason: reason.into(),
        }
    }

    /// Create an [`Error::UnsupportedVariant`]
    pub fn unsupported<V: std::fmt::Debug>(kind: &'static str, value: V) -> Self {
        Error::UnsupportedVariant {
            kind,
            value: format!("{:?}", value),
        }
    }
}
