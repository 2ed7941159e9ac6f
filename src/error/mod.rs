//! Error handling for the diabetes risk pipeline.

pub mod util;

use std::io;
use std::path::{Path, PathBuf};

use arrow::error::ArrowError;
use parquet::errors::ParquetError;

/// Specialized error type for risk scoring and dataset handling
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required field is missing, non-numeric or physically implausible
    #[error("Validation error on '{field}': {reason}")]
    Validation { field: String, reason: String },

    /// A value falls outside every band of a band table
    #[error("{variable} value {value} is outside the banded range [{min}, {max}]")]
    OutOfBand {
        variable: String,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A band table whose boundaries and labels are inconsistent
    #[error("Invalid band table '{name}': {reason}")]
    InvalidBandTable { name: String, reason: String },

    /// Predictor contract violation
    #[error("Prediction error: {0}")]
    Prediction(String),

    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error opening or reading a file
    #[error("IO error: {message}{}", display_path(.path.as_deref()))]
    Io {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<io::Error>,
    },

    /// Error parsing a CSV dataset
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Error processing Parquet data
    #[error("Parquet error: {0}")]
    Parquet(#[from] ParquetError),

    /// Arrow error
    #[error("Arrow error: {0}")]
    Arrow(#[from] ArrowError),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Conversion between rows and Arrow record batches failed
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Anything else
    #[error("{0}")]
    Other(String),
}

fn display_path(path: Option<&Path>) -> String {
    path.map(|p| format!(" ({})", p.display()))
        .unwrap_or_default()
}

impl Error {
    /// Create a validation error for a named field
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create an IO error without an underlying source
    pub fn io_error(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
            path: None,
            source: None,
        }
    }

    /// Create an IO error wrapping the original `io::Error`
    pub fn io_error_with_source(message: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            message: message.into(),
            path: None,
            source: Some(source),
        }
    }

    /// Attach a path to an IO error. Other variants are returned unchanged.
    #[must_use]
    pub fn with_path(self, path: impl AsRef<Path>) -> Self {
        match self {
            Self::Io {
                message, source, ..
            } => Self::Io {
                message,
                path: Some(path.as_ref().to_path_buf()),
                source,
            },
            other => other,
        }
    }

    /// Create a generic error
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }

    /// Whether this error concerns a single record rather than the environment
    #[must_use]
    pub const fn is_record_error(&self) -> bool {
        matches!(self, Self::Validation { .. } | Self::OutOfBand { .. })
    }
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        Self::Io {
            message: error.to_string(),
            path: None,
            source: Some(error),
        }
    }
}

/// Result type for risk pipeline operations
pub type Result<T> = std::result::Result<T, Error>;
