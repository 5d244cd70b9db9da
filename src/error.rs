//! Error handling for attribute selection and CSV conversion.
//!
//! The conversion core itself has no fatal conditions: unmatched patterns,
//! absent lists and missing attribute values all degrade to empty selections
//! or substitute values. The variants here cover configuration problems and
//! the host-side I/O around the core.

use thiserror::Error;

/// Result type alias for attribute conversion operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for attribute selection, encoding and record I/O
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// The attribute name pattern could not be compiled
    #[error("Invalid selection pattern '{pattern}': {source}")]
    InvalidSelectionPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Writing a CSV line failed
    #[error("CSV encoding error: {message}")]
    CsvEncoding { message: String },

    /// An input record could not be decoded
    #[error("Malformed record at line {line}: {message}")]
    RecordFormat { line: usize, message: String },

    /// A converted record could not be written as JSON
    #[error("Failed to serialize output record {index}: {source}")]
    RecordSerialization {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    /// Processing interrupted
    #[error("Processing interrupted: {reason}")]
    ProcessingInterrupted { reason: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an invalid selection pattern error
    pub fn invalid_selection_pattern(pattern: impl Into<String>, source: regex::Error) -> Self {
        Self::InvalidSelectionPattern {
            pattern: pattern.into(),
            source,
        }
    }

    /// Create a CSV encoding error
    pub fn csv_encoding(message: impl Into<String>) -> Self {
        Self::CsvEncoding {
            message: message.into(),
        }
    }

    /// Create a record format error for a 1-based input line
    pub fn record_format(line: usize, message: impl Into<String>) -> Self {
        Self::RecordFormat {
            line,
            message: message.into(),
        }
    }

    /// Create a serialization error for a 1-based output record
    pub fn record_serialization(index: usize, source: serde_json::Error) -> Self {
        Self::RecordSerialization { index, source }
    }

    /// Create a processing interrupted error
    pub fn processing_interrupted(reason: impl Into<String>) -> Self {
        Self::ProcessingInterrupted {
            reason: reason.into(),
        }
    }

    /// Whether this error came from an invalid selection pattern
    pub fn is_invalid_pattern(&self) -> bool {
        matches!(self, Self::InvalidSelectionPattern { .. })
    }
}

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
        Self::CsvEncoding {
            message: error.to_string(),
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(error: toml::de::Error) -> Self {
        Self::Configuration {
            message: format!("Invalid configuration file: {}", error),
        }
    }
}
