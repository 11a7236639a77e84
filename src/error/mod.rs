//! Error types and handling infrastructure for CSV conversion

use anyhow::Error;
use std::fmt;
use std::path::PathBuf;

/// Core error kinds for the conversion process
#[derive(Debug, thiserror::Error)]
pub enum ConversionErrorKind {
    #[error("Cannot write an empty table: column names are read from the first record")]
    EmptyTable,

    #[error("Invalid delimiter '{delimiter}': {reason}")]
    InvalidDelimiter { delimiter: String, reason: String },

    #[error("Unknown locale: {tag}")]
    UnknownLocale { tag: String },

    #[error("Invalid currency code: {code}")]
    InvalidCurrency { code: String },

    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
    },

    #[error("Input too large: {size} bytes (limit: {limit} bytes)")]
    InputTooLarge { size: u64, limit: u64 },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Failed to save '{filename}': {message}")]
    Save { filename: String, message: String },

    #[error("Invalid configuration: {message}")]
    Configuration { message: String },
}

impl ConversionErrorKind {
    pub fn invalid_delimiter(delimiter: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidDelimiter {
            delimiter: delimiter.into(),
            reason: reason.into(),
        }
    }

    pub fn io(message: String, path: Option<PathBuf>) -> Self {
        Self::Io { message, path }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    pub fn save(filename: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Save {
            filename: filename.into(),
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

/// Main error type for conversion operations
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error(transparent)]
    ParseError(#[from] ParseError),

    #[error("{kind}")]
    Conversion {
        kind: ConversionErrorKind,
        source: Option<anyhow::Error>,
    },

    #[error(transparent)]
    Other(#[from] Error),
}

impl ConversionError {
    pub fn parse(message: String, location: Option<(usize, usize)>) -> Self {
        Self::ParseError(ParseError::new(message, location))
    }

    pub fn conversion(kind: ConversionErrorKind) -> Self {
        Self::Conversion { kind, source: None }
    }

    pub fn conversion_with_source(kind: ConversionErrorKind, source: anyhow::Error) -> Self {
        Self::Conversion {
            kind,
            source: Some(source),
        }
    }

    /// The error kind, if this is a conversion error
    pub fn kind(&self) -> Option<&ConversionErrorKind> {
        match self {
            Self::Conversion { kind, .. } => Some(kind),
            _ => None,
        }
    }

    /// Create a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::ParseError(err) => {
                if let Some((line, col)) = err.location {
                    format!(
                        "JSON parse error at line {}, column {}: {}",
                        line, col, err.message
                    )
                } else {
                    format!("JSON parse error: {}", err.message)
                }
            }
            Self::Conversion { kind, .. } => match kind {
                ConversionErrorKind::EmptyTable => {
                    "Nothing to export: the table has no rows".to_string()
                }
                ConversionErrorKind::InputTooLarge { size, limit } => {
                    format!("Input file too large: {} bytes (limit: {} bytes)", size, limit)
                }
                ConversionErrorKind::Io {
                    message,
                    path: Some(path),
                } => format!("IO error on {}: {}", path.display(), message),
                _ => self.to_string(),
            },
            Self::Other(err) => {
                format!("Unexpected error: {}", err)
            }
        }
    }
}

impl From<ConversionErrorKind> for ConversionError {
    fn from(kind: ConversionErrorKind) -> Self {
        Self::conversion(kind)
    }
}

/// JSON input parsing errors
#[derive(Debug, Clone)]
pub struct ParseError {
    pub message: String,
    pub location: Option<(usize, usize)>,
}

impl ParseError {
    pub fn new(message: String, location: Option<(usize, usize)>) -> Self {
        Self { message, location }
    }
}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        Self::new(err.to_string(), Some((err.line(), err.column())))
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some((line, col)) = self.location {
            write!(f, " at line {}, column {}", line, col)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;
