//! Parse error types.

use thiserror::Error;

/// Errors that can occur during parsing.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The source text contains syntax errors.
    #[error("Invalid source: {message}")]
    InvalidSource {
        /// Error message.
        message: String,
        /// Byte offset where the error occurred.
        offset: Option<usize>,
    },

    /// The grammar could not be loaded into the parser.
    #[error("Language error: {0}")]
    Language(String),

    /// A name that is not a supported file kind.
    #[error("Unknown file kind: {0}")]
    UnknownKind(String),

    /// An internal parser error occurred.
    #[error("Internal parser error: {0}")]
    Internal(String),
}

impl ParseError {
    /// Creates a new invalid source error.
    pub fn invalid_source(message: impl Into<String>) -> Self {
        Self::InvalidSource {
            message: message.into(),
            offset: None,
        }
    }

    /// Creates a new invalid source error with offset.
    pub fn invalid_source_at(message: impl Into<String>, offset: usize) -> Self {
        Self::InvalidSource {
            message: message.into(),
            offset: Some(offset),
        }
    }

    /// Creates a new language error.
    pub fn language(message: impl Into<String>) -> Self {
        Self::Language(message.into())
    }

    /// Creates a new internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Byte offset of the error, when known.
    pub fn offset(&self) -> Option<usize> {
        match self {
            Self::InvalidSource { offset, .. } => *offset,
            _ => None,
        }
    }
}
