//! Linter error types.

use thiserror::Error;
use tvlint_ast::Span;

/// Errors that can occur during analysis or edit application.
#[derive(Debug, Error)]
pub enum LinterError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O error.
    #[error("File error: {0}")]
    File(String),

    /// Parse error.
    #[error("Parse error: {0}")]
    Parse(#[from] tvlint_parser::ParseError),

    /// An edit lies outside the text or splits a character.
    #[error("Invalid edit at {span}: {message}")]
    InvalidEdit {
        /// The offending span.
        span: Span,
        /// Why the span was rejected.
        message: String,
    },

    /// Two edits touch the same text.
    #[error("overlapping edit: {first} conflicts with {second}")]
    OverlappingEdits {
        /// The edit that starts first.
        first: Span,
        /// The edit it conflicts with.
        second: Span,
    },
}

impl LinterError {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates a file error.
    pub fn file(message: impl Into<String>) -> Self {
        Self::File(message.into())
    }

    /// Creates an invalid edit error.
    pub fn invalid_edit(span: Span, message: impl Into<String>) -> Self {
        Self::InvalidEdit {
            span,
            message: message.into(),
        }
    }
}
