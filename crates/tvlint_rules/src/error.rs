//! Rule error types.

use thiserror::Error;

/// Errors a rule can report instead of a result.
///
/// The engine treats any of these as "no contribution" for that rule.
#[derive(Debug, Error)]
pub enum RuleError {
    /// The configured options do not match what the rule accepts.
    #[error("Invalid options for '{rule}': {message}")]
    InvalidOptions {
        /// Rule id.
        rule: String,
        /// Deserialization message.
        message: String,
    },
}

impl RuleError {
    /// Creates an invalid options error.
    pub fn invalid_options(rule: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidOptions {
            rule: rule.into(),
            message: message.into(),
        }
    }
}
