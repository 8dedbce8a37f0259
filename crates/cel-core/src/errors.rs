//! Cross-cutting error types for Celestial.
//!
//! Content selection is a pure computation, so only two things can go wrong:
//! the caller handed us something we do not recognise, or the content catalog
//! itself is broken. Configuration-file errors live in `cel-config`; the HTTP
//! mapping of these variants lives in `cel-server`.

use thiserror::Error;

/// Errors that can be raised by any Celestial crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Caller supplied an unrecognised sign label, an unparseable date, or
    /// another malformed value.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A content table is empty or missing a required key. This is a
    /// deployment defect and must not be papered over at request time.
    #[error("Configuration error in table '{table}': {reason}")]
    Configuration { table: String, reason: String },
}

impl CoreError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn configuration(table: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Configuration {
            table: table.into(),
            reason: reason.into(),
        }
    }

    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}
