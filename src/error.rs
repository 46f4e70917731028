//! Unified error types for quizdeck.
//!
//! Validation rejections are the entire user-facing error taxonomy: they are
//! surfaced synchronously (as a blocking alert in the TUI) and abort the
//! attempted operation, leaving prior state unchanged. Everything else is
//! plumbing around test-bank files.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for quizdeck operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum QuizError {
    /// A rejected user input (empty title, empty question text, empty
    /// option, bad index). No retry policy, no partial-failure semantics.
    #[error("{0}")]
    Validation(String),

    /// Errors while loading or saving a test bank file.
    #[error("Bank error at {}: {source}", path.display())]
    Bank {
        path: PathBuf,
        #[source]
        source: BankErrorKind,
    },
}

/// Specific bank error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum BankErrorKind {
    #[error("failed to read file: {0}")]
    Read(std::io::Error),

    #[error("failed to write file: {0}")]
    Write(std::io::Error),

    #[error("invalid JSON: {0}")]
    Json(serde_json::Error),

    #[error("invalid bank contents: {0}")]
    Shape(String),
}

/// Convenient Result type for quizdeck operations
pub type Result<T> = std::result::Result<T, QuizError>;

impl QuizError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a bank error with path context
    pub fn bank(path: impl Into<PathBuf>, source: BankErrorKind) -> Self {
        Self::Bank {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_display_is_bare_message() {
        // Alert overlays show the message verbatim, so no prefix wanted.
        let err = QuizError::validation("Test title required");
        assert_eq!(err.to_string(), "Test title required");
    }

    #[test]
    fn test_bank_error_mentions_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = QuizError::bank("/tmp/bank.json", BankErrorKind::Read(io_err));
        assert!(err.to_string().contains("/tmp/bank.json"));
    }
}
