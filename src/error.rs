//! Unified error types for lexi.
//!
//! Failures here are never fatal to the user's data: persistence errors
//! degrade to an empty collection, validation errors become silent no-ops
//! at the boundary, and remote-call errors are rendered as inline message
//! strings. The `FailSoft` trait implements the degrade-and-log half of
//! that contract.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for lexi operations.
#[derive(Error, Debug)]
pub enum LexiError {
    /// I/O errors from the word collection or review ledger files.
    #[error("storage error at {path}: {source}")]
    Storage {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// JSON parsing/serialization errors.
    #[error("serialization error: {message}")]
    Serde { message: String },

    /// Configuration loading errors.
    #[error("config error: {message}")]
    Config { message: String },

    /// Quiz session misuse (answering before a question was drawn, etc.).
    #[error("invalid state: {message}")]
    InvalidState { message: String },

    /// Remote call failures (network, non-success status, missing credential).
    #[error("{message}")]
    Remote { message: String },
}

/// A specialized Result type for lexi operations.
pub type Result<T> = std::result::Result<T, LexiError>;

impl LexiError {
    /// Create a storage error from an I/O error.
    pub fn storage(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Storage {
            path: path.into(),
            source,
        }
    }

    /// Create a serialization error.
    pub fn serde(message: impl Into<String>) -> Self {
        Self::Serde {
            message: message.into(),
        }
    }

    /// Create a config error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid state error.
    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState {
            message: message.into(),
        }
    }

    /// Create a remote-call error.
    pub fn remote(message: impl Into<String>) -> Self {
        Self::Remote {
            message: message.into(),
        }
    }
}

impl From<io::Error> for LexiError {
    fn from(err: io::Error) -> Self {
        Self::Storage {
            path: PathBuf::new(),
            source: err,
        }
    }
}

impl From<serde_json::Error> for LexiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde {
            message: err.to_string(),
        }
    }
}

/// Trait for degrade-and-log error handling.
///
/// Persistence failures must never block the user: log a warning and carry
/// on with a default (an empty collection, usually) instead of propagating.
pub trait FailSoft<T> {
    /// Handle an error by logging a warning and returning the default value.
    fn recover_default(self, context: &str) -> T
    where
        T: Default;

    /// Handle an error by logging a warning and returning the provided fallback.
    fn recover_with(self, context: &str, fallback: T) -> T;
}

impl<T> FailSoft<T> for Result<T> {
    fn recover_default(self, context: &str) -> T
    where
        T: Default,
    {
        match self {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!("{}: {} (recovering with default)", context, err);
                T::default()
            }
        }
    }

    fn recover_with(self, context: &str, fallback: T) -> T {
        match self {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!("{}: {} (recovering with fallback)", context, err);
                fallback
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_display() {
        let err = LexiError::storage(
            "/tmp/words.json",
            io::Error::new(io::ErrorKind::NotFound, "file not found"),
        );
        assert!(err.to_string().contains("storage error"));
        assert!(err.to_string().contains("/tmp/words.json"));
    }

    #[test]
    fn test_serde_error_display() {
        let err = LexiError::serde("invalid JSON");
        assert_eq!(err.to_string(), "serialization error: invalid JSON");
    }

    #[test]
    fn test_config_error_display() {
        let err = LexiError::config("invalid TOML");
        assert!(err.to_string().contains("config error"));
    }

    #[test]
    fn test_invalid_state_error_display() {
        let err = LexiError::invalid_state("no question drawn");
        assert!(err.to_string().contains("invalid state"));
    }

    #[test]
    fn test_remote_error_display() {
        let err = LexiError::remote("translation service unavailable");
        assert_eq!(err.to_string(), "translation service unavailable");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let err: LexiError = io_err.into();
        assert!(matches!(err, LexiError::Storage { .. }));
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid").unwrap_err();
        let err: LexiError = json_err.into();
        assert!(matches!(err, LexiError::Serde { .. }));
    }

    #[test]
    fn test_recover_default() {
        let result: Result<Vec<String>> = Err(LexiError::serde("test"));
        let value = result.recover_default("test context");
        assert!(value.is_empty());
    }

    #[test]
    fn test_recover_with() {
        let result: Result<u32> = Err(LexiError::serde("test"));
        let value = result.recover_with("test context", 42);
        assert_eq!(value, 42);
    }

    #[test]
    fn test_recover_success_passthrough() {
        let result: Result<u32> = Ok(100);
        assert_eq!(result.recover_default("test context"), 100);
    }
}
