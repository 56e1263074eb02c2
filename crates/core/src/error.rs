//! Error types for Credence operations.
//!
//! The analysis path ([`analyze`](crate::analyze), [`summarize`](crate::summarize),
//! [`score_credibility`](crate::score_credibility)) is total over all strings and
//! never returns an error. [`CredenceError`] covers everything around it:
//! fetching, article extraction, formatting and configuration.
//!
//! # Example
//!
//! ```rust
//! use credence_core::{CredenceError, Result};
//!
//! fn require_text(text: &str) -> Result<&str> {
//!     if text.trim().is_empty() {
//!         return Err(CredenceError::ExtractionFailed("no text".to_string()));
//!     }
//!     Ok(text)
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Credence operations.
#[derive(Error, Debug)]
pub enum CredenceError {
    /// HTTP request errors from reqwest.
    ///
    /// This variant wraps network errors, DNS failures, connection issues,
    /// and other HTTP-related problems.
    #[cfg(feature = "fetch")]
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Request timeout.
    #[error("Request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// The server answered with a non-success status code.
    #[error("Failed to fetch URL, status code: {status}")]
    HttpStatus { status: u16 },

    /// Invalid URL provided.
    ///
    /// Returned when a URL cannot be parsed, is not http(s), or has no host.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// HTML parsing errors, usually an invalid CSS selector.
    #[error("Failed to parse HTML: {0}")]
    HtmlParseError(String),

    /// No article text could be located in an HTML document.
    #[error("Failed to extract article: {0}")]
    ExtractionFailed(String),

    /// File not found.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// File read/write errors.
    #[error("I/O error: {0}")]
    WriteError(#[from] std::io::Error),

    /// Output serialization failed.
    #[error("Failed to serialize output: {0}")]
    SerializeError(String),

    /// Invalid analysis or server configuration.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<serde_json::Error> for CredenceError {
    fn from(err: serde_json::Error) -> Self {
        CredenceError::SerializeError(err.to_string())
    }
}

impl CredenceError {
    /// Whether the error was caused by the caller's input rather than by the
    /// environment (network, filesystem).
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            CredenceError::InvalidUrl(_)
                | CredenceError::ExtractionFailed(_)
                | CredenceError::HtmlParseError(_)
                | CredenceError::HttpStatus { .. }
                | CredenceError::ConfigError(_)
        )
    }
}

/// Result type alias for CredenceError.
pub type Result<T> = std::result::Result<T, CredenceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CredenceError::InvalidUrl("not a url".to_string());
        assert!(err.to_string().contains("Invalid URL"));
    }

    #[test]
    fn test_http_status_error() {
        let err = CredenceError::HttpStatus { status: 404 };
        assert_eq!(err.to_string(), "Failed to fetch URL, status code: 404");
    }

    #[test]
    fn test_timeout_error() {
        let err = CredenceError::Timeout { timeout: 30 };
        assert!(err.to_string().contains("30"));
    }

    #[test]
    fn test_input_error_classification() {
        assert!(CredenceError::InvalidUrl("x".into()).is_input_error());
        assert!(CredenceError::ExtractionFailed("x".into()).is_input_error());
        assert!(!CredenceError::Timeout { timeout: 1 }.is_input_error());
        assert!(!CredenceError::FileNotFound(PathBuf::from("/nope")).is_input_error());
    }

    #[test]
    fn test_from_serde_json_error() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: CredenceError = err.into();
        assert!(matches!(err, CredenceError::SerializeError(_)));
    }
}
