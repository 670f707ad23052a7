//! Custom error types for the check harness
//!
//! Provides a unified error handling system across all modules.

use std::time::Duration;
use thiserror::Error;

/// Main error type for check operations
#[derive(Error, Debug)]
pub enum E2eError {
    /// Browser launch or DevTools protocol errors
    #[error("Browser error: {0}")]
    Browser(String),

    /// A required element did not resolve on the current page
    #[error("No element matched selector '{selector}'")]
    SelectorNotFound { selector: String },

    /// Navigation did not settle within the configured bound
    #[error("Navigation to '{url}' did not settle within {timeout:?}")]
    NavigationTimeout { url: String, timeout: Duration },

    /// An extracted value disagreed with the hard-coded expectation
    #[error("Expectation failed: {0}")]
    Expectation(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON parsing errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP request errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// No Chrome or Chromium binary could be located
    #[error("No Chrome/Chromium binary found. Install Chromium or point BBC_E2E_CHROME at an executable")]
    ChromeNotFound,

    /// The target site did not answer the reachability preflight
    #[error("Site '{0}' is unreachable, skipping browser launch")]
    SiteUnreachable(String),
}

/// Convenience Result type for check operations
pub type Result<T> = std::result::Result<T, E2eError>;

impl E2eError {
    /// Create a browser error
    pub fn browser(msg: impl Into<String>) -> Self {
        Self::Browser(msg.into())
    }

    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an expectation failure
    pub fn expectation(msg: impl Into<String>) -> Self {
        Self::Expectation(msg.into())
    }

    /// Create a selector-not-found error
    pub fn selector(selector: impl Into<String>) -> Self {
        Self::SelectorNotFound {
            selector: selector.into(),
        }
    }

    /// Whether this failure is an assertion mismatch rather than a
    /// harness or environment fault.
    pub fn is_expectation(&self) -> bool {
        matches!(self, Self::Expectation(_))
    }
}
