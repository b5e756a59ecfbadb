//! Error types for ordinals lookup operations.
//!
//! This module defines the custom error types used throughout the client
//! operations, providing structured error handling with helpful messages.

use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Custom error type for ordinals client operations.
///
/// This enum provides specific error variants for the failure modes
/// encountered when talking to the inscriptions index and the balance API.
#[derive(Debug, Error)]
pub enum OrdError {
    /// Non-success HTTP response from either remote API.
    ///
    /// `detail` carries whatever the inscriptions API said about the failure
    /// (its `message` field or a truncated body); the balance endpoint
    /// reports the status code alone.
    #[error("API error {status}{}", .detail.as_deref().map(|d| format!(": {d}")).unwrap_or_default())]
    Api {
        /// The HTTP status code of the response.
        status: u16,
        /// Extracted detail from the error body, if any.
        detail: Option<String>,
    },

    /// Transport-level errors from HTTP requests (connection refused, DNS,
    /// timeout). Not distinguished further at this layer.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Invalid user input, detected before any network call.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The HTTP client failed to initialize (e.g., TLS backend unavailable).
    #[error("Client initialization failed: {0}")]
    ClientInit(String),
}

impl OrdError {
    /// Create a new API error from a status code and optional body detail.
    #[must_use]
    pub fn api(status: u16, detail: Option<String>) -> Self {
        Self::Api { status, detail }
    }

    /// Create a new invalid input error.
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Create a new client initialization error.
    #[must_use]
    pub fn client_init(message: impl Into<String>) -> Self {
        Self::ClientInit(message.into())
    }

    /// Convert to a `color_eyre::Report` for API compatibility.
    ///
    /// This allows `OrdError` to be used with color_eyre's error handling
    /// infrastructure while preserving the error message.
    #[must_use = "this converts the error into a Report for display"]
    pub fn into_report(self) -> color_eyre::Report {
        color_eyre::eyre::eyre!("{}", self)
    }
}

// ============================================================================
// Tests
// ============================================================================
