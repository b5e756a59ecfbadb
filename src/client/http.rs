//! HTTP client abstraction shared by the remote API fetchers.

use std::time::Duration;

use reqwest::Client;

use crate::domain::OrdError;

// ============================================================================
// Constants
// ============================================================================

/// Default timeout for HTTP requests in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Maximum idle pooled connections kept per host.
const POOL_MAX_IDLE_PER_HOST: usize = 4;

/// How long an idle pooled connection is kept around.
const POOL_IDLE_TIMEOUT_SECS: u64 = 30;

// ============================================================================
// Configuration
// ============================================================================

/// HTTP client configuration.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Request timeout.
    pub timeout: Duration,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

// ============================================================================
// HTTP Client
// ============================================================================

/// Base HTTP client wrapper with connection pooling.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: Client,
}

impl HttpClient {
    /// Create a new HTTP client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns `OrdError::ClientInit` if the underlying client fails to
    /// build (e.g., TLS backend unavailable).
    pub fn new() -> Result<Self, OrdError> {
        Self::with_config(HttpConfig::default())
    }

    /// Create a new HTTP client with custom configuration.
    ///
    /// # Errors
    ///
    /// Returns `OrdError::ClientInit` if the underlying client fails to
    /// build.
    pub fn with_config(config: HttpConfig) -> Result<Self, OrdError> {
        let inner = Client::builder()
            .pool_max_idle_per_host(POOL_MAX_IDLE_PER_HOST)
            .pool_idle_timeout(Duration::from_secs(POOL_IDLE_TIMEOUT_SECS))
            .timeout(config.timeout)
            .build()
            .map_err(|e| OrdError::client_init(e.to_string()))?;

        Ok(Self { inner })
    }

    /// Build a GET request with the standard JSON accept header.
    pub fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.inner.get(url).header("accept", "application/json")
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_timeout() {
        let config = HttpConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn test_client_builds_with_defaults() {
        assert!(HttpClient::new().is_ok());
    }
}
