//! API client for the ordinals index and the balance explorer.
//!
//! This module provides the unified `OrdClient` for making requests to:
//! - Hiro ordinals API - for the inscription list of an address
//! - mempool.space API - for the address balance
//!
//! # Example
//!
//! ```ignore
//! use crate::client::OrdClient;
//!
//! let client = OrdClient::new(None, None)?;
//! let lookup = client.lookup_address("bc1qxyz").await?;
//! ```

mod hiro;
mod http;
mod mempool;

#[cfg(test)]
mod tests;

pub use hiro::build_inscriptions_url;
pub use http::{HttpClient, HttpConfig};
pub use mempool::build_balance_url;

use crate::constants::{DEFAULT_HIRO_BASE_URL, DEFAULT_MEMPOOL_BASE_URL};
use crate::domain::{AddressLookup, InscriptionCard, OrdError};

// ============================================================================
// Ordinals API Client
// ============================================================================

/// Unified client for the two remote APIs behind an address lookup.
#[derive(Debug, Clone)]
pub struct OrdClient {
    /// The ordinals index base URL.
    hiro_base_url: String,
    /// The balance explorer base URL.
    mempool_base_url: String,
    /// Shared pooled HTTP client.
    http: HttpClient,
}

impl OrdClient {
    /// Creates a new client, using the default public endpoints for any
    /// base URL not supplied.
    ///
    /// # Errors
    ///
    /// Returns `OrdError::ClientInit` if the HTTP client fails to
    /// initialize (e.g., TLS backend unavailable).
    pub fn new(
        hiro_base_url: Option<String>,
        mempool_base_url: Option<String>,
    ) -> Result<Self, OrdError> {
        Ok(Self {
            hiro_base_url: hiro_base_url.unwrap_or_else(|| DEFAULT_HIRO_BASE_URL.to_string()),
            mempool_base_url: mempool_base_url
                .unwrap_or_else(|| DEFAULT_MEMPOOL_BASE_URL.to_string()),
            http: HttpClient::new()?,
        })
    }

    #[must_use]
    pub fn hiro_base_url(&self) -> &str {
        &self.hiro_base_url
    }

    #[must_use]
    pub fn mempool_base_url(&self) -> &str {
        &self.mempool_base_url
    }

    pub(crate) fn http(&self) -> &HttpClient {
        &self.http
    }

    /// Look up an address: fetch inscriptions and balance concurrently and
    /// merge them into one result.
    ///
    /// The two fetches are joined all-or-nothing: the first failure fails
    /// the whole lookup and the other result, even if already available, is
    /// discarded. Neither fetch holds a mutable resource, so no cleanup is
    /// needed on the short-circuit path.
    ///
    /// # Errors
    ///
    /// Returns `OrdError::InvalidInput` for an empty (after trimming)
    /// address before any network call, otherwise whatever the failing
    /// fetcher reported.
    pub async fn lookup_address(&self, address: &str) -> Result<AddressLookup, OrdError> {
        let trimmed = address.trim();
        if trimmed.is_empty() {
            return Err(OrdError::invalid_input("address must not be empty"));
        }

        let (raw_inscriptions, balance) = tokio::try_join!(
            self.fetch_inscriptions(trimmed),
            self.fetch_balance(trimmed),
        )?;

        let cards = raw_inscriptions.iter().map(InscriptionCard::project).collect();

        Ok(AddressLookup {
            address: trimmed.to_string(),
            cards,
            balance,
        })
    }
}
