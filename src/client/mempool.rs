//! Balance fetching for `OrdClient`.
//!
//! Talks to the mempool.space address-stats endpoint and reduces its txo-sum
//! counters to a [`BalanceSummary`].

use serde_json::Value;

use super::OrdClient;
use crate::domain::{BalanceSummary, OrdError};

// ============================================================================
// URL Building
// ============================================================================

/// Build the address-stats URL for the explorer API.
#[must_use]
pub fn build_balance_url(base_url: &str, address: &str) -> String {
    format!("{base_url}/api/address/{}", urlencoding::encode(address.trim()))
}

// ============================================================================
// Fetching
// ============================================================================

impl OrdClient {
    /// Fetch the confirmed and mempool balance of an address.
    ///
    /// # Errors
    ///
    /// Returns `OrdError::Api` carrying the bare status code on a
    /// non-success response (this endpoint's error bodies are not parsed),
    /// or `OrdError::Network` on transport failure.
    pub(crate) async fn fetch_balance(&self, address: &str) -> Result<BalanceSummary, OrdError> {
        let url = build_balance_url(self.mempool_base_url(), address);
        tracing::debug!(%url, "fetching address stats");

        let response = self.http().get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(OrdError::api(status.as_u16(), None));
        }

        let stats: Value = response.json().await?;
        Ok(BalanceSummary::from_stats(&stats))
    }
}

// ============================================================================
// Tests
// ============================================================================
