//! Address balance summary derived from explorer chain stats.

use serde::Serialize;
use serde_json::Value;

use crate::constants::SATS_PER_BTC;

// ============================================================================
// Balance Summary
// ============================================================================

/// Confirmed and mempool balance of an address, in satoshis.
///
/// Computed fresh per query and discarded after render. Either figure may be
/// negative when the upstream counters are inconsistent; that passes through
/// uncorrected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BalanceSummary {
    /// Confirmed balance: funded minus spent on-chain satoshis.
    pub confirmed_sats: i64,
    /// Unconfirmed balance: funded minus spent mempool satoshis.
    pub mempool_sats: i64,
}

impl BalanceSummary {
    /// Derive a summary from the explorer's address-stats payload.
    ///
    /// Reads the four txo-sum counters under `chain_stats` and
    /// `mempool_stats`, defaulting each absent or non-numeric value to zero.
    #[must_use]
    pub fn from_stats(stats: &Value) -> Self {
        let funded = txo_sum(stats, "chain_stats", "funded_txo_sum");
        let spent = txo_sum(stats, "chain_stats", "spent_txo_sum");
        let mempool_funded = txo_sum(stats, "mempool_stats", "funded_txo_sum");
        let mempool_spent = txo_sum(stats, "mempool_stats", "spent_txo_sum");

        Self {
            confirmed_sats: funded - spent,
            mempool_sats: mempool_funded - mempool_spent,
        }
    }

    /// Whether any unconfirmed amount should be shown alongside the
    /// confirmed balance.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.mempool_sats != 0
    }

    /// The one-line balance text rendered under the status line.
    ///
    /// The pending clause only appears when the mempool balance is nonzero.
    #[must_use]
    pub fn summary_line(&self) -> String {
        let confirmed = format_btc(self.confirmed_sats as f64);
        if self.has_pending() {
            let pending = format_btc(self.mempool_sats as f64);
            format!("Address balance: {confirmed} (confirmed) + {pending} (pending)")
        } else {
            format!("Address balance: {confirmed} (confirmed)")
        }
    }
}

/// Read one numeric counter from a nested stats group, defaulting to zero.
fn txo_sum(stats: &Value, group: &str, field: &str) -> i64 {
    stats[group][field].as_i64().unwrap_or(0)
}

// ============================================================================
// Amount Formatting
// ============================================================================

/// Format a satoshi amount as a BTC string with 8 decimal places.
///
/// Returns `"0 BTC"` when the division does not produce a finite number
/// (e.g., the input was already NaN from an upstream computation).
#[must_use]
pub fn format_btc(sats: f64) -> String {
    let btc = sats / SATS_PER_BTC;
    if !btc.is_finite() {
        return "0 BTC".to_string();
    }
    format!("{btc:.8} BTC")
}

// ============================================================================
// Tests
// ============================================================================
