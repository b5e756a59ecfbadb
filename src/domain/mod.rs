//! Domain types for the lazyord inscription explorer.
//!
//! # Module Organization
//!
//! - [`error`] - Custom error types for lookup operations
//! - [`inscription`] - Raw-record projection and the inscription card model
//! - [`balance`] - Address balance summary and BTC formatting

// ============================================================================
// Module Declarations
// ============================================================================

pub mod balance;
pub mod error;
pub mod inscription;

// ============================================================================
// Re-exports
// ============================================================================

pub use balance::{BalanceSummary, format_btc};
pub use error::OrdError;
pub use inscription::{InscriptionCard, first_present};

use serde::Serialize;

// ============================================================================
// Merged Lookup Result
// ============================================================================

/// The merged result of one address lookup: projected cards plus the
/// balance summary, ready for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct AddressLookup {
    /// The trimmed address that was queried.
    pub address: String,
    /// One card per inscription record returned by the index.
    pub cards: Vec<InscriptionCard>,
    /// Confirmed and mempool balance of the address.
    pub balance: BalanceSummary,
}
