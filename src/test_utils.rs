//! Shared test utilities and Mother pattern factories.
//!
//! Reusable test fixtures for raw API payloads, so individual tests don't
//! copy-paste JSON blobs.
#![allow(dead_code)]

use serde_json::{Value, json};

use crate::domain::{BalanceSummary, InscriptionCard};

// ============================================================================
// Mother Pattern Factories
// ============================================================================

/// Factory for raw inscription records and API payloads.
pub struct JsonMother;

impl JsonMother {
    /// A fully-populated camelCase inscription record.
    #[must_use]
    pub fn inscription_camel() -> Value {
        json!({
            "id": "b61b0172d95e266c18aea0c624db987e971a5d6d4ebc2aaed85da4642d635735i0",
            "number": 248_751,
            "contentType": "image/png",
            "renderUrl": "https://cdn.test/248751.png",
            "blockHeight": 788_201,
            "lastTransferTimestamp": 1_700_000_000_i64,
        })
    }

    /// The same logical record under snake_case aliases.
    #[must_use]
    pub fn inscription_snake() -> Value {
        json!({
            "id": "b61b0172d95e266c18aea0c624db987e971a5d6d4ebc2aaed85da4642d635735i0",
            "number": 248_751,
            "content_type": "image/png",
            "render_url": "https://cdn.test/248751.png",
            "block_height": 788_201,
            "timestamp": 1_700_000_000_000_i64,
        })
    }

    /// A minimal record with only an id.
    #[must_use]
    pub fn inscription_bare(id: &str) -> Value {
        json!({ "id": id })
    }

    /// A record with no recognizable fields at all.
    #[must_use]
    pub fn inscription_empty() -> Value {
        json!({})
    }

    /// A text inscription without any URL aliases.
    #[must_use]
    pub fn inscription_text(id: &str, number: i64) -> Value {
        json!({
            "id": id,
            "number": number,
            "content_type": "text/plain;charset=utf-8",
        })
    }

    /// A success payload from the inscriptions index.
    #[must_use]
    pub fn inscriptions_payload(results: Vec<Value>) -> Value {
        json!({ "limit": 20, "offset": 0, "total": results.len(), "results": results })
    }

    /// An address-stats payload from the balance explorer.
    #[must_use]
    pub fn address_stats(funded: i64, spent: i64, mempool_funded: i64, mempool_spent: i64) -> Value {
        json!({
            "address": "bc1qxyz",
            "chain_stats": {
                "funded_txo_count": 4,
                "funded_txo_sum": funded,
                "spent_txo_count": 2,
                "spent_txo_sum": spent,
                "tx_count": 6,
            },
            "mempool_stats": {
                "funded_txo_count": 1,
                "funded_txo_sum": mempool_funded,
                "spent_txo_count": 0,
                "spent_txo_sum": mempool_spent,
                "tx_count": 1,
            },
        })
    }
}

/// Factory for already-projected display models.
pub struct CardMother;

impl CardMother {
    #[must_use]
    pub fn image(id: &str, number: i64) -> InscriptionCard {
        InscriptionCard::project(&json!({
            "id": id,
            "number": number,
            "contentType": "image/png",
            "renderUrl": format!("https://cdn.test/{number}.png"),
            "blockHeight": 788_201,
            "lastTransferTimestamp": 1_700_000_000_i64,
        }))
    }

    #[must_use]
    pub fn text(id: &str, number: i64) -> InscriptionCard {
        InscriptionCard::project(&JsonMother::inscription_text(id, number))
    }

    #[must_use]
    pub fn balance(confirmed_sats: i64, mempool_sats: i64) -> BalanceSummary {
        BalanceSummary {
            confirmed_sats,
            mempool_sats,
        }
    }
}
