//! Inscriptions-index fetching for `OrdClient`.
//!
//! Talks to the Hiro ordinals API: builds the query URL, fetches the
//! inscription list for an address, and maps error responses into
//! `OrdError::Api` with whatever detail the body offered.

use serde_json::Value;

use super::OrdClient;
use crate::constants::{ERROR_DETAIL_MAX_CHARS, INSCRIPTIONS_PATH};
use crate::domain::OrdError;

// ============================================================================
// URL Building
// ============================================================================

/// Build the inscriptions-by-address query URL.
///
/// Trims the raw input and percent-encodes it as the `address` query
/// parameter. Total function: the output is always a syntactically valid
/// URL; whether the address means anything is left to the remote API.
#[must_use]
pub fn build_inscriptions_url(base_url: &str, address: &str) -> String {
    let trimmed = address.trim();
    format!(
        "{base_url}{INSCRIPTIONS_PATH}?address={}",
        urlencoding::encode(trimmed)
    )
}

// ============================================================================
// Fetching
// ============================================================================

impl OrdClient {
    /// Fetch the raw inscription records for an address.
    ///
    /// A success body without a `results` array yields an empty list rather
    /// than an error; only HTTP and transport failures are reported.
    ///
    /// # Errors
    ///
    /// Returns `OrdError::Api` on a non-success status (carrying extracted
    /// body detail) or `OrdError::Network` on transport failure.
    pub(crate) async fn fetch_inscriptions(&self, address: &str) -> Result<Vec<Value>, OrdError> {
        let url = build_inscriptions_url(self.hiro_base_url(), address);
        tracing::debug!(%url, "fetching inscriptions");

        let response = self.http().get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = Some(extract_error_detail(&body)).filter(|d| !d.is_empty());
            return Err(OrdError::api(status.as_u16(), detail));
        }

        let data: Value = response.json().await?;
        Ok(extract_results(data))
    }
}

/// Pull the `results` array out of a success body.
///
/// Any other shape (missing field, non-array, non-object body) yields an
/// empty list; malformed-but-parseable success bodies never fail.
#[must_use]
pub(crate) fn extract_results(data: Value) -> Vec<Value> {
    match data {
        Value::Object(mut map) => match map.remove("results") {
            Some(Value::Array(results)) => results,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}

// ============================================================================
// Error Detail Extraction
// ============================================================================

/// Pull a human-readable detail out of an error response body.
///
/// Prefers the `message` field of a JSON body, falls back to the serialized
/// JSON, then to the raw text when the body is not JSON at all. The result
/// is truncated to a fixed character limit.
#[must_use]
fn extract_error_detail(body: &str) -> String {
    let detail = match serde_json::from_str::<Value>(body) {
        Ok(json) => match json.get("message").and_then(Value::as_str) {
            Some(message) if !message.is_empty() => message.to_string(),
            _ => json.to_string(),
        },
        Err(_) => body.to_string(),
    };

    truncate_chars(&detail, ERROR_DETAIL_MAX_CHARS)
}

/// Truncate a string to at most `max` characters, respecting char
/// boundaries.
fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

// ============================================================================
// Tests
// ============================================================================
