//! Inscription card model and projection from raw index records.
//!
//! The inscriptions index returns loosely-typed records whose fields arrive
//! under either camelCase or snake_case names, and any field may be missing.
//! This module is the single source of truth for turning such a record into
//! the canonical [`InscriptionCard`] the UI renders.

use chrono::{Local, TimeZone};
use serde::Serialize;
use serde_json::Value;

use crate::constants::{
    INSCRIPTION_CONTENT_BASE_URL, MILLIS_THRESHOLD, ORDINALS_EXPLORER_BASE_URL, SHORT_ID_CHARS,
};

// ============================================================================
// Field Aliases
// ============================================================================

/// Ordered lookup keys for the content type of an inscription.
const CONTENT_TYPE_KEYS: &[&str] = &["contentType", "content_type"];

/// Ordered lookup keys for a renderable content URL.
const RENDER_URL_KEYS: &[&str] = &[
    "renderUrl",
    "render_url",
    "previewUrl",
    "preview_url",
    "contentUrl",
    "content_url",
];

/// Ordered lookup keys for the genesis block height.
const BLOCK_HEIGHT_KEYS: &[&str] = &["blockHeight", "block_height"];

/// Ordered lookup keys for the last transfer timestamp.
const TIMESTAMP_KEYS: &[&str] = &["lastTransferTimestamp", "timestamp"];

/// Returns the first value that is present on `record` under any of `keys`.
///
/// Presence is what counts, not truthiness: an empty string or zero under an
/// earlier key wins over a populated later key. Type checking is left to the
/// caller, so a present-but-wrong-type value resolves the logical field as
/// absent rather than falling through to a later alias.
#[must_use]
pub fn first_present<'a>(record: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|key| record.get(key))
}

// ============================================================================
// Inscription Card Model
// ============================================================================

/// Canonical display model for a single inscription.
///
/// Derived from one raw index record; immutable once projected. Every field
/// is optional in the source data, so projection never fails.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InscriptionCard {
    /// The inscription id, when the record carries one.
    pub id: Option<String>,
    /// The inscription serial number, when numeric.
    pub number: Option<i64>,
    /// Resolved content type, `"unknown"` when absent.
    pub content_type: String,
    /// Whether the resolved content type is an image.
    pub is_image: bool,
    /// Best-known URL for rendering the content, if any.
    pub render_url: Option<String>,
    /// Genesis block height, when numeric.
    pub block_height: Option<u64>,
    /// Last transfer time in milliseconds since the epoch, when numeric.
    pub transfer_timestamp_millis: Option<i64>,
}

impl InscriptionCard {
    /// Project a raw index record into a card.
    ///
    /// Total over arbitrary JSON: missing fields, wrong-typed fields and
    /// non-object values all produce a card with the affected fields absent.
    #[must_use]
    pub fn project(raw: &Value) -> Self {
        let id = raw.get("id").and_then(Value::as_str).map(String::from);
        let number = raw.get("number").and_then(Value::as_i64);

        let content_type = first_present(raw, CONTENT_TYPE_KEYS)
            .and_then(Value::as_str)
            .unwrap_or("unknown")
            .to_string();

        let is_image = content_type.to_ascii_lowercase().starts_with("image/");

        let render_url = first_present(raw, RENDER_URL_KEYS)
            .and_then(Value::as_str)
            .map(String::from)
            .or_else(|| {
                id.as_ref()
                    .map(|id| format!("{INSCRIPTION_CONTENT_BASE_URL}/{id}/content"))
            });

        let block_height = first_present(raw, BLOCK_HEIGHT_KEYS).and_then(Value::as_u64);

        let transfer_timestamp_millis = first_present(raw, TIMESTAMP_KEYS)
            .and_then(Value::as_i64)
            .map(normalize_timestamp_millis);

        Self {
            id,
            number,
            content_type,
            is_image,
            render_url,
            block_height,
            transfer_timestamp_millis,
        }
    }

    /// Short form of the id for card titles: the first 8 characters plus an
    /// ellipsis, or `"Unknown"` when the record had no string id.
    #[must_use]
    pub fn short_id(&self) -> String {
        match &self.id {
            Some(id) => {
                let prefix: String = id.chars().take(SHORT_ID_CHARS).collect();
                format!("{prefix}…")
            }
            None => "Unknown".to_string(),
        }
    }

    /// `#<number>` when the record carried a numeric serial, else
    /// `"Unnumbered"`.
    #[must_use]
    pub fn number_label(&self) -> String {
        match self.number {
            Some(number) => format!("#{number}"),
            None => "Unnumbered".to_string(),
        }
    }

    /// Card title combining the number label and the short id.
    #[must_use]
    pub fn title(&self) -> String {
        format!("{} · {}", self.number_label(), self.short_id())
    }

    /// Target for the card's "View inscription" link: the ordinals.com
    /// explorer when an id is present, the render URL otherwise. `None`
    /// means the card omits its link row.
    #[must_use]
    pub fn detail_link(&self) -> Option<String> {
        match &self.id {
            Some(id) => Some(format!("{ORDINALS_EXPLORER_BASE_URL}/{id}")),
            None => self.render_url.clone(),
        }
    }

    /// Local date-time label for the last transfer, if known.
    #[must_use]
    pub fn transfer_label(&self) -> Option<String> {
        let millis = self.transfer_timestamp_millis?;
        Local
            .timestamp_millis_opt(millis)
            .single()
            .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
    }
}

/// Normalize a raw numeric timestamp to milliseconds.
///
/// Values above 1e12 are already milliseconds; anything smaller is treated
/// as seconds.
#[must_use]
fn normalize_timestamp_millis(raw: i64) -> i64 {
    if raw > MILLIS_THRESHOLD {
        raw
    } else {
        raw.saturating_mul(1000)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn test_first_present_order_and_presence() {
        let record = json!({"content_type": "text/plain", "contentType": "image/png"});
        // camelCase is first in the key list, so it wins even though
        // snake_case appears first in the document.
        let value = first_present(&record, CONTENT_TYPE_KEYS);
        assert_eq!(value.and_then(Value::as_str), Some("image/png"));

        // Presence beats truthiness: an empty string still wins its slot.
        let record = json!({"renderUrl": "", "preview_url": "https://x.test/p"});
        let value = first_present(&record, RENDER_URL_KEYS);
        assert_eq!(value.and_then(Value::as_str), Some(""));

        let record = json!({});
        assert!(first_present(&record, CONTENT_TYPE_KEYS).is_none());
    }

    #[test]
    fn test_project_full_record() {
        let raw = json!({
            "id": "abc123def456",
            "number": 42,
            "contentType": "image/png",
            "renderUrl": "https://cdn.test/i.png",
            "blockHeight": 800_000,
            "lastTransferTimestamp": 1_700_000_000,
        });

        let card = InscriptionCard::project(&raw);
        assert_eq!(card.id.as_deref(), Some("abc123def456"));
        assert_eq!(card.number, Some(42));
        assert_eq!(card.content_type, "image/png");
        assert!(card.is_image);
        assert_eq!(card.render_url.as_deref(), Some("https://cdn.test/i.png"));
        assert_eq!(card.block_height, Some(800_000));
        assert_eq!(card.transfer_timestamp_millis, Some(1_700_000_000_000));
    }

    #[test]
    fn test_project_is_total_over_hostile_records() {
        // Wrong types everywhere, projection still succeeds with fields
        // resolved as absent.
        let raw = json!({
            "id": 99,
            "number": "not-a-number",
            "contentType": 17,
            "blockHeight": "high",
            "timestamp": "yesterday",
        });

        let card = InscriptionCard::project(&raw);
        assert!(card.id.is_none());
        assert!(card.number.is_none());
        assert_eq!(card.content_type, "unknown");
        assert!(!card.is_image);
        assert!(card.render_url.is_none());
        assert!(card.block_height.is_none());
        assert!(card.transfer_timestamp_millis.is_none());

        // Non-object values project to an all-absent card.
        let card = InscriptionCard::project(&json!(null));
        assert!(card.id.is_none());
        assert_eq!(card.content_type, "unknown");

        let card = InscriptionCard::project(&json!([1, 2, 3]));
        assert_eq!(card.content_type, "unknown");
    }

    #[rstest]
    #[case::camel_png("image/png", true)]
    #[case::upper_case("IMAGE/PNG", true)]
    #[case::mixed_case("Image/Svg+Xml", true)]
    #[case::text("text/plain", false)]
    #[case::image_prefix_in_subtype("text/image", false)]
    fn test_is_image_detection(#[case] content_type: &str, #[case] expected: bool) {
        let card = InscriptionCard::project(&json!({"contentType": content_type}));
        assert_eq!(card.is_image, expected, "contentType={content_type}");
    }

    #[test]
    fn test_content_type_aliases() {
        let card = InscriptionCard::project(&json!({"content_type": "text/html"}));
        assert_eq!(card.content_type, "text/html");

        let card = InscriptionCard::project(&json!({}));
        assert_eq!(card.content_type, "unknown");
        assert!(!card.is_image);
    }

    #[rstest]
    #[case::seconds_scale(1_700_000_000, 1_700_000_000_000)]
    #[case::millis_scale(1_700_000_000_000, 1_700_000_000_000)]
    #[case::zero(0, 0)]
    #[case::exactly_threshold(1_000_000_000_000, 1_000_000_000_000_000)]
    fn test_timestamp_normalization(#[case] raw: i64, #[case] expected: i64) {
        assert_eq!(normalize_timestamp_millis(raw), expected);
    }

    #[test]
    fn test_timestamp_alias_priority() {
        let raw = json!({"timestamp": 1_600_000_000, "lastTransferTimestamp": 1_700_000_000});
        let card = InscriptionCard::project(&raw);
        assert_eq!(card.transfer_timestamp_millis, Some(1_700_000_000_000));
    }

    #[test]
    fn test_render_url_fallback_chain() {
        // Later alias picked up when earlier ones are absent.
        let card = InscriptionCard::project(&json!({"content_url": "https://x.test/c"}));
        assert_eq!(card.render_url.as_deref(), Some("https://x.test/c"));

        // No URL alias but an id: synthesized content URL.
        let card = InscriptionCard::project(&json!({"id": "deadbeef"}));
        assert_eq!(
            card.render_url.as_deref(),
            Some("https://api.hiro.so/ordinals/v1/inscriptions/deadbeef/content")
        );

        // Neither: no URL at all.
        let card = InscriptionCard::project(&json!({"number": 7}));
        assert!(card.render_url.is_none());
    }

    #[test]
    fn test_short_id_and_number_label() {
        let card = InscriptionCard::project(&json!({"id": "abcdefghij", "number": 5}));
        assert_eq!(card.short_id(), "abcdefgh…");
        assert_eq!(card.number_label(), "#5");
        assert_eq!(card.title(), "#5 · abcdefgh…");

        let card = InscriptionCard::project(&json!({}));
        assert_eq!(card.short_id(), "Unknown");
        assert_eq!(card.number_label(), "Unnumbered");

        // Ids shorter than the prefix keep everything before the ellipsis.
        let card = InscriptionCard::project(&json!({"id": "abc"}));
        assert_eq!(card.short_id(), "abc…");
    }

    #[test]
    fn test_detail_link_targets() {
        let card = InscriptionCard::project(&json!({"id": "feed42"}));
        assert_eq!(
            card.detail_link().as_deref(),
            Some("https://ordinals.com/inscription/feed42")
        );

        // No id: fall back to the resolved render URL.
        let card = InscriptionCard::project(&json!({"render_url": "https://x.test/r"}));
        assert_eq!(card.detail_link().as_deref(), Some("https://x.test/r"));

        // Neither id nor URL: the card omits its link row.
        let card = InscriptionCard::project(&json!({}));
        assert!(card.detail_link().is_none());
    }
}
