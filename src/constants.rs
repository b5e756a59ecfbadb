//! Application constants for the lazyord TUI.
//!
//! Centralized constants for API endpoints, UI dimensions, and the status
//! messages shown to the user. Grouping these improves consistency across
//! the render and client layers.

use std::time::Duration;

// ============================================================================
// API Endpoints
// ============================================================================

/// Default base URL of the Hiro ordinals index.
pub const DEFAULT_HIRO_BASE_URL: &str = "https://api.hiro.so";

/// Path of the inscriptions-by-address endpoint on the Hiro API.
pub const INSCRIPTIONS_PATH: &str = "/ordinals/v1/inscriptions";

/// Default base URL of the mempool.space explorer API.
pub const DEFAULT_MEMPOOL_BASE_URL: &str = "https://mempool.space";

/// Base URL used to synthesize content links for inscriptions that carry an
/// id but no render URL of their own.
pub const INSCRIPTION_CONTENT_BASE_URL: &str = "https://api.hiro.so/ordinals/v1/inscriptions";

/// Base URL of the ordinals.com explorer, used for card detail links.
pub const ORDINALS_EXPLORER_BASE_URL: &str = "https://ordinals.com/inscription";

// ============================================================================
// Units
// ============================================================================

/// Satoshis per bitcoin.
pub const SATS_PER_BTC: f64 = 100_000_000.0;

/// Timestamps above this value are already in milliseconds; smaller numeric
/// timestamps are treated as seconds.
pub const MILLIS_THRESHOLD: i64 = 1_000_000_000_000;

// ============================================================================
// Limits
// ============================================================================

/// Maximum number of characters of an upstream error body carried into an
/// error message.
pub const ERROR_DETAIL_MAX_CHARS: usize = 200;

/// Number of id characters shown in a card title before the ellipsis.
pub const SHORT_ID_CHARS: usize = 8;

// ============================================================================
// UI Dimensions
// ============================================================================

/// Height of the application header area (in rows).
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the address input bar (in rows).
pub const ADDRESS_BAR_HEIGHT: u16 = 3;

/// Height of each inscription card in the results list (in rows).
///
/// Each card displays:
/// - Line 1: number label and short id
/// - Line 2: content type (with image badge where applicable)
/// - Line 3: block height and last transfer time
/// - Line 4: detail link
/// - Line 5: empty spacer
pub const CARD_HEIGHT: u16 = 5;

/// How often the main loop wakes up when idle.
pub const TICK_RATE: Duration = Duration::from_millis(50);

// ============================================================================
// Status Messages
// ============================================================================

/// Shown when the user submits an empty address.
pub const EMPTY_ADDRESS_MSG: &str = "Please enter a Bitcoin address.";

/// Shown while a lookup is in flight.
pub const LOADING_MSG: &str = "Loading inscriptions…";

/// Shown when a lookup succeeds but the address has no inscriptions.
pub const NO_INSCRIPTIONS_MSG: &str = "No inscriptions found for this address.";

// ============================================================================
// Tests
// ============================================================================
