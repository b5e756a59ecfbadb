//! UI rendering module for the lazyord TUI.
//!
//! # Module Structure
//!
//! - `header` - Header bar and address input rendering
//! - `status` - Status and balance line rendering
//! - `cards` - Inscription card list rendering
//! - `footer` - Footer bar with keyboard shortcuts
//! - `helpers` - Shared helpers for styled blocks

pub mod cards;
pub mod footer;
pub mod header;
pub mod helpers;
pub mod status;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::app::App;
use crate::constants::{ADDRESS_BAR_HEIGHT, HEADER_HEIGHT};

// ============================================================================
// Main Render Entry Point
// ============================================================================

/// Main render function that orchestrates all UI rendering.
///
/// Layout, top to bottom: header, address bar, status line, balance line,
/// card list, footer.
pub fn render(app: &App, frame: &mut Frame, hiro_host: &str) {
    let size = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(ADDRESS_BAR_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(size);

    header::render_header(frame, chunks[0], app, hiro_host);
    header::render_address_bar(frame, chunks[1], app);
    status::render_status(frame, chunks[2], app);
    status::render_balance(frame, chunks[3], app);
    cards::render_cards(app, frame, chunks[4]);
    footer::render(frame, chunks[5], app);
}

// ============================================================================
// Tests
// ============================================================================
