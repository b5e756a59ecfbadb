//! Theme and styling constants for the lazyord TUI.

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// Color Constants
// ============================================================================

/// Primary accent color - focused elements and highlights.
pub const PRIMARY_COLOR: Color = Color::Cyan;

/// Success indicator color.
pub const SUCCESS_COLOR: Color = Color::Green;

/// Error indicator color.
pub const ERROR_COLOR: Color = Color::Red;

/// Warning color, used for the loading state.
pub const WARNING_COLOR: Color = Color::Yellow;

/// Informational status color.
pub const INFO_COLOR: Color = Color::Blue;

/// Muted text color.
pub const MUTED_COLOR: Color = Color::Gray;

/// Accent color for inscription ids and links.
pub const ACCENT_COLOR: Color = Color::Magenta;

// ============================================================================
// Style Constants
// ============================================================================

/// Default border style for unfocused elements.
pub const BORDER_STYLE: Style = Style::new().fg(Color::DarkGray);

/// Border style for focused/active elements.
pub const FOCUSED_BORDER_STYLE: Style = Style::new().fg(PRIMARY_COLOR);

/// Title style for focused/active elements.
pub const FOCUSED_TITLE_STYLE: Style = Style::new().fg(PRIMARY_COLOR).add_modifier(Modifier::BOLD);

/// Style for the selected card in the results list.
pub const SELECTED_STYLE: Style = Style::new().bg(Color::DarkGray);
